// SPDX-License-Identifier: GPL-3.0-only

//! Grid sizing: how many rows and columns a popup needs.

use crate::popup::types::{ColumnSpec, LayoutError};

/// Row and column counts of a popup grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    /// Number of columns
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
    /// Number of keys in the top (last filled) row
    pub top_row_keys: usize,
}

impl GridSize {
    /// Returns `true` if `row` is the top row of a multi-row grid.
    pub fn is_top_row(&self, row: usize) -> bool {
        self.rows > 1 && row == self.rows - 1
    }
}

/// Decides the grid dimensions for `key_count` keys.
///
/// With an exact column count the grid has `min(columns, key_count)` columns.
/// With a maximum column count the number of rows is fixed first and the
/// column count is then minimized for it, so that the keys are spread evenly
/// instead of leaving the top row nearly empty.
pub fn size_grid(key_count: usize, spec: ColumnSpec) -> Result<GridSize, LayoutError> {
    if key_count == 0 {
        return Err(LayoutError::invalid_request("popup has no keys"));
    }
    let requested = spec.value();
    if requested == 0 {
        return Err(LayoutError::invalid_column_spec(
            "column count must be at least 1",
            requested,
            0,
        ));
    }

    let (columns, rows) = match spec {
        ColumnSpec::Exact(n) => {
            let columns = n.min(key_count);
            (columns, key_count.div_ceil(columns))
        }
        ColumnSpec::Max(n) if key_count <= n => (key_count, 1),
        ColumnSpec::Max(n) => {
            let rows = key_count.div_ceil(n);
            (key_count.div_ceil(rows), rows)
        }
    };

    let remainder = key_count % columns;
    let top_row_keys = if remainder == 0 { columns } else { remainder };

    Ok(GridSize {
        columns,
        rows,
        top_row_keys,
    })
}

/// Checks that the requested columns fit in the parent keyboard at all.
///
/// Every column but the last is followed by a divider, so `n` columns occupy
/// `n * (key_width + divider_width) - divider_width`.
///
/// The check uses `min(key_count, spec)` rather than the final column count,
/// so a maximum-column popup is rejected when its cap cannot fit even if
/// spreading the keys over more rows would have narrowed it.
pub fn ensure_fits(
    key_count: usize,
    spec: ColumnSpec,
    key_width: i32,
    keyboard_width: i32,
    divider_width: i32,
) -> Result<(), LayoutError> {
    if key_width <= 0 {
        return Err(LayoutError::invalid_request("key width must be positive"));
    }
    let divider_width = i64::from(divider_width.max(0));
    let pitch = i64::from(key_width) + divider_width;
    let max_columns = ((i64::from(keyboard_width.max(0)) + divider_width) / pitch) as usize;
    let needed = key_count.min(spec.value());
    if needed > max_columns {
        return Err(LayoutError::invalid_column_spec(
            "keyboard is too small to hold the popup",
            needed,
            max_columns,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(key_count: usize, spec: ColumnSpec) -> GridSize {
        size_grid(key_count, spec).expect("grid should be sized")
    }

    #[test]
    fn test_exact_columns() {
        for key_count in 1..=20 {
            for columns in 1..=10 {
                let size = grid(key_count, ColumnSpec::Exact(columns));
                let expected = columns.min(key_count);
                assert_eq!(size.columns, expected, "{} keys, fix {}", key_count, columns);
                assert_eq!(size.rows, key_count.div_ceil(expected));
            }
        }
    }

    #[test]
    fn test_max_columns() {
        for key_count in 1..=20 {
            for columns in 1..=10 {
                let size = grid(key_count, ColumnSpec::Max(columns));
                let rows = if key_count <= columns {
                    1
                } else {
                    key_count.div_ceil(columns)
                };
                assert_eq!(size.rows, rows, "{} keys, max {}", key_count, columns);
                assert_eq!(size.columns, key_count.div_ceil(rows));
                assert!(size.columns <= columns);
            }
        }
    }

    /// Eleven keys capped at five columns use three rows of four.
    #[test]
    fn test_max_columns_spreads_keys() {
        let size = grid(11, ColumnSpec::Max(5));
        assert_eq!(size.rows, 3);
        assert_eq!(size.columns, 4);
        assert_eq!(size.top_row_keys, 3);

        // An exact count fills rows greedily instead.
        let size = grid(11, ColumnSpec::Exact(5));
        assert_eq!(size.rows, 3);
        assert_eq!(size.columns, 5);
        assert_eq!(size.top_row_keys, 1);
    }

    #[test]
    fn test_top_row_keys() {
        assert_eq!(grid(5, ColumnSpec::Exact(3)).top_row_keys, 2);
        assert_eq!(grid(6, ColumnSpec::Exact(3)).top_row_keys, 3);
        assert_eq!(grid(1, ColumnSpec::Exact(3)).top_row_keys, 1);

        let size = grid(5, ColumnSpec::Exact(3));
        assert!(!size.is_top_row(0));
        assert!(size.is_top_row(1));
        assert!(!grid(3, ColumnSpec::Exact(3)).is_top_row(0));
    }

    #[test]
    fn test_zero_columns_rejected() {
        let err = size_grid(3, ColumnSpec::Max(0)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidColumnSpec { .. }));
    }

    #[test]
    fn test_zero_keys_rejected() {
        let err = size_grid(0, ColumnSpec::Exact(3)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidRequest { .. }));
    }

    #[test]
    fn test_ensure_fits() {
        assert!(ensure_fits(10, ColumnSpec::Exact(10), 10, 100, 0).is_ok());
        assert!(ensure_fits(3, ColumnSpec::Exact(20), 10, 100, 0).is_ok());

        let err = ensure_fits(11, ColumnSpec::Exact(11), 10, 100, 0).unwrap_err();
        match err {
            LayoutError::InvalidColumnSpec {
                requested_columns,
                max_columns,
                ..
            } => {
                assert_eq!(requested_columns, 11);
                assert_eq!(max_columns, 10);
            }
            other => panic!("Expected InvalidColumnSpec, got {:?}", other),
        }

        // The cap is checked even though 12 keys would only need 6 columns.
        assert!(ensure_fits(12, ColumnSpec::Max(11), 10, 100, 0).is_err());
    }

    /// Eight columns with 2-pixel dividers take 94 pixels; a ninth would not fit.
    #[test]
    fn test_ensure_fits_counts_dividers() {
        assert!(ensure_fits(8, ColumnSpec::Exact(8), 10, 100, 2).is_ok());

        let err = ensure_fits(9, ColumnSpec::Exact(9), 10, 100, 2).unwrap_err();
        match err {
            LayoutError::InvalidColumnSpec { max_columns, .. } => assert_eq!(max_columns, 8),
            other => panic!("Expected InvalidColumnSpec, got {:?}", other),
        }

        // The last column needs no divider after it.
        assert!(ensure_fits(5, ColumnSpec::Exact(5), 18, 100, 2).is_ok());
    }

    #[test]
    fn test_ensure_fits_huge_sizes() {
        assert!(ensure_fits(3, ColumnSpec::Exact(3), i32::MAX, i32::MAX, i32::MAX).is_err());
        assert!(ensure_fits(1, ColumnSpec::Exact(1), i32::MAX, i32::MAX, i32::MAX).is_ok());
    }
}

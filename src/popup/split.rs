// SPDX-License-Identifier: GPL-3.0-only

//! Ideal left/right split of a popup row around the default key.

/// Number of columns on each side of the default key.
///
/// The default key itself is counted in `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSplit {
    /// Columns left of the default key
    pub left: i32,
    /// Columns at or right of the default key
    pub right: i32,
}

impl RowSplit {
    /// Total number of columns in the split.
    pub fn capacity(&self) -> i32 {
        self.left + self.right
    }
}

/// Splits a row of `capacity` columns around the default key, ignoring the
/// keyboard edges.
///
/// Odd rows are centred; even rows get the extra column on the right.
pub fn ideal_split(capacity: usize) -> RowSplit {
    let capacity = capacity as i32;
    let left = (capacity - 1).max(0) / 2;
    RowSplit {
        left,
        right: capacity - left,
    }
}

// SPDX-License-Identifier: GPL-3.0-only

//! The layout pipeline: size, split, clamp, assign.

use crate::popup::clamp::{clamp_split, Boundary};
use crate::popup::columns::{column_offset, top_row_adjustment};
use crate::popup::grid::{ensure_fits, size_grid};
use crate::popup::split::ideal_split;
use crate::popup::types::{LayoutError, LayoutRequest, LayoutResult};

/// Computes the layout of a more-keys popup.
///
/// This is a pure function: the same request always produces the same result,
/// and requests for different popups can be computed concurrently.
///
/// # Errors
///
/// - [`LayoutError::InvalidRequest`] for a popup without keys or with a
///   non-positive key size, or a key and divider too wide to add up
/// - [`LayoutError::InvalidColumnSpec`] for a zero column count, or more
///   columns than the parent keyboard can hold
/// - [`LayoutError::UnfittablePosition`] when the grid cannot be placed
///   around the anchor
///
/// # Example
///
/// ```rust,ignore
/// use morekeys::popup::{compute_layout, ColumnSpec, LayoutRequest, OrderMode};
///
/// let request = LayoutRequest::new(3, ColumnSpec::Exact(5), OrderMode::Fixed)
///     .with_key_size(10, 10)
///     .with_anchor(45, 100);
/// let layout = compute_layout(&request)?;
/// assert_eq!(layout.column_offsets, vec![-1, 0, 1]);
/// ```
pub fn compute_layout(request: &LayoutRequest) -> Result<LayoutResult, LayoutError> {
    validate_request(request)?;
    ensure_fits(
        request.key_count,
        request.columns,
        request.key_width,
        request.keyboard_width,
        request.divider_width,
    )?;

    let grid = size_grid(request.key_count, request.columns)?;
    let ideal = ideal_split(grid.columns);
    let split = clamp_split(ideal, &Boundary::from(request))?;
    let adjustment = top_row_adjustment(request.order, &grid, &split);

    let column_offsets: Vec<i32> = (0..request.key_count)
        .map(|index| column_offset(index, request.order, &grid, &split, adjustment))
        .collect();

    tracing::debug!(
        "Popup layout: {} keys in {}x{} ({:?}), split {}/{}, adjustment {}",
        request.key_count,
        grid.columns,
        grid.rows,
        request.order,
        split.left,
        split.right,
        adjustment
    );

    Ok(LayoutResult {
        columns: grid.columns,
        rows: grid.rows,
        top_row_keys: grid.top_row_keys,
        left_slots: split.left as usize,
        right_slots: split.right as usize,
        column_offsets,
        top_row_adjustment: adjustment,
        default_key_x: split.default_key_x(request.column_width()),
        order: request.order,
        key_width: request.key_width,
        row_height: request.key_height,
        divider_width: request.divider_width,
    })
}

/// Rejects requests that violate the basic preconditions of the engine.
fn validate_request(request: &LayoutRequest) -> Result<(), LayoutError> {
    if request.key_count == 0 {
        return Err(LayoutError::invalid_request("popup has no keys")
            .with_suggestion("Only open a popup for keys that define more keys"));
    }
    if request.key_width <= 0 || request.key_height <= 0 {
        return Err(LayoutError::invalid_request(format!(
            "key size must be positive, got {}x{}",
            request.key_width, request.key_height
        )));
    }
    if request.divider_width < 0 {
        return Err(LayoutError::invalid_request(format!(
            "divider width must not be negative, got {}",
            request.divider_width
        )));
    }
    if request.key_width.checked_add(request.divider_width).is_none() {
        return Err(LayoutError::invalid_request(format!(
            "column width {} + {} is out of range",
            request.key_width, request.divider_width
        )));
    }
    Ok(())
}

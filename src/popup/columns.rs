// SPDX-License-Identifier: GPL-3.0-only

//! Column assignment for popup keys.
//!
//! Every key gets a column offset relative to the default key's column
//! (offset 0, negative is left). Fixed order fills each row left to right;
//! auto order puts the first key of a row on the default column and then
//! alternates right and left with increasing distance.
//!
//! The top row may hold fewer keys than the grid has columns. It is then
//! centred over the row below it, which for some key counts needs a shift of
//! half a column. That shift is the top-row adjustment: it is either 0 or -1
//! and the renderer moves the top row by `adjustment * column_width / 2`.

use crate::popup::clamp::ClampedSplit;
use crate::popup::grid::GridSize;
use crate::popup::types::OrderMode;

/// Computes the half-column shift of the top row.
pub fn top_row_adjustment(order: OrderMode, grid: &GridSize, split: &ClampedSplit) -> i32 {
    let top_keys = grid.top_row_keys;
    if grid.rows == 1 || split.left == 0 || split.right == 1 {
        return 0;
    }
    let centred = match order {
        OrderMode::Fixed => top_keys % 2 == 1 || top_keys == grid.columns,
        OrderMode::Auto => top_keys == 1 || grid.columns % 2 == top_keys % 2,
    };
    if centred { 0 } else { -1 }
}

/// Returns the column offset of the key at `index`.
pub fn column_offset(
    index: usize,
    order: OrderMode,
    grid: &GridSize,
    split: &ClampedSplit,
    adjustment: i32,
) -> i32 {
    match order {
        OrderMode::Fixed => fixed_order_offset(index, grid, split, adjustment),
        OrderMode::Auto => auto_order_offset(index, grid, split, adjustment),
    }
}

fn fixed_order_offset(index: usize, grid: &GridSize, split: &ClampedSplit, adjustment: i32) -> i32 {
    let column = (index % grid.columns) as i32;
    let row = index / grid.columns;
    if !grid.is_top_row(row) {
        return column - split.left;
    }

    // Centre the top row over its own keys, then push it back inside the
    // room the clamped split leaves on either side.
    let top_keys = grid.top_row_keys as i32;
    let right_side = top_keys / 2;
    let left_side = top_keys - (right_side + 1);
    let offset = column - left_side;
    let room_left = split.left + adjustment;
    let room_right = split.right - 1;

    if room_right < right_side {
        offset - (right_side - room_right)
    } else if room_left < left_side {
        offset + (left_side - room_left)
    } else {
        offset
    }
}

fn auto_order_offset(index: usize, grid: &GridSize, split: &ClampedSplit, adjustment: i32) -> i32 {
    let column = (index % grid.columns) as i32;
    if column == 0 {
        return 0;
    }
    let row = index / grid.columns;
    let left_budget = if grid.is_top_row(row) {
        split.left + adjustment
    } else {
        split.left
    };

    let mut offset = 0;
    let mut next_right = 1;
    let mut used_left = 0;
    let mut placed = 0;
    while placed < column {
        let before = placed;
        if next_right < split.right {
            offset = next_right;
            next_right += 1;
            placed += 1;
        }
        if placed >= column {
            break;
        }
        if used_left < left_budget {
            used_left += 1;
            offset = -used_left;
            placed += 1;
        }
        if placed == before {
            // Both sides are exhausted; the row is wider than its budget.
            break;
        }
    }
    offset
}

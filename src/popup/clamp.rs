// SPDX-License-Identifier: GPL-3.0-only

//! Keeps a popup row inside the parent keyboard.
//!
//! The ideal split from [`ideal_split`](crate::popup::split::ideal_split)
//! ignores the keyboard edges. Near an edge the columns that do not fit are
//! moved to the other side of the default key, and a popup that fills one side
//! exactly up to the edge is nudged one column inwards so that it does not sit
//! flush against the edge while the anchor is not on the edge itself.

use crate::popup::split::RowSplit;
use crate::popup::types::{LayoutError, LayoutRequest};

/// Horizontal geometry a popup row is clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Horizontal centre of the long-pressed key
    pub anchor_x: i32,
    /// Width of one popup key
    pub key_width: i32,
    /// Width of the parent keyboard
    pub keyboard_width: i32,
    /// Width of the divider between adjacent columns
    pub divider_width: i32,
}

impl Boundary {
    /// Horizontal distance between the left edges of adjacent columns.
    pub fn column_pitch(&self) -> i64 {
        (i64::from(self.key_width) + i64::from(self.divider_width)).max(1)
    }

    /// Whole columns that fit between the keyboard's left edge and the
    /// default key, which is centred on the anchor.
    pub fn available_left(&self) -> i32 {
        let room = i64::from(self.anchor_x) - i64::from(self.key_width / 2);
        saturate(room.div_euclid(self.column_pitch()))
    }

    /// Whole columns that fit between the default key and the keyboard's
    /// right edge. Each of them brings its divider along.
    pub fn available_right(&self) -> i32 {
        let default_right = i64::from(self.anchor_x) - i64::from(self.key_width / 2)
            + i64::from(self.key_width);
        let room = i64::from(self.keyboard_width) - default_right;
        saturate(room.div_euclid(self.column_pitch()))
    }

    fn contains_anchor(&self) -> bool {
        (0..=self.keyboard_width).contains(&self.anchor_x)
    }
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl From<&LayoutRequest> for Boundary {
    fn from(request: &LayoutRequest) -> Self {
        Self {
            anchor_x: request.anchor_x,
            key_width: request.key_width,
            keyboard_width: request.keyboard_width,
            divider_width: request.divider_width,
        }
    }
}

/// A split that fits inside the parent keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedSplit {
    /// Columns left of the default key
    pub left: i32,
    /// Columns at or right of the default key
    pub right: i32,
    /// Slots that were available left of the anchor
    pub available_left: i32,
    /// Slots that were available right of the default key
    pub available_right: i32,
}

impl ClampedSplit {
    /// Left edge of the default key's column, relative to the popup.
    pub fn default_key_x(&self, column_width: i32) -> i32 {
        self.left * column_width
    }
}

/// Reallocates `ideal` so that the row fits around the anchor.
///
/// Returns [`LayoutError::UnfittablePosition`] if the anchor lies outside the
/// keyboard or the columns cannot be placed even after reallocation.
pub fn clamp_split(ideal: RowSplit, boundary: &Boundary) -> Result<ClampedSplit, LayoutError> {
    if !boundary.contains_anchor() {
        return Err(LayoutError::unfittable_position(
            boundary.anchor_x,
            boundary.keyboard_width,
            ideal.left,
            ideal.right,
            0,
            0,
        ));
    }

    let max_left = boundary.available_left();
    let max_right = boundary.available_right();
    let unfittable = |left: i32, right: i32| {
        LayoutError::unfittable_position(
            boundary.anchor_x,
            boundary.keyboard_width,
            left,
            right,
            max_left,
            max_right,
        )
    };

    if max_left < 0 || max_right < 0 {
        return Err(unfittable(ideal.left, ideal.right));
    }

    let columns = ideal.capacity();
    let (mut left, mut right) = if ideal.left > max_left {
        (max_left, columns - max_left)
    } else if ideal.right > max_right + 1 {
        (columns - (max_right + 1), max_right + 1)
    } else {
        (ideal.left, ideal.right)
    };

    // Left side reaches the edge: shift one column right.
    if left == max_left && left > 0 && right <= max_right {
        left -= 1;
        right += 1;
    }
    // Right side reaches the edge: shift one column left.
    if right - 1 == max_right && right > 1 && left < max_left {
        left += 1;
        right -= 1;
    }

    if left < 0 || left > max_left || right < 1 || right - 1 > max_right {
        tracing::warn!(
            "Popup of {} columns does not fit at x={} (left {}, right {})",
            columns,
            boundary.anchor_x,
            left,
            right
        );
        return Err(unfittable(left, right));
    }

    Ok(ClampedSplit {
        left,
        right,
        available_left: max_left,
        available_right: max_right,
    })
}

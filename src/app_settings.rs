// SPDX-License-Identifier: GPL-3.0-only

//! Centralized settings and constants for the more-keys popup engine.

/// Default width of a popup key in pixels, including its horizontal gap.
pub const DEFAULT_KEY_WIDTH: i32 = 48;

/// Default height of a popup row in pixels, including its vertical gap.
pub const DEFAULT_ROW_HEIGHT: i32 = 56;

/// Default vertical gap between popup rows in pixels.
///
/// Only the gap of the bottom row is subtracted from the popup height.
pub const DEFAULT_VERTICAL_GAP: i32 = 4;

/// Default padding above the top row in pixels.
pub const DEFAULT_TOP_PADDING: i32 = 0;

/// Default padding below the bottom row in pixels.
pub const DEFAULT_BOTTOM_PADDING: i32 = 0;

/// Default width of the parent keyboard in pixels.
pub const DEFAULT_KEYBOARD_WIDTH: i32 = 800;

/// Maximum number of popup columns when a key does not specify a column marker.
pub const DEFAULT_MAX_COLUMNS: usize = 5;

/// Divider width as a fraction of the key width.
pub const DIVIDER_RATIO: f32 = 0.2;

/// Largest column count accepted from a `!fixedColumnOrder!` or
/// `!autoColumnOrder!` marker.
pub const MAX_MARKER_COLUMNS: usize = 0xff;

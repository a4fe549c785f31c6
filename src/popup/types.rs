// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for the more-keys popup layout engine.
//!
//! This module defines the request handed to the engine when a key is
//! long-pressed, the result it derives, and the error type raised for layouts
//! that cannot be built.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app_settings;

// ============================================================================
// Error Handling Types
// ============================================================================

/// Error type for popup layout computation.
///
/// Every variant is a configuration error in the keyboard layout that produced
/// the request. There is no degraded layout: the caller has to fix the source
/// definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The request itself is malformed (no keys, non-positive key size).
    InvalidRequest {
        /// Description of the malformed field
        message: String,
        /// Optional suggestion for fixing the request
        suggestion: Option<String>,
    },

    /// The column specification is zero, or asks for more columns than the
    /// parent keyboard can hold.
    InvalidColumnSpec {
        /// Description of the problem
        message: String,
        /// Column count the popup needs
        requested_columns: usize,
        /// Column count that fits inside the parent keyboard
        max_columns: usize,
        /// Optional suggestion for fixing the column specification
        suggestion: Option<String>,
    },

    /// The grid cannot be placed around the anchor without crossing an edge
    /// of the parent keyboard.
    UnfittablePosition {
        /// Horizontal anchor of the long-pressed key
        anchor_x: i32,
        /// Width of the parent keyboard
        keyboard_width: i32,
        /// Slots needed left of the default key
        left_slots: i32,
        /// Slots needed at or right of the default key
        right_slots: i32,
        /// Slots available left of the anchor
        available_left: i32,
        /// Slots available right of the anchor, excluding the default key
        available_right: i32,
        /// Optional suggestion for fixing the layout
        suggestion: Option<String>,
    },
}

impl LayoutError {
    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            suggestion: None,
        }
    }

    /// Creates an invalid column specification error.
    pub fn invalid_column_spec(
        message: impl Into<String>,
        requested_columns: usize,
        max_columns: usize,
    ) -> Self {
        Self::InvalidColumnSpec {
            message: message.into(),
            requested_columns,
            max_columns,
            suggestion: Some(format!(
                "Use {} column(s) or fewer, or reduce the key width",
                max_columns.max(1)
            )),
        }
    }

    /// Creates an unfittable position error.
    pub fn unfittable_position(
        anchor_x: i32,
        keyboard_width: i32,
        left_slots: i32,
        right_slots: i32,
        available_left: i32,
        available_right: i32,
    ) -> Self {
        Self::UnfittablePosition {
            anchor_x,
            keyboard_width,
            left_slots,
            right_slots,
            available_left,
            available_right,
            suggestion: Some("Reduce the number of popup columns for this key".into()),
        }
    }

    /// Adds a suggestion to the error, replacing any existing one.
    pub fn with_suggestion(mut self, hint: impl Into<String>) -> Self {
        match &mut self {
            Self::InvalidRequest { suggestion, .. }
            | Self::InvalidColumnSpec { suggestion, .. }
            | Self::UnfittablePosition { suggestion, .. } => *suggestion = Some(hint.into()),
        }
        self
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidRequest {
                message,
                suggestion,
            } => {
                write!(f, "Invalid popup request: {}", message)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            LayoutError::InvalidColumnSpec {
                message,
                requested_columns,
                max_columns,
                suggestion,
            } => {
                write!(
                    f,
                    "Invalid column specification: {} (requested: {}, fits: {})",
                    message, requested_columns, max_columns
                )?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            LayoutError::UnfittablePosition {
                anchor_x,
                keyboard_width,
                left_slots,
                right_slots,
                available_left,
                available_right,
                suggestion,
            } => {
                write!(
                    f,
                    "Popup does not fit at x={} in a keyboard {} wide: \
                     needs {} left / {} right, room for {} left / {} right",
                    anchor_x,
                    keyboard_width,
                    left_slots,
                    right_slots,
                    available_left,
                    available_right.saturating_add(1)
                )?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for LayoutError {}

// ============================================================================
// Request Types
// ============================================================================

/// Order in which popup keys are assigned to columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderMode {
    /// Keys keep strict left-to-right reading order.
    Fixed,
    /// Keys radiate alternately right and left from the default key.
    Auto,
}

/// Column specification of a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", content = "columns", rename_all = "snake_case")]
pub enum ColumnSpec {
    /// The popup has exactly this many columns (fewer only when there are
    /// fewer keys).
    Exact(usize),
    /// The popup has at most this many columns; keys are spread evenly over
    /// the rows this cap requires.
    Max(usize),
}

impl ColumnSpec {
    /// Returns the column count carried by the specification.
    pub fn value(&self) -> usize {
        match self {
            ColumnSpec::Exact(n) | ColumnSpec::Max(n) => *n,
        }
    }

    /// Returns `true` for an exact column count.
    pub fn is_fixed(&self) -> bool {
        matches!(self, ColumnSpec::Exact(_))
    }
}

/// Input of the layout engine, built once per long-press.
///
/// All geometry is in whole pixels of the parent keyboard. `key_width`
/// includes the horizontal gap of a key and `key_height` the vertical gap of
/// a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutRequest {
    /// Total number of keys in the popup, including the default key
    pub key_count: usize,

    /// Exact or maximum column count
    pub columns: ColumnSpec,

    /// Contiguous or spiral column assignment
    pub order: OrderMode,

    /// Width of one popup key
    #[serde(default = "default_key_width")]
    pub key_width: i32,

    /// Height of one popup row
    #[serde(default = "default_key_height")]
    pub key_height: i32,

    /// Horizontal centre of the long-pressed key within the parent keyboard
    pub anchor_x: i32,

    /// Width of the parent keyboard
    #[serde(default = "default_keyboard_width")]
    pub keyboard_width: i32,

    /// Width of the divider drawn between popup keys, zero for none
    #[serde(default)]
    pub divider_width: i32,
}

fn default_key_width() -> i32 {
    app_settings::DEFAULT_KEY_WIDTH
}

fn default_key_height() -> i32 {
    app_settings::DEFAULT_ROW_HEIGHT
}

fn default_keyboard_width() -> i32 {
    app_settings::DEFAULT_KEYBOARD_WIDTH
}

impl LayoutRequest {
    /// Creates a request with default geometry, anchored at the centre of the
    /// default keyboard width.
    pub fn new(key_count: usize, columns: ColumnSpec, order: OrderMode) -> Self {
        Self {
            key_count,
            columns,
            order,
            key_width: app_settings::DEFAULT_KEY_WIDTH,
            key_height: app_settings::DEFAULT_ROW_HEIGHT,
            anchor_x: app_settings::DEFAULT_KEYBOARD_WIDTH / 2,
            keyboard_width: app_settings::DEFAULT_KEYBOARD_WIDTH,
            divider_width: 0,
        }
    }

    /// Sets the size of one popup key.
    pub fn with_key_size(mut self, key_width: i32, key_height: i32) -> Self {
        self.key_width = key_width;
        self.key_height = key_height;
        self
    }

    /// Sets the anchor position and the width of the parent keyboard.
    pub fn with_anchor(mut self, anchor_x: i32, keyboard_width: i32) -> Self {
        self.anchor_x = anchor_x;
        self.keyboard_width = keyboard_width;
        self
    }

    /// Sets the divider width.
    pub fn with_divider_width(mut self, divider_width: i32) -> Self {
        self.divider_width = divider_width;
        self
    }

    /// Horizontal pitch of one popup column.
    pub fn column_width(&self) -> i32 {
        self.key_width.saturating_add(self.divider_width)
    }

    /// Computes the popup layout for this request.
    pub fn compute(&self) -> Result<LayoutResult, LayoutError> {
        crate::popup::engine::compute_layout(self)
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Output of the layout engine.
///
/// Row 0 is the row adjacent to the long-pressed key; the last row is the
/// top row and holds the remainder when the keys do not fill the grid.
/// Pixel values are relative to the popup's left edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Number of columns in the grid
    pub columns: usize,

    /// Number of rows in the grid
    pub rows: usize,

    /// Number of keys in the top row
    pub top_row_keys: usize,

    /// Columns left of the default key
    pub left_slots: usize,

    /// Columns at or right of the default key (includes the default key)
    pub right_slots: usize,

    /// Column offset of every key relative to the default column
    pub column_offsets: Vec<i32>,

    /// Half-column shift of the top row, either 0 or -1
    pub top_row_adjustment: i32,

    /// Left edge of the default key's column
    pub default_key_x: i32,

    /// Order the offsets were assigned in
    pub order: OrderMode,

    /// Width of one popup key
    pub key_width: i32,

    /// Height of one popup row
    pub row_height: i32,

    /// Width of the divider between keys
    pub divider_width: i32,
}

impl LayoutResult {
    /// Returns the number of keys in the popup.
    pub fn key_count(&self) -> usize {
        self.column_offsets.len()
    }

    /// Returns the column offset of the key at `index`.
    pub fn column_offset(&self, index: usize) -> Option<i32> {
        self.column_offsets.get(index).copied()
    }

    /// Returns the row that holds the key at `index`.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    /// Returns `true` if `row` is the top row of a multi-row popup.
    pub fn is_top_row(&self, row: usize) -> bool {
        self.rows > 1 && row == self.rows - 1
    }

    /// Horizontal pitch of one popup column.
    pub fn column_width(&self) -> i32 {
        self.key_width.saturating_add(self.divider_width)
    }

    /// Horizontal centre of the default key, relative to the popup.
    pub fn default_coord_x(&self) -> i32 {
        self.default_key_x + self.key_width / 2
    }

    /// Left edge of the popup in parent keyboard coordinates, so that the
    /// default key is centred on `anchor_x`.
    pub fn origin_in_parent(&self, anchor_x: i32) -> i32 {
        anchor_x - self.default_coord_x()
    }

    /// Left edge of the key at `index`, relative to the popup.
    pub fn key_x(&self, index: usize) -> Option<i32> {
        let offset = self.column_offset(index)?;
        let x = offset * self.column_width() + self.default_key_x;
        if self.is_top_row(self.row_of(index)) {
            return Some(x + self.top_row_adjustment * (self.column_width() / 2));
        }
        Some(x)
    }

    /// Width occupied by the grid.
    pub fn occupied_width(&self) -> i32 {
        let width = self.columns as i64 * i64::from(self.column_width())
            - i64::from(self.divider_width);
        i32::try_from(width).unwrap_or(i32::MAX)
    }
}

// ============================================================================
// Tests
// ============================================================================

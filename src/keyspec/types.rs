// SPDX-License-Identifier: GPL-3.0-only

//! Types produced by the more-keys specification parser.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PopupGeometry;
use crate::popup::{ColumnSpec, LayoutRequest, OrderMode};

// ============================================================================
// Error Handling Types
// ============================================================================

/// Error type for malformed more-keys specifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The entry has no label (empty entry, or nothing before the `|`)
    EmptyLabel {
        /// The offending entry
        spec: String,
    },

    /// The entry has a `|` with nothing after it
    EmptyOutput {
        /// The offending entry
        spec: String,
    },

    /// The entry has more than one unescaped `|`
    MultipleBars {
        /// The offending entry
        spec: String,
    },

    /// An icon entry has no output after the icon name
    MissingOutput {
        /// The offending entry
        spec: String,
    },

    /// A `!code/` reference could not be parsed
    InvalidCode {
        /// The offending entry
        spec: String,
        /// Description of the problem
        message: String,
    },

    /// A column marker carries a value that is not a usable column count
    InvalidMarker {
        /// The marker entry, value included
        entry: String,
        /// Description of the problem
        message: String,
    },
}

impl SpecError {
    /// Returns a hint for fixing the specification.
    pub fn suggestion(&self) -> &'static str {
        match self {
            SpecError::EmptyLabel { .. } => "Give the key a label, or escape a leading '|' as '\\|'",
            SpecError::EmptyOutput { .. } => "Remove the trailing '|' or add output text after it",
            SpecError::MultipleBars { .. } => "Escape literal bars in the label or output as '\\|'",
            SpecError::MissingOutput { .. } => "Icon keys need an output, e.g. '!icon/name|text'",
            SpecError::InvalidCode { .. } => "Use '!code/0x' followed by a hexadecimal code point",
            SpecError::InvalidMarker { .. } => "Follow the marker with a column count from 1 to 255",
        }
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::EmptyLabel { spec } => write!(f, "Empty label: '{}'", spec)?,
            SpecError::EmptyOutput { spec } => write!(f, "Empty output text: '{}'", spec)?,
            SpecError::MultipleBars { spec } => write!(f, "Multiple '|': '{}'", spec)?,
            SpecError::MissingOutput { spec } => write!(f, "Icon without output: '{}'", spec)?,
            SpecError::InvalidCode { spec, message } => {
                write!(f, "Invalid code in '{}': {}", spec, message)?
            }
            SpecError::InvalidMarker { entry, message } => {
                write!(f, "Invalid marker '{}': {}", entry, message)?
            }
        }
        write!(f, "\n  Suggestion: {}", self.suggestion())
    }
}

impl std::error::Error for SpecError {}

// ============================================================================
// Key Types
// ============================================================================

/// What a popup key emits when selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum KeyOutput {
    /// A single code point
    Code(char),
    /// A named key code (`!code/key_settings`), resolved by the keyboard
    NamedCode(String),
    /// A string of more than one code point
    Text(String),
}

/// One parsed popup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoreKeySpec {
    /// Text shown on the key, absent for icon keys
    pub label: Option<String>,
    /// Icon name for `!icon/` keys
    pub icon: Option<String>,
    /// What the key emits
    pub output: KeyOutput,
}

impl MoreKeySpec {
    /// Returns the label, or the icon name for icon keys.
    pub fn display_name(&self) -> &str {
        self.label
            .as_deref()
            .or(self.icon.as_deref())
            .unwrap_or_default()
    }
}

/// Column count and order requested by a `!fixedColumnOrder!` or
/// `!autoColumnOrder!` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMarker {
    /// Exact number of columns
    pub columns: usize,
    /// Column assignment order
    pub order: OrderMode,
}

/// A parsed more-keys specification: the popup keys plus the flags carried
/// by marker entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoreKeysDefinition {
    /// Popup keys in specification order
    pub keys: Vec<MoreKeySpec>,
    /// Column marker, if any
    pub column_marker: Option<ColumnMarker>,
    /// Draw dividers between the popup keys
    pub needs_dividers: bool,
    /// Keys carry labels rather than single letters
    pub has_labels: bool,
    /// Do not add the parent key to the popup automatically
    pub no_panel_auto_more_key: bool,
}

impl MoreKeysDefinition {
    /// Returns the number of popup keys.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Column specification for this popup.
    ///
    /// A marker requests an exact column count; without one the popup is
    /// capped at the configured maximum.
    pub fn column_spec(&self, geometry: &PopupGeometry) -> ColumnSpec {
        match self.column_marker {
            Some(marker) => ColumnSpec::Exact(marker.columns),
            None => ColumnSpec::Max(geometry.max_columns),
        }
    }

    /// Column order for this popup, auto order unless a marker says otherwise.
    pub fn order_mode(&self) -> OrderMode {
        self.column_marker
            .map(|marker| marker.order)
            .unwrap_or(OrderMode::Auto)
    }

    /// Builds the layout request for a popup anchored at `anchor_x`.
    pub fn to_request(&self, geometry: &PopupGeometry, anchor_x: i32) -> LayoutRequest {
        let divider_width = if self.needs_dividers {
            geometry.divider_width()
        } else {
            0
        };
        LayoutRequest::new(self.key_count(), self.column_spec(geometry), self.order_mode())
            .with_key_size(geometry.key_width, geometry.row_height)
            .with_anchor(anchor_x, geometry.keyboard_width)
            .with_divider_width(divider_width)
    }
}

// ============================================================================
// Tests
// ============================================================================

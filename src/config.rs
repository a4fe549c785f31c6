// SPDX-License-Identifier: GPL-3.0-only

//! Popup geometry configuration.
//!
//! The geometry of a popup (key size, row metrics, parent keyboard width) is
//! read from a JSON file. Every field is optional and falls back to the values
//! in [`app_settings`](crate::app_settings).
//!
//! ```json
//! {
//!     "key_width": 48,
//!     "row_height": 56,
//!     "keyboard_width": 1080,
//!     "max_columns": 5,
//!     "divider_ratio": 0.2
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

use crate::app_settings;
use crate::popup::LayoutRequest;

// ============================================================================
// Error Handling Types
// ============================================================================

/// The kind of file a [`ConfigError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFile {
    /// Popup geometry shared by all popups of a keyboard
    Geometry,
    /// A single layout request
    Request,
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFile::Geometry => write!(f, "popup geometry"),
            ConfigFile::Request => write!(f, "layout request"),
        }
    }
}

/// Error type for loading popup geometry or layout requests.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Unreadable {
        kind: ConfigFile,
        path: String,
        source: std::io::Error,
    },

    /// The file is not valid JSON or does not match the expected fields
    Malformed {
        kind: ConfigFile,
        path: Option<String>,
        /// 1-based line reported by serde_json
        line: usize,
        source: serde_json::Error,
    },

    /// A geometry field holds a value no popup can be laid out with
    OutOfRange {
        field: &'static str,
        message: String,
        path: Option<String>,
    },
}

impl ConfigError {
    fn unreadable(kind: ConfigFile, path: &str, source: std::io::Error) -> Self {
        Self::Unreadable {
            kind,
            path: path.to_string(),
            source,
        }
    }

    fn malformed(kind: ConfigFile, source: serde_json::Error) -> Self {
        Self::Malformed {
            kind,
            path: None,
            line: source.line(),
            source,
        }
    }

    fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            message: message.into(),
            path: None,
        }
    }

    /// Records the file the error came from.
    fn in_file(mut self, file: &str) -> Self {
        if let Self::Malformed { path, .. } | Self::OutOfRange { path, .. } = &mut self {
            *path = Some(file.to_string());
        }
        self
    }

    /// Returns the file the error came from, if it was loaded from one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Unreadable { path, .. } => Some(path),
            Self::Malformed { path, .. } | Self::OutOfRange { path, .. } => path.as_deref(),
        }
    }

    /// A hint on how to fix the configuration.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Unreadable { .. } => "Pass an existing, readable file",
            Self::Malformed {
                kind: ConfigFile::Geometry,
                ..
            } => "Geometry fields are integers in pixels, except divider_ratio",
            Self::Malformed {
                kind: ConfigFile::Request,
                ..
            } => "A request needs at least key_count, columns and order",
            Self::OutOfRange { .. } => "Pixel sizes must fit the parent keyboard",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Unreadable { kind, path, source } => {
                write!(f, "Cannot read {} from '{}': {}", kind, path, source)?;
            }
            ConfigError::Malformed {
                kind, line, source, ..
            } => {
                write!(f, "Malformed {}", kind)?;
                if let Some(path) = self.path() {
                    write!(f, " in '{}'", path)?;
                }
                write!(f, " (line {}): {}", line, source)?;
            }
            ConfigError::OutOfRange { field, message, .. } => {
                write!(f, "Popup geometry field '{}' {}", field, message)?;
                if let Some(path) = self.path() {
                    write!(f, " in '{}'", path)?;
                }
            }
        }
        write!(f, "\n  Suggestion: {}", self.suggestion())
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Unreadable { source, .. } => Some(source),
            ConfigError::Malformed { source, .. } => Some(source),
            ConfigError::OutOfRange { .. } => None,
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Geometry shared by every popup of a keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupGeometry {
    /// Width of one popup key, including its horizontal gap
    pub key_width: i32,
    /// Height of one popup row, including its vertical gap
    pub row_height: i32,
    /// Vertical gap between rows
    pub vertical_gap: i32,
    /// Padding above the top row
    pub top_padding: i32,
    /// Padding below the bottom row
    pub bottom_padding: i32,
    /// Width of the parent keyboard
    pub keyboard_width: i32,
    /// Column cap for keys without a column marker
    pub max_columns: usize,
    /// Divider width as a fraction of the key width
    pub divider_ratio: f32,
}

impl Default for PopupGeometry {
    fn default() -> Self {
        Self {
            key_width: app_settings::DEFAULT_KEY_WIDTH,
            row_height: app_settings::DEFAULT_ROW_HEIGHT,
            vertical_gap: app_settings::DEFAULT_VERTICAL_GAP,
            top_padding: app_settings::DEFAULT_TOP_PADDING,
            bottom_padding: app_settings::DEFAULT_BOTTOM_PADDING,
            keyboard_width: app_settings::DEFAULT_KEYBOARD_WIDTH,
            max_columns: app_settings::DEFAULT_MAX_COLUMNS,
            divider_ratio: app_settings::DIVIDER_RATIO,
        }
    }
}

impl PopupGeometry {
    /// Loads and validates a geometry configuration file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let json_str = fs::read_to_string(path)
            .map_err(|e| ConfigError::unreadable(ConfigFile::Geometry, path, e))?;
        let geometry = Self::from_json_str(&json_str).map_err(|e| e.in_file(path))?;
        tracing::debug!("Loaded popup geometry from {}", path);
        Ok(geometry)
    }

    /// Parses and validates a geometry configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let geometry: PopupGeometry = serde_json::from_str(json)
            .map_err(|e| ConfigError::malformed(ConfigFile::Geometry, e))?;
        geometry.validate()?;
        Ok(geometry)
    }

    /// Sets the width of the parent keyboard.
    pub fn with_keyboard_width(mut self, keyboard_width: i32) -> Self {
        self.keyboard_width = keyboard_width;
        self
    }

    /// Width of the divider between popup keys.
    ///
    /// The fractional part is dropped.
    pub fn divider_width(&self) -> i32 {
        (self.key_width as f32 * self.divider_ratio) as i32
    }

    /// Rejects values the layout engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("key_width", self.key_width),
            ("row_height", self.row_height),
            ("keyboard_width", self.keyboard_width),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::out_of_range(
                    field,
                    format!("must be positive, got {}", value),
                ));
            }
        }

        let non_negative = [
            ("vertical_gap", self.vertical_gap),
            ("top_padding", self.top_padding),
            ("bottom_padding", self.bottom_padding),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(ConfigError::out_of_range(
                    field,
                    format!("must not be negative, got {}", value),
                ));
            }
        }

        if self.max_columns == 0 {
            return Err(ConfigError::out_of_range("max_columns", "must be at least 1"));
        }
        if !(0.0..1.0).contains(&self.divider_ratio) {
            return Err(ConfigError::out_of_range(
                "divider_ratio",
                format!("must be in [0, 1), got {}", self.divider_ratio),
            ));
        }
        if self.key_width > self.keyboard_width {
            tracing::warn!(
                "Key width {} exceeds keyboard width {}; every popup will be rejected",
                self.key_width,
                self.keyboard_width
            );
        }
        Ok(())
    }
}

/// Loads a popup layout request from a JSON file.
///
/// Geometry fields missing from the file fall back to the defaults in
/// [`app_settings`](crate::app_settings).
pub fn load_request(path: &str) -> Result<LayoutRequest, ConfigError> {
    let json_str = fs::read_to_string(path)
        .map_err(|e| ConfigError::unreadable(ConfigFile::Request, path, e))?;
    serde_json::from_str(&json_str)
        .map_err(|e| ConfigError::malformed(ConfigFile::Request, e).in_file(path))
}

// ============================================================================
// Tests
// ============================================================================

// SPDX-License-Identifier: GPL-3.0-only

//! Parsing of more-keys specification strings.
//!
//! A specification is a comma separated list of popup keys, for example
//! `!fixedColumnOrder!3,à,á,â`. Entries starting with `!` followed by a
//! marker name carry popup flags instead of keys. Commas, bars and
//! backslashes are escaped with a backslash.

use crate::app_settings;
use crate::keyspec::types::{ColumnMarker, KeyOutput, MoreKeySpec, MoreKeysDefinition, SpecError};
use crate::popup::OrderMode;

const COMMA: char = ',';
const BACKSLASH: char = '\\';
const VERTICAL_BAR: char = '|';

const PREFIX_ICON: &str = "!icon/";
const PREFIX_CODE: &str = "!code/";
const PREFIX_HEX: &str = "0x";

/// Placeholder replaced by additional more keys.
pub const ADDITIONAL_MORE_KEY_MARKER: &str = "%";

/// Exact column count, fixed order.
pub const FIXED_COLUMN_ORDER: &str = "!fixedColumnOrder!";
/// Exact column count, auto order.
pub const AUTO_COLUMN_ORDER: &str = "!autoColumnOrder!";
/// Draw dividers between popup keys.
pub const NEEDS_DIVIDERS: &str = "!needsDividers!";
/// Popup keys carry labels.
pub const HAS_LABELS: &str = "!hasLabels!";
/// Do not add the parent key to the popup.
pub const NO_PANEL_AUTO_MORE_KEY: &str = "!noPanelAutoMoreKey!";

// ============================================================================
// Splitting
// ============================================================================

/// Splits `text` on unescaped commas.
///
/// Empty entries are dropped. Escape characters are kept so that the entries
/// can be parsed individually afterwards.
pub fn split_key_specs(text: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices();

    while let Some((pos, c)) = chars.next() {
        match c {
            COMMA => {
                if pos > start {
                    entries.push(text[start..pos].to_string());
                }
                start = pos + c.len_utf8();
            }
            BACKSLASH => {
                chars.next();
            }
            _ => {}
        }
    }
    if text.len() > start {
        entries.push(text[start..].to_string());
    }
    entries
}

/// Merges `additional` keys into `more_keys`.
///
/// Every `%` entry is replaced by the next additional key; `%` entries left
/// over are dropped. Without any `%` the additional keys go in front, and
/// additional keys left over after the last `%` are appended.
pub fn insert_additional_more_keys(more_keys: &[String], additional: &[String]) -> Vec<String> {
    let mut pending = additional.iter().filter(|entry| !entry.is_empty());
    let mut out = Vec::with_capacity(more_keys.len() + additional.len());
    let mut has_marker = false;

    for entry in more_keys.iter().filter(|entry| !entry.is_empty()) {
        if entry == ADDITIONAL_MORE_KEY_MARKER {
            has_marker = true;
            if let Some(next) = pending.next() {
                out.push(next.clone());
            }
        } else {
            out.push(entry.clone());
        }
    }

    let remaining: Vec<String> = pending.cloned().collect();
    if has_marker {
        out.extend(remaining);
        out
    } else {
        remaining.into_iter().chain(out).collect()
    }
}

// ============================================================================
// Markers
// ============================================================================

/// Removes every entry starting with `marker` and returns the integer value
/// of the first one.
///
/// Markers are case-sensitive.
pub fn take_int_marker(entries: &mut Vec<String>, marker: &str) -> Result<Option<i32>, SpecError> {
    let mut value = None;
    let mut error = None;

    entries.retain(|entry| {
        let Some(raw) = entry.strip_prefix(marker) else {
            return true;
        };
        if value.is_none() && error.is_none() {
            match raw.parse::<i32>() {
                Ok(parsed) => value = Some(parsed),
                Err(e) => {
                    error = Some(SpecError::InvalidMarker {
                        entry: entry.clone(),
                        message: format!("integer should follow the marker: {}", e),
                    })
                }
            }
        }
        false
    });

    match error {
        Some(err) => Err(err),
        None => Ok(value),
    }
}

/// Removes every entry equal to `marker` and returns whether there was one.
pub fn take_flag_marker(entries: &mut Vec<String>, marker: &str) -> bool {
    let before = entries.len();
    entries.retain(|entry| entry != marker);
    entries.len() != before
}

fn column_marker(
    entries: &mut Vec<String>,
    marker: &str,
    order: OrderMode,
) -> Result<Option<ColumnMarker>, SpecError> {
    let Some(value) = take_int_marker(entries, marker)? else {
        return Ok(None);
    };
    if value <= 0 {
        tracing::warn!("Ignoring {}{}: column count must be positive", marker, value);
        return Ok(None);
    }
    let columns = value as usize;
    if columns > app_settings::MAX_MARKER_COLUMNS {
        return Err(SpecError::InvalidMarker {
            entry: format!("{}{}", marker, value),
            message: format!(
                "at most {} columns are supported",
                app_settings::MAX_MARKER_COLUMNS
            ),
        });
    }
    Ok(Some(ColumnMarker { columns, order }))
}

// ============================================================================
// Key Entries
// ============================================================================

/// Removes escape characters. A trailing backslash is kept.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == BACKSLASH {
            out.push(chars.next().unwrap_or(BACKSLASH));
        } else {
            out.push(c);
        }
    }
    out
}

/// Byte index of the first unescaped `|` at or after `start`.
fn find_label_end(spec: &str, start: usize) -> Option<usize> {
    let mut chars = spec[start..].char_indices();
    while let Some((pos, c)) = chars.next() {
        match c {
            BACKSLASH => {
                chars.next();
            }
            VERTICAL_BAR => return Some(start + pos),
            _ => {}
        }
    }
    None
}

/// A single code point becomes a code, anything longer output text.
fn text_output(text: String) -> KeyOutput {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => KeyOutput::Code(c),
        _ => KeyOutput::Text(text),
    }
}

fn parse_code(spec: &str, code: &str) -> Result<KeyOutput, SpecError> {
    let invalid = |message: String| SpecError::InvalidCode {
        spec: spec.to_string(),
        message,
    };

    if let Some(hex) = code.strip_prefix(PREFIX_HEX) {
        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| invalid(format!("'{}' is not hexadecimal: {}", hex, e)))?;
        return char::from_u32(value)
            .map(KeyOutput::Code)
            .ok_or_else(|| invalid(format!("{:#x} is not a code point", value)));
    }
    if code.is_empty() {
        return Err(invalid("missing code name".into()));
    }
    Ok(KeyOutput::NamedCode(code.to_string()))
}

/// Parses what follows the `|` at byte index `bar`.
fn parse_output(spec: &str, bar: usize) -> Result<KeyOutput, SpecError> {
    let start = bar + VERTICAL_BAR.len_utf8();
    if find_label_end(spec, start).is_some() {
        return Err(SpecError::MultipleBars {
            spec: spec.to_string(),
        });
    }

    let raw = &spec[start..];
    if let Some(code) = raw.strip_prefix(PREFIX_CODE) {
        return parse_code(spec, code);
    }
    let text = unescape(raw);
    if text.is_empty() {
        return Err(SpecError::EmptyOutput {
            spec: spec.to_string(),
        });
    }
    Ok(text_output(text))
}

/// Parses one popup key entry.
///
/// Accepted forms:
/// - `label`: a one-letter label emits that letter, a longer one its text
/// - `label|output`: output text, or a single code point
/// - `label|!code/0x00e9` or `label|!code/key_name`
/// - `!icon/name|output`, with the same output forms
pub fn parse_more_key_spec(spec: &str) -> Result<MoreKeySpec, SpecError> {
    if spec.starts_with(PREFIX_ICON) {
        let bar = find_label_end(spec, PREFIX_ICON.len()).ok_or_else(|| SpecError::MissingOutput {
            spec: spec.to_string(),
        })?;
        let name = &spec[PREFIX_ICON.len()..bar];
        if name.is_empty() {
            return Err(SpecError::EmptyLabel {
                spec: spec.to_string(),
            });
        }
        return Ok(MoreKeySpec {
            label: None,
            icon: Some(name.to_string()),
            output: parse_output(spec, bar)?,
        });
    }

    match find_label_end(spec, 0) {
        Some(bar) => {
            let label = unescape(&spec[..bar]);
            if label.is_empty() {
                return Err(SpecError::EmptyLabel {
                    spec: spec.to_string(),
                });
            }
            Ok(MoreKeySpec {
                label: Some(label),
                icon: None,
                output: parse_output(spec, bar)?,
            })
        }
        None => {
            let label = unescape(spec);
            if label.is_empty() {
                return Err(SpecError::EmptyLabel {
                    spec: spec.to_string(),
                });
            }
            Ok(MoreKeySpec {
                output: text_output(label.clone()),
                label: Some(label),
                icon: None,
            })
        }
    }
}

// ============================================================================
// Full Specifications
// ============================================================================

/// Parses a complete more-keys specification.
///
/// Marker entries are consumed and turned into flags. A fixed-order marker
/// takes precedence over an auto-order marker. An empty specification yields
/// a definition without keys.
///
/// # Example
///
/// ```rust,ignore
/// use morekeys::keyspec::parse_more_keys;
///
/// let definition = parse_more_keys("!fixedColumnOrder!3,à,á,â,ä")?;
/// assert_eq!(definition.key_count(), 4);
/// ```
pub fn parse_more_keys(text: &str) -> Result<MoreKeysDefinition, SpecError> {
    let mut entries = split_key_specs(text);

    let auto = column_marker(&mut entries, AUTO_COLUMN_ORDER, OrderMode::Auto)?;
    let fixed = column_marker(&mut entries, FIXED_COLUMN_ORDER, OrderMode::Fixed)?;
    let needs_dividers = take_flag_marker(&mut entries, NEEDS_DIVIDERS);
    let has_labels = take_flag_marker(&mut entries, HAS_LABELS);
    let no_panel_auto_more_key = take_flag_marker(&mut entries, NO_PANEL_AUTO_MORE_KEY);

    let keys = entries
        .iter()
        .map(|entry| parse_more_key_spec(entry))
        .collect::<Result<Vec<_>, _>>()?;

    let definition = MoreKeysDefinition {
        keys,
        column_marker: fixed.or(auto),
        needs_dividers,
        has_labels,
        no_panel_auto_more_key,
    };
    tracing::debug!(
        "Parsed {} more keys (marker: {:?}, dividers: {})",
        definition.key_count(),
        definition.column_marker,
        definition.needs_dividers
    );
    Ok(definition)
}

// ============================================================================
// Tests
// ============================================================================

// SPDX-License-Identifier: GPL-3.0-only

//! More-keys specification strings.
//!
//! Keyboard layouts describe the popup of a key as a comma separated string
//! such as `!autoColumnOrder!4,1,2,3,4`. This module splits and parses those
//! strings into a [`MoreKeysDefinition`], which knows how to build the
//! [`LayoutRequest`](crate::popup::LayoutRequest) for the popup.
//!
//! # Example
//!
//! ```rust,ignore
//! use morekeys::config::PopupGeometry;
//! use morekeys::keyspec::parse_more_keys;
//!
//! let definition = parse_more_keys("!needsDividers!,.com,.net,.org")?;
//! let request = definition.to_request(&PopupGeometry::default(), 400);
//! let layout = request.compute()?;
//! ```

pub mod parser;
pub mod types;

pub use parser::{
    insert_additional_more_keys, parse_more_key_spec, parse_more_keys, split_key_specs,
};
pub use types::{ColumnMarker, KeyOutput, MoreKeySpec, MoreKeysDefinition, SpecError};

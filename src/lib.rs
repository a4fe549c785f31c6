// SPDX-License-Identifier: GPL-3.0-only

//! Cosboard more-keys - popup layout engine for soft keyboards
//!
//! Long-pressing a key with alternate characters opens a small popup keyboard
//! above it. This crate decides the shape of that popup: its rows and
//! columns, the column of every key, and how the grid is shifted so that it
//! stays inside the parent keyboard.
//!
//! # Architecture
//!
//! 1. **Specification** ([`keyspec`]): the comma separated more-keys string of
//!    a key is parsed into keys and marker flags.
//! 2. **Layout** ([`popup`]): a pure pipeline turns a
//!    [`LayoutRequest`](popup::LayoutRequest) into a
//!    [`LayoutResult`](popup::LayoutResult).
//! 3. **Placement** ([`popup::placement`]): the result is turned into pixel
//!    rectangles for drawing and hit testing.
//!
//! # Modules
//!
//! - `app_settings`: Centralized constants and default geometry
//! - `config`: Popup geometry configuration loaded from JSON
//! - `keyspec`: More-keys specification parsing
//! - `popup`: Layout engine and pixel placement

pub mod app_settings;
pub mod config;
pub mod keyspec;
pub mod popup;

// ============================================================================
// Integration Tests
// ============================================================================

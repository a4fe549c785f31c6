// SPDX-License-Identifier: GPL-3.0-only

//! Layout engine for more-keys popups.
//!
//! When a key with alternate characters is long-pressed, the keyboard opens a
//! popup grid whose default key sits directly above the pressed key. This
//! module decides how many rows and columns the grid has, which column every
//! key lands in and how far the grid extends to either side, without ever
//! crossing an edge of the parent keyboard.
//!
//! # Pipeline
//!
//! 1. **Grid sizing** ([`grid`]): columns, rows and top-row count from the key
//!    count and the [`ColumnSpec`]
//! 2. **Row split** ([`split`]): the ideal left/right division around the
//!    default key
//! 3. **Boundary clamp** ([`clamp`]): the split reallocated to fit the parent
//!    keyboard
//! 4. **Column assignment** ([`columns`]): per-key column offsets in fixed or
//!    auto order, plus the top-row adjustment
//!
//! [`placement`] turns the result into pixel rectangles for rendering and
//! hit testing.
//!
//! # Example
//!
//! ```rust,ignore
//! use morekeys::popup::{compute_layout, ColumnSpec, LayoutRequest, OrderMode, RowMetrics};
//!
//! let request = LayoutRequest::new(5, ColumnSpec::Exact(3), OrderMode::Auto)
//!     .with_key_size(48, 56)
//!     .with_anchor(400, 800);
//!
//! let layout = compute_layout(&request)?;
//! assert_eq!(layout.column_offsets, vec![0, 1, -1, 0, 1]);
//!
//! let placement = layout.place(&RowMetrics::default());
//! let touched = placement.key_at(10, 10);
//! ```

pub mod clamp;
pub mod columns;
pub mod engine;
pub mod grid;
pub mod placement;
pub mod split;
pub mod types;

pub use engine::compute_layout;
pub use grid::GridSize;
pub use placement::{PlacedKey, PopupPlacement, Rectangle, RowMetrics};
pub use types::{ColumnSpec, LayoutError, LayoutRequest, LayoutResult, OrderMode};

// ============================================================================
// Tests
// ============================================================================

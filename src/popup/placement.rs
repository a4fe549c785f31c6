// SPDX-License-Identifier: GPL-3.0-only

//! Pixel placement of popup keys.
//!
//! Turns a [`LayoutResult`] into rectangles the renderer can draw and input
//! dispatch can hit-test. Coordinates are relative to the popup's top-left
//! corner; row 0 is drawn at the bottom, next to the long-pressed key.

use serde::{Deserialize, Serialize};

use crate::config::PopupGeometry;
use crate::popup::types::LayoutResult;

/// Vertical metrics of a popup that are not part of the layout itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowMetrics {
    /// Gap between rows; only the bottom row's gap is removed from the height
    pub vertical_gap: i32,
    /// Padding above the top row
    pub top_padding: i32,
    /// Padding below the bottom row
    pub bottom_padding: i32,
}

impl From<&PopupGeometry> for RowMetrics {
    fn from(geometry: &PopupGeometry) -> Self {
        Self {
            vertical_gap: geometry.vertical_gap,
            top_padding: geometry.top_padding,
            bottom_padding: geometry.bottom_padding,
        }
    }
}

/// A simple rectangle for bounds calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width of the rectangle.
    pub width: i32,
    /// Height of the rectangle.
    pub height: i32,
}

impl Rectangle {
    /// Creates a new rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if the point lies inside the rectangle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Squared distance from the point to the nearest point of the rectangle.
    pub fn distance_squared(&self, x: i32, y: i32) -> i64 {
        let dx = if x < self.x {
            self.x - x
        } else if x >= self.x + self.width {
            x - (self.x + self.width - 1)
        } else {
            0
        };
        let dy = if y < self.y {
            self.y - y
        } else if y >= self.y + self.height {
            y - (self.y + self.height - 1)
        } else {
            0
        };
        i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy)
    }
}

/// One placed popup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedKey {
    /// Index of the key in the popup's key list
    pub index: usize,
    /// Row of the key, 0 being the bottom row
    pub row: usize,
    /// Column offset relative to the default key
    pub column_offset: i32,
    /// Pixel bounds of the key
    pub bounds: Rectangle,
    /// Key sits in the bottom row, next to the long-pressed key
    pub bottom_edge: bool,
    /// Key sits in the top row of a multi-row popup. A single row is only
    /// a bottom row.
    pub top_edge: bool,
}

/// All keys and dividers of a popup, with its total size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupPlacement {
    /// Placed keys in index order
    pub keys: Vec<PlacedKey>,
    /// Divider rectangles, empty when the popup has no dividers
    pub dividers: Vec<Rectangle>,
    /// Total popup width
    pub width: i32,
    /// Total popup height
    pub height: i32,
}

impl PopupPlacement {
    /// Returns the index of the key under the point.
    ///
    /// Points outside every key resolve to the nearest key, so a drag that
    /// leaves the popup still selects something. Ties go to the lower index.
    pub fn key_at(&self, x: i32, y: i32) -> Option<usize> {
        self.keys
            .iter()
            .min_by_key(|key| (key.bounds.distance_squared(x, y), key.index))
            .map(|key| key.index)
    }
}

impl LayoutResult {
    /// Top edge of `row`, relative to the popup.
    pub fn row_y(&self, row: usize, metrics: &RowMetrics) -> i32 {
        (self.rows - 1 - row) as i32 * self.row_height + metrics.top_padding
    }

    /// Height occupied by the grid including its padding.
    pub fn occupied_height(&self, metrics: &RowMetrics) -> i32 {
        self.rows as i32 * self.row_height - metrics.vertical_gap
            + metrics.top_padding
            + metrics.bottom_padding
    }

    /// Places every key of the popup.
    pub fn place(&self, metrics: &RowMetrics) -> PopupPlacement {
        let mut keys = Vec::with_capacity(self.key_count());
        let mut dividers = Vec::new();

        for (index, &offset) in self.column_offsets.iter().enumerate() {
            let row = self.row_of(index);
            let x = self.key_x(index).unwrap_or(self.default_key_x);
            let y = self.row_y(row, metrics);

            keys.push(PlacedKey {
                index,
                row,
                column_offset: offset,
                bounds: Rectangle::new(x, y, self.key_width, self.row_height),
                bottom_edge: row == 0,
                top_edge: self.is_top_row(row),
            });

            // Dividers sit between a key and its neighbour towards the
            // default key.
            if self.divider_width > 0 && offset != 0 {
                let divider_x = if offset > 0 {
                    x - self.divider_width
                } else {
                    x + self.key_width
                };
                dividers.push(Rectangle::new(
                    divider_x,
                    y,
                    self.divider_width,
                    self.row_height,
                ));
            }
        }

        PopupPlacement {
            keys,
            dividers,
            width: self.occupied_width(),
            height: self.occupied_height(metrics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::popup::types::{ColumnSpec, LayoutRequest, OrderMode};

    const WIDTH: i32 = 10;
    const HEIGHT: i32 = 12;

    fn layout(key_count: usize, columns: ColumnSpec, order: OrderMode, anchor_x: i32) -> LayoutResult {
        LayoutRequest::new(key_count, columns, order)
            .with_key_size(WIDTH, HEIGHT)
            .with_anchor(anchor_x, WIDTH * 10)
            .compute()
            .expect("layout")
    }

    #[test]
    fn test_rectangle_contains_and_distance() {
        let rect = Rectangle::new(10, 20, 10, 10);
        assert!(rect.contains(10, 20));
        assert!(rect.contains(19, 29));
        assert!(!rect.contains(20, 29));
        assert_eq!(rect.distance_squared(15, 25), 0);
        assert_eq!(rect.distance_squared(5, 25), 25);
        assert_eq!(rect.distance_squared(22, 32), 9 + 9);
    }

    #[test]
    fn test_single_row_placement() {
        let result = layout(3, ColumnSpec::Exact(5), OrderMode::Fixed, 45);
        let placement = result.place(&RowMetrics::default());

        assert_eq!(placement.width, 30);
        assert_eq!(placement.height, HEIGHT);
        let xs: Vec<i32> = placement.keys.iter().map(|k| k.bounds.x).collect();
        assert_eq!(xs, vec![0, 10, 20]);
        assert!(placement.keys.iter().all(|k| k.bounds.y == 0));
        assert!(placement.keys.iter().all(|k| k.bottom_edge && !k.top_edge));
        assert!(placement.dividers.is_empty());
    }

    /// Row 0 sits at the bottom; the top row is shifted half a column.
    #[test]
    fn test_multi_row_placement() {
        let result = layout(5, ColumnSpec::Exact(3), OrderMode::Fixed, 45);
        assert_eq!(result.top_row_adjustment, -1);

        let metrics = RowMetrics {
            vertical_gap: 2,
            top_padding: 3,
            bottom_padding: 4,
        };
        let placement = result.place(&metrics);

        assert_eq!(placement.height, 2 * HEIGHT - 2 + 3 + 4);
        let bottom: Vec<(i32, i32)> = placement.keys[..3]
            .iter()
            .map(|k| (k.bounds.x, k.bounds.y))
            .collect();
        assert_eq!(bottom, vec![(0, HEIGHT + 3), (10, HEIGHT + 3), (20, HEIGHT + 3)]);

        let top: Vec<(i32, i32)> = placement.keys[3..]
            .iter()
            .map(|k| (k.bounds.x, k.bounds.y))
            .collect();
        assert_eq!(top, vec![(5, 3), (15, 3)]);

        assert!(placement.keys[0].bottom_edge && !placement.keys[0].top_edge);
        assert!(placement.keys[4].top_edge && !placement.keys[4].bottom_edge);
    }

    #[test]
    fn test_dividers_face_default_key() {
        let result = LayoutRequest::new(3, ColumnSpec::Exact(3), OrderMode::Auto)
            .with_key_size(WIDTH, HEIGHT)
            .with_anchor(45, WIDTH * 10)
            .with_divider_width(2)
            .compute()
            .expect("layout");
        assert_eq!(result.column_offsets, vec![0, 1, -1]);

        let placement = result.place(&RowMetrics::default());
        // Columns are 12 wide; the default key starts at 12.
        let xs: Vec<i32> = placement.keys.iter().map(|k| k.bounds.x).collect();
        assert_eq!(xs, vec![12, 24, 0]);
        assert_eq!(placement.width, 34);

        let dividers: Vec<i32> = placement.dividers.iter().map(|d| d.x).collect();
        assert_eq!(dividers, vec![22, 10]);
        assert!(placement.dividers.iter().all(|d| d.width == 2));
    }

    #[test]
    fn test_key_at() {
        let result = layout(5, ColumnSpec::Exact(3), OrderMode::Fixed, 45);
        let placement = result.place(&RowMetrics::default());

        // Bottom row: keys 0..3 at y 12..24.
        assert_eq!(placement.key_at(1, 13), Some(0));
        assert_eq!(placement.key_at(15, 20), Some(1));
        assert_eq!(placement.key_at(29, 23), Some(2));
        // Top row is shifted by half a column.
        assert_eq!(placement.key_at(6, 0), Some(3));
        assert_eq!(placement.key_at(20, 5), Some(4));
        // Outside the popup resolves to the nearest key.
        assert_eq!(placement.key_at(-50, 18), Some(0));
        assert_eq!(placement.key_at(100, 18), Some(2));
    }

    #[test]
    fn test_key_at_empty_placement() {
        let placement = PopupPlacement {
            keys: Vec::new(),
            dividers: Vec::new(),
            width: 0,
            height: 0,
        };
        assert_eq!(placement.key_at(0, 0), None);
    }

    #[test]
    fn test_row_metrics_from_geometry() {
        let geometry = PopupGeometry {
            vertical_gap: 6,
            top_padding: 1,
            bottom_padding: 2,
            ..PopupGeometry::default()
        };
        let metrics = RowMetrics::from(&geometry);
        assert_eq!(metrics.vertical_gap, 6);
        assert_eq!(metrics.top_padding, 1);
        assert_eq!(metrics.bottom_padding, 2);
    }
}

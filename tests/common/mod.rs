// SPDX-License-Identifier: GPL-3.0-only

//! Shared fixtures for the popup layout corpora.

#![allow(dead_code)]

use morekeys::popup::{ColumnSpec, LayoutError, LayoutRequest, OrderMode};

pub const WIDTH: i32 = 10;
pub const HEIGHT: i32 = 10;
pub const KEYBOARD_WIDTH: i32 = WIDTH * 10;
pub const KEYBOARD_SLOTS: usize = (KEYBOARD_WIDTH / WIDTH) as usize;

pub const L0: i32 = WIDTH / 2;
pub const L1: i32 = L0 + WIDTH;
pub const L2: i32 = L1 + WIDTH;
pub const L3: i32 = L2 + WIDTH;
pub const M0: i32 = L3 + WIDTH;
pub const M1: i32 = M0 + WIDTH;
pub const R3: i32 = M1 + WIDTH;
pub const R2: i32 = R3 + WIDTH;
pub const R1: i32 = R2 + WIDTH;
pub const R0: i32 = R1 + WIDTH;

/// Expected layout of one popup.
pub struct Case {
    pub columns: usize,
    pub anchor_x: i32,
    pub grid: (usize, usize),
    pub split: (usize, usize),
    pub adjustment: i32,
    pub offsets: &'static [i32],
}

pub fn case(
    columns: usize,
    anchor_x: i32,
    grid: (usize, usize),
    split: (usize, usize),
    adjustment: i32,
    offsets: &'static [i32],
) -> Case {
    Case {
        columns,
        anchor_x,
        grid,
        split,
        adjustment,
        offsets,
    }
}

fn request(key_count: usize, columns: ColumnSpec, order: OrderMode, anchor_x: i32) -> LayoutRequest {
    LayoutRequest::new(key_count, columns, order)
        .with_key_size(WIDTH, HEIGHT)
        .with_anchor(anchor_x, KEYBOARD_WIDTH)
}

/// Checks every case for a popup of `key_count` keys.
pub fn check_cases(
    key_count: usize,
    spec: fn(usize) -> ColumnSpec,
    order: OrderMode,
    cases: &[Case],
) {
    for case in cases {
        let label = format!(
            "{} keys, {:?} at x={}",
            key_count,
            spec(case.columns),
            case.anchor_x
        );
        let result = request(key_count, spec(case.columns), order, case.anchor_x)
            .compute()
            .unwrap_or_else(|e| panic!("{}: {}", label, e));

        assert_eq!((result.columns, result.rows), case.grid, "{} grid", label);
        assert_eq!(
            (result.left_slots, result.right_slots),
            case.split,
            "{} split",
            label
        );
        assert_eq!(result.top_row_adjustment, case.adjustment, "{} adjust", label);
        assert_eq!(result.column_offsets, case.offsets, "{} offsets", label);
        assert_eq!(
            result.default_key_x,
            case.split.0 as i32 * WIDTH,
            "{} default",
            label
        );
    }
}

/// A popup wider than the keyboard is rejected wherever it is anchored.
pub fn assert_too_many_columns(spec: ColumnSpec, order: OrderMode) {
    for anchor_x in [L0, M0, R0] {
        let err = request(spec.value(), spec, order, anchor_x)
            .compute()
            .unwrap_err();
        assert!(
            matches!(err, LayoutError::InvalidColumnSpec { .. }),
            "{:?} at x={}: {}",
            spec,
            anchor_x,
            err
        );
    }
}

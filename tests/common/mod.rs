//! Common test utilities for building layout matrices.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::sync::Arc;

use gridview::layout::{PaddingPolicy, ViewMatrix};
use gridview::types::{ColumnMetric, Rect, RowMetric, Size};

/// `sections` sections of `rows` equal-height rows each
#[must_use]
pub fn uniform_rows(sections: usize, rows: usize, height: f32) -> Vec<Vec<RowMetric>> {
    (0..sections)
        .map(|_| RowMetric::stack(&vec![height; rows]))
        .collect()
}

/// Non-infinite 3 x 2 grid: columns of 100, rows of 50, frame 100 x 100
#[must_use]
pub fn small_grid() -> ViewMatrix {
    ViewMatrix::new(
        Some(ColumnMetric::stack(&[100.0, 100.0, 100.0])),
        uniform_rows(3, 2, 50.0),
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Size::new(300.0, 100.0),
        Some(Size::new(100.0, 100.0)),
        false,
    )
}

/// Infinite grid with explicit columns and fixed padding on both sides
#[must_use]
pub fn infinite_grid(widths: &[f32], rows: usize, left: f32, right: f32) -> ViewMatrix {
    let columns = ColumnMetric::stack(widths);
    let width: f32 = widths.iter().sum();
    let frame_width = widths.first().copied().unwrap_or(100.0);
    ViewMatrix::with_padding(
        Arc::new(PaddingPolicy::Fixed { left, right }),
        Some(columns),
        uniform_rows(widths.len(), rows, 50.0),
        Rect::new(0.0, 0.0, frame_width, 50.0 * rows as f32),
        Size::new(width, 50.0 * rows as f32),
        Some(Size::new(frame_width, 50.0 * rows as f32)),
        true,
    )
}

/// Paged (uniform column) grid
#[must_use]
pub fn paged_grid(pages: usize, rows: usize, is_infinite: bool) -> ViewMatrix {
    ViewMatrix::new(
        None,
        uniform_rows(pages, rows, 48.0),
        Rect::new(0.0, 0.0, 320.0, 480.0),
        Size::new(320.0 * pages as f32, 48.0 * rows as f32),
        Some(Size::new(320.0, 480.0)),
        is_infinite,
    )
}

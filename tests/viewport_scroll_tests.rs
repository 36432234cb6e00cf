//! Viewport and scroll coordinate tests
//!
//! Tests for visible cell enumeration, infinite-scroll recentering, clamping
//! and re-basing the scroll offset across layout rebuilds.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{infinite_grid, paged_grid, small_grid};
use gridview::layout::Viewport;
use gridview::types::{IndexPath, Point, Rect, Size, Threshold};

// =============================================================================
// VISIBLE CELLS
// =============================================================================

#[test]
fn test_visible_cells_finite_grid() {
    let matrix = small_grid();
    let mut viewport = Viewport::new(100.0, 100.0);
    viewport.scroll_x = 50.0;

    let cells = viewport.visible_cells(&matrix);
    let paths: Vec<IndexPath> = cells.iter().map(|c| c.index_path).collect();
    assert_eq!(
        paths,
        vec![
            IndexPath::new(0, 0),
            IndexPath::new(0, 1),
            IndexPath::new(1, 0),
            IndexPath::new(1, 1),
        ]
    );
    assert!(cells.iter().all(|c| c.threshold == Threshold::In));
    assert_eq!(cells[3].rect, Rect::new(100.0, 50.0, 100.0, 50.0));
}

#[test]
fn test_visible_cells_paged_wraparound() {
    let matrix = paged_grid(5, 10, true);
    let mut viewport = Viewport::new(320.0, 480.0);
    viewport.scroll_x = 100.0;

    let cells = viewport.visible_cells(&matrix);
    assert_eq!(cells.len(), 20);

    let ghost = &cells[0];
    assert_eq!(ghost.index_path, IndexPath::new(4, 0));
    assert_eq!(ghost.threshold, Threshold::Below);
    assert_eq!(ghost.rect.x, 0.0);
    assert_eq!(ghost.rect.width, 320.0);

    let real = &cells[10];
    assert_eq!(real.index_path, IndexPath::new(0, 0));
    assert_eq!(real.threshold, Threshold::In);
    assert_eq!(real.rect.x, 320.0);
}

#[test]
fn test_visible_cells_right_ghost() {
    let matrix = infinite_grid(&[100.0, 100.0, 100.0], 2, 50.0, 50.0);
    let mut viewport = Viewport::new(100.0, 100.0);
    viewport.scroll_x = 300.0;

    let cells = viewport.visible_cells(&matrix);
    let ghosts: Vec<_> = cells
        .iter()
        .filter(|c| c.threshold == Threshold::Above)
        .collect();
    assert_eq!(ghosts.len(), 2);
    assert_eq!(ghosts[0].index_path, IndexPath::new(0, 0));
    assert_eq!(ghosts[0].rect.x, 350.0);
}

#[test]
fn test_visible_cells_every_rect_intersects_viewport() {
    let matrix = infinite_grid(&[70.0, 130.0, 100.0], 2, 100.0, 100.0);
    for scroll_x in [0.0, 35.0, 99.0, 180.0, 310.0, 390.0] {
        let mut viewport = Viewport::new(70.0, 100.0);
        viewport.scroll_x = scroll_x;
        let visible = Rect::new(scroll_x, 0.0, 70.0, 100.0);
        for cell in viewport.visible_cells(&matrix) {
            assert!(
                cell.rect.intersects(&visible),
                "{cell:?} outside viewport at {scroll_x}"
            );
        }
    }
}

// =============================================================================
// RECENTERING AND CLAMPING
// =============================================================================

#[test]
fn test_recenter_keeps_content_under_viewport() {
    let matrix = infinite_grid(&[100.0, 100.0, 100.0], 2, 50.0, 50.0);
    for scroll_x in [10.0, 49.0, 351.0, 399.0] {
        let mut viewport = Viewport::new(100.0, 100.0);
        viewport.scroll_x = scroll_x;
        let before = matrix.index_path(Point::new(scroll_x, 10.0));
        assert!(viewport.recenter(&matrix));
        let after = matrix.index_path(Point::new(viewport.scroll_x, 10.0));
        assert_eq!(before, after);
        assert!(viewport.scroll_x >= matrix.validity_rect().min_x());
        assert!(viewport.scroll_x <= matrix.validity_rect().max_x());
    }
}

#[test]
fn test_recenter_finite_is_noop() {
    let matrix = small_grid();
    let mut viewport = Viewport::new(100.0, 100.0);
    viewport.scroll_x = -40.0;
    assert!(!viewport.recenter(&matrix));
    assert_eq!(viewport.scroll_x, -40.0);
}

#[test]
fn test_clamp_scroll_finite() {
    let matrix = small_grid();
    let mut viewport = Viewport::new(100.0, 100.0);

    viewport.set_scroll(-40.0, -10.0, &matrix);
    assert_eq!(viewport.offset(), Point::ZERO);

    viewport.set_scroll(1000.0, 0.0, &matrix);
    assert_eq!(viewport.scroll_x, 200.0);
}

#[test]
fn test_scroll_by_wraps_infinite() {
    let matrix = infinite_grid(&[100.0, 100.0, 100.0], 2, 50.0, 50.0);
    let mut viewport = Viewport::new(100.0, 100.0);
    viewport.set_scroll(60.0, 0.0, &matrix);

    viewport.scroll_by(-40.0, 0.0, &matrix);
    assert_eq!(viewport.scroll_x, 320.0);
}

// =============================================================================
// REBASING
// =============================================================================

#[test]
fn test_rebase_after_rotation() {
    let old = infinite_grid(&[100.0, 100.0, 100.0], 1, 50.0, 50.0);
    let new = infinite_grid(&[200.0, 200.0, 200.0], 1, 100.0, 100.0);

    let mut viewport = Viewport::new(100.0, 50.0);
    viewport.scroll_x = 150.0;
    viewport.resize(200.0, 50.0);
    viewport.rebase(&old, &new);

    assert_eq!(viewport.scroll_x, 300.0);
    assert_eq!(viewport.size(), Size::new(200.0, 50.0));
}

#[test]
fn test_rebase_finite_rescales() {
    let old = small_grid();
    let new = old.resized(
        None,
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Size::new(600.0, 100.0),
        Some(Size::new(100.0, 100.0)),
    );
    let mut viewport = Viewport::new(100.0, 100.0);
    viewport.scroll_x = 100.0;
    viewport.rebase(&old, &new);
    assert_eq!(viewport.scroll_x, 200.0);
}

//! Viewport state management for scrolling a [`ViewMatrix`].

use tracing::trace;

use super::ViewMatrix;
use crate::types::{IndexPath, Point, Size, Threshold, VisibleCell};

/// Viewport state - the visible window onto the grid content
#[derive(Debug, Clone, Default)]
pub struct Viewport {
    /// Horizontal scroll offset in content coordinates
    pub scroll_x: f32,
    /// Vertical scroll offset in content coordinates
    pub scroll_y: f32,
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size scrolled to the origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        }
    }

    pub fn offset(&self) -> Point {
        Point::new(self.scroll_x, self.scroll_y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Sections intersecting the viewport, possibly virtual in infinite mode
    pub fn visible_sections(&self, matrix: &ViewMatrix) -> Vec<isize> {
        matrix.visible_sections(self.offset())
    }

    /// Every cell the host should lay out at the current scroll position.
    ///
    /// Virtual sections are reported as their real section with a `Below` or
    /// `Above` threshold, so `rect` is where the wrapped copy is drawn.
    pub fn visible_cells(&self, matrix: &ViewMatrix) -> Vec<VisibleCell> {
        let offset = self.offset();
        let mut cells = Vec::new();

        for section in matrix.visible_sections(offset) {
            let Some((real_section, threshold)) = resolve_section(section, matrix) else {
                continue;
            };
            for row in matrix.visible_rows(offset, section) {
                let index_path = IndexPath::new(real_section, row);
                cells.push(VisibleCell {
                    index_path,
                    threshold,
                    rect: matrix.rect(index_path, threshold),
                });
            }
        }
        cells
    }

    /// Keep the horizontal offset inside the validity rect in infinite mode.
    ///
    /// Moving by exactly one validity width leaves the same content under the
    /// viewport. Returns true if the offset changed.
    pub fn recenter(&mut self, matrix: &ViewMatrix) -> bool {
        if !matrix.is_infinite() {
            return false;
        }
        let validity = matrix.validity_rect();
        if validity.width <= 0.0 {
            return false;
        }

        let before = self.scroll_x;
        if self.scroll_x < validity.min_x() {
            self.scroll_x += validity.width;
        } else if self.scroll_x > validity.max_x() {
            self.scroll_x -= validity.width;
        } else {
            return false;
        }

        trace!(from = before, to = self.scroll_x, "recentered infinite scroll");
        true
    }

    /// Clamp scroll position to the range the host container allows.
    ///
    /// Negative content insets shrink the scrollable range, the same way a
    /// platform scroll view applies them.
    pub fn clamp_scroll(&mut self, matrix: &ViewMatrix) {
        let content = matrix.content_size();
        let inset = matrix.content_inset();

        let min_x = -inset.left;
        let min_y = -inset.top;
        let max_x = (content.width + inset.right - self.width).max(min_x);
        let max_y = (content.height + inset.bottom - self.height).max(min_y);

        self.scroll_x = self.scroll_x.clamp(min_x, max_x);
        self.scroll_y = self.scroll_y.clamp(min_y, max_y);
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32, matrix: &ViewMatrix) {
        self.scroll_x += delta_x;
        self.scroll_y += delta_y;
        self.recenter(matrix);
        self.clamp_scroll(matrix);
    }

    /// Set absolute scroll position
    pub fn set_scroll(&mut self, x: f32, y: f32, matrix: &ViewMatrix) {
        self.scroll_x = x;
        self.scroll_y = y;
        self.recenter(matrix);
        self.clamp_scroll(matrix);
    }

    /// Carry the horizontal offset from `old` over to its replacement `new`
    pub fn rebase(&mut self, old: &ViewMatrix, new: &ViewMatrix) {
        self.scroll_x = new.convert(self.scroll_x, old);
        self.clamp_scroll(new);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}

/// Split a possibly virtual section into its real section and threshold
fn resolve_section(section: isize, matrix: &ViewMatrix) -> Option<(isize, Threshold)> {
    let count = isize::try_from(matrix.count()).ok()?;
    let resolved = if section < 0 {
        (section + count, Threshold::Below)
    } else if section >= count {
        (section - count, Threshold::Above)
    } else {
        (section, Threshold::In)
    };

    if resolved.1 != Threshold::In && !matrix.is_infinite() {
        return None;
    }
    (0..count).contains(&resolved.0).then_some(resolved)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::layout::PaddingPolicy;
    use crate::types::{ColumnMetric, Rect, RowMetric};

    fn infinite_matrix() -> ViewMatrix {
        ViewMatrix::with_padding(
            Arc::new(PaddingPolicy::Fixed {
                left: 50.0,
                right: 50.0,
            }),
            Some(ColumnMetric::stack(&[100.0, 100.0, 100.0])),
            vec![RowMetric::stack(&[50.0, 50.0]); 3],
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Size::new(300.0, 100.0),
            Some(Size::new(100.0, 100.0)),
            true,
        )
    }

    #[test]
    fn test_resolve_section() {
        let matrix = infinite_matrix();
        assert_eq!(resolve_section(-1, &matrix), Some((2, Threshold::Below)));
        assert_eq!(resolve_section(3, &matrix), Some((0, Threshold::Above)));
        assert_eq!(resolve_section(1, &matrix), Some((1, Threshold::In)));
        assert_eq!(resolve_section(7, &matrix), None);
    }

    #[test]
    fn test_visible_cells_include_wrapped_ghost() {
        let matrix = infinite_matrix();
        let mut viewport = Viewport::new(100.0, 100.0);
        viewport.scroll_x = 20.0;

        let cells = viewport.visible_cells(&matrix);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].index_path, IndexPath::new(2, 0));
        assert_eq!(cells[0].threshold, Threshold::Below);
        assert_eq!(cells[0].rect, Rect::new(-50.0, 0.0, 100.0, 50.0));
        assert_eq!(cells[2].index_path, IndexPath::new(0, 0));
        assert_eq!(cells[2].threshold, Threshold::In);
    }

    #[test]
    fn test_recenter_left_edge() {
        let matrix = infinite_matrix();
        let mut viewport = Viewport::new(100.0, 100.0);
        viewport.scroll_x = 20.0;
        assert!(viewport.recenter(&matrix));
        assert_eq!(viewport.scroll_x, 320.0);
        assert_eq!(
            matrix.index_path(Point::new(20.0, 0.0)),
            matrix.index_path(Point::new(320.0, 0.0))
        );
    }

    #[test]
    fn test_recenter_inside_is_noop() {
        let matrix = infinite_matrix();
        let mut viewport = Viewport::new(100.0, 100.0);
        viewport.scroll_x = 200.0;
        assert!(!viewport.recenter(&matrix));
        assert_eq!(viewport.scroll_x, 200.0);
    }
}

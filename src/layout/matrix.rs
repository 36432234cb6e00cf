//! Immutable layout snapshot for a section/row grid.
//!
//! A [`ViewMatrix`] is derived once from column metrics, row metrics, a reference
//! frame and the declared content size, then only queried. Any layout-affecting
//! change (resize, reload, rotation) builds a new matrix; [`ViewMatrix::convert`]
//! carries the scroll offset across.
//!
//! In infinite mode the content area is padded on both sides and sections left of
//! 0 or past the last real section fold back onto the real column table, shifted
//! by one validity width. Nothing is duplicated.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};

use super::padding::{AroundInsets, PaddingCalculator, PaddingPolicy};
use crate::types::{ColumnMetric, EdgeInsets, IndexPath, Point, Rect, RowMetric, Size, Threshold};

/// Horizontal layout of sections
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Columns {
    /// Every section is one reference-frame width wide, unbounded both ways
    #[default]
    Uniform,
    /// One metric per real section, sorted by x
    Explicit(Vec<ColumnMetric>),
}

impl From<Option<Vec<ColumnMetric>>> for Columns {
    fn from(columns: Option<Vec<ColumnMetric>>) -> Self {
        columns.map_or(Self::Uniform, Self::Explicit)
    }
}

/// What the host container needs to configure its scrollable area
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSummary {
    pub count: usize,
    pub is_infinite: bool,
    pub content_size: Size,
    pub content_inset: EdgeInsets,
    pub validity_rect: Rect,
    pub padding: AroundInsets,
}

/// Pre-computed grid geometry
#[derive(Debug, Clone)]
pub struct ViewMatrix {
    is_infinite: bool,
    columns: Columns,
    rows: Vec<Vec<RowMetric>>,
    viewport_size: Option<Size>,
    frame: Rect,
    padding: Arc<dyn PaddingCalculator>,
    around_insets: AroundInsets,
    validity_rect: Rect,
    content_size: Size,
    content_inset: EdgeInsets,
}

impl Default for ViewMatrix {
    fn default() -> Self {
        Self::new(None, Vec::new(), Rect::ZERO, Size::ZERO, None, false)
    }
}

impl ViewMatrix {
    /// Build a matrix using the default [`PaddingPolicy`].
    ///
    /// # Arguments
    /// * `columns` - Per-section column metrics, `None` for uniform paged sections
    /// * `rows` - Row metrics per section
    /// * `frame` - Reference frame (one page and its offset from the viewport origin)
    /// * `content_size` - Declared size of the real content
    /// * `viewport_size` - Size of the visible viewport, if known
    /// * `is_infinite` - Whether horizontal scrolling wraps around
    pub fn new(
        columns: Option<Vec<ColumnMetric>>,
        rows: Vec<Vec<RowMetric>>,
        frame: Rect,
        content_size: Size,
        viewport_size: Option<Size>,
        is_infinite: bool,
    ) -> Self {
        Self::with_padding(
            Arc::new(PaddingPolicy::default()),
            columns,
            rows,
            frame,
            content_size,
            viewport_size,
            is_infinite,
        )
    }

    /// Build a matrix with a custom padding calculator.
    ///
    /// The calculator is only consulted in infinite mode, and is kept so that
    /// [`with_rows`](Self::with_rows) and [`resized`](Self::resized) reuse it.
    #[allow(clippy::too_many_arguments)]
    pub fn with_padding(
        padding: Arc<dyn PaddingCalculator>,
        columns: Option<Vec<ColumnMetric>>,
        rows: Vec<Vec<RowMetric>>,
        frame: Rect,
        content_size: Size,
        viewport_size: Option<Size>,
        is_infinite: bool,
    ) -> Self {
        Self::build(
            padding,
            columns.into(),
            rows,
            frame,
            content_size,
            viewport_size,
            is_infinite,
        )
    }

    /// Rebuild with new rows, keeping this matrix's columns, infinite flag and
    /// padding calculator.
    pub fn with_rows(
        &self,
        rows: Vec<Vec<RowMetric>>,
        frame: Rect,
        content_size: Size,
        viewport_size: Option<Size>,
    ) -> Self {
        Self::build(
            Arc::clone(&self.padding),
            self.columns.clone(),
            rows,
            frame,
            content_size,
            viewport_size,
            self.is_infinite,
        )
    }

    /// Rebuild for a new frame and viewport (resize, rotation), keeping this
    /// matrix's rows. `columns` replaces the column metrics when given.
    pub fn resized(
        &self,
        columns: Option<Vec<ColumnMetric>>,
        frame: Rect,
        content_size: Size,
        viewport_size: Option<Size>,
    ) -> Self {
        let columns = columns.map_or_else(|| self.columns.clone(), Columns::Explicit);
        Self::build(
            Arc::clone(&self.padding),
            columns,
            self.rows.clone(),
            frame,
            content_size,
            viewport_size,
            self.is_infinite,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        padding: Arc<dyn PaddingCalculator>,
        columns: Columns,
        rows: Vec<Vec<RowMetric>>,
        frame: Rect,
        declared_size: Size,
        viewport_size: Option<Size>,
        is_infinite: bool,
    ) -> Self {
        let parent_size = viewport_size.unwrap_or(Size::ZERO);

        let (around_insets, validity_rect, content_size, content_inset) = if is_infinite {
            let insets = padding.compute_padding(parent_size, frame);
            let all_width = insets.total() + frame.width;
            (
                insets,
                Rect::from_origin_size(Point::new(insets.left - frame.min_x(), 0.0), declared_size),
                Size::new(declared_size.width + all_width, declared_size.height),
                EdgeInsets {
                    top: -frame.min_y(),
                    left: -insets.left,
                    bottom: -parent_size.height + frame.max_y(),
                    right: -insets.right,
                },
            )
        } else {
            (
                AroundInsets::ZERO,
                Rect::from_origin_size(Point::ZERO, declared_size),
                declared_size,
                EdgeInsets {
                    top: -frame.min_y(),
                    left: -frame.min_x(),
                    bottom: -parent_size.height + frame.max_y(),
                    right: -parent_size.width + frame.max_x(),
                },
            )
        };

        debug!(
            sections = rows.len(),
            infinite = is_infinite,
            uniform = matches!(columns, Columns::Uniform),
            padding_left = around_insets.left,
            padding_right = around_insets.right,
            content_width = content_size.width,
            content_height = content_size.height,
            "built view matrix"
        );

        Self {
            is_infinite,
            columns,
            rows,
            viewport_size,
            frame,
            padding,
            around_insets,
            validity_rect,
            content_size,
            content_inset,
        }
    }

    /// Number of sections
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_infinite(&self) -> bool {
        self.is_infinite
    }

    /// Real (non-padded) content area
    pub fn validity_rect(&self) -> Rect {
        self.validity_rect
    }

    /// Scrollable content size, padding included
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Edge insets for the host scroll container
    pub fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    pub fn around_insets(&self) -> AroundInsets {
        self.around_insets
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport_size
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<RowMetric>] {
        &self.rows
    }

    pub fn summary(&self) -> MatrixSummary {
        MatrixSummary {
            count: self.count(),
            is_infinite: self.is_infinite,
            content_size: self.content_size,
            content_inset: self.content_inset,
            validity_rect: self.validity_rect,
            padding: self.around_insets,
        }
    }

    /// Convert a horizontal offset computed against `matrix` into the equivalent
    /// offset for this matrix, keeping the same real content under the viewport.
    pub fn convert(&self, offset_x: f32, matrix: &ViewMatrix) -> f32 {
        let old_frame_width = matrix.frame.width;
        let old_width = matrix.content_size.width;

        let converted = if old_width <= 0.0 {
            offset_x
        } else if !self.is_infinite {
            self.content_size.width * offset_x / old_width
        } else if old_frame_width <= 0.0 || self.frame.width <= 0.0 {
            offset_x
        } else {
            let old_left_scale = matrix.around_insets.left / old_frame_width;
            let old_all_scale = (matrix.around_insets.total() + old_frame_width) / old_frame_width;

            let left_scale = self.around_insets.left / self.frame.width;
            let diff_scale = left_scale - old_left_scale;

            let new_width = self.validity_rect.width + self.frame.width * old_all_scale;
            new_width * offset_x / old_width + self.frame.width * diff_scale
        };

        trace!(from = offset_x, to = converted, "converted scroll offset");
        converted
    }

    fn rows_for_section(&self, section: isize) -> &[RowMetric] {
        usize::try_from(section)
            .ok()
            .and_then(|s| self.rows.get(s))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn row_metric(&self, index_path: IndexPath) -> RowMetric {
        self.rows_for_section(index_path.section)
            .get(index_path.row)
            .copied()
            .unwrap_or_default()
    }

    /// Horizontal shift applied to a virtual section folded onto the real table
    fn section_x_offset(&self, section: isize) -> f32 {
        let Columns::Explicit(columns) = &self.columns else {
            return 0.0;
        };

        if section < 0 {
            -self.validity_rect.width
        } else if section.unsigned_abs() >= columns.len() {
            self.validity_rect.width
        } else {
            0.0
        }
    }

    /// Column metric for a section, zero width where no column exists
    fn column_metric(&self, section: isize) -> ColumnMetric {
        self.lookup_column(section)
            .unwrap_or_else(|| ColumnMetric::new(self.section_x_offset(section), 0.0))
    }

    /// Column metric for a section that has one, shifted for wrapped copies
    fn lookup_column(&self, section: isize) -> Option<ColumnMetric> {
        match &self.columns {
            Columns::Explicit(columns) => {
                // Only infinite layouts have wrapped copies to fold onto
                let real = if self.is_infinite {
                    fold_section(section, columns.len())
                } else {
                    usize::try_from(section).ok()
                };
                let mut column = real.and_then(|s| columns.get(s)).copied()?;
                column.x += self.section_x_offset(section);
                Some(column)
            }
            Columns::Uniform if self.frame.width > 0.0 => Some(ColumnMetric::new(
                self.frame.width * section as f32,
                self.frame.width,
            )),
            Columns::Uniform => None,
        }
    }

    /// Map a resolved (possibly virtual) section onto a real one.
    ///
    /// Infinite layouts wrap around: the left padding resolves to the last
    /// sections and the right padding to the first ones.
    fn real_section(&self, section: isize) -> isize {
        if self.is_infinite {
            if let Ok(count) = isize::try_from(self.count()) {
                if count > 0 {
                    return section.rem_euclid(count);
                }
            }
        }
        section.saturating_abs()
    }

    /// Get the section under `point`, padding already removed.
    ///
    /// Points in the left/right padding resolve to virtual sections below 0 or
    /// at/after the real section count.
    #[allow(clippy::cast_possible_truncation)]
    fn section_index(&self, point: Point) -> isize {
        let Columns::Explicit(columns) = &self.columns else {
            if self.frame.width <= 0.0 {
                return 0;
            }
            return (point.x / self.frame.width).floor() as isize;
        };

        let Ok(count) = isize::try_from(columns.len()) else {
            return 0;
        };
        let adjust = if point.x < 0.0 {
            count
        } else if point.x >= self.validity_rect.width {
            -count
        } else {
            0
        };

        let x = point.x + self.section_x_offset(adjust);
        let index = columns.partition_point(|column| column.max_x() <= x);
        match columns.get(index) {
            Some(column) if column.contains(x) => {
                isize::try_from(index).map_or(0, |index| index - adjust)
            }
            _ => 0,
        }
    }

    /// Find the first row whose bottom edge is below `point.y` (binary search).
    /// Returns 0 when no row qualifies.
    fn row_index(&self, point: Point, section: isize) -> usize {
        let rows = self.rows_for_section(section);
        let index = rows.partition_point(|row| row.max_y() <= point.y);
        if index < rows.len() {
            index
        } else {
            0
        }
    }

    /// Get the cell rectangle in content coordinates.
    ///
    /// Out-of-range sections or rows give a zero-height rectangle, which callers
    /// treat as "no geometry".
    pub fn rect(&self, index_path: IndexPath, threshold: Threshold) -> Rect {
        let rect = Rect::ZERO
            .with_row(self.row_metric(index_path))
            .with_column(self.column_metric(index_path.section))
            .offset_x(self.around_insets.left);

        match threshold {
            Threshold::Below => rect.offset_x(-self.validity_rect.width),
            Threshold::Above => rect.offset_x(self.validity_rect.width),
            Threshold::In => rect,
        }
    }

    /// Hit test a content-coordinate point
    pub fn index_path(&self, point: Point) -> IndexPath {
        let point = Point::new(point.x - self.around_insets.left, point.y);
        let section = self.real_section(self.section_index(point));
        let row = self.row_index(point, section);
        IndexPath::new(section, row)
    }

    /// Sections intersecting the viewport when scrolled to `point`.
    ///
    /// Sections are scanned left to right from the one under the viewport's
    /// left edge and the scan stops at the first section starting past the
    /// right edge. Collapsed (zero-width) sections inside the viewport count. In infinite mode the
    /// result may contain virtual sections (negative or past the last one).
    pub fn visible_sections(&self, point: Point) -> Vec<isize> {
        let Some(viewport_size) = self.viewport_size else {
            return Vec::new();
        };

        let visible_rect = Rect::from_origin_size(
            Point::new(point.x - self.around_insets.left, 0.0),
            viewport_size,
        );
        if visible_rect.is_empty() {
            return Vec::new();
        }
        let start = self.section_index(visible_rect.origin());

        let mut sections = Vec::new();
        for offset in 0..self.count() {
            let Ok(offset) = isize::try_from(offset) else {
                break;
            };
            let section = start.saturating_add(offset);
            let Some(column) = self.lookup_column(section) else {
                break;
            };

            if !column.overlaps(visible_rect.min_x(), visible_rect.max_x()) {
                break;
            }
            sections.push(section);
        }
        sections
    }

    /// Rows of `section` intersecting the viewport when scrolled to `point`.
    ///
    /// Hidden (zero-height) rows inside the viewport are included.
    pub fn visible_rows(&self, point: Point, section: isize) -> Vec<usize> {
        let Some(viewport_size) = self.viewport_size else {
            return Vec::new();
        };

        let visible_rect = Rect::from_origin_size(Point::new(0.0, point.y), viewport_size);
        if visible_rect.is_empty() {
            return Vec::new();
        }
        let real_section = if self.is_infinite {
            self.real_section(section)
        } else {
            section
        };

        let (min_y, max_y) = (visible_rect.min_y(), visible_rect.max_y());
        let start = self.row_index(visible_rect.origin(), real_section);

        self.rows_for_section(real_section)
            .iter()
            .enumerate()
            .skip(start)
            .take_while(|(_, row)| row.y < max_y)
            .filter(|(_, row)| row.overlaps(min_y, max_y))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Fold a virtual section at most one table length out of range back onto the
/// real column table.
fn fold_section(section: isize, len: usize) -> Option<usize> {
    let count = isize::try_from(len).ok()?;
    let folded = if section < 0 {
        section + count
    } else if section >= count {
        section - count
    } else {
        section
    };
    usize::try_from(folded).ok().filter(|&s| s < len)
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
    use super::*;

    fn paged_rows(sections: usize, rows: usize, height: f32) -> Vec<Vec<RowMetric>> {
        (0..sections)
            .map(|_| RowMetric::stack(&vec![height; rows]))
            .collect()
    }

    /// 3 sections of 100 x 2 rows of 50
    fn small_matrix(is_infinite: bool) -> ViewMatrix {
        ViewMatrix::with_padding(
            Arc::new(PaddingPolicy::Fixed {
                left: 50.0,
                right: 50.0,
            }),
            Some(ColumnMetric::stack(&[100.0, 100.0, 100.0])),
            paged_rows(3, 2, 50.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Size::new(300.0, 100.0),
            Some(Size::new(100.0, 100.0)),
            is_infinite,
        )
    }

    #[test]
    fn test_default_is_empty() {
        let matrix = ViewMatrix::default();
        assert_eq!(matrix.count(), 0);
        assert!(!matrix.is_infinite());
        assert_eq!(matrix.content_size(), Size::ZERO);
        assert!(matrix.visible_sections(Point::ZERO).is_empty());
        assert_eq!(matrix.index_path(Point::new(10.0, 10.0)), IndexPath::new(0, 0));
    }

    #[test]
    fn test_finite_construction() {
        let matrix = small_matrix(false);
        assert_eq!(matrix.count(), 3);
        assert_eq!(matrix.content_size(), Size::new(300.0, 100.0));
        assert_eq!(matrix.validity_rect(), Rect::new(0.0, 0.0, 300.0, 100.0));
        assert_eq!(matrix.around_insets(), AroundInsets::ZERO);
        assert_eq!(
            matrix.content_inset(),
            EdgeInsets {
                top: 0.0,
                left: 0.0,
                bottom: 0.0,
                right: 0.0
            }
        );
    }

    #[test]
    fn test_infinite_construction() {
        let matrix = small_matrix(true);
        assert_eq!(matrix.content_size(), Size::new(500.0, 100.0));
        assert_eq!(matrix.validity_rect(), Rect::new(50.0, 0.0, 300.0, 100.0));
        assert_eq!(matrix.content_inset().left, -50.0);
        assert_eq!(matrix.content_inset().right, -50.0);
    }

    #[test]
    fn test_frame_offset_moves_validity_origin() {
        let matrix = ViewMatrix::with_padding(
            Arc::new(PaddingPolicy::Fixed {
                left: 100.0,
                right: 100.0,
            }),
            None,
            paged_rows(2, 1, 10.0),
            Rect::new(20.0, 10.0, 100.0, 80.0),
            Size::new(200.0, 80.0),
            Some(Size::new(140.0, 100.0)),
            true,
        );
        assert_eq!(matrix.validity_rect().x, 80.0);
        assert_eq!(matrix.content_inset().top, -10.0);
        assert_eq!(matrix.content_inset().bottom, -10.0);
    }

    #[test]
    fn test_rect_and_hit_test() {
        let matrix = small_matrix(false);
        assert_eq!(
            matrix.rect(IndexPath::new(1, 1), Threshold::In),
            Rect::new(100.0, 50.0, 100.0, 50.0)
        );
        assert_eq!(matrix.index_path(Point::new(150.0, 60.0)), IndexPath::new(1, 1));
    }

    #[test]
    fn test_rect_out_of_range_is_empty() {
        let matrix = small_matrix(false);
        assert!(matrix.rect(IndexPath::new(1, 7), Threshold::In).is_empty());
        assert!(matrix.rect(IndexPath::new(9, 0), Threshold::In).is_empty());
        assert!(matrix.rect(IndexPath::new(-4, 0), Threshold::In).is_empty());
    }

    #[test]
    fn test_infinite_thresholds() {
        let matrix = small_matrix(true);
        let index_path = IndexPath::new(0, 0);
        assert_eq!(matrix.rect(index_path, Threshold::In).x, 50.0);
        assert_eq!(matrix.rect(index_path, Threshold::Above).x, 350.0);
        assert_eq!(matrix.rect(index_path, Threshold::Below).x, -250.0);
    }

    #[test]
    fn test_infinite_hit_test_in_padding() {
        let matrix = small_matrix(true);
        // Left padding shows the last section
        assert_eq!(matrix.index_path(Point::new(20.0, 10.0)), IndexPath::new(2, 0));
        // Right padding shows the first section
        assert_eq!(matrix.index_path(Point::new(360.0, 60.0)), IndexPath::new(0, 1));
        assert_eq!(matrix.index_path(Point::new(60.0, 10.0)), IndexPath::new(0, 0));
    }

    #[test]
    fn test_virtual_section_index() {
        let matrix = small_matrix(true);
        assert_eq!(matrix.section_index(Point::new(-30.0, 0.0)), -1);
        assert_eq!(matrix.section_index(Point::new(310.0, 0.0)), 3);
        assert_eq!(matrix.section_index(Point::new(150.0, 0.0)), 1);
    }

    #[test]
    fn test_visible_sections_wrap_left() {
        let matrix = small_matrix(true);
        assert_eq!(matrix.visible_sections(Point::new(20.0, 0.0)), vec![-1, 0]);
    }

    #[test]
    fn test_visible_rows_of_virtual_section() {
        let matrix = small_matrix(true);
        assert_eq!(matrix.visible_rows(Point::new(0.0, 25.0), -1), vec![0, 1]);
    }

    #[test]
    fn test_visible_queries_need_viewport() {
        let matrix = ViewMatrix::new(
            Some(ColumnMetric::stack(&[100.0])),
            paged_rows(1, 3, 20.0),
            Rect::new(0.0, 0.0, 100.0, 60.0),
            Size::new(100.0, 60.0),
            None,
            false,
        );
        assert!(matrix.visible_sections(Point::ZERO).is_empty());
        assert!(matrix.visible_rows(Point::ZERO, 0).is_empty());
    }

    #[test]
    fn test_row_index_beyond_last_row() {
        let matrix = small_matrix(false);
        assert_eq!(matrix.row_index(Point::new(0.0, 500.0), 0), 0);
        assert_eq!(matrix.row_index(Point::new(0.0, 49.9), 0), 0);
        assert_eq!(matrix.row_index(Point::new(0.0, 50.0), 0), 1);
        assert_eq!(matrix.row_index(Point::new(0.0, 10.0), 8), 0);
    }

    #[test]
    fn test_uniform_sections_are_unbounded() {
        let matrix = ViewMatrix::new(
            None,
            paged_rows(2, 1, 10.0),
            Rect::new(0.0, 0.0, 320.0, 480.0),
            Size::new(640.0, 480.0),
            Some(Size::new(320.0, 480.0)),
            false,
        );
        assert_eq!(matrix.section_index(Point::new(-1.0, 0.0)), -1);
        assert_eq!(matrix.section_index(Point::new(3200.0, 0.0)), 10);
        assert_eq!(matrix.column_metric(4), ColumnMetric::new(1280.0, 320.0));
    }

    #[test]
    fn test_uniform_zero_frame_width() {
        let matrix = ViewMatrix::new(
            None,
            paged_rows(2, 1, 10.0),
            Rect::ZERO,
            Size::ZERO,
            None,
            false,
        );
        assert_eq!(matrix.section_index(Point::new(50.0, 0.0)), 0);
    }

    #[test]
    fn test_fold_section() {
        assert_eq!(fold_section(-1, 3), Some(2));
        assert_eq!(fold_section(3, 3), Some(0));
        assert_eq!(fold_section(1, 3), Some(1));
        assert_eq!(fold_section(-4, 3), None);
        assert_eq!(fold_section(6, 3), None);
        assert_eq!(fold_section(0, 0), None);
    }

    #[test]
    fn test_convert_finite_rescales() {
        let old = small_matrix(false);
        let new = old.resized(
            Some(ColumnMetric::stack(&[200.0, 200.0, 200.0])),
            Rect::new(0.0, 0.0, 200.0, 100.0),
            Size::new(600.0, 100.0),
            Some(Size::new(200.0, 100.0)),
        );
        assert_eq!(new.convert(100.0, &old), 200.0);
    }

    #[test]
    fn test_convert_identity() {
        let matrix = small_matrix(true);
        assert_eq!(matrix.convert(150.0, &matrix), 150.0);
        let finite = small_matrix(false);
        assert_eq!(finite.convert(150.0, &finite), 150.0);
    }

    #[test]
    fn test_convert_zero_width_source() {
        let empty = ViewMatrix::default();
        let matrix = small_matrix(false);
        assert_eq!(matrix.convert(42.0, &empty), 42.0);
    }

    #[test]
    fn test_convert_infinite_zero_frame_width() {
        let old = ViewMatrix::new(
            None,
            paged_rows(1, 1, 10.0),
            Rect::new(0.0, 0.0, 0.0, 10.0),
            Size::new(100.0, 10.0),
            Some(Size::new(100.0, 10.0)),
            true,
        );
        assert_eq!(old.content_size().width, 100.0);
        assert_eq!(small_matrix(true).convert(42.0, &old), 42.0);
    }

    #[test]
    fn test_with_rows_keeps_columns_and_padding() {
        let matrix = small_matrix(true);
        let rebuilt = matrix.with_rows(
            paged_rows(3, 4, 25.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Size::new(300.0, 100.0),
            Some(Size::new(100.0, 100.0)),
        );
        assert!(rebuilt.is_infinite());
        assert_eq!(rebuilt.columns(), matrix.columns());
        assert_eq!(rebuilt.around_insets(), AroundInsets::new(50.0, 50.0));
        assert_eq!(rebuilt.rows()[0].len(), 4);
    }
}

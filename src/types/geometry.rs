use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in content coordinates (y grows downward)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// True when the rectangle has no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Strict overlap test.
    ///
    /// Empty rectangles never intersect anything, and rectangles that only
    /// share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Replace the horizontal extent with a column metric
    pub fn with_column(mut self, column: ColumnMetric) -> Self {
        self.x = column.x;
        self.width = column.width;
        self
    }

    /// Replace the vertical extent with a row metric
    pub fn with_row(mut self, row: RowMetric) -> Self {
        self.y = row.y;
        self.height = row.height;
        self
    }

    pub fn offset_x(mut self, dx: f32) -> Self {
        self.x += dx;
        self
    }
}

/// Insets applied to the host scroll container's edges.
///
/// Negative values extend the scrollable area beyond the content bounds.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

/// Horizontal extent of one section (column)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct ColumnMetric {
    pub x: f32,
    pub width: f32,
}

impl ColumnMetric {
    pub fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Half-open containment `[x, x + width)`
    pub fn contains(&self, x: f32) -> bool {
        self.x <= x && self.max_x() > x
    }

    /// Whether the column lies within `[min_x, max_x)`.
    ///
    /// A zero-width (collapsed) column counts when its x is inside the range.
    pub fn overlaps(&self, min_x: f32, max_x: f32) -> bool {
        spans(self.x, self.width, min_x, max_x)
    }

    /// Stack widths left to right starting at x = 0.
    pub fn stack(widths: &[f32]) -> Vec<Self> {
        let mut x = 0.0;
        widths
            .iter()
            .map(|&width| {
                let metric = Self::new(x, width);
                x += width;
                metric
            })
            .collect()
    }
}

/// Vertical extent of one row within its section
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct RowMetric {
    pub y: f32,
    pub height: f32,
}

impl RowMetric {
    pub fn new(y: f32, height: f32) -> Self {
        Self { y, height }
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the row lies within `[min_y, max_y)`.
    ///
    /// A zero-height (hidden) row counts when its y is inside the range.
    pub fn overlaps(&self, min_y: f32, max_y: f32) -> bool {
        spans(self.y, self.height, min_y, max_y)
    }

    /// Stack heights top to bottom starting at y = 0.
    pub fn stack(heights: &[f32]) -> Vec<Self> {
        let mut y = 0.0;
        heights
            .iter()
            .map(|&height| {
                let metric = Self::new(y, height);
                y += height;
                metric
            })
            .collect()
    }
}

/// One-axis overlap of `[start, start + extent)` with `[min, max)`
fn spans(start: f32, extent: f32, min: f32, max: f32) -> bool {
    if extent > 0.0 {
        start < max && start + extent > min
    } else {
        start >= min && start < max
    }
}

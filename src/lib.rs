//! gridview - geometry engine for section/row grids
//!
//! Maps between grid addresses, content rectangles and scroll offsets for a
//! horizontally paged grid:
//! - Explicit column metrics or uniform pages one frame wide
//! - Per-section row metrics with hit testing and visible-range queries
//! - Infinite horizontal scrolling through padding and section folding
//! - Scroll offset re-basing when the layout is rebuilt
//!
//! # Usage
//!
//! ```
//! use gridview::layout::ViewMatrix;
//! use gridview::types::{ColumnMetric, IndexPath, Point, Rect, RowMetric, Size, Threshold};
//!
//! let matrix = ViewMatrix::new(
//!     Some(ColumnMetric::stack(&[100.0, 100.0, 100.0])),
//!     vec![RowMetric::stack(&[50.0, 50.0]); 3],
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     Size::new(300.0, 100.0),
//!     None,
//!     false,
//! );
//! assert_eq!(matrix.index_path(Point::new(150.0, 60.0)), IndexPath::new(1, 1));
//! assert_eq!(
//!     matrix.rect(IndexPath::new(1, 1), Threshold::In),
//!     Rect::new(100.0, 50.0, 100.0, 50.0)
//! );
//! ```

pub mod bindings;
pub mod config;
pub mod error;
pub mod layout;
pub mod types;

use wasm_bindgen::prelude::*;

use error::GridViewError;

pub use bindings::GridMatrix;
pub use config::LayoutConfig;
pub use layout::{ViewMatrix, Viewport};

/// Validate a JSON layout description and return the host-facing summary
/// (content size, insets, validity rect, padding) as JSON
///
/// # Errors
/// Returns an error if the description is malformed or fails validation.
#[wasm_bindgen(js_name = layoutSummary)]
pub fn layout_summary(json: &str) -> Result<String, JsValue> {
    let matrix = LayoutConfig::matrix_from_json(json)?;
    let summary = serde_json::to_string(&matrix.summary()).map_err(GridViewError::from)?;
    Ok(summary)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

//! Layout engine for mapping between grid addresses, content rectangles and
//! scroll offsets.
//!
//! This module handles:
//! - Building immutable layout snapshots from column and row metrics
//! - Hit testing points to (section, row) addresses
//! - Visible section/row ranges for a scroll position
//! - Infinite horizontal scrolling via padding and section folding
//! - Re-basing scroll offsets when the layout is rebuilt

mod matrix;
mod padding;
mod viewport;

pub use matrix::{Columns, MatrixSummary, ViewMatrix};
pub use padding::{AroundInsets, PaddingCalculator, PaddingPolicy};
pub use viewport::Viewport;

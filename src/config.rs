//! JSON layout descriptions.
//!
//! A [`LayoutConfig`] carries everything needed to build a [`ViewMatrix`].
//! Columns and rows may be given either as explicit metrics or as plain
//! sizes that are stacked from 0:
//!
//! ```json
//! {
//!   "columns": [100, 100, 100],
//!   "rows": [[50, 50], [50, 50], [{"y": 0, "height": 100}]],
//!   "frame": {"x": 0, "y": 0, "width": 100, "height": 100},
//!   "viewport": {"width": 100, "height": 100},
//!   "infinite": true,
//!   "padding": {"kind": "fixed", "left": 50, "right": 50}
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{GridViewError, Result};
use crate::layout::{PaddingPolicy, ViewMatrix};
use crate::types::{ColumnMetric, Rect, RowMetric, Size};

/// Column layout as written in JSON
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ColumnsConfig {
    Widths(Vec<f32>),
    Metrics(Vec<ColumnMetric>),
}

impl ColumnsConfig {
    pub fn metrics(&self) -> Vec<ColumnMetric> {
        match self {
            Self::Widths(widths) => ColumnMetric::stack(widths),
            Self::Metrics(metrics) => metrics.clone(),
        }
    }
}

/// Rows of one section as written in JSON
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum SectionRows {
    Heights(Vec<f32>),
    Metrics(Vec<RowMetric>),
}

impl SectionRows {
    pub fn metrics(&self) -> Vec<RowMetric> {
        match self {
            Self::Heights(heights) => RowMetric::stack(heights),
            Self::Metrics(metrics) => metrics.clone(),
        }
    }
}

/// Inputs for building a [`ViewMatrix`]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Absent for uniform sections one frame wide
    #[serde(default)]
    pub columns: Option<ColumnsConfig>,
    #[serde(default)]
    pub rows: Vec<SectionRows>,
    pub frame: Rect,
    /// Derived from the metrics when absent
    #[serde(default)]
    pub content_size: Option<Size>,
    #[serde(default)]
    pub viewport: Option<Size>,
    #[serde(default)]
    pub infinite: bool,
    #[serde(default)]
    pub padding: PaddingPolicy,
}

impl LayoutConfig {
    /// Parse a layout description from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn column_metrics(&self) -> Option<Vec<ColumnMetric>> {
        self.columns.as_ref().map(ColumnsConfig::metrics)
    }

    pub fn row_metrics(&self) -> Vec<Vec<RowMetric>> {
        self.rows.iter().map(SectionRows::metrics).collect()
    }

    /// Declared content size, or the extent of the metrics.
    ///
    /// Uniform sections are one frame wide each; the height is the tallest
    /// section's last row.
    pub fn content_size(&self) -> Size {
        if let Some(size) = self.content_size {
            return size;
        }

        let rows = self.row_metrics();
        let width = match self.column_metrics() {
            Some(columns) => columns.last().map_or(0.0, ColumnMetric::max_x),
            None => self.frame.width * rows.len() as f32,
        };
        let height = rows
            .iter()
            .filter_map(|section| section.last().map(RowMetric::max_y))
            .fold(0.0, f32::max);
        Size::new(width, height)
    }

    /// Check the metric ordering the layout engine relies on.
    ///
    /// # Errors
    /// Returns the first problem found: an unusable frame, a negative or
    /// non-finite extent, or a metric overlapping its predecessor.
    pub fn validate(&self) -> Result<()> {
        let frame = self.frame;
        if ![frame.x, frame.y, frame.width, frame.height]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(reject(GridViewError::Frame("non-finite value".to_string())));
        }
        if frame.width < 0.0 || frame.height < 0.0 {
            return Err(reject(GridViewError::Frame("negative size".to_string())));
        }
        if self.columns.is_none() && self.infinite && frame.width <= 0.0 {
            return Err(reject(GridViewError::Frame(
                "uniform infinite layout needs a positive width".to_string(),
            )));
        }

        if let Some(columns) = self.column_metrics() {
            validate_columns(&columns).map_err(reject)?;
        }
        for (section, rows) in self.row_metrics().iter().enumerate() {
            validate_rows(section, rows).map_err(reject)?;
        }
        Ok(())
    }

    /// Build the matrix without validating
    pub fn build(&self) -> ViewMatrix {
        ViewMatrix::with_padding(
            Arc::new(self.padding),
            self.column_metrics(),
            self.row_metrics(),
            self.frame,
            self.content_size(),
            self.viewport,
            self.infinite,
        )
    }

    /// Parse, validate and build in one step
    pub fn matrix_from_json(json: &str) -> Result<ViewMatrix> {
        let config = Self::from_json(json)?;
        config.validate()?;
        Ok(config.build())
    }
}

fn reject(err: GridViewError) -> GridViewError {
    warn!(error = %err, "rejected layout description");
    err
}

fn validate_columns(columns: &[ColumnMetric]) -> Result<()> {
    let mut previous: Option<&ColumnMetric> = None;
    for (index, column) in columns.iter().enumerate() {
        if !(column.x.is_finite() && column.width.is_finite()) {
            return Err(GridViewError::Column {
                index,
                reason: "non-finite value",
            });
        }
        if column.width < 0.0 {
            return Err(GridViewError::Column {
                index,
                reason: "negative width",
            });
        }
        if previous.is_some_and(|p| column.x < p.max_x()) {
            return Err(GridViewError::Column {
                index,
                reason: "overlaps previous column",
            });
        }
        previous = Some(column);
    }
    Ok(())
}

fn validate_rows(section: usize, rows: &[RowMetric]) -> Result<()> {
    let mut previous: Option<&RowMetric> = None;
    for (row, metric) in rows.iter().enumerate() {
        if !(metric.y.is_finite() && metric.height.is_finite()) {
            return Err(GridViewError::Row {
                section,
                row,
                reason: "non-finite value",
            });
        }
        if metric.height < 0.0 {
            return Err(GridViewError::Row {
                section,
                row,
                reason: "negative height",
            });
        }
        if previous.is_some_and(|p| metric.y < p.max_y()) {
            return Err(GridViewError::Row {
                section,
                row,
                reason: "overlaps previous row",
            });
        }
        previous = Some(metric);
    }
    Ok(())
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

    const INFINITE: &str = r#"{
        "columns": [100, 100, 100],
        "rows": [[50, 50], [50, 50], [50, 50]],
        "frame": {"x": 0, "y": 0, "width": 100, "height": 100},
        "viewport": {"width": 100, "height": 100},
        "infinite": true,
        "padding": {"kind": "fixed", "left": 50, "right": 50}
    }"#;

    #[test]
    fn test_parse_plain_sizes() {
        let config = LayoutConfig::from_json(INFINITE).unwrap();
        assert!(config.infinite);
        assert_eq!(config.column_metrics().unwrap()[2], ColumnMetric::new(200.0, 100.0));
        assert_eq!(config.row_metrics()[1][1], RowMetric::new(50.0, 50.0));
        assert_eq!(config.content_size(), Size::new(300.0, 100.0));
    }

    #[test]
    fn test_parse_explicit_metrics() {
        let json = r#"{
            "columns": [{"x": 0, "width": 80}, {"x": 80, "width": 120}],
            "rows": [[{"y": 0, "height": 30}], []],
            "frame": {"x": 0, "y": 0, "width": 200, "height": 30},
            "contentSize": {"width": 200, "height": 30}
        }"#;
        let config = LayoutConfig::from_json(json).unwrap();
        assert!(!config.infinite);
        assert_eq!(config.padding, PaddingPolicy::Viewport);
        assert_eq!(config.column_metrics().unwrap()[1].width, 120.0);
        assert!(config.row_metrics()[1].is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_uniform_content_size() {
        let json = r#"{
            "rows": [[40, 40], [40]],
            "frame": {"x": 0, "y": 0, "width": 320, "height": 480}
        }"#;
        let config = LayoutConfig::from_json(json).unwrap();
        assert!(config.column_metrics().is_none());
        assert_eq!(config.content_size(), Size::new(640.0, 80.0));
    }

    #[test]
    fn test_matrix_from_json() {
        let matrix = LayoutConfig::matrix_from_json(INFINITE).unwrap();
        assert_eq!(matrix.count(), 3);
        assert_eq!(matrix.content_size().width, 500.0);
        assert_eq!(matrix.validity_rect().x, 50.0);
    }

    #[test]
    fn test_rejects_overlapping_columns() {
        let json = r#"{
            "columns": [{"x": 0, "width": 100}, {"x": 50, "width": 100}],
            "rows": [[10], [10]],
            "frame": {"x": 0, "y": 0, "width": 100, "height": 10}
        }"#;
        let err = LayoutConfig::matrix_from_json(json).unwrap_err();
        assert!(matches!(err, GridViewError::Column { index: 1, .. }));
    }

    #[test]
    fn test_rejects_negative_row_height() {
        let json = r#"{
            "rows": [[10, -5]],
            "frame": {"x": 0, "y": 0, "width": 100, "height": 10}
        }"#;
        let err = LayoutConfig::matrix_from_json(json).unwrap_err();
        assert!(matches!(
            err,
            GridViewError::Row {
                section: 0,
                row: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_uniform_infinite_without_width() {
        let json = r#"{
            "rows": [[10]],
            "frame": {"x": 0, "y": 0, "width": 0, "height": 10},
            "infinite": true
        }"#;
        let err = LayoutConfig::matrix_from_json(json).unwrap_err();
        assert!(matches!(err, GridViewError::Frame(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = LayoutConfig::from_json("{\"rows\": 3").unwrap_err();
        assert!(matches!(err, GridViewError::Json(_)));
        assert!(err.to_string().starts_with("JSON:"));
    }
}

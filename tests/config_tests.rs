//! Layout description tests
//!
//! Tests for loading JSON layout descriptions, validation failures and the
//! summary handed to the host container.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::error::GridViewError;
use gridview::layout::{Columns, PaddingPolicy};
use gridview::types::{IndexPath, Point, Rect, Size, Threshold};
use gridview::LayoutConfig;
use test_case::test_case;

const PAGED_INFINITE: &str = include_str!("fixtures/paged_infinite.json");
const EXPLICIT_COLUMNS: &str = include_str!("fixtures/explicit_columns.json");
const FIXED_PADDING: &str = include_str!("fixtures/fixed_padding.json");

#[test]
fn test_explicit_fixture_matches_scenario() {
    let matrix = LayoutConfig::matrix_from_json(EXPLICIT_COLUMNS).unwrap();
    assert_eq!(matrix.content_size(), Size::new(300.0, 100.0));
    assert_eq!(
        matrix.rect(IndexPath::new(1, 1), Threshold::In),
        Rect::new(100.0, 50.0, 100.0, 50.0)
    );
    assert_eq!(matrix.index_path(Point::new(150.0, 60.0)), IndexPath::new(1, 1));
}

#[test]
fn test_fixed_padding_fixture() {
    let config = LayoutConfig::from_json(FIXED_PADDING).unwrap();
    assert_eq!(
        config.padding,
        PaddingPolicy::Fixed {
            left: 50.0,
            right: 50.0
        }
    );
    let matrix = config.build();
    assert_eq!(matrix.content_size().width, 500.0);
    assert_eq!(matrix.validity_rect().x, 50.0);
}

#[test]
fn test_paged_fixture_uses_default_padding() {
    let config = LayoutConfig::from_json(PAGED_INFINITE).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.content_size(), Size::new(1600.0, 480.0));

    let matrix = config.build();
    assert_eq!(matrix.columns(), &Columns::Uniform);
    assert_eq!(matrix.count(), 5);
    assert_eq!(matrix.around_insets().left, 320.0);
}

#[test]
fn test_summary_serializes_camel_case() {
    let matrix = LayoutConfig::matrix_from_json(FIXED_PADDING).unwrap();
    let value = serde_json::to_value(matrix.summary()).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["isInfinite"], true);
    assert_eq!(value["contentSize"]["width"], 500.0);
    assert_eq!(value["validityRect"]["x"], 50.0);
    assert_eq!(value["contentInset"]["left"], -50.0);
}

#[test]
fn test_layout_summary_export() {
    let json = gridview::layout_summary(EXPLICIT_COLUMNS).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["isInfinite"], false);
    assert_eq!(value["padding"]["left"], 0.0);
}

#[test_case(
    r#"{"columns": [{"x": 0, "width": 10}, {"x": 5, "width": 10}], "rows": [], "frame": {"x": 0, "y": 0, "width": 10, "height": 10}}"#
    ; "overlapping columns"
)]
#[test_case(
    r#"{"columns": [10, -1], "rows": [], "frame": {"x": 0, "y": 0, "width": 10, "height": 10}}"#
    ; "negative column width"
)]
fn test_column_errors(json: &str) {
    let err = LayoutConfig::matrix_from_json(json).unwrap_err();
    assert!(matches!(err, GridViewError::Column { index: 1, .. }), "{err}");
}

#[test_case(
    r#"{"rows": [[{"y": 0, "height": 10}, {"y": 5, "height": 10}]], "frame": {"x": 0, "y": 0, "width": 10, "height": 10}}"#
    ; "overlapping rows"
)]
#[test_case(
    r#"{"rows": [[10, -3]], "frame": {"x": 0, "y": 0, "width": 10, "height": 10}}"#
    ; "negative row height"
)]
fn test_row_errors(json: &str) {
    let err = LayoutConfig::matrix_from_json(json).unwrap_err();
    assert!(matches!(err, GridViewError::Row { section: 0, row: 1, .. }), "{err}");
}

#[test_case(r#"{"rows": [], "frame": {"x": 0, "y": 0, "width": -1, "height": 10}}"# ; "negative frame")]
#[test_case(r#"{"rows": [[10]], "frame": {"x": 0, "y": 0, "width": 0, "height": 10}, "infinite": true}"# ; "uniform infinite without width")]
fn test_frame_errors(json: &str) {
    let err = LayoutConfig::matrix_from_json(json).unwrap_err();
    assert!(matches!(err, GridViewError::Frame(_)), "{err}");
}

#[test]
fn test_missing_frame_is_json_error() {
    let err = LayoutConfig::from_json(r#"{"rows": []}"#).unwrap_err();
    assert!(matches!(err, GridViewError::Json(_)));
}

#[test]
fn test_error_messages() {
    let err = GridViewError::Row {
        section: 2,
        row: 4,
        reason: "negative height",
    };
    assert_eq!(err.to_string(), "Invalid row 4 in section 2: negative height");
    assert_eq!(
        GridViewError::Frame("negative size".to_string()).to_string(),
        "Invalid frame: negative size"
    );
}

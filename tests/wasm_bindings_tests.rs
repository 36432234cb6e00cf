//! Browser binding tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use gridview::GridMatrix;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const FIXED_PADDING: &str = include_str!("fixtures/fixed_padding.json");

#[wasm_bindgen_test]
fn test_grid_matrix_from_json() {
    let matrix = GridMatrix::from_json(FIXED_PADDING).unwrap();
    assert_eq!(matrix.count(), 3);
    assert_eq!(matrix.convert(150.0, &matrix), 150.0);
}

#[wasm_bindgen_test]
fn test_grid_matrix_rejects_bad_threshold() {
    let matrix = GridMatrix::from_json(FIXED_PADDING).unwrap();
    assert!(matrix.rect_for(0, 0, Some("sideways".to_string())).is_err());
    assert!(matrix.rect_for(0, 0, Some("above".to_string())).is_ok());
}

#[wasm_bindgen_test]
fn test_grid_matrix_rejects_invalid_layout() {
    let json = r#"{"columns": [10, -1], "rows": [], "frame": {"x": 0, "y": 0, "width": 10, "height": 10}}"#;
    assert!(GridMatrix::from_json(json).is_err());
}

#[wasm_bindgen_test]
fn test_layout_errors_reach_js_as_messages() {
    let json = r#"{"columns": [10, -1], "rows": [], "frame": {"x": 0, "y": 0, "width": 10, "height": 10}}"#;
    let err = gridview::layout_summary(json).unwrap_err();
    assert_eq!(
        err.as_string().as_deref(),
        Some("Invalid column 1: negative width")
    );

    let err = GridMatrix::from_json("{").err().unwrap();
    assert!(err.as_string().unwrap().starts_with("JSON: "));
}

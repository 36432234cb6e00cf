//! Structured error types for gridview.
//!
//! The layout engine itself never fails; these cover loading layout
//! descriptions and the command-line front end.

/// All errors that can occur while loading or querying a layout description.
#[derive(Debug, thiserror::Error)]
pub enum GridViewError {
    /// JSON layout description could not be parsed.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reference frame unusable for the requested mode.
    #[error("Invalid frame: {0}")]
    Frame(String),

    /// Column metrics out of order or malformed.
    #[error("Invalid column {index}: {reason}")]
    Column { index: usize, reason: &'static str },

    /// Row metrics out of order or malformed.
    #[error("Invalid row {row} in section {section}: {reason}")]
    Row {
        section: usize,
        row: usize,
        reason: &'static str,
    },

    /// Bad command-line argument.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridViewError>;

/// Surfaced to JavaScript as the error message string.
impl From<GridViewError> for wasm_bindgen::JsValue {
    fn from(e: GridViewError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

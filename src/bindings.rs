//! JavaScript bindings for hosting the layout engine in a browser scroll
//! container.
//!
//! ```javascript
//! import init, { GridMatrix } from 'gridview';
//! await init();
//! const matrix = GridMatrix.fromJson(layoutJson);
//! scroller.style.width = `${matrix.contentSize().width}px`;
//! const cells = matrix.visibleCells(scroller.scrollLeft, scroller.scrollTop);
//! ```

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::layout::{ViewMatrix, Viewport};
use crate::types::{IndexPath, Point, Threshold};

/// Layout snapshot exposed to JavaScript.
///
/// Rebuild a new instance on every layout change and call `convert` to carry
/// the scroll position across.
#[wasm_bindgen]
pub struct GridMatrix {
    inner: ViewMatrix,
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

fn js_section(section: i32) -> Result<isize, JsValue> {
    isize::try_from(section).map_err(|_| JsValue::from_str(&format!("Section out of range: {section}")))
}

fn js_row(row: u32) -> Result<usize, JsValue> {
    usize::try_from(row).map_err(|_| JsValue::from_str(&format!("Row out of range: {row}")))
}

fn build(config: &LayoutConfig) -> Result<GridMatrix, JsValue> {
    config.validate()?;
    Ok(GridMatrix {
        inner: config.build(),
    })
}

#[wasm_bindgen]
impl GridMatrix {
    /// Create a matrix from a layout description object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GridMatrix, JsValue> {
        console_error_panic_hook::set_once();
        let config: LayoutConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid layout: {e}")))?;
        build(&config)
    }

    /// Create a matrix from a JSON layout description
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<GridMatrix, JsValue> {
        console_error_panic_hook::set_once();
        let config = LayoutConfig::from_json(json)?;
        build(&config)
    }

    /// Number of sections
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    #[wasm_bindgen(js_name = contentSize)]
    pub fn content_size(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.content_size())
    }

    #[wasm_bindgen(js_name = contentInset)]
    pub fn content_inset(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.content_inset())
    }

    pub fn summary(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.summary())
    }

    #[wasm_bindgen(js_name = indexPathAt)]
    pub fn index_path_at(&self, x: f32, y: f32) -> Result<JsValue, JsValue> {
        to_js(&self.inner.index_path(Point::new(x, y)))
    }

    /// Cell rectangle; `threshold` is `in`, `above` or `below`
    #[wasm_bindgen(js_name = rectFor)]
    pub fn rect_for(
        &self,
        section: i32,
        row: u32,
        threshold: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let threshold = match threshold.as_deref() {
            None => Threshold::In,
            Some(s) => Threshold::parse(s)
                .ok_or_else(|| JsValue::from_str(&format!("Unknown threshold: {s}")))?,
        };
        let index_path = IndexPath::new(js_section(section)?, js_row(row)?);
        to_js(&self.inner.rect(index_path, threshold))
    }

    #[wasm_bindgen(js_name = visibleSections)]
    pub fn visible_sections(&self, x: f32, y: f32) -> Result<JsValue, JsValue> {
        to_js(&self.inner.visible_sections(Point::new(x, y)))
    }

    #[wasm_bindgen(js_name = visibleRows)]
    pub fn visible_rows(&self, x: f32, y: f32, section: i32) -> Result<JsValue, JsValue> {
        to_js(&self.inner.visible_rows(Point::new(x, y), js_section(section)?))
    }

    /// Visible cells with their rectangles for a scroll offset
    #[wasm_bindgen(js_name = visibleCells)]
    pub fn visible_cells(&self, scroll_x: f32, scroll_y: f32) -> Result<JsValue, JsValue> {
        let viewport = Viewport {
            scroll_x,
            scroll_y,
            ..Viewport::default()
        };
        to_js(&viewport.visible_cells(&self.inner))
    }

    /// Horizontal offset to use after replacing `previous` with this matrix
    pub fn convert(&self, offset_x: f32, previous: &GridMatrix) -> f32 {
        self.inner.convert(offset_x, &previous.inner)
    }
}

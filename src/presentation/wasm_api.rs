//! WASM API for JavaScript callers.
//! Minimal logic - only a bridge to the application layer.

use wasm_bindgen::prelude::*;

use crate::application::PlotService;

/// Render the embeddable chart document for a field pair.
#[wasm_bindgen(js_name = renderPlotDocument)]
pub fn render_plot_document(x_field: String, y_field: String) -> Result<String, JsValue> {
    PlotService::new()
        .render_document(&x_field, &y_field)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Render the startup document (default column on both axes).
#[wasm_bindgen(js_name = renderDefaultPlotDocument)]
pub fn render_default_plot_document() -> Result<String, JsValue> {
    PlotService::new()
        .render_default_document()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

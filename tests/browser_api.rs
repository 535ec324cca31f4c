#![cfg(target_arch = "wasm32")]

use cars_chart_wasm::presentation::wasm_api::{
    render_default_plot_document, render_plot_document,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn render_document_through_the_js_bridge() {
    let document =
        render_plot_document("Cylinders".to_string(), "Miles_per_Gallon".to_string()).unwrap();
    assert!(document.contains("Cylinders"));
    assert!(document.contains("Miles_per_Gallon"));
}

#[wasm_bindgen_test]
fn default_document_uses_displacement() {
    let document = render_default_plot_document().unwrap();
    assert!(document.contains("Displacement"));
}

#[wasm_bindgen_test]
fn unknown_field_surfaces_as_js_error() {
    assert!(render_plot_document("Horsepower_Typo".to_string(), "Cylinders".to_string()).is_err());
}

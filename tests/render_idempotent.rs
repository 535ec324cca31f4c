use cars_chart_wasm::application::PlotService;
use cars_chart_wasm::domain::dataset::AxisChoice;
use quickcheck_macros::quickcheck;

#[test]
fn identical_inputs_yield_byte_identical_documents() {
    let service = PlotService::new();
    let first = service.render_document("Cylinders", "Displacement").unwrap();
    let second = service.render_document("Cylinders", "Displacement").unwrap();
    assert_eq!(first, second);
}

#[quickcheck]
fn render_is_idempotent_for_any_selection(xi: usize, yi: usize) -> bool {
    let choices = AxisChoice::all();
    let x = choices[xi % choices.len()].column;
    let y = choices[yi % choices.len()].column;

    let service = PlotService::new();
    let first = service.render_document(x, y);
    let second = service.render_document(x, y);
    first.is_ok() && first == second
}

#[test]
fn default_document_equals_explicit_default_selection() {
    let service = PlotService::new();
    assert_eq!(
        service.render_default_document().unwrap(),
        service
            .render_document("Displacement", "Displacement")
            .unwrap()
    );
}

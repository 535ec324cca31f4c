use cars_chart_wasm::application::PlotService;
use cars_chart_wasm::domain::chart::{build_plot_with_theme, PlotSelection, PLOT_HEIGHT, PLOT_TITLE, PLOT_WIDTH};
use cars_chart_wasm::domain::dataset::{
    DatasetSource, FieldCatalog, DEFAULT_AXIS_COLUMN, TOOLTIP_EXTRA_FIELD,
};
use cars_chart_wasm::domain::errors::AppError;

#[test]
fn every_field_pair_builds_a_document_naming_both_fields() {
    let service = PlotService::new();
    let fields: Vec<&str> = service.catalog().field_names().collect();

    for x in &fields {
        for y in &fields {
            let document = service
                .render_document(x, y)
                .unwrap_or_else(|e| panic!("{x}/{y} failed: {e}"));
            assert!(!document.is_empty());
            assert!(document.contains(&format!("\"field\":\"{x}\"")));
            assert!(document.contains(&format!("\"field\":\"{y}\"")));
        }
    }
}

#[test]
fn default_selection_plots_displacement_on_both_axes() {
    let selection = PlotSelection::default();
    assert_eq!(selection.x_field, DEFAULT_AXIS_COLUMN);
    assert_eq!(selection.y_field, DEFAULT_AXIS_COLUMN);

    let spec = build_plot_with_theme(
        &selection,
        &DatasetSource::cars(),
        &FieldCatalog::cars(),
        None,
    )
    .unwrap();
    assert_eq!(spec.encoding.x.field, "Displacement");
    assert_eq!(spec.encoding.y.field, "Displacement");
}

#[test]
fn cylinders_vs_mpg_references_exactly_those_fields_plus_horsepower() {
    let spec = build_plot_with_theme(
        &PlotSelection::new("Cylinders", "Miles_per_Gallon"),
        &DatasetSource::cars(),
        &FieldCatalog::cars(),
        None,
    )
    .unwrap();

    assert_eq!(spec.encoding.x.field, "Cylinders");
    assert_eq!(spec.encoding.y.field, "Miles_per_Gallon");

    let tooltip_fields: Vec<&str> = spec
        .encoding
        .tooltip
        .iter()
        .map(|channel| channel.field.as_str())
        .collect();
    assert_eq!(tooltip_fields, vec!["Cylinders", TOOLTIP_EXTRA_FIELD]);
}

#[test]
fn fixed_title_dimensions_and_interactivity() {
    let spec = build_plot_with_theme(
        &PlotSelection::default(),
        &DatasetSource::cars(),
        &FieldCatalog::cars(),
        None,
    )
    .unwrap();

    assert_eq!(spec.title, PLOT_TITLE);
    assert_eq!(spec.width, PLOT_WIDTH);
    assert_eq!(spec.height, PLOT_HEIGHT);
    // Pan/zoom stays enabled client-side.
    assert_eq!(spec.params.len(), 1);
    assert_eq!(spec.params[0].bind, "scales");
}

#[test]
fn unknown_x_field_is_a_lookup_fault() {
    let service = PlotService::new();
    let err = service
        .render_document("Weight_in_lbs", "Cylinders")
        .unwrap_err();
    assert_eq!(err, AppError::UnknownField("Weight_in_lbs".to_string()));
}

#[test]
fn axis_titles_repeat_the_field_names() {
    let spec = build_plot_with_theme(
        &PlotSelection::new("Displacement", "Miles_per_Gallon"),
        &DatasetSource::cars(),
        &FieldCatalog::cars(),
        None,
    )
    .unwrap();
    assert_eq!(spec.encoding.x.title, "Displacement");
    assert_eq!(spec.encoding.y.title, "Miles_per_Gallon");
}

use cars_chart_wasm::domain::chart::theme::{self, dashboard_theme, Theme, DASHBOARD_THEME};
use cars_chart_wasm::domain::chart::{build_plot, build_plot_with_theme, PlotSelection};
use cars_chart_wasm::domain::dataset::{DatasetSource, FieldCatalog};
use cars_chart_wasm::domain::errors::AppError;

fn small_title_theme() -> Theme {
    let mut theme = dashboard_theme();
    theme.title.font_size = 12;
    theme
}

#[test]
fn enable_requires_a_registered_name() {
    let err = theme::registry().enable("missing-theme").unwrap_err();
    assert_eq!(err, AppError::UnknownTheme("missing-theme".to_string()));
}

// The registry is process-wide, so everything that mutates the active
// theme lives in one test.
#[test]
fn enabled_theme_styles_every_subsequent_build_and_last_enable_wins() {
    let registry = theme::registry();
    registry.register("small-title", small_title_theme);
    registry.register(DASHBOARD_THEME, dashboard_theme);

    registry.enable("small-title").unwrap();
    registry.enable(DASHBOARD_THEME).unwrap();
    assert_eq!(registry.active_name().as_deref(), Some(DASHBOARD_THEME));

    let spec = build_plot(
        &PlotSelection::default(),
        &DatasetSource::cars(),
        &FieldCatalog::cars(),
    )
    .unwrap();

    let config = spec.config.expect("active theme applied to the build");
    assert_eq!(config.title.font, "Arial");
    assert_eq!(config.title.font_size, 24);
    assert_eq!(config.view.height, 300);
    assert_eq!(config.view.width, 400);
}

#[test]
fn explicit_theme_bypasses_the_registry() {
    let spec = build_plot_with_theme(
        &PlotSelection::default(),
        &DatasetSource::cars(),
        &FieldCatalog::cars(),
        Some(dashboard_theme()),
    )
    .unwrap();
    let config = spec.config.unwrap();
    assert_eq!(config.title.font_size, 24);
    assert!(!config.axis_x.grid);
    assert!(config.axis_y.grid);
}

#[test]
fn no_theme_means_library_defaults() {
    let spec = build_plot_with_theme(
        &PlotSelection::default(),
        &DatasetSource::cars(),
        &FieldCatalog::cars(),
        None,
    )
    .unwrap();
    assert!(spec.config.is_none());
    // And the serialized spec carries no config block at all.
    assert!(!spec.to_json().unwrap().contains("\"config\""));
}

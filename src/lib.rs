//! Interactive cars dashboard: a Leptos single-page app that renders a
//! Vega-Lite scatter plot of automobile attributes into a sandboxed
//! iframe and lets the user pick the plotted fields via two dropdowns.

use wasm_bindgen::prelude::*;

use crate::domain::chart::theme::{self, DASHBOARD_THEME};
use crate::domain::logging::{ConsoleLogger, LogComponent};

pub mod app;
pub mod application;
pub mod domain;
pub mod global_state;
pub mod macros;
pub mod presentation;

/// Application entry point: install logging, activate the dashboard
/// theme, and mount the UI.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(ConsoleLogger::new_development()));

    // Register the custom theme and make it active for every chart
    // built from here on (last-enabled wins).
    let themes = theme::registry();
    themes.register(DASHBOARD_THEME, theme::dashboard_theme);
    if let Err(e) = themes.enable(DASHBOARD_THEME) {
        crate::log_error!(
            LogComponent::Presentation("Initialize"),
            "theme activation failed: {}",
            e
        );
    }

    crate::log_info!(
        LogComponent::Presentation("Initialize"),
        "cars dashboard initialized"
    );

    leptos::mount_to_body(app::App);
}

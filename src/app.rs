//! Leptos UI: header, placeholder tab strip, the chart iframe, and the
//! two axis dropdowns.
//!
//! The wiring is deliberately thin: dropdown change → global signal →
//! memo rebuilds the embeddable document → iframe `srcdoc` updates.

use leptos::*;

use crate::application::PlotService;
use crate::domain::dataset::AxisChoice;
use crate::domain::logging::LogComponent;
use crate::global_state::{x_field_signal, y_field_signal};
use crate::log_error;

/// Top-level dashboard component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .cars-dashboard-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #f7f7f7;
                min-height: 100vh;
                padding: 20px;
                color: #222;
            }

            .app-header {
                background: #119dff;
                color: white;
                padding: 20px;
                border-radius: 8px;
                margin-bottom: 20px;
            }

            .app-header--title {
                font-size: 28px;
                font-weight: 700;
            }

            .tab-strip {
                display: flex;
                gap: 4px;
                border-bottom: 2px solid #d6d6d6;
                margin-bottom: 20px;
            }

            .tab {
                background: #e8e8e8;
                border: 1px solid #d6d6d6;
                border-bottom: none;
                border-radius: 6px 6px 0 0;
                padding: 10px 24px;
                font-size: 14px;
                cursor: pointer;
            }

            .tab:hover {
                background: #dcdcdc;
            }

            .chart-frame {
                border-width: 0;
                background: white;
            }

            .field-selector {
                width: 45%;
                vertical-align: middle;
                padding: 8px;
                font-size: 14px;
                margin-bottom: 20px;
                display: block;
            }
            "#}
        </style>
        <div class="cars-dashboard-app">
            <Header/>
            <LectureTabs/>
            <h3>"Here is our first plot:"</h3>
            <ChartFrame/>
            <h3>"Dropdowns to control the chart"</h3>
            <FieldSelector id="dd-chart" signal=x_field_signal()/>
            <FieldSelector id="dd-chart-y" signal=y_field_signal()/>
        </div>
    }
}

/// Page header.
#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="app-header">
            <div class="app-header--title">"Cars Dashboard"</div>
        </div>
    }
}

/// Static placeholder tab strip; the tabs do not switch content.
#[component]
fn LectureTabs() -> impl IntoView {
    let labels = ["Lecture 1", "Lecture 2", "Lecture 3", "Lecture 4"];
    view! {
        <div class="tab-strip">
            {labels
                .into_iter()
                .map(|label| view! { <button class="tab">{label}</button> })
                .collect_view()}
        </div>
    }
}

/// Sandboxed iframe republishing the embeddable chart document on every
/// selection change.
#[component]
fn ChartFrame() -> impl IntoView {
    let x_field = x_field_signal();
    let y_field = y_field_signal();
    let service = PlotService::new();

    let srcdoc = create_memo(move |_| {
        match service.render_document(&x_field.get(), &y_field.get()) {
            Ok(document) => document,
            Err(e) => {
                // No fallback chart: log and leave the frame empty for
                // this request.
                log_error!(
                    LogComponent::Presentation("ChartFrame"),
                    "chart rebuild failed: {}",
                    e
                );
                String::new()
            }
        }
    });

    view! {
        <iframe
            id="plot"
            class="chart-frame"
            sandbox="allow-scripts"
            width="1000"
            height="500"
            srcdoc=move || srcdoc.get()
        ></iframe>
    }
}

/// One axis dropdown; writes the selected column into `signal`.
#[component]
fn FieldSelector(id: &'static str, signal: RwSignal<String>) -> impl IntoView {
    view! {
        <select
            id=id
            class="field-selector"
            on:change=move |ev| signal.set(event_target_value(&ev))
        >
            {AxisChoice::all()
                .into_iter()
                .map(|choice| {
                    view! {
                        <option
                            value=choice.column
                            selected=move || signal.get() == choice.column
                        >
                            {choice.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

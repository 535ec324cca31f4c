//! Global reactive state: the two axis selections driving the chart.

use crate::domain::dataset::DEFAULT_AXIS_COLUMN;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub x_field: RwSignal<String>,
    pub y_field: RwSignal<String>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        x_field: create_rw_signal(DEFAULT_AXIS_COLUMN.to_string()),
        y_field: create_rw_signal(DEFAULT_AXIS_COLUMN.to_string()),
    })
}

crate::global_signals! {
    pub x_field_signal => x_field: String,
    pub y_field_signal => y_field: String,
}

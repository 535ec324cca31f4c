//! Theme registry: named, static style bundles applied to every chart
//! while active.
//!
//! The register-then-enable contract mirrors the process-wide logger in
//! [`crate::domain::logging`]: one registry for the process, last
//! `enable` wins, no teardown. Builders can also take a [`Theme`]
//! threaded in explicitly, bypassing the global.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::errors::AppError;

/// Registry name of the dashboard style guide theme.
pub const DASHBOARD_THEME: &str = "dashboard";

const FONT: &str = "Arial";
const AXIS_COLOR: &str = "#000000";
const GRID_COLOR: &str = "#DEDDDD";

/// Title block styling (`config.title` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleTheme {
    pub font_size: u32,
    pub font: String,
    /// "start" is the equivalent of left-aligned.
    pub anchor: String,
    pub font_color: String,
}

/// Default view dimensions (`config.view`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewTheme {
    pub height: u32,
    pub width: u32,
}

/// Per-axis styling (`config.axisX` / `config.axisY`). Optional knobs
/// stay off the wire when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTheme {
    pub domain: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_width: Option<u32>,
    pub grid: bool,
    pub grid_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_width: Option<u32>,
    pub label_font: String,
    pub label_font_size: u32,
    pub label_angle: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_size: Option<u32>,
    pub title_font: String,
    pub title_font_size: u32,
    pub title_padding: u32,
    pub title: String,
}

/// Value Object - named bundle of visual styling defaults. Serializes
/// straight into the Vega-Lite `config` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub title: TitleTheme,
    pub view: ViewTheme,
    pub axis_x: AxisTheme,
    pub axis_y: AxisTheme,
}

/// Style producer for the dashboard theme: Arial everywhere, grid on Y
/// only, left-anchored 24pt title, 400x300 default view.
pub fn dashboard_theme() -> Theme {
    Theme {
        title: TitleTheme {
            font_size: 24,
            font: FONT.to_string(),
            anchor: "start".to_string(),
            font_color: AXIS_COLOR.to_string(),
        },
        view: ViewTheme {
            height: 300,
            width: 400,
        },
        axis_x: AxisTheme {
            domain: true,
            domain_width: Some(1),
            grid: false,
            grid_color: GRID_COLOR.to_string(),
            grid_width: None,
            label_font: FONT.to_string(),
            label_font_size: 12,
            label_angle: 0,
            tick_color: Some(AXIS_COLOR.to_string()),
            tick_size: Some(5),
            title_font: FONT.to_string(),
            title_font_size: 16,
            title_padding: 10,
            title: "X Axis Title (units)".to_string(),
        },
        axis_y: AxisTheme {
            domain: false,
            domain_width: None,
            grid: true,
            grid_color: GRID_COLOR.to_string(),
            grid_width: Some(1),
            label_font: FONT.to_string(),
            label_font_size: 14,
            label_angle: 0,
            tick_color: None,
            tick_size: None,
            title_font: FONT.to_string(),
            title_font_size: 16,
            title_padding: 10,
            title: "Y Axis Title (units)".to_string(),
        },
    }
}

/// Named style-generating function.
pub type ThemeProducer = fn() -> Theme;

#[derive(Default)]
struct RegistryState {
    producers: HashMap<String, ThemeProducer>,
    active: Option<String>,
}

/// Process-wide theme registry. Registry lifetime equals process
/// lifetime; there is no removal operation.
pub struct ThemeRegistry {
    state: RwLock<RegistryState>,
}

impl ThemeRegistry {
    fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        match self.state.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Store a named style producer. Re-registering a name replaces the
    /// producer.
    pub fn register(&self, name: &str, producer: ThemeProducer) {
        self.write().producers.insert(name.to_string(), producer);
    }

    /// Mark a registered theme active for all subsequent chart builds.
    pub fn enable(&self, name: &str) -> Result<(), AppError> {
        let mut state = self.write();
        if !state.producers.contains_key(name) {
            return Err(AppError::UnknownTheme(name.to_string()));
        }
        state.active = Some(name.to_string());
        Ok(())
    }

    /// The currently active theme, or `None` when no theme was enabled
    /// (charts then render with library defaults).
    pub fn active(&self) -> Option<Theme> {
        let state = self.read();
        state
            .active
            .as_ref()
            .and_then(|name| state.producers.get(name))
            .map(|producer| producer())
    }

    /// Name of the active theme, if any.
    pub fn active_name(&self) -> Option<String> {
        self.read().active.clone()
    }
}

static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();

/// The process-wide registry read implicitly by every chart build.
pub fn registry() -> &'static ThemeRegistry {
    REGISTRY.get_or_init(ThemeRegistry::new)
}

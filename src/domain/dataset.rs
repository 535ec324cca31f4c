//! Fields and dataset source for the cars scatter plot.
//!
//! The selectable fields form a closed set: every column offered in the
//! UI must be present in [`FieldCatalog`] or chart construction fails.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use super::errors::AppError;

/// Remote tabular dataset; resolved by the browser at render time, the
/// dashboard itself never fetches it.
pub const CARS_DATA_URL: &str =
    "https://cdn.jsdelivr.net/npm/vega-datasets@v1.29.0/data/cars.json";

/// Column both dropdowns start on.
pub const DEFAULT_AXIS_COLUMN: &str = "Displacement";

/// Second tooltip column, pinned regardless of the y selection.
pub const TOOLTIP_EXTRA_FIELD: &str = "Horsepower";

/// Value Object - Vega-Lite measurement type
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
    StrumDisplay,
)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[strum(serialize = "quantitative")]
    Quantitative,
    #[strum(serialize = "nominal")]
    Nominal,
    #[strum(serialize = "ordinal")]
    Ordinal,
    #[strum(serialize = "temporal")]
    Temporal,
}

/// Static field → measurement-type map.
///
/// A closed enumeration validated at startup; a miss on lookup is a
/// hard error, never a silent default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCatalog {
    // Three entries, linear scan is fine.
    entries: Vec<(&'static str, FieldType)>,
}

impl FieldCatalog {
    /// The catalog for the cars dataset: every selectable column is
    /// numeric.
    pub fn cars() -> Self {
        Self {
            entries: vec![
                ("Displacement", FieldType::Quantitative),
                ("Cylinders", FieldType::Quantitative),
                ("Miles_per_Gallon", FieldType::Quantitative),
            ],
        }
    }

    pub fn lookup(&self, field: &str) -> Result<FieldType, AppError> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, field_type)| *field_type)
            .ok_or_else(|| AppError::UnknownField(field.to_string()))
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Value Object - one dropdown option (UI label + dataset column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisChoice {
    pub label: &'static str,
    pub column: &'static str,
}

impl AxisChoice {
    pub const fn new(label: &'static str, column: &'static str) -> Self {
        Self { label, column }
    }

    /// The options offered by both axis dropdowns.
    pub fn all() -> [AxisChoice; 3] {
        [
            AxisChoice::new("Fuel efficiency", "Miles_per_Gallon"),
            AxisChoice::new("Cylinders", "Cylinders"),
            AxisChoice::new("Engine Displacement", "Displacement"),
        ]
    }
}

/// Value Object - reference to a remote tabular dataset
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub struct DatasetSource(String);

impl DatasetSource {
    pub fn cars() -> Self {
        Self(CARS_DATA_URL.to_string())
    }

    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

//! Typed model of the Vega-Lite subset the builder emits.
//!
//! Struct field order fixes the JSON key order, so serializing the same
//! spec twice is byte-for-byte identical.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay};

use super::theme::Theme;
use crate::domain::dataset::FieldType;
use crate::domain::errors::AppError;

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Value Object - mark shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, StrumDisplay)]
#[serde(rename_all = "lowercase")]
pub enum MarkType {
    #[strum(serialize = "point")]
    Point,
    #[strum(serialize = "circle")]
    Circle,
    #[strum(serialize = "square")]
    Square,
}

/// `data` block: a URL the client-side renderer fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSource {
    pub url: String,
}

/// `mark` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: MarkType,
    pub size: u32,
}

/// A positional encoding channel (x or y).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionChannel {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub title: String,
}

impl PositionChannel {
    /// Numeric channel titled after its own field name.
    pub fn quantitative(field: &str) -> Self {
        Self {
            field: field.to_string(),
            field_type: FieldType::Quantitative,
            title: field.to_string(),
        }
    }
}

/// One tooltip entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipChannel {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// `encoding` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoding {
    pub x: PositionChannel,
    pub y: PositionChannel,
    pub tooltip: Vec<TooltipChannel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectSpec {
    #[serde(rename = "type")]
    pub select_type: String,
}

/// A top-level selection parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionParam {
    pub name: String,
    pub select: SelectSpec,
    pub bind: String,
}

impl SelectionParam {
    /// Interval selection bound to the scales: client-side pan and
    /// zoom.
    pub fn pan_zoom() -> Self {
        Self {
            name: "grid".to_string(),
            select: SelectSpec {
                select_type: "interval".to_string(),
            },
            bind: "scales".to_string(),
        }
    }
}

/// A complete, renderable Vega-Lite document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VegaLiteSpec {
    #[serde(rename = "$schema")]
    pub schema: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Theme>,
    pub data: DataSource,
    pub mark: Mark,
    pub encoding: Encoding,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub params: Vec<SelectionParam>,
}

impl VegaLiteSpec {
    /// Serialize for embedding.
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self).map_err(|e| AppError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_channel_wire_shape() {
        let json = serde_json::to_value(PositionChannel::quantitative("Cylinders")).unwrap();
        assert_eq!(json["field"], "Cylinders");
        assert_eq!(json["type"], "quantitative");
        assert_eq!(json["title"], "Cylinders");
    }

    #[test]
    fn pan_zoom_param_binds_to_scales() {
        let json = serde_json::to_value(SelectionParam::pan_zoom()).unwrap();
        assert_eq!(json["select"]["type"], "interval");
        assert_eq!(json["bind"], "scales");
    }
}

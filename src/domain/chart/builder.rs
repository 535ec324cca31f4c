//! Pure plot construction: `(x_field, y_field)` in, Vega-Lite spec out.

use super::spec::{
    DataSource, Encoding, Mark, MarkType, PositionChannel, SelectionParam, TooltipChannel,
    VegaLiteSpec, VEGA_LITE_SCHEMA,
};
use super::theme::{self, Theme};
use crate::domain::dataset::{
    DatasetSource, FieldCatalog, FieldType, DEFAULT_AXIS_COLUMN, TOOLTIP_EXTRA_FIELD,
};
use crate::domain::errors::AppError;

pub const PLOT_TITLE: &str = "Horsepower vs. Displacement";
pub const PLOT_WIDTH: u32 = 500;
pub const PLOT_HEIGHT: u32 = 350;
pub const POINT_SIZE: u32 = 90;

/// Value Object - the user's axis selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSelection {
    pub x_field: String,
    pub y_field: String,
}

impl PlotSelection {
    pub fn new(x_field: impl Into<String>, y_field: impl Into<String>) -> Self {
        Self {
            x_field: x_field.into(),
            y_field: y_field.into(),
        }
    }
}

impl Default for PlotSelection {
    fn default() -> Self {
        Self::new(DEFAULT_AXIS_COLUMN, DEFAULT_AXIS_COLUMN)
    }
}

/// Build the scatter spec using the process-wide active theme.
pub fn build_plot(
    selection: &PlotSelection,
    dataset: &DatasetSource,
    catalog: &FieldCatalog,
) -> Result<VegaLiteSpec, AppError> {
    build_plot_with_theme(selection, dataset, catalog, theme::registry().active())
}

/// Same as [`build_plot`] with the theme threaded in explicitly.
///
/// Stateless and idempotent: identical inputs yield identical specs,
/// with no embedded generated identifiers.
pub fn build_plot_with_theme(
    selection: &PlotSelection,
    dataset: &DatasetSource,
    catalog: &FieldCatalog,
    theme: Option<Theme>,
) -> Result<VegaLiteSpec, AppError> {
    // Only the x field's tooltip type goes through the catalog; both
    // axes are always declared quantitative.
    let x_type = catalog.lookup(&selection.x_field)?;

    Ok(VegaLiteSpec {
        schema: VEGA_LITE_SCHEMA.to_string(),
        config: theme,
        data: DataSource {
            url: dataset.value().to_string(),
        },
        mark: Mark {
            mark_type: MarkType::Point,
            size: POINT_SIZE,
        },
        encoding: Encoding {
            x: PositionChannel::quantitative(&selection.x_field),
            y: PositionChannel::quantitative(&selection.y_field),
            tooltip: vec![
                TooltipChannel {
                    field: selection.x_field.clone(),
                    field_type: x_type,
                },
                // Pinned second tooltip column, independent of the y
                // selection.
                TooltipChannel {
                    field: TOOLTIP_EXTRA_FIELD.to_string(),
                    field_type: FieldType::Quantitative,
                },
            ],
        },
        title: PLOT_TITLE.to_string(),
        width: PLOT_WIDTH,
        height: PLOT_HEIGHT,
        params: vec![SelectionParam::pan_zoom()],
    })
}

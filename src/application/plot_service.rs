//! Application service behind the dropdown callback: two selected
//! field names in, one rendered chart document out.

use crate::domain::chart::{build_plot, EmbedDocument, PlotSelection};
use crate::domain::dataset::{DatasetSource, FieldCatalog};
use crate::domain::errors::AppError;

pub struct PlotService {
    catalog: FieldCatalog,
    dataset: DatasetSource,
}

impl PlotService {
    pub fn new() -> Self {
        Self {
            catalog: FieldCatalog::cars(),
            dataset: DatasetSource::cars(),
        }
    }

    /// Render the embeddable document for the selected field pair. A
    /// catalog miss propagates; there is no fallback chart.
    pub fn render_document(&self, x_field: &str, y_field: &str) -> Result<String, AppError> {
        let selection = PlotSelection::new(x_field, y_field);
        let spec = build_plot(&selection, &self.dataset, &self.catalog)?;
        EmbedDocument::render(&spec)
    }

    /// Startup render: both axes on the default column.
    pub fn render_default_document(&self) -> Result<String, AppError> {
        let selection = PlotSelection::default();
        let spec = build_plot(&selection, &self.dataset, &self.catalog)?;
        EmbedDocument::render(&spec)
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    pub fn dataset(&self) -> &DatasetSource {
        &self.dataset
    }
}

impl Default for PlotService {
    fn default() -> Self {
        Self::new()
    }
}

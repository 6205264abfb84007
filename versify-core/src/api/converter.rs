//! Format-dispatching converter

use crate::api::SourceFormat;
use crate::domain::style::{style_table, FormatFamily, StyleTable};
use crate::domain::types::DocumentOutput;
use crate::error::Result;
use crate::frontend::usfm::MarkerFrontend;
use crate::frontend::usx;

/// Converts documents of one source format
///
/// Holds the prepared frontend, so one converter can serve many documents,
/// including from several threads at once.
#[derive(Debug, Clone)]
pub struct Converter {
    format: SourceFormat,
    engine: Engine,
}

#[derive(Debug, Clone)]
enum Engine {
    Tree(&'static StyleTable),
    Stream(MarkerFrontend<'static>),
}

impl Converter {
    /// Create a converter for `format`
    pub fn new(format: SourceFormat) -> Result<Self> {
        let table = style_table(format.family())?;
        let engine = match format.family() {
            FormatFamily::Usx => Engine::Tree(table),
            FormatFamily::Marker => Engine::Stream(MarkerFrontend::new(table)?),
        };

        Ok(Self { format, engine })
    }

    /// Convert one document's text
    pub fn convert(&self, source: &str) -> Result<DocumentOutput> {
        let output = match &self.engine {
            Engine::Tree(table) => usx::convert(source, table)?,
            Engine::Stream(frontend) => frontend.convert(source),
        };

        log::debug!("Converted {} document into {} lines", self.format, output.len());
        Ok(output)
    }

    /// Format this converter reads
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Style table used for classification
    pub fn style_table(&self) -> &'static StyleTable {
        match &self.engine {
            Engine::Tree(table) => *table,
            Engine::Stream(frontend) => frontend.table(),
        }
    }
}

/// Convert `source` in one call
pub fn convert(format: SourceFormat, source: &str) -> Result<DocumentOutput> {
    Converter::new(format)?.convert(source)
}

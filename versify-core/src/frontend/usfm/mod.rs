//! USFM and SFM frontend
//!
//! A line-oriented state machine. Each logical line is classified by its
//! leading marker and drives one transition of [`MarkerStreamParser`].

pub mod line;
pub mod parser;
pub mod queue;
pub mod sanitizer;

pub use line::{LineClassifier, LineShape};
pub use parser::{MarkerStreamParser, StreamState};
pub use queue::LineQueue;
pub use sanitizer::MarkerSanitizer;

use crate::domain::style::StyleTable;
use crate::domain::types::DocumentOutput;
use crate::error::Result;

/// Compiled sanitizer and line classifier for one style table
///
/// Building one compiles the regex pipeline; reuse it across documents.
#[derive(Debug, Clone)]
pub struct MarkerFrontend<'t> {
    table: &'t StyleTable,
    sanitizer: MarkerSanitizer,
    classifier: LineClassifier,
}

impl<'t> MarkerFrontend<'t> {
    /// Prepare a frontend for `table`
    pub fn new(table: &'t StyleTable) -> Result<Self> {
        Ok(Self {
            table,
            sanitizer: MarkerSanitizer::new(table)?,
            classifier: LineClassifier::new()?,
        })
    }

    /// Convert one document
    pub fn convert(&self, source: &str) -> DocumentOutput {
        let mut parser = MarkerStreamParser::new(self);
        parser.parse(source);
        parser.finish()
    }

    /// Style table in use
    pub fn table(&self) -> &'t StyleTable {
        self.table
    }

    /// Text sanitizer
    pub fn sanitizer(&self) -> &MarkerSanitizer {
        &self.sanitizer
    }

    /// Line classifier
    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }
}

/// Convert a USFM or SFM document
pub fn convert(source: &str, table: &StyleTable) -> Result<DocumentOutput> {
    Ok(MarkerFrontend::new(table)?.convert(source))
}

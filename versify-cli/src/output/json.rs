//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use versify_core::OutputLine;

/// JSON formatter - outputs lines as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// chapter, heading, prose or poetry
    pub kind: String,
    /// The line text
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &OutputLine) -> Result<()> {
        let kind = serde_json::to_value(line.kind)?
            .as_str()
            .unwrap_or_default()
            .to_string();
        self.lines.push(LineData {
            kind,
            text: line.text.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

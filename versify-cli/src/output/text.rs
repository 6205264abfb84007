//! Plain text output formatter

use super::{LineEnding, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use versify_core::OutputLine;

/// Plain text formatter - lines joined by the configured line ending
pub struct TextFormatter<W: Write> {
    writer: W,
    line_ending: LineEnding,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, line_ending: LineEnding) -> Self {
        Self {
            writer,
            line_ending,
            written: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &OutputLine) -> Result<()> {
        if self.written > 0 {
            self.writer.write_all(self.line_ending.as_str().as_bytes())?;
        }
        write!(self.writer, "{line}")?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

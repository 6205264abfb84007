//! Output formatting module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use versify_core::{DocumentOutput, OutputLine};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format one converted line
    fn format_line(&mut self, line: &OutputLine) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod encoding;
pub mod json;
pub mod text;

pub use encoding::{encode_with_bom, OutputEncoding};
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one line per output line
    #[default]
    Text,
    /// JSON array of lines with their kind
    Json,
}

impl OutputFormat {
    /// Default file extension for converted files
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Line separator for text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineEnding {
    /// Separator characters
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Render a converted document in `format`
pub fn render_document(
    document: &DocumentOutput,
    format: OutputFormat,
    line_ending: LineEnding,
) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut formatter: Box<dyn OutputFormatter + '_> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(&mut buffer, line_ending)),
            OutputFormat::Json => Box::new(JsonFormatter::new(&mut buffer)),
        };
        for line in document {
            formatter.format_line(line)?;
        }
        formatter.finish()?;
    }

    String::from_utf8(buffer).context("Formatter produced invalid UTF-8")
}

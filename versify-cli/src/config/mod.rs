//! Configuration module

use crate::error::CliError;
use crate::output::{LineEnding, OutputEncoding, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Encoding of written files
    pub encoding: OutputEncoding,

    /// Line separator
    pub line_ending: LineEnding,

    /// Extension of written files (default: by format)
    pub extension: Option<String>,
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Number of worker threads for parallel runs (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, CliError> {
        toml::from_str(source).map_err(|e| CliError::ConfigError(e.to_string()))
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let source = fs::read_to_string(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.output.encoding, OutputEncoding::Utf8Bom);
        assert_eq!(config.output.line_ending, LineEnding::Lf);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml_str(
            r#"
[output]
format = "json"
encoding = "utf16le"
line_ending = "crlf"
extension = "out"

[performance]
worker_threads = 4
"#,
        )
        .unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.encoding, OutputEncoding::Utf16le);
        assert_eq!(config.output.line_ending, LineEnding::Crlf);
        assert_eq!(config.output.extension.as_deref(), Some("out"));
        assert_eq!(config.performance.worker_threads, 4);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = CliConfig::from_toml_str("[output]\nline_ending = \"crlf\"\n").unwrap();
        assert_eq!(config.output.line_ending, LineEnding::Crlf);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_invalid_value_rejected() {
        let result = CliConfig::from_toml_str("[output]\nencoding = \"latin1\"\n");
        assert!(matches!(result, Err(CliError::ConfigError(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = CliConfig::from_toml_str("[output]\ncolour = \"red\"\n");
        assert!(matches!(result, Err(CliError::ConfigError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = CliConfig::from_file(Path::new("/nonexistent/versify.toml"));
        assert!(matches!(result, Err(CliError::ConfigError(_))));
    }
}

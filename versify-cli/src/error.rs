//! Error handling for the CLI application

use std::fmt;

/// User-facing CLI failures
#[derive(Debug)]
pub enum CliError {
    /// Input path is neither a file, a directory, nor a glob pattern that exists
    InputNotFound(String),
    /// A directory or pattern yielded no files
    NoInputFiles(String),
    /// Configuration file could not be read or parsed
    ConfigError(String),
    /// A recognized file failed to convert
    ConversionFailed {
        /// Input file
        path: String,
        /// Core diagnostic
        message: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputNotFound(path) => write!(f, "Input not found: {path}"),
            CliError::NoInputFiles(input) => write!(f, "No input files found in: {input}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ConversionFailed { path, message } => {
                write!(f, "Failed to convert {path}: {message}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

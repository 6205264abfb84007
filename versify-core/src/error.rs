//! Core error types
//!
//! Only structural failures are errors. Content anomalies such as unknown
//! styles or stray verse markers have defined fallbacks and never surface
//! here.

use thiserror::Error;

/// Errors raised while converting a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The document is not well-formed XML
    #[error("malformed XML at byte {position}: {message}")]
    Xml {
        /// Byte offset reported by the XML reader
        position: usize,
        /// Reader diagnostic
        message: String,
    },

    /// The document decoded but its root element is not the expected one
    #[error("expected root element <{expected}>, found {found}")]
    MissingRoot {
        /// Name of the required root element
        expected: &'static str,
        /// What was found instead
        found: String,
    },

    /// A style table could not be loaded
    #[error("invalid style table: {0}")]
    Configuration(String),
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

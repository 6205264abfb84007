//! Serialized form of a style table

use serde::{Deserialize, Serialize};

/// Top-level style table document
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleConfig {
    /// Identification of the table
    pub metadata: StyleMetadata,
    /// Codes grouped by role
    pub roles: RoleCodes,
    /// Inline character styles
    #[serde(default)]
    pub inline: InlineCodes,
}

/// Table identification
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StyleMetadata {
    /// Format family code (`usx` or `marker`)
    pub family: String,
    /// Human-readable name
    pub name: String,
    /// Style assumed for a verse that appears with no open paragraph
    #[serde(default = "default_paragraph")]
    pub default_paragraph: String,
}

/// Paragraph codes per role
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RoleCodes {
    /// Heading codes
    #[serde(default)]
    pub heading: Vec<String>,
    /// Prose paragraph codes
    #[serde(default)]
    pub prose: Vec<String>,
    /// Poetry line codes
    #[serde(default)]
    pub poetry: Vec<String>,
    /// Identification and title codes that never produce output
    #[serde(default)]
    pub metadata: Vec<String>,
}

/// Inline character style codes
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InlineCodes {
    /// Styles removed together with their content (superscript and friends)
    #[serde(default)]
    pub dropped: Vec<String>,
}

fn default_paragraph() -> String {
    "p".to_string()
}

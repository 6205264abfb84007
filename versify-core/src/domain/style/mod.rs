//! Style-code classification
//!
//! Each format family has one table mapping paragraph style codes to a
//! [`Role`]. Both frontends query a [`StyleTable`] through [`StyleTable::classify`],
//! so the engines cannot drift apart on what counts as a heading, prose or
//! poetry.

mod config;
mod loader;

pub use config::{InlineCodes, RoleCodes, StyleConfig, StyleMetadata};
pub use loader::style_table;

use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Structural role of a paragraph style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Section heading, emitted as one verse-free line
    Heading,
    /// Prose paragraph, emitted as one line
    Prose,
    /// Poetry, one line per verse segment
    Poetry,
    /// Book identification or title, never emitted
    Metadata,
    /// Unknown code
    Unclassified,
}

impl Role {
    /// Lowercase display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Heading => "heading",
            Role::Prose => "prose",
            Role::Poetry => "poetry",
            Role::Metadata => "metadata",
            Role::Unclassified => "unclassified",
        }
    }

    /// Whether blocks of this role produce output lines
    pub fn is_emitted(&self) -> bool {
        matches!(self, Role::Heading | Role::Prose | Role::Poetry)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markup family a style table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatFamily {
    /// USX element tree
    Usx,
    /// USFM and SFM backslash markers
    Marker,
}

impl FormatFamily {
    /// Code used in table files
    pub fn code(&self) -> &'static str {
        match self {
            FormatFamily::Usx => "usx",
            FormatFamily::Marker => "marker",
        }
    }

    /// Parse a table family code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "usx" => Some(FormatFamily::Usx),
            "marker" => Some(FormatFamily::Marker),
            _ => None,
        }
    }
}

/// Lookup table from style code to role
#[derive(Debug, Clone)]
pub struct StyleTable {
    family: FormatFamily,
    name: String,
    default_paragraph: String,
    roles: HashMap<String, Role>,
    dropped_inline: HashSet<String>,
}

impl StyleTable {
    /// Parse a table from its TOML form
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: StyleConfig = toml::from_str(source)
            .map_err(|e| ConvertError::Configuration(format!("Failed to parse style table: {e}")))?;
        Self::from_config(config)
    }

    /// Build a table from its deserialized form
    ///
    /// A code listed under two roles is rejected.
    pub fn from_config(config: StyleConfig) -> Result<Self> {
        let family = FormatFamily::from_code(&config.metadata.family).ok_or_else(|| {
            ConvertError::Configuration(format!(
                "Unknown format family: {}",
                config.metadata.family
            ))
        })?;

        let mut roles = HashMap::new();
        let grouped = [
            (Role::Heading, config.roles.heading),
            (Role::Prose, config.roles.prose),
            (Role::Poetry, config.roles.poetry),
            (Role::Metadata, config.roles.metadata),
        ];

        for (role, codes) in grouped {
            for code in codes {
                let code = code.trim().to_string();
                if let Some(previous) = roles.insert(code.clone(), role) {
                    return Err(ConvertError::Configuration(format!(
                        "Style code '{code}' listed as both {previous} and {role}"
                    )));
                }
            }
        }

        let default_paragraph = config.metadata.default_paragraph.trim().to_string();
        if !matches!(roles.get(&default_paragraph), Some(Role::Prose | Role::Poetry)) {
            return Err(ConvertError::Configuration(format!(
                "Default paragraph style '{default_paragraph}' must be a prose or poetry code"
            )));
        }

        Ok(Self {
            family,
            name: config.metadata.name,
            default_paragraph,
            roles,
            dropped_inline: config
                .inline
                .dropped
                .into_iter()
                .map(|code| code.trim().to_string())
                .collect(),
        })
    }

    /// Role of a style code; unknown codes are [`Role::Unclassified`]
    pub fn classify(&self, code: &str) -> Role {
        self.roles
            .get(code.trim())
            .copied()
            .unwrap_or(Role::Unclassified)
    }

    /// Whether an inline character style is removed with its content
    pub fn is_dropped_inline(&self, style: &str) -> bool {
        self.dropped_inline.contains(style.trim())
    }

    /// Dropped inline styles, sorted
    pub fn dropped_inline(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.dropped_inline.iter().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Codes classified as `role`, sorted
    pub fn codes_for(&self, role: Role) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .roles
            .iter()
            .filter(|(_, r)| **r == role)
            .map(|(code, _)| code.as_str())
            .collect();
        codes.sort_unstable();
        codes
    }

    /// Style assumed when a verse appears with no open paragraph
    pub fn default_paragraph_style(&self) -> &str {
        &self.default_paragraph
    }

    /// Family this table serves
    pub fn family(&self) -> FormatFamily {
        self.family
    }

    /// Human-readable name
    pub fn name(&self) -> &str {
        &self.name
    }
}

//! Source format type for the API

use crate::domain::style::FormatFamily;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Recognized input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// USX: XML element tree
    Usx,
    /// USFM: backslash markers
    Usfm,
    /// Legacy standard format markers
    Sfm,
}

impl SourceFormat {
    /// Every recognized format
    pub fn all() -> &'static [SourceFormat] {
        &[SourceFormat::Usx, SourceFormat::Usfm, SourceFormat::Sfm]
    }

    /// Format for a file extension, case-insensitive
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "usx" => Some(SourceFormat::Usx),
            "usfm" => Some(SourceFormat::Usfm),
            "sfm" => Some(SourceFormat::Sfm),
            _ => None,
        }
    }

    /// Format of a path, judged by its extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical file extension
    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Usx => "usx",
            SourceFormat::Usfm => "usfm",
            SourceFormat::Sfm => "sfm",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Usx => "USX",
            SourceFormat::Usfm => "USFM",
            SourceFormat::Sfm => "SFM",
        }
    }

    /// Style-table family serving this format
    pub fn family(&self) -> FormatFamily {
        match self {
            SourceFormat::Usx => FormatFamily::Usx,
            SourceFormat::Usfm | SourceFormat::Sfm => FormatFamily::Marker,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

//! Byte-order-marked output encodings

use serde::{Deserialize, Serialize};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Encoding of written files; both carry a byte-order mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputEncoding {
    /// UTF-8 with BOM
    #[default]
    Utf8Bom,
    /// UTF-16 little endian with BOM
    Utf16le,
}

/// Encode `text`, prefixed with the encoding's BOM
pub fn encode_with_bom(text: &str, encoding: OutputEncoding) -> Vec<u8> {
    match encoding {
        OutputEncoding::Utf8Bom => {
            let mut bytes = Vec::with_capacity(UTF8_BOM.len() + text.len());
            bytes.extend_from_slice(&UTF8_BOM);
            bytes.extend_from_slice(text.as_bytes());
            bytes
        }
        OutputEncoding::Utf16le => {
            let mut bytes = Vec::with_capacity(UTF16LE_BOM.len() + text.len() * 2);
            bytes.extend_from_slice(&UTF16LE_BOM);
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
            bytes
        }
    }
}

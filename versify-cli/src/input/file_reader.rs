//! File reading utilities

use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8};
use std::fs;
use std::path::Path;

/// File reader with BOM sniffing
pub struct FileReader;

impl FileReader {
    /// Read a file as text, decoding by its BOM and normalizing CRLF to LF
    pub fn read_text(path: &Path) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        let (text, encoding, had_errors) = decode_text(&bytes);
        log::debug!("Read {} as {}", path.display(), encoding.name());
        if had_errors {
            log::warn!(
                "Invalid {} sequences in {} were replaced",
                encoding.name(),
                path.display()
            );
        }

        Ok(text)
    }
}

/// Decode raw file bytes
///
/// A UTF-8, UTF-16LE or UTF-16BE BOM selects the decoder and is stripped;
/// without one the bytes are taken as UTF-8. Returns the text with LF line
/// endings, the encoding used, and whether malformed sequences were replaced.
pub fn decode_text(bytes: &[u8]) -> (String, &'static Encoding, bool) {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_length)) => (encoding, &bytes[bom_length..]),
        None => (UTF_8, bytes),
    };

    let (decoded, had_errors) = encoding.decode_without_bom_handling(body);
    (decoded.replace("\r\n", "\n"), encoding, had_errors)
}

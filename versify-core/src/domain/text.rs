//! Whitespace normalization and verse sentinel tokens
//!
//! Sanitizers flatten paragraph content to a single string. Verse boundaries
//! survive the flattening as sentinel tokens: a private-use opener, the verse
//! label, and a private-use closer. The segmenter splits on them and every
//! other consumer strips them.

/// Opens a verse sentinel
pub const SENTINEL_OPEN: char = '\u{E000}';

/// Closes a verse sentinel
pub const SENTINEL_CLOSE: char = '\u{E001}';

/// Build the sentinel token for a verse label
pub fn verse_sentinel(label: &str) -> String {
    let label: String = label
        .trim()
        .chars()
        .filter(|&c| c != SENTINEL_OPEN && c != SENTINEL_CLOSE)
        .collect();
    format!("{SENTINEL_OPEN}{label}{SENTINEL_CLOSE}")
}

/// Collapse whitespace runs to a single space and trim both ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove every sentinel token (label included) and normalize whitespace
///
/// An opener without a closer, or a lone closer, is dropped by itself.
pub fn strip_sentinels(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(SENTINEL_OPEN) {
        out.push_str(&rest[..open]);
        let after = &rest[open + SENTINEL_OPEN.len_utf8()..];
        rest = match after.find(SENTINEL_CLOSE) {
            Some(close) => &after[close + SENTINEL_CLOSE.len_utf8()..],
            None => after,
        };
    }
    out.push_str(rest);
    out.retain(|c| c != SENTINEL_CLOSE);

    normalize_whitespace(&out)
}

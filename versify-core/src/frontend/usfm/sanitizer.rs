//! Text variant of the inline sanitizer

use crate::domain::style::StyleTable;
use crate::domain::text::{normalize_whitespace, verse_sentinel};
use crate::error::{ConvertError, Result};
use regex::{Captures, Regex};

/// Footnote and endnote codes whose spans are removed with their content
pub const NOTE_CODES: &[&str] = &["f", "fe", "ef"];

/// Cross-reference codes whose spans are removed with their content
pub const CROSS_REFERENCE_CODES: &[&str] = &["x", "ex"];

/// Figure codes; the caption goes with the figure
pub const FIGURE_CODES: &[&str] = &["fig"];

/// Regex-driven sanitizer for marker text
///
/// Applied per physical line. A note opener without its closer swallows the
/// rest of the line; the stream parser uses [`MarkerSanitizer::unclosed_note`]
/// and [`MarkerSanitizer::close_note`] to drop the note's tail on the lines
/// that follow. Figures and dropped inline spans never cross a line. The last
/// step removes every remaining backslash, so one pass already reaches a
/// fixed point.
#[derive(Debug, Clone)]
pub struct MarkerSanitizer {
    removed_spans: Vec<Regex>,
    unterminated_note: Regex,
    unterminated_inline: Regex,
    note_closer: Regex,
    verse: Regex,
    milestone: Regex,
    attributes: Regex,
    marker: Regex,
}

impl MarkerSanitizer {
    /// Compile the pipeline, taking dropped inline styles from `table`
    pub fn new(table: &StyleTable) -> Result<Self> {
        let removed_spans = note_codes()
            .chain(FIGURE_CODES.iter().copied())
            .chain(table.dropped_inline())
            .map(|code| compile(&span_pattern(code)))
            .collect::<Result<Vec<_>>>()?;

        let notes = alternation(note_codes());
        let inline = alternation(FIGURE_CODES.iter().copied().chain(table.dropped_inline()));

        Ok(Self {
            removed_spans,
            unterminated_note: compile(&format!(r"\\\+?({notes})\s.*"))?,
            unterminated_inline: compile(&format!(r"\\\+?(?:{inline})\s.*"))?,
            note_closer: compile(&format!(r"\\\+?({notes})\*"))?,
            verse: compile(r"\\v\s+([^\s\\]+)\s*")?,
            milestone: compile(r"\\\+?[A-Za-z0-9]+(?:-[se])?(?:\s*\|[^\\]*)?\s*\\\*")?,
            attributes: compile(r"\|[^\\|]*(\\\+?[A-Za-z0-9]+\*)")?,
            marker: compile(r"\\\+?[A-Za-z0-9]+(?:-[se])?\*?|\\\*")?,
        })
    }

    /// Strip markup from `raw`, leaving plain text with verse sentinels
    pub fn sanitize(&self, raw: &str) -> String {
        if !raw.contains('\\') {
            return normalize_whitespace(raw);
        }

        let mut text = self.remove_spans(raw);
        text = self.unterminated_note.replace_all(&text, "").into_owned();
        text = self.unterminated_inline.replace_all(&text, "").into_owned();
        text = self
            .verse
            .replace_all(&text, |caps: &Captures| verse_sentinel(&caps[1]))
            .into_owned();
        text = self.milestone.replace_all(&text, "").into_owned();
        text = self.attributes.replace_all(&text, "${1}").into_owned();
        text = self.marker.replace_all(&text, "").into_owned();
        text.retain(|c| c != '\\');

        normalize_whitespace(&text)
    }

    /// Code of a note or cross reference still open at the end of `raw`
    pub fn unclosed_note(&self, raw: &str) -> Option<String> {
        if !raw.contains('\\') {
            return None;
        }
        let text = self.remove_spans(raw);
        self.unterminated_note
            .captures(&text)
            .map(|caps| caps[1].to_string())
    }

    /// Text after the closer of an open `code` note, if `line` holds one
    pub fn close_note<'l>(&self, code: &str, line: &'l str) -> Option<&'l str> {
        self.note_closer
            .captures_iter(line)
            .find(|caps| &caps[1] == code)
            .and_then(|caps| caps.get(0))
            .map(|closer| &line[closer.end()..])
    }

    fn remove_spans(&self, raw: &str) -> String {
        let mut text = raw.to_string();
        for span in &self.removed_spans {
            text = span.replace_all(&text, "").into_owned();
        }
        text
    }
}

fn note_codes<'c>() -> impl Iterator<Item = &'c str> {
    NOTE_CODES.iter().chain(CROSS_REFERENCE_CODES).copied()
}

fn alternation<'c>(codes: impl Iterator<Item = &'c str>) -> String {
    codes.map(regex::escape).collect::<Vec<_>>().join("|")
}

// `\code ... \code*`, optionally `+`-nested on either end
fn span_pattern(code: &str) -> String {
    let code = regex::escape(code);
    format!(r"\\\+?{code}(?:\s.*?)?\\\+?{code}\*")
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        ConvertError::Configuration(format!("Invalid sanitizer pattern '{pattern}': {e}"))
    })
}

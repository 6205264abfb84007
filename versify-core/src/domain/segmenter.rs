//! Verse segmentation of sanitized paragraph text
//!
//! Input is the output of a sanitizer: plain text with verse sentinel tokens
//! where verse markers used to be. Each sentinel opens a segment that runs
//! to the next sentinel or the end of the text.

use super::text::{normalize_whitespace, SENTINEL_CLOSE, SENTINEL_OPEN};
use super::types::Segment;

/// Raw split of a text at its verse sentinels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseSplit {
    /// Text before the first sentinel, normalized
    pub lead: String,
    /// One segment per sentinel, in order; text may be empty
    pub segments: Vec<Segment>,
}

impl VerseSplit {
    /// Whether any sentinel was found
    pub fn has_verse_start(&self) -> bool {
        !self.segments.is_empty()
    }
}

/// Result of segmenting a paragraph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Non-empty segments in source order
    pub segments: Vec<Segment>,
    /// Whether the text contained at least one verse boundary
    pub has_verse_start: bool,
}

/// Split text at verse sentinels, keeping the lead text and empty segments
///
/// The marker-stream frontend needs both: the lead extends whatever verse is
/// already open, and an empty segment still receives later continuation
/// lines.
pub fn split_verses(text: &str) -> VerseSplit {
    let mut lead = String::new();
    let mut segments: Vec<Segment> = Vec::new();
    let mut current: Option<(String, String)> = None;
    let mut rest = text;

    while let Some(open) = rest.find(SENTINEL_OPEN) {
        push_text(&mut current, &mut lead, &rest[..open]);
        let after = &rest[open + SENTINEL_OPEN.len_utf8()..];

        match after.find(SENTINEL_CLOSE) {
            Some(close) => {
                if let Some((label, body)) = current.take() {
                    segments.push(finish_segment(label, &body));
                }
                current = Some((after[..close].trim().to_string(), String::new()));
                rest = &after[close + SENTINEL_CLOSE.len_utf8()..];
            }
            // Unterminated opener: drop it and keep the text
            None => rest = after,
        }
    }
    push_text(&mut current, &mut lead, rest);

    if let Some((label, body)) = current.take() {
        segments.push(finish_segment(label, &body));
    }

    VerseSplit {
        lead: clean(&lead),
        segments,
    }
}

/// Segment sanitized text into verses
///
/// Text before the first sentinel is dropped; segments whose text is empty
/// are dropped without disturbing the order of the others. Without any
/// sentinel `has_verse_start` is false and the caller treats the whole text
/// as continuation content.
pub fn segment(text: &str) -> Segmentation {
    let split = split_verses(text);
    let has_verse_start = split.has_verse_start();

    Segmentation {
        segments: split
            .segments
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .collect(),
        has_verse_start,
    }
}

fn push_text(current: &mut Option<(String, String)>, lead: &mut String, text: &str) {
    match current {
        Some((_, body)) => body.push_str(text),
        None => lead.push_str(text),
    }
}

fn finish_segment(label: String, body: &str) -> Segment {
    Segment::new(label, clean(body))
}

fn clean(text: &str) -> String {
    let text: String = text.chars().filter(|&c| c != SENTINEL_CLOSE).collect();
    normalize_whitespace(&text)
}

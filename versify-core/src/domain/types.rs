//! Shared data model: segments, paragraph blocks and output lines

use super::style::Role;
use serde::Serialize;
use std::fmt;

/// Text belonging to one verse within a paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Verse identifier exactly as it appears in the source (`3`, `3a`, `1-2`)
    pub verse_label: String,
    /// Sanitized, whitespace-normalized verse text
    pub text: String,
}

impl Segment {
    /// Create a segment
    pub fn new(verse_label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            verse_label: verse_label.into(),
            text: text.into(),
        }
    }

    /// Whether the segment carries no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append continuation text, keeping single-space separation
    pub fn append(&mut self, more: &str) {
        let more = more.trim();
        if more.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(more);
    }

    /// Render as `"<label> <text>"`
    pub fn render(&self) -> String {
        if self.verse_label.is_empty() {
            self.text.clone()
        } else {
            format!("{} {}", self.verse_label, self.text)
        }
    }
}

/// A classified paragraph awaiting emission
///
/// Exactly one of `segments` (when non-empty) or `fallback_text` is used at
/// emission time; segments win when both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphBlock {
    /// Role of the paragraph's style code
    pub role: Role,
    /// Verse segments in source order
    pub segments: Vec<Segment>,
    /// Content that introduces no verse
    pub fallback_text: Option<String>,
}

impl ParagraphBlock {
    /// Block made of verse segments
    pub fn with_segments(role: Role, segments: Vec<Segment>) -> Self {
        Self {
            role,
            segments,
            fallback_text: None,
        }
    }

    /// Block carrying only verse-less text
    pub fn with_fallback(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            segments: Vec::new(),
            fallback_text: Some(text.into()),
        }
    }

    /// Heading block
    pub fn heading(text: impl Into<String>) -> Self {
        Self::with_fallback(Role::Heading, text)
    }
}

/// Structural kind of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Standalone chapter number
    Chapter,
    /// Section heading
    Heading,
    /// Joined prose paragraph
    Prose,
    /// One poetry line
    Poetry,
}

impl LineKind {
    /// Line kind produced by a paragraph role
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Heading => Some(LineKind::Heading),
            Role::Prose => Some(LineKind::Prose),
            Role::Poetry => Some(LineKind::Poetry),
            Role::Metadata | Role::Unclassified => None,
        }
    }
}

/// One finished line of output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    /// What produced the line
    pub kind: LineKind,
    /// Markup-free text
    pub text: String,
}

impl OutputLine {
    /// Create a line
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Chapter-number line
    pub fn chapter(number: impl Into<String>) -> Self {
        Self::new(LineKind::Chapter, number)
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered lines of one converted document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocumentOutput {
    lines: Vec<OutputLine>,
}

impl DocumentOutput {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line; blank lines are never stored
    pub fn push(&mut self, line: OutputLine) {
        if !line.text.trim().is_empty() {
            self.lines.push(line);
        }
    }

    /// Lines in document order
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    /// Line texts in document order
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no line was produced
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume into the line vector
    pub fn into_lines(self) -> Vec<OutputLine> {
        self.lines
    }
}

impl Extend<OutputLine> for DocumentOutput {
    fn extend<T: IntoIterator<Item = OutputLine>>(&mut self, iter: T) {
        for line in iter {
            self.push(line);
        }
    }
}

impl<'a> IntoIterator for &'a DocumentOutput {
    type Item = &'a OutputLine;
    type IntoIter = std::slice::Iter<'a, OutputLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

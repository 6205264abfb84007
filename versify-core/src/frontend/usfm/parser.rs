//! Marker-stream state machine
//!
//! Lines are consumed one at a time. A paragraph marker opens a block that
//! stays open until the next chapter, heading, or paragraph marker, or the
//! end of input; verse lines and continuation lines feed the open block.
//!
//! A note left open at the end of a line stays open on the lines that follow:
//! continuation lines are discarded up to the note's closer, and any
//! paragraph-level marker ends the note implicitly.

use super::line::{starts_with_verse, LineShape};
use super::queue::LineQueue;
use super::MarkerFrontend;
use crate::domain::emitter::emit;
use crate::domain::segmenter::split_verses;
use crate::domain::style::Role;
use crate::domain::text::{normalize_whitespace, strip_sentinels};
use crate::domain::types::{DocumentOutput, OutputLine, ParagraphBlock, Segment};

/// Open-block state of the stream parser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamState {
    /// Style code of the open paragraph
    pub current_style: Option<String>,
    /// Segments collected so far; may include segments with no text yet
    pub open_segments: Vec<Segment>,
    /// Verse-less text collected so far
    pub open_fallback: String,
    /// Code of a note or cross reference still waiting for its closer
    pub open_note: Option<String>,
}

impl StreamState {
    /// Whether no block content is pending
    pub fn is_idle(&self) -> bool {
        self.open_segments.is_empty() && self.open_fallback.is_empty()
    }
}

/// Stream parser over USFM and SFM sources
#[derive(Debug)]
pub struct MarkerStreamParser<'f> {
    frontend: &'f MarkerFrontend<'f>,
    state: StreamState,
    output: DocumentOutput,
}

impl<'f> MarkerStreamParser<'f> {
    /// Create a parser with empty state
    pub fn new(frontend: &'f MarkerFrontend<'f>) -> Self {
        Self {
            frontend,
            state: StreamState::default(),
            output: DocumentOutput::new(),
        }
    }

    /// Consume every line of `source`, then flush
    pub fn parse(&mut self, source: &str) {
        let mut queue = LineQueue::new(source);

        while let Some(line) = queue.next_line() {
            let shape = self.frontend.classifier().classify(self.frontend.table(), &line);

            if let Some(code) = self.state.open_note.take() {
                match shape {
                    LineShape::Blank => {
                        self.state.open_note = Some(code);
                        continue;
                    }
                    LineShape::Continuation { text } => {
                        match self.frontend.sanitizer().close_note(&code, text) {
                            Some(rest) if !rest.trim().is_empty() => {
                                queue.push_front(rest.trim_start().to_string());
                            }
                            Some(_) => {}
                            None => {
                                log::trace!("Discarding line inside \\{code} note");
                                self.state.open_note = Some(code);
                            }
                        }
                        continue;
                    }
                    _ => log::debug!("Unclosed \\{code} note ended by the next marker line"),
                }
            }

            match shape {
                LineShape::Blank => {}
                LineShape::Chapter { number } => self.on_chapter(number),
                LineShape::Heading { code, text } => self.on_heading(code, text),
                LineShape::Paragraph { code, text } => {
                    if let Some(verse_line) = self.on_paragraph_marker(code, text) {
                        queue.push_front(verse_line);
                    }
                }
                LineShape::Verse { line } => self.on_verse(line),
                LineShape::Metadata { code } => log::trace!("Dropping \\{code} line"),
                LineShape::Continuation { text } => self.on_continuation(text),
            }

            self.state.open_note = self.frontend.sanitizer().unclosed_note(&line);
        }

        self.flush();
    }

    /// `\c <number>`: close the open block and emit the number
    pub fn on_chapter(&mut self, number: &str) {
        self.flush();
        self.reset();
        self.output.push(OutputLine::chapter(number));
    }

    /// Heading marker: close the open block and emit the heading text
    pub fn on_heading(&mut self, code: &str, text: &str) {
        self.flush();
        self.reset();

        let text = strip_sentinels(&self.frontend.sanitizer().sanitize(text));
        log::trace!("Heading \\{code}: {text}");
        emit(&ParagraphBlock::heading(text), &mut self.output);
    }

    /// Prose or poetry marker: close the open block and open a new one
    ///
    /// Trailing text that starts with a verse marker is returned so the
    /// caller can requeue it as a verse line.
    pub fn on_paragraph_marker(&mut self, code: &str, text: &str) -> Option<String> {
        self.flush();
        self.state.current_style = Some(code.to_string());

        if starts_with_verse(text) {
            return Some(text.to_string());
        }
        self.absorb(text);
        None
    }

    /// `\v <label> <text>`; opens the default paragraph if none is open
    pub fn on_verse(&mut self, line: &str) {
        if self.state.current_style.is_none() {
            let style = self.frontend.table().default_paragraph_style();
            log::trace!("Verse outside a paragraph, assuming \\{style}");
            self.state.current_style = Some(style.to_string());
        }
        self.absorb(line);
    }

    /// Text extending the open verse, or the open paragraph if no verse is open
    pub fn on_continuation(&mut self, text: &str) {
        self.absorb(text);
    }

    /// Render the open block and clear its content, keeping the style
    pub fn flush(&mut self) {
        let segments = std::mem::take(&mut self.state.open_segments);
        let fallback = std::mem::take(&mut self.state.open_fallback);

        let role = match self.state.current_style.as_deref() {
            Some(style) => self.frontend.table().classify(style),
            None => Role::Prose,
        };

        let block = if !segments.is_empty() {
            ParagraphBlock::with_segments(role, segments)
        } else if !fallback.is_empty() {
            ParagraphBlock::with_fallback(role, fallback)
        } else {
            return;
        };

        emit(&block, &mut self.output);
    }

    /// Current open-block state
    pub fn state(&self) -> &StreamState {
        &self.state
    }

    /// Lines emitted so far
    pub fn output(&self) -> &DocumentOutput {
        &self.output
    }

    /// Flush and return the collected lines
    pub fn finish(mut self) -> DocumentOutput {
        self.flush();
        self.output
    }

    fn reset(&mut self) {
        self.state = StreamState::default();
    }

    // Lead text extends the last open segment (or the fallback); embedded
    // verses open new segments, empty ones included so later continuation
    // lines have somewhere to go.
    fn absorb(&mut self, raw: &str) {
        let clean = self.frontend.sanitizer().sanitize(raw);
        let split = split_verses(&clean);

        if !split.lead.is_empty() {
            match self.state.open_segments.last_mut() {
                Some(segment) => segment.append(&split.lead),
                None => {
                    let joined = format!("{} {}", self.state.open_fallback, split.lead);
                    self.state.open_fallback = normalize_whitespace(&joined);
                }
            }
        }

        self.state.open_segments.extend(split.segments);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::style::{style_table, FormatFamily};
    use crate::domain::types::LineKind;

    fn frontend() -> MarkerFrontend<'static> {
        MarkerFrontend::new(style_table(FormatFamily::Marker).unwrap()).unwrap()
    }

    fn parse(source: &str) -> Vec<String> {
        let frontend = frontend();
        let mut parser = MarkerStreamParser::new(&frontend);
        parser.parse(source);
        parser
            .finish()
            .texts()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_continuation_joins_open_verse() {
        assert_eq!(parse("\\p \\v 1 Hello\nworld"), vec!["1 Hello world"]);
    }

    #[test]
    fn test_poetry_line_per_verse() {
        assert_eq!(
            parse("\\q1 \\v 5 I rejoiced greatly\n\\q1 \\v 6 when the brothers came"),
            vec!["5 I rejoiced greatly", "6 when the brothers came"]
        );
    }

    #[test]
    fn test_prose_verses_on_one_line() {
        assert_eq!(
            parse("\\p \\v 1 The elder... \\v 2 Beloved..."),
            vec!["1 The elder... 2 Beloved..."]
        );
    }

    #[test]
    fn test_poetry_verses_on_one_physical_line() {
        assert_eq!(
            parse("\\q1 \\v 5 I rejoiced greatly \\v 6 when the brothers came"),
            vec!["5 I rejoiced greatly", "6 when the brothers came"]
        );
    }

    #[test]
    fn test_chapter_flushes_open_block() {
        let frontend = frontend();
        let mut parser = MarkerStreamParser::new(&frontend);
        parser.parse("\\p\n\\v 1 Last verse of chapter four\n\\c 5\n\\p\n\\v 1 First of five");

        let output = parser.finish();
        assert_eq!(
            output.texts(),
            vec!["1 Last verse of chapter four", "5", "1 First of five"]
        );
        assert_eq!(output.lines()[1].kind, LineKind::Chapter);
    }

    #[test]
    fn test_verse_without_paragraph_defaults_to_prose() {
        let frontend = frontend();
        let mut parser = MarkerStreamParser::new(&frontend);
        parser.on_chapter("1");
        parser.on_verse("\\v 1 one");
        assert_eq!(parser.state().current_style.as_deref(), Some("p"));

        parser.on_verse("\\v 2 two");
        let output = parser.finish();
        assert_eq!(output.texts(), vec!["1", "1 one 2 two"]);
        assert_eq!(output.lines()[1].kind, LineKind::Prose);
    }

    #[test]
    fn test_heading_emits_without_opening_block() {
        let frontend = frontend();
        let mut parser = MarkerStreamParser::new(&frontend);
        parser.on_paragraph_marker("p", "\\v 1 text");
        parser.on_verse("\\v 1 text");
        parser.on_heading("s1", "Greeting\\f + \\ft note\\f*");

        assert!(parser.state().is_idle());
        assert_eq!(parser.state().current_style, None);
        assert_eq!(parser.output().texts(), vec!["1 text", "Greeting"]);
    }

    #[test]
    fn test_paragraph_marker_requeues_verse_text() {
        let frontend = frontend();
        let mut parser = MarkerStreamParser::new(&frontend);

        assert_eq!(
            parser.on_paragraph_marker("q1", "\\v 5 I rejoiced"),
            Some("\\v 5 I rejoiced".to_string())
        );
        assert_eq!(parser.on_paragraph_marker("q2", "when the brothers came"), None);
        assert_eq!(parser.state().open_fallback, "when the brothers came");
    }

    #[test]
    fn test_verse_less_paragraph_is_own_line() {
        assert_eq!(
            parse("\\p\n\\v 5 Beloved, it is a faithful thing you do,\n\\p especially to strangers."),
            vec!["5 Beloved, it is a faithful thing you do,", "especially to strangers."]
        );
    }

    #[test]
    fn test_fallback_lines_joined() {
        assert_eq!(parse("\\m\nfirst part\n  second part "), vec!["first part second part"]);
    }

    #[test]
    fn test_continuation_fills_empty_verse() {
        assert_eq!(parse("\\q1\n\\v 9\nThe text arrives late"), vec!["9 The text arrives late"]);
    }

    #[test]
    fn test_empty_verse_dropped() {
        assert_eq!(parse("\\q1\n\\v 9\n\\v 10 present"), vec!["10 present"]);
    }

    #[test]
    fn test_inline_verse_in_continuation() {
        assert_eq!(
            parse("\\p\n\\v 1 start\nmore words \\v 2 second"),
            vec!["1 start more words 2 second"]
        );
    }

    #[test]
    fn test_metadata_lines_dropped_without_flush() {
        assert_eq!(
            parse("\\p\n\\v 1 one\n\\rem editor note\nstill one"),
            vec!["1 one still one"]
        );
    }

    #[test]
    fn test_notes_never_reach_output() {
        let lines = parse(
            "\\c 1\n\\p\n\\v 1 Grace\\f + \\fr 1:1 \\ft FOOTNOTE\\f* and peace\\x - \\xt XREF\\x*\\sup SUP\\sup*.",
        );
        assert_eq!(lines, vec!["1", "1 Grace and peace."]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        assert_eq!(parse("\n\n\\p\n\n\\v 1 a\n   \n"), vec!["1 a"]);
    }

    #[test]
    fn test_note_spanning_lines_dropped() {
        assert_eq!(
            parse("\\p\n\\v 1 Grace \\f + \\ft SECRET first\nSECRET second\\f* and peace"),
            vec!["1 Grace and peace"]
        );
    }

    #[test]
    fn test_note_inner_lines_discarded_until_closer() {
        assert_eq!(
            parse("\\q1 \\v 3 For I rejoiced\\x - \\xo 1:3\n\\xt 2 Jn 4\n\nstill REF\\x*\n\\q2 when they came"),
            vec!["3 For I rejoiced", "when they came"]
        );
    }

    #[test]
    fn test_note_closer_followed_by_verse() {
        assert_eq!(
            parse("\\p\n\\v 1 one\\f + \\ft NOTE\nNOTE\\f* \\v 2 two"),
            vec!["1 one 2 two"]
        );
    }

    #[test]
    fn test_unclosed_note_ended_by_marker_line() {
        let frontend = frontend();
        let mut parser = MarkerStreamParser::new(&frontend);
        parser.parse("\\p\n\\v 1 one\\f + \\ft never closed\n\\v 2 two\n\\c 2");

        assert_eq!(parser.state().open_note, None);
        assert_eq!(parser.finish().texts(), vec!["1 one 2 two", "2"]);
    }
}

//! Line emission
//!
//! The single place where paragraph blocks become output lines:
//!
//! - a segment renders as `"<label> <text>"`
//! - poetry yields one line per segment
//! - prose yields one line of space-joined segment renders
//! - headings yield their text on one line
//! - a block without segments yields its fallback text on one line
//!
//! Empty renders are dropped rather than emitted as blank lines.

use super::style::Role;
use super::text::strip_sentinels;
use super::types::{DocumentOutput, LineKind, OutputLine, ParagraphBlock, Segment};

/// Render a block into zero or more lines
pub fn render_block(block: &ParagraphBlock) -> Vec<OutputLine> {
    let Some(kind) = LineKind::for_role(block.role) else {
        return Vec::new();
    };

    if block.role == Role::Heading {
        return heading_text(block)
            .map(|text| vec![OutputLine::new(kind, text)])
            .unwrap_or_default();
    }

    if !block.segments.is_empty() {
        let rendered: Vec<String> = block
            .segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(Segment::render)
            .collect();

        return match block.role {
            Role::Poetry => rendered
                .into_iter()
                .map(|text| OutputLine::new(kind, text))
                .collect(),
            _ if rendered.is_empty() => Vec::new(),
            _ => vec![OutputLine::new(kind, rendered.join(" "))],
        };
    }

    block
        .fallback_text
        .as_deref()
        .map(strip_sentinels)
        .filter(|text| !text.is_empty())
        .map(|text| vec![OutputLine::new(kind, text)])
        .unwrap_or_default()
}

/// Render a block and append its lines to the document
pub fn emit(block: &ParagraphBlock, output: &mut DocumentOutput) {
    output.extend(render_block(block));
}

// Headings never carry verse labels; segment texts are joined bare.
fn heading_text(block: &ParagraphBlock) -> Option<String> {
    let text = match &block.fallback_text {
        Some(text) => strip_sentinels(text),
        None => strip_sentinels(
            &block
                .segments
                .iter()
                .map(|segment| segment.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        ),
    };
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::text::verse_sentinel;
    use proptest::prelude::*;

    fn segments(pairs: &[(&str, &str)]) -> Vec<Segment> {
        pairs.iter().map(|(l, t)| Segment::new(*l, *t)).collect()
    }

    #[test]
    fn test_poetry_one_line_per_segment() {
        let block = ParagraphBlock::with_segments(
            Role::Poetry,
            segments(&[("5", "I rejoiced greatly"), ("6", "when the brothers came")]),
        );
        let lines = render_block(&block);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], OutputLine::new(LineKind::Poetry, "5 I rejoiced greatly"));
        assert_eq!(lines[1].text, "6 when the brothers came");
    }

    #[test]
    fn test_prose_joins_segments() {
        let block = ParagraphBlock::with_segments(
            Role::Prose,
            segments(&[("1", "The elder..."), ("2", "Beloved...")]),
        );
        let lines = render_block(&block);

        assert_eq!(lines, vec![OutputLine::new(LineKind::Prose, "1 The elder... 2 Beloved...")]);
    }

    #[test]
    fn test_heading_strips_verse_artifacts() {
        let raw = format!("Psalm {}of David", verse_sentinel("1"));
        let lines = render_block(&ParagraphBlock::heading(raw));

        assert_eq!(lines, vec![OutputLine::new(LineKind::Heading, "Psalm of David")]);
    }

    #[test]
    fn test_heading_from_segments_has_no_labels() {
        let block = ParagraphBlock::with_segments(Role::Heading, segments(&[("1", "A Psalm")]));
        assert_eq!(render_block(&block)[0].text, "A Psalm");
    }

    #[test]
    fn test_fallback_block() {
        let block = ParagraphBlock::with_fallback(Role::Poetry, "when the brothers came");
        let lines = render_block(&block);

        assert_eq!(lines, vec![OutputLine::new(LineKind::Poetry, "when the brothers came")]);
    }

    #[test]
    fn test_segments_win_over_fallback() {
        let mut block = ParagraphBlock::with_segments(Role::Prose, segments(&[("2", "text")]));
        block.fallback_text = Some("lead".to_string());

        assert_eq!(render_block(&block)[0].text, "2 text");
    }

    #[test]
    fn test_empty_renders_dropped() {
        assert!(render_block(&ParagraphBlock::heading("   ")).is_empty());
        assert!(render_block(&ParagraphBlock::with_fallback(Role::Prose, "")).is_empty());
        assert!(render_block(&ParagraphBlock::with_segments(
            Role::Prose,
            segments(&[("1", "")])
        ))
        .is_empty());
        assert!(render_block(&ParagraphBlock::with_segments(Role::Prose, Vec::new())).is_empty());
    }

    #[test]
    fn test_unemitted_roles() {
        let block = ParagraphBlock::with_fallback(Role::Metadata, "3 John");
        assert!(render_block(&block).is_empty());

        let block = ParagraphBlock::with_segments(Role::Unclassified, segments(&[("1", "x")]));
        assert!(render_block(&block).is_empty());
    }

    #[test]
    fn test_emit_appends() {
        let mut output = DocumentOutput::new();
        emit(&ParagraphBlock::heading("Greeting"), &mut output);
        emit(
            &ParagraphBlock::with_segments(Role::Poetry, segments(&[("1", "a"), ("2", "b")])),
            &mut output,
        );
        assert_eq!(output.texts(), vec!["Greeting", "1 a", "2 b"]);
    }

    fn segment_strategy() -> impl Strategy<Value = Segment> {
        ("[1-9][0-9]{0,2}[a-c]?", "[A-Za-z][A-Za-z ,.]{0,20}[A-Za-z.]")
            .prop_map(|(label, text)| Segment::new(label, text))
    }

    proptest! {
        #[test]
        fn prop_poetry_yields_one_line_per_segment(segs in prop::collection::vec(segment_strategy(), 1..12)) {
            let block = ParagraphBlock::with_segments(Role::Poetry, segs.clone());
            let lines = render_block(&block);

            prop_assert_eq!(lines.len(), segs.len());
            for (line, seg) in lines.iter().zip(&segs) {
                let prefix = format!("{} ", seg.verse_label);
                prop_assert!(line.text.starts_with(&prefix));
            }
        }

        #[test]
        fn prop_prose_yields_one_line_with_labels_in_order(segs in prop::collection::vec(segment_strategy(), 1..12)) {
            let block = ParagraphBlock::with_segments(Role::Prose, segs.clone());
            let lines = render_block(&block);

            prop_assert_eq!(lines.len(), 1);
            let mut cursor = 0;
            for seg in &segs {
                let needle = format!("{} {}", seg.verse_label, seg.text);
                let found = lines[0].text[cursor..].find(&needle);
                prop_assert!(found.is_some());
                cursor += found.unwrap_or(0) + needle.len();
            }
        }
    }
}

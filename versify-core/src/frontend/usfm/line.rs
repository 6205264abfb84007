//! Recognition of logical line shapes

use crate::domain::style::{Role, StyleTable};
use crate::error::{ConvertError, Result};
use regex::Regex;

/// Shape of one trimmed logical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'l> {
    /// Nothing but whitespace
    Blank,
    /// `\c <number>`
    Chapter { number: &'l str },
    /// Heading marker with its text
    Heading { code: &'l str, text: &'l str },
    /// Prose or poetry marker with any trailing text
    Paragraph { code: &'l str, text: &'l str },
    /// Line opening with `\v`; carries the whole line
    Verse { line: &'l str },
    /// Header or title marker that never produces output
    Metadata { code: &'l str },
    /// Anything else, including unknown leading markers
    Continuation { text: &'l str },
}

/// Classifies lines by their leading marker
#[derive(Debug, Clone)]
pub struct LineClassifier {
    leading_marker: Regex,
}

impl LineClassifier {
    /// Compile the leading-marker pattern
    pub fn new() -> Result<Self> {
        let leading_marker = Regex::new(r"^\\([A-Za-z]+[0-9]*)(?:\s+(.*))?$")
            .map_err(|e| ConvertError::Configuration(format!("Invalid line pattern: {e}")))?;
        Ok(Self { leading_marker })
    }

    /// Shape of `line`, consulting `table` for paragraph codes
    pub fn classify<'l>(&self, table: &StyleTable, line: &'l str) -> LineShape<'l> {
        let line = line.trim();
        if line.is_empty() {
            return LineShape::Blank;
        }

        let Some(caps) = self.leading_marker.captures(line) else {
            return LineShape::Continuation { text: line };
        };
        let code = caps.get(1).map_or("", |m| m.as_str());
        let text = caps.get(2).map_or("", |m| m.as_str().trim());

        match code {
            "c" => match text.split_whitespace().next() {
                Some(number) => LineShape::Chapter { number },
                None => LineShape::Metadata { code },
            },
            "v" => LineShape::Verse { line },
            _ => match table.classify(code) {
                Role::Heading => LineShape::Heading { code, text },
                Role::Prose | Role::Poetry => LineShape::Paragraph { code, text },
                Role::Metadata => LineShape::Metadata { code },
                Role::Unclassified => LineShape::Continuation { text: line },
            },
        }
    }
}

/// Whether `text` opens with a verse marker
pub fn starts_with_verse(text: &str) -> bool {
    text.strip_prefix("\\v")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::style::{style_table, FormatFamily};

    fn classify(line: &str) -> LineShape<'_> {
        let table = style_table(FormatFamily::Marker).unwrap();
        LineClassifier::new().unwrap().classify(table, line)
    }

    #[test]
    fn test_blank() {
        assert_eq!(classify("   \t "), LineShape::Blank);
    }

    #[test]
    fn test_chapter() {
        assert_eq!(classify(r"\c 5"), LineShape::Chapter { number: "5" });
        assert_eq!(classify(r"  \c 12  "), LineShape::Chapter { number: "12" });
        assert_eq!(classify(r"\c"), LineShape::Metadata { code: "c" });
    }

    #[test]
    fn test_heading() {
        assert_eq!(
            classify(r"\s1 Support and Opposition"),
            LineShape::Heading { code: "s1", text: "Support and Opposition" }
        );
    }

    #[test]
    fn test_paragraph_with_and_without_text() {
        assert_eq!(classify(r"\p"), LineShape::Paragraph { code: "p", text: "" });
        assert_eq!(
            classify(r"\q1 \v 5 I rejoiced"),
            LineShape::Paragraph { code: "q1", text: r"\v 5 I rejoiced" }
        );
    }

    #[test]
    fn test_verse() {
        assert_eq!(
            classify(r"\v 3 For I rejoiced"),
            LineShape::Verse { line: r"\v 3 For I rejoiced" }
        );
    }

    #[test]
    fn test_metadata() {
        assert_eq!(classify(r"\id 3JN EN_ULT"), LineShape::Metadata { code: "id" });
        assert_eq!(classify(r"\mt1 3 John"), LineShape::Metadata { code: "mt1" });
    }

    #[test]
    fn test_continuation() {
        assert_eq!(classify("plain words"), LineShape::Continuation { text: "plain words" });
        assert_eq!(
            classify(r"\nd Lord\nd* said"),
            LineShape::Continuation { text: r"\nd Lord\nd* said" }
        );
        assert_eq!(classify(r"\zz mystery"), LineShape::Continuation { text: r"\zz mystery" });
    }

    #[test]
    fn test_starts_with_verse() {
        assert!(starts_with_verse(r"\v 1 Hello"));
        assert!(!starts_with_verse(r"\va 2\va*"));
        assert!(!starts_with_verse(r"\v"));
        assert!(!starts_with_verse("Hello"));
    }
}

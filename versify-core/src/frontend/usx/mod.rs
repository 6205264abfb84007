//! USX frontend
//!
//! Parses the XML into an owned element tree, then walks chapters and
//! paragraphs in document order.

pub mod sanitizer;
pub mod tree;
pub mod walker;

pub use sanitizer::TreeSanitizer;
pub use tree::{parse_document, Element, Node};
pub use walker::UsxWalker;

use crate::domain::style::StyleTable;
use crate::domain::types::DocumentOutput;
use crate::error::{ConvertError, Result};

/// Required root element of a USX document
pub const ROOT_ELEMENT: &str = "usx";

/// Convert a USX document
pub fn convert(xml: &str, table: &StyleTable) -> Result<DocumentOutput> {
    let root = parse_document(xml)?;

    if root.name != ROOT_ELEMENT {
        return Err(ConvertError::MissingRoot {
            expected: ROOT_ELEMENT,
            found: format!("<{}>", root.name),
        });
    }

    Ok(UsxWalker::new(table).walk(&root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::style::{style_table, FormatFamily};

    fn table() -> &'static StyleTable {
        style_table(FormatFamily::Usx).unwrap()
    }

    #[test]
    fn test_convert_document() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<usx version="3.0">
  <book code="3JN" style="id">Test</book>
  <chapter number="1" style="c" sid="3JN 1"/>
  <para style="p"><verse number="1" style="v" sid="3JN 1:1"/>The elder...<verse eid="3JN 1:1"/></para>
  <chapter eid="3JN 1"/>
</usx>"#;

        let output = convert(xml, table()).unwrap();
        assert_eq!(output.texts(), vec!["1", "1 The elder..."]);
    }

    #[test]
    fn test_wrong_root_rejected() {
        match convert("<html><body/></html>", table()) {
            Err(ConvertError::MissingRoot { expected, found }) => {
                assert_eq!(expected, "usx");
                assert_eq!(found, "<html>");
            }
            other => panic!("expected missing root error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_xml_rejected() {
        assert!(matches!(
            convert("<usx><para style=\"p\">broken</usx>", table()),
            Err(ConvertError::Xml { .. })
        ));
    }
}

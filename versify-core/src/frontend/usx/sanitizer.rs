//! Tree variant of the inline sanitizer

use super::tree::{Element, Node};
use crate::domain::style::StyleTable;
use crate::domain::text::{normalize_whitespace, verse_sentinel};

/// Flattens paragraph content to text with verse sentinels
///
/// - `note` and `figure` subtrees are discarded
/// - `char` elements with a dropped style (superscript) are discarded with their text
/// - `verse` start milestones become sentinel tokens; end milestones vanish
/// - every other element is flattened to its children's text
#[derive(Debug, Clone, Copy)]
pub struct TreeSanitizer<'t> {
    table: &'t StyleTable,
}

impl<'t> TreeSanitizer<'t> {
    /// Create a sanitizer consulting `table` for dropped inline styles
    pub fn new(table: &'t StyleTable) -> Self {
        Self { table }
    }

    /// Sanitize the children of `element`
    pub fn sanitize(&self, element: &Element) -> String {
        let mut out = String::new();
        self.visit_children(element, &mut out);
        normalize_whitespace(&out)
    }

    fn visit_children(&self, element: &Element, out: &mut String) {
        for node in &element.children {
            self.visit(node, out);
        }
    }

    fn visit(&self, node: &Node, out: &mut String) {
        let element = match node {
            Node::Text(text) => {
                out.push_str(text);
                return;
            }
            Node::Element(element) => element,
        };

        match element.name.as_str() {
            "note" | "figure" => {}
            "verse" => {
                if let Some(number) = element.attr("number") {
                    out.push_str(&verse_sentinel(number));
                }
            }
            "char" if element
                .attr("style")
                .is_some_and(|style| self.table.is_dropped_inline(style)) => {}
            _ => self.visit_children(element, out),
        }
    }
}

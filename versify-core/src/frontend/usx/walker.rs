//! Document-order walk over chapters and paragraphs

use super::sanitizer::TreeSanitizer;
use super::tree::Element;
use crate::domain::emitter::emit;
use crate::domain::segmenter::segment;
use crate::domain::style::{Role, StyleTable};
use crate::domain::text::strip_sentinels;
use crate::domain::types::{DocumentOutput, OutputLine, ParagraphBlock};

/// Walks a USX tree and emits its lines
///
/// Chapter and paragraph elements are handled wherever they sit; other
/// containers are descended into, so output follows document order. Nothing
/// is emitted before the first chapter.
#[derive(Debug)]
pub struct UsxWalker<'t> {
    table: &'t StyleTable,
    sanitizer: TreeSanitizer<'t>,
    inside_main_content: bool,
    output: DocumentOutput,
}

impl<'t> UsxWalker<'t> {
    /// Create a walker using `table` for classification
    pub fn new(table: &'t StyleTable) -> Self {
        Self {
            table,
            sanitizer: TreeSanitizer::new(table),
            inside_main_content: false,
            output: DocumentOutput::new(),
        }
    }

    /// Walk the tree under `root` and return the collected lines
    pub fn walk(mut self, root: &Element) -> DocumentOutput {
        self.visit(root);
        self.output
    }

    fn visit(&mut self, element: &Element) {
        for child in element.child_elements() {
            match child.name.as_str() {
                "chapter" => self.on_chapter(child),
                "para" => self.on_paragraph(child),
                _ => self.visit(child),
            }
        }
    }

    fn on_chapter(&mut self, chapter: &Element) {
        // Chapter end milestones carry eid and no number
        let Some(number) = chapter.attr("number") else {
            return;
        };

        self.inside_main_content = true;
        self.output.push(OutputLine::chapter(number.trim()));
    }

    fn on_paragraph(&mut self, para: &Element) {
        let style = para.attr("style").unwrap_or_default();

        if !self.inside_main_content {
            log::debug!("Skipping <para style=\"{style}\"> before first chapter");
            return;
        }

        let role = self.table.classify(style);
        let block = match role {
            Role::Heading => ParagraphBlock::heading(strip_sentinels(&self.sanitizer.sanitize(para))),
            Role::Prose | Role::Poetry => {
                let text = self.sanitizer.sanitize(para);
                let segmentation = segment(&text);
                if segmentation.has_verse_start {
                    ParagraphBlock::with_segments(role, segmentation.segments)
                } else {
                    // A verse-less paragraph stands on its own line
                    ParagraphBlock::with_fallback(role, strip_sentinels(&text))
                }
            }
            Role::Metadata | Role::Unclassified => {
                log::debug!("Skipping <para style=\"{style}\"> ({role})");
                return;
            }
        };

        emit(&block, &mut self.output);
    }
}

//! Extraction engines for scripture markup
//!
//! This crate turns USX (XML) and USFM/SFM (backslash markers) documents into
//! a flat sequence of layout-ready lines: chapter numbers, headings, prose
//! paragraphs and poetry lines, each carrying its verse labels in place.
//!
//! # Architecture
//!
//! - **Domain layer**: the shared model (segments, paragraph blocks, output
//!   lines), the style classifier, the verse segmenter and the line emitter
//! - **Frontends**: a tree walker for USX and a line-oriented marker-stream
//!   parser for USFM/SFM, both feeding the same emitter so that equivalent
//!   input yields identical lines
//! - **API layer**: format detection and a [`Converter`] entry point
//!
//! # Example
//!
//! ```rust
//! use versify_core::{Converter, SourceFormat};
//!
//! let converter = Converter::new(SourceFormat::Usfm).unwrap();
//! let output = converter
//!     .convert("\\c 1\n\\q1 \\v 5 I rejoiced greatly\n\\q1 \\v 6 when the brothers came")
//!     .unwrap();
//!
//! assert_eq!(
//!     output.texts(),
//!     vec!["1", "5 I rejoiced greatly", "6 when the brothers came"]
//! );
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod frontend;

pub use api::{convert, Converter, SourceFormat};
pub use domain::style::{style_table, FormatFamily, Role, StyleTable};
pub use domain::types::{DocumentOutput, LineKind, OutputLine, ParagraphBlock, Segment};
pub use error::{ConvertError, Result};

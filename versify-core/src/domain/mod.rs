//! Format-independent model and algorithms
//!
//! Both frontends reduce their input to [`types::ParagraphBlock`]s and hand
//! them to [`emitter`], which is the only place output lines are produced.

pub mod emitter;
pub mod segmenter;
pub mod style;
pub mod text;
pub mod types;

pub use emitter::{emit, render_block};
pub use segmenter::{segment, split_verses, Segmentation, VerseSplit};
pub use text::{normalize_whitespace, strip_sentinels, verse_sentinel};
pub use types::*;

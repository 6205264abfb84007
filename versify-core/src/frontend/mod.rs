//! Format frontends
//!
//! - [`usx`]: tree walker over USX documents
//! - [`usfm`]: line-oriented marker-stream parser for USFM and SFM
//!
//! Both produce a [`DocumentOutput`](crate::domain::DocumentOutput) through
//! the shared emitter, and must agree line for line on equivalent input.

pub mod usfm;
pub mod usx;

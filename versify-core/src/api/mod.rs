//! Public conversion API
//!
//! Picks the frontend for a [`SourceFormat`] and hides the engines behind a
//! single [`Converter`].

mod converter;
mod format;


pub use converter::{convert, Converter};
pub use format::SourceFormat;

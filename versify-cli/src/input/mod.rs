//! Input handling module

pub mod file_reader;
pub mod resolver;

pub use file_reader::{decode_text, FileReader};
pub use resolver::resolve_input;

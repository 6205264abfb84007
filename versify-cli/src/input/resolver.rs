//! Input path resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// Resolve the INPUT argument to the files it names
///
/// A file resolves to itself, a directory to its immediate files, anything
/// else is treated as a glob pattern. Results are sorted and deduplicated;
/// format filtering is left to the caller.
pub fn resolve_input(input: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(input);

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_dir() {
        let pattern = format!("{}/*", Pattern::escape(&path.to_string_lossy()));
        let files = expand_pattern(&pattern)?;
        if files.is_empty() {
            return Err(CliError::NoInputFiles(input.to_string()).into());
        }
        return Ok(files);
    }

    if is_glob_pattern(input) {
        let files = expand_pattern(input)?;
        if files.is_empty() {
            return Err(CliError::NoInputFiles(input.to_string()).into());
        }
        return Ok(files);
    }

    Err(CliError::InputNotFound(input.to_string()).into())
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

    for path_result in paths {
        let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

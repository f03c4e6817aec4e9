//! File I/O utilities for reading hand files.
//!
//! Hand files are plain text, one pair of hands per line. Reading the whole
//! file up front is fine at the sizes involved (the Euler #54 input is a
//! thousand lines).

use std::path::Path;

use crate::error::CliError;

/// Reads a hand file into a string, wrapping I/O failures with the path
/// for a usable error message.
pub fn read_text(path: &str) -> Result<String, CliError> {
    if !Path::new(path).exists() {
        return Err(CliError::InvalidInput(format!("no such file: {}", path)));
    }
    std::fs::read_to_string(path).map_err(CliError::Io)
}

/// Non-empty lines of a hand file with their 1-based line numbers.
/// Blank and whitespace-only lines are skipped, not errors.
pub fn numbered_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
        .collect()
}

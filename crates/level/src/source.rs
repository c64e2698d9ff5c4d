//! Level source loading and cleanup.

use std::fs;
use std::path::Path;

use crate::Result;

/// Read a level source file and return its cleaned lines.
///
/// Comment lines are dropped and every surviving line is trimmed of
/// surrounding whitespace. Blank lines survive cleanup; they delimit
/// sections during partitioning.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)?;
    Ok(clean_lines(&data))
}

/// Strip comments and trim the raw source text.
///
/// A line is a comment only when its *untrimmed* text starts with `#`; an
/// indented `#` is not a comment and will later fail section parsing.
pub fn clean_lines(data: &str) -> Vec<String> {
    data.lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| line.trim().to_string())
        .collect()
}

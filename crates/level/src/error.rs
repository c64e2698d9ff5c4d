//! Error types for the level crate

/// Errors raised while reading or partitioning a level source file
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    /// Source file I/O error
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),

    /// A section's first line is not a `[tag]` header
    #[error("Syntax error parsing {line:?}: a header must be in the form [name]")]
    MalformedHeader { line: String },

    /// A line inside a section is not `key=value`
    #[error("Syntax error parsing {line:?} in section [{tag}]: a node must be in the form key=value")]
    MalformedEntry { tag: String, line: String },
}

/// Result type for level source operations
pub type Result<T> = std::result::Result<T, LevelError>;

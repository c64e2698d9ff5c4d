//! Error types for the format crate

/// Semantic errors raised while encoding a level artifact
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// Required `meta.name` key absent or empty
    #[error("name missing in meta region")]
    MissingName,

    /// A `map.*` entry with an invalid coordinate or cell value
    #[error("Invalid syntax at {key}={value}")]
    InvalidMapEntry { key: String, value: String },
}

/// Result type for encoding operations
pub type Result<T> = std::result::Result<T, FormatError>;

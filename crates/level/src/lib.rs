//! # Mapc Level Source
//!
//! This crate reads and partitions the sectioned text files that describe a
//! game level, producing the flattened key/value mapping consumed by the
//! binary encoders in `mapc-format`.
//!
//! ## Source Format
//!
//! - Lines starting with `#` are comments and are dropped before parsing
//! - Blank lines split the file into sections
//! - Each section is a `[tag]` header followed by `key=value` lines
//! - Section entries land in one ordered mapping under composite `tag.key`
//!   keys; first-seen order is preserved even when a key is overwritten

pub mod coords;
pub mod error;
pub mod partition;
pub mod source;

pub use coords::parse_coords;
pub use error::{LevelError, Result};
pub use partition::{partition, FlattenedMapping};
pub use source::{clean_lines, read_lines};

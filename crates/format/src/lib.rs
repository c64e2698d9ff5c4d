//! # Mapc Binary Format
//!
//! This crate encodes a flattened level mapping into the engine's binary
//! `.map` artifact.
//!
//! ## Artifact Layout
//!
//! Little-endian throughout:
//! - **Header**: 4-byte format version
//! - **Meta region**: 4-byte name length, then the UTF-8 name bytes
//! - **Map region**: 4-byte width, height and cell count, then one
//!   12-byte (x, y, value) triple per populated cell
//!
//! Encoding is deterministic: cells appear in the order their keys were
//! first seen in the source file.

pub mod error;
pub mod map;
pub mod meta;
pub mod stream;

pub use error::{FormatError, Result};
pub use map::{encode_map_region, MapCell};
pub use meta::encode_meta_region;
pub use stream::{encode_level, FORMAT_VERSION};

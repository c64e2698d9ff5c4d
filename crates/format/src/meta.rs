//! Meta region encoder.

use bytes::{BufMut, BytesMut};
use mapc_level::FlattenedMapping;

use crate::{FormatError, Result};

/// Encode the meta region into `buf`.
///
/// # Region Format
/// ```text
/// {U32LE name byte length}{name bytes, UTF-8}
/// ```
///
/// The length prefix is the *byte* length of the UTF-8 encoding, not the
/// character count, and there is no terminator or padding. The runtime
/// allocates the name buffer from this prefix before reading the bytes.
pub fn encode_meta_region(mapping: &FlattenedMapping, buf: &mut BytesMut) -> Result<()> {
    let name = mapping
        .get("meta.name")
        .filter(|name| !name.is_empty())
        .ok_or(FormatError::MissingName)?;

    tracing::info!("Writing map {}", name);
    buf.put_u32_le(name.len() as u32);
    buf.put_slice(name.as_bytes());
    Ok(())
}

//! Output stream orchestration.

use bytes::{BufMut, BytesMut};
use mapc_level::FlattenedMapping;

use crate::map::encode_map_region;
use crate::meta::encode_meta_region;
use crate::Result;

/// Version constant written at the head of every artifact. The runtime
/// dispatches to its matching loader from this value.
pub const FORMAT_VERSION: u32 = 1;

/// Encode a complete level artifact: version header, meta region, map region.
///
/// The stream is built entirely in memory so a semantic error can never leave
/// a truncated artifact on disk; callers persist the returned buffer in one
/// pass once encoding has succeeded.
pub fn encode_level(mapping: &FlattenedMapping) -> Result<BytesMut> {
    let mut buf = BytesMut::new();

    tracing::debug!("Encoding with format v{}", FORMAT_VERSION);
    buf.put_u32_le(FORMAT_VERSION);

    encode_meta_region(mapping, &mut buf)?;
    encode_map_region(mapping, &mut buf)?;

    Ok(buf)
}

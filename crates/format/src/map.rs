//! Map region encoder.

use bytes::{BufMut, BytesMut};
use mapc_level::{parse_coords, FlattenedMapping};

use crate::{FormatError, Result};

/// One populated grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapCell {
    pub x: u32,
    pub y: u32,
    pub value: i32,
}

/// Encode the map region into `buf`.
///
/// # Region Format
/// ```text
/// {U32LE width}{U32LE height}{U32LE cell count}
/// {U32LE x}{U32LE y}{U32LE value} * count
/// ```
///
/// Width and height are the grid extent, `max observed + 1` per axis over an
/// accumulator starting at (0, 0), so an empty map still reports a 1x1 grid.
/// Cells are written in the order their keys were first encountered during
/// partitioning. A negative cell value keeps its two's-complement bit
/// pattern; the runtime reads it back as a plain unsigned 32-bit word.
pub fn encode_map_region(mapping: &FlattenedMapping, buf: &mut BytesMut) -> Result<()> {
    let (cells, (max_x, max_y)) = collect_cells(mapping)?;

    buf.put_u32_le(max_x + 1);
    buf.put_u32_le(max_y + 1);
    buf.put_u32_le(cells.len() as u32);

    for cell in &cells {
        buf.put_u32_le(cell.x);
        buf.put_u32_le(cell.y);
        buf.put_u32_le(cell.value as u32);
    }

    tracing::info!("Written {} coords", cells.len());
    Ok(())
}

/// Collect every `map.` entry as a cell, in mapping order, tracking the
/// maximum coordinate seen on each axis.
fn collect_cells(mapping: &FlattenedMapping) -> Result<(Vec<MapCell>, (u32, u32))> {
    let mut cells = Vec::new();
    let mut max = (0u32, 0u32);

    for (key, value) in mapping.iter() {
        let Some(token) = key.strip_prefix("map.") else {
            continue;
        };

        // Values tolerate surrounding whitespace; the extent is max + 1 per
        // axis, so a component at u32::MAX cannot be represented.
        let coords = parse_coords(token).filter(|&(x, y)| x < u32::MAX && y < u32::MAX);
        let (Some((x, y)), Ok(parsed)) = (coords, value.trim().parse::<i32>()) else {
            return Err(FormatError::InvalidMapEntry {
                key: key.to_string(),
                value: value.to_string(),
            });
        };

        tracing::debug!("Writing coords {}, {}", x, y);
        cells.push(MapCell { x, y, value: parsed });
        max.0 = max.0.max(x);
        max.1 = max.1.max(y);
    }

    Ok((cells, max))
}

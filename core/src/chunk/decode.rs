//! chunk/decode.rs
//!
//! Chunk decoding utilities.
//!
//! Design notes:
//! - The declared length is checked against the ceiling before any slicing,
//!   so a hostile `0xFFFFFFFF` costs one comparison.
//! - Offsets use checked arithmetic; nothing here can panic on input.
//! - A CRC mismatch is not an error at this layer. `ChunkView::crc_ok()`
//!   reports it and the structural validator decides.

use byteorder::{BigEndian, ByteOrder};

use crate::chunk::types::{ChunkError, ChunkType, ChunkView};
use crate::constants::{CHUNK_OVERHEAD, MAX_CHUNK_LEN};

/// Decode the chunk starting at `offset` using the default length ceiling.
#[inline]
pub fn decode_chunk(buf: &[u8], offset: usize) -> Result<ChunkView<'_>, ChunkError> {
    decode_chunk_with_limit(buf, offset, MAX_CHUNK_LEN)
}

/// Decode the chunk starting at `offset`, rejecting declared lengths above `max_len`.
pub fn decode_chunk_with_limit(
    buf: &[u8],
    offset: usize,
    max_len: u32,
) -> Result<ChunkView<'_>, ChunkError> {
    let have = buf.len().saturating_sub(offset);

    // --- length + type ---
    let head_end = match offset.checked_add(8) {
        Some(end) if end <= buf.len() => end,
        _ => return Err(ChunkError::OutOfBounds { offset, need: 8, have }),
    };

    let declared = BigEndian::read_u32(&buf[offset..offset + 4]);
    if declared > max_len {
        return Err(ChunkError::Oversized { offset, declared, max: max_len });
    }

    let mut tag = [0u8; 4];
    tag.copy_from_slice(&buf[offset + 4..head_end]);

    // --- data + crc ---
    let need = CHUNK_OVERHEAD.saturating_add(declared as usize);
    let end = match offset.checked_add(need) {
        Some(end) if end <= buf.len() => end,
        _ => return Err(ChunkError::OutOfBounds { offset, need, have }),
    };
    let data_end = end - 4;

    Ok(ChunkView {
        offset,
        chunk_type: ChunkType(tag),
        data: &buf[head_end..data_end],
        crc: BigEndian::read_u32(&buf[data_end..end]),
        raw: &buf[offset..end],
    })
}

//! chunk/encode.rs
//!
//! Chunk encoding utilities.
//!
//! Design notes:
//! - Serializes `length ‖ type ‖ data ‖ crc32`, all integers big-endian.
//! - CRC-32/IEEE-802.3 is computed over `type ‖ data`.
//! - The data length is checked against the same ceiling the decoder enforces,
//!   so everything this module emits decodes again.

use byteorder::{BigEndian, ByteOrder};

use crate::chunk::types::{ChunkError, ChunkType};
use crate::constants::{CHUNK_OVERHEAD, MAX_CHUNK_LEN};
use crate::utils::chunk_crc32;

/// Encode one chunk into a fresh buffer.
///
/// # Returns
/// - `Ok(Vec<u8>)` of exactly `12 + data.len()` bytes.
/// - `Err(ChunkError::DataTooLarge)` if `data` exceeds the length ceiling.
pub fn encode_chunk(chunk_type: ChunkType, data: &[u8]) -> Result<Vec<u8>, ChunkError> {
    let mut out = Vec::with_capacity(CHUNK_OVERHEAD + data.len());
    append_chunk(&mut out, chunk_type, data)?;
    Ok(out)
}

/// Append one encoded chunk to `out`.
///
/// `out` is untouched when an error is returned.
pub fn append_chunk(out: &mut Vec<u8>, chunk_type: ChunkType, data: &[u8]) -> Result<(), ChunkError> {
    if data.len() > MAX_CHUNK_LEN as usize {
        return Err(ChunkError::DataTooLarge { len: data.len(), max: MAX_CHUNK_LEN });
    }

    let mut word = [0u8; 4];

    BigEndian::write_u32(&mut word, data.len() as u32);
    out.reserve(CHUNK_OVERHEAD + data.len());
    out.extend_from_slice(&word);                  // 0..4  length
    out.extend_from_slice(chunk_type.as_bytes());  // 4..8  type
    out.extend_from_slice(data);                   // 8..   data

    BigEndian::write_u32(&mut word, chunk_crc32(chunk_type.as_bytes(), data));
    out.extend_from_slice(&word);                  // crc32

    Ok(())
}

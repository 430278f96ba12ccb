//! chunk/types.rs
//! Chunk tag newtype, borrowed chunk view and codec errors.

use std::fmt;

use crate::constants::{tags, CHUNK_OVERHEAD};
use crate::utils::{chunk_crc32, fmt_bytes};

/// Four-byte chunk tag.
///
/// Property bits follow the raster format's naming convention: bit 5 of each
/// byte (lowercase letter) marks the chunk ancillary, private, reserved and
/// safe-to-copy respectively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    pub const HEADER: ChunkType = ChunkType(tags::HEADER);
    pub const DATA: ChunkType = ChunkType(tags::DATA);
    pub const TERMINATOR: ChunkType = ChunkType(tags::TERMINATOR);
    pub const BRANDING: ChunkType = ChunkType(tags::BRANDING);

    #[inline]
    pub const fn new(tag: [u8; 4]) -> Self {
        Self(tag)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Optional to conforming readers.
    #[inline]
    pub const fn is_ancillary(&self) -> bool {
        self.0[0] & 0x20 != 0
    }

    #[inline]
    pub const fn is_critical(&self) -> bool {
        !self.is_ancillary()
    }

    #[inline]
    pub const fn is_private(&self) -> bool {
        self.0[1] & 0x20 != 0
    }

    /// The third letter must be uppercase in every conforming tag.
    #[inline]
    pub const fn reserved_bit_clear(&self) -> bool {
        self.0[2] & 0x20 == 0
    }

    #[inline]
    pub const fn is_safe_to_copy(&self) -> bool {
        self.0[3] & 0x20 != 0
    }

    /// All four bytes are ASCII letters.
    pub fn is_well_formed(&self) -> bool {
        self.0.iter().all(|b| b.is_ascii_alphabetic())
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_bytes(&self.0))
    }
}

impl From<[u8; 4]> for ChunkType {
    fn from(tag: [u8; 4]) -> Self {
        Self(tag)
    }
}

/// Borrowed view of one decoded chunk.
///
/// `raw` spans the whole encoded chunk (length through CRC) so callers can
/// re-emit it byte-exact without re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkView<'a> {
    pub offset: usize,
    pub chunk_type: ChunkType,
    pub data: &'a [u8],
    pub crc: u32,
    pub raw: &'a [u8],
}

impl<'a> ChunkView<'a> {
    /// Declared data length.
    #[inline]
    pub fn data_len(&self) -> usize {
        self.data.len()
    }

    /// Total encoded length, overhead included.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        CHUNK_OVERHEAD + self.data.len()
    }

    /// Offset of the first byte after this chunk.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.encoded_len()
    }

    pub fn computed_crc(&self) -> u32 {
        chunk_crc32(&self.chunk_type.0, self.data)
    }

    /// Stored CRC matches the recomputation over `type ‖ data`.
    pub fn crc_ok(&self) -> bool {
        self.crc == self.computed_crc()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// The read would run past the end of the buffer.
    OutOfBounds { offset: usize, need: usize, have: usize },

    /// Declared length exceeds the hard ceiling.
    Oversized { offset: usize, declared: u32, max: u32 },

    /// Data handed to the encoder does not fit the length field ceiling.
    DataTooLarge { len: usize, max: u32 },
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ChunkError::*;
        match self {
            OutOfBounds { offset, need, have } =>
                write!(f, "chunk at offset {} out of bounds: need {} bytes, have {}", offset, need, have),
            Oversized { offset, declared, max } =>
                write!(f, "chunk at offset {} declares {} bytes (max {})", offset, declared, max),
            DataTooLarge { len, max } =>
                write!(f, "chunk data too large to encode: {} > {}", len, max),
        }
    }
}

impl std::error::Error for ChunkError {}

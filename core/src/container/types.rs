//! container/types.rs
//! Structural model of a container: walk limits, the raster header record,
//! the validated layout and the structural error taxonomy.

use std::fmt;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::chunk::{ChunkError, ChunkType};
use crate::constants::{MAX_CHUNKS, MAX_CHUNK_LEN};
use crate::utils::{enum_name_or_hex, fmt_bytes};

/// Ceilings applied while walking a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerLimits {
    /// Chunks walked before the terminator, terminator included.
    pub max_chunks: usize,
    /// Largest declared chunk length accepted.
    pub max_chunk_len: u32,
    /// Treat a CRC mismatch as a hard structural error.
    pub enforce_crc: bool,
}

impl Default for ContainerLimits {
    fn default() -> Self {
        Self {
            max_chunks: MAX_CHUNKS,
            max_chunk_len: MAX_CHUNK_LEN,
            enforce_crc: true,
        }
    }
}

/// Raster color modes (header registry).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum ColorType {
    Greyscale      = 0,
    Truecolor      = 2,
    Indexed        = 3,
    GreyscaleAlpha = 4,
    TruecolorAlpha = 6,
}

impl ColorType {
    pub fn verify(raw: u8) -> Result<ColorType, HeaderFault> {
        ColorType::try_from_primitive(raw).map_err(|_| HeaderFault::UnknownColorType { raw })
    }

    /// Legal bit depths for this color mode.
    pub const fn bit_depths(self) -> &'static [u8] {
        match self {
            ColorType::Greyscale      => &[1, 2, 4, 8, 16],
            ColorType::Indexed        => &[1, 2, 4, 8],
            ColorType::Truecolor
            | ColorType::GreyscaleAlpha
            | ColorType::TruecolorAlpha => &[8, 16],
        }
    }

    pub fn allows_bit_depth(self, depth: u8) -> bool {
        self.bit_depths().contains(&depth)
    }
}

/// The fixed 13-byte header record.
///
/// | offset | size | field       |
/// |--------|------|-------------|
/// | 0      | 4    | width       |
/// | 4      | 4    | height      |
/// | 8      | 1    | bit depth   |
/// | 9      | 1    | color type  |
/// | 10     | 1    | compression |
/// | 11     | 1    | filter      |
/// | 12     | 1    | interlace   |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub compression: u8,
    pub filter: u8,
    pub interlace: u8,
}

/// Why a header record was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderFault {
    WrongLength { len: usize },
    ZeroDimension { width: u32, height: u32 },
    DimensionTooLarge { width: u32, height: u32, max: u32 },
    UnknownColorType { raw: u8 },
    IllegalBitDepth { color_type: ColorType, bit_depth: u8 },
    UnsupportedCompression { raw: u8 },
    UnsupportedFilter { raw: u8 },
    UnknownInterlace { raw: u8 },
}

impl fmt::Display for HeaderFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderFault::*;
        match self {
            WrongLength { len } =>
                write!(f, "header record is {} bytes, expected 13", len),
            ZeroDimension { width, height } =>
                write!(f, "zero dimension: {}x{}", width, height),
            DimensionTooLarge { width, height, max } =>
                write!(f, "dimension too large: {}x{} (max {})", width, height, max),
            UnknownColorType { raw } =>
                write!(f, "unknown color type: {}", enum_name_or_hex::<ColorType>(*raw)),
            IllegalBitDepth { color_type, bit_depth } =>
                write!(f, "bit depth {} not allowed for {:?}", bit_depth, color_type),
            UnsupportedCompression { raw } =>
                write!(f, "unsupported compression method: {}", raw),
            UnsupportedFilter { raw } =>
                write!(f, "unsupported filter method: {}", raw),
            UnknownInterlace { raw } =>
                write!(f, "unknown interlace method: {}", raw),
        }
    }
}

/// Offsets and facts established by a successful structural validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerLayout {
    pub header: ImageHeader,
    /// Offset of the terminator chunk's length field.
    pub terminator_offset: usize,
    /// First byte after the terminator chunk; the payload starts here.
    pub terminator_end: usize,
    /// Chunks walked, header and terminator included.
    pub chunk_count: usize,
    /// Offset of the first branding chunk, if any.
    pub branding_offset: Option<usize>,
}

impl ContainerLayout {
    /// Length of the raster region (signature through terminator).
    #[inline]
    pub fn raster_len(&self) -> usize {
        self.terminator_end
    }

    /// Bytes trailing the terminator in a buffer of `total` bytes.
    #[inline]
    pub fn trailing_len(&self, total: usize) -> usize {
        total.saturating_sub(self.terminator_end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// Buffer shorter than the smallest possible container.
    TooSmall { have: usize, need: usize },

    /// Leading 8 bytes are not the container signature.
    InvalidSignature { have: [u8; 8] },

    /// First chunk is not a header chunk of the exact fixed length.
    MissingHeader { found: ChunkType, len: usize },

    /// Header record is not a legal combination.
    InvalidHeader(HeaderFault),

    /// A second header chunk appeared.
    DuplicateHeader { offset: usize },

    /// Buffer exhausted before a terminator chunk.
    MissingTerminator { chunks: usize },

    /// Terminator chunk carries data.
    InvalidTerminator { offset: usize, len: usize },

    /// A chunk declares more bytes than the ceiling.
    OversizedChunk { offset: usize, declared: u32, max: u32 },

    /// Chunk ceiling reached before a terminator.
    TooManyChunks { max: usize },

    /// A chunk runs past the end of the buffer.
    Truncated { offset: usize, need: usize, have: usize },

    /// Tag bytes are not ASCII letters.
    InvalidChunkType { offset: usize, tag: [u8; 4] },

    /// Stored CRC does not match `type ‖ data`.
    ChecksumMismatch { offset: usize, chunk_type: ChunkType, stored: u32, computed: u32 },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use StructureError::*;
        match self {
            TooSmall { have, need } =>
                write!(f, "container too small: {} < {}", have, need),
            InvalidSignature { have } =>
                write!(f, "invalid container signature: {}", fmt_bytes(have)),
            MissingHeader { found, len } =>
                write!(f, "missing header chunk: first chunk is {} with {} bytes", found, len),
            InvalidHeader(fault) =>
                write!(f, "invalid header record: {}", fault),
            DuplicateHeader { offset } =>
                write!(f, "duplicate header chunk at offset {}", offset),
            MissingTerminator { chunks } =>
                write!(f, "no terminator chunk after {} chunks", chunks),
            InvalidTerminator { offset, len } =>
                write!(f, "terminator chunk at offset {} carries {} data bytes", offset, len),
            OversizedChunk { offset, declared, max } =>
                write!(f, "oversized chunk at offset {}: {} > {}", offset, declared, max),
            TooManyChunks { max } =>
                write!(f, "too many chunks: more than {} before terminator", max),
            Truncated { offset, need, have } =>
                write!(f, "truncated chunk at offset {}: need {} bytes, have {}", offset, need, have),
            InvalidChunkType { offset, tag } =>
                write!(f, "invalid chunk type at offset {}: {}", offset, fmt_bytes(tag)),
            ChecksumMismatch { offset, chunk_type, stored, computed } =>
                write!(f, "crc mismatch in {} at offset {}: stored 0x{:08x}, computed 0x{:08x}",
                    chunk_type, offset, stored, computed),
        }
    }
}

impl std::error::Error for StructureError {}

impl From<ChunkError> for StructureError {
    fn from(e: ChunkError) -> Self {
        match e {
            ChunkError::OutOfBounds { offset, need, have } =>
                StructureError::Truncated { offset, need, have },
            ChunkError::Oversized { offset, declared, max } =>
                StructureError::OversizedChunk { offset, declared, max },
            ChunkError::DataTooLarge { len, max } =>
                StructureError::OversizedChunk {
                    offset: 0,
                    declared: u32::try_from(len).unwrap_or(u32::MAX),
                    max,
                },
        }
    }
}

impl From<HeaderFault> for StructureError {
    fn from(fault: HeaderFault) -> Self {
        StructureError::InvalidHeader(fault)
    }
}

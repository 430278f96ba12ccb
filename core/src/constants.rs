//! constants.rs
//! Wire constants and default ceilings for the blueprint container.
//!
//! All multi-byte integers on the wire are big-endian.

/// Fixed leading signature of every container (PNG signature).
pub const CONTAINER_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
pub const SIGNATURE_LEN: usize = CONTAINER_SIGNATURE.len();

/// Magic literal that must open every trailing blueprint payload.
pub const BLUEPRINT_MAGIC: [u8; 17] = *b"FACTORY-BLUEPRINT";
pub const BLUEPRINT_MAGIC_LEN: usize = BLUEPRINT_MAGIC.len();

/// Chunk type tags used by the container.
pub mod tags {
    /// Mandatory first chunk (raster metadata record).
    pub const HEADER: [u8; 4] = *b"IHDR";
    /// Pixel data.
    pub const DATA: [u8; 4] = *b"IDAT";
    /// Terminator, ends the raster region.
    pub const TERMINATOR: [u8; 4] = *b"IEND";
    /// Reserved ancillary, private, safe-to-copy watermark chunk.
    pub const BRANDING: [u8; 4] = *b"bpWm";
}

/// length(4) + type(4) + crc(4)
pub const CHUNK_OVERHEAD: usize = 12;

/// Exact data length of the header chunk.
pub const HEADER_DATA_LEN: usize = 13;

/// Exact data length of the terminator chunk.
pub const TERMINATOR_DATA_LEN: usize = 0;

/// Smallest structurally valid container: signature + header chunk + terminator chunk.
pub const MIN_CONTAINER_LEN: usize =
    SIGNATURE_LEN + (CHUNK_OVERHEAD + HEADER_DATA_LEN) + (CHUNK_OVERHEAD + TERMINATOR_DATA_LEN);

/// Hard ceiling on a single chunk's declared length.
pub const MAX_CHUNK_LEN: u32 = 1_000_000_000;

/// Hard ceiling on chunks walked before the terminator (terminator included).
pub const MAX_CHUNKS: usize = 1000;

/// Width/height ceiling of the raster header.
pub const MAX_DIMENSION: u32 = 0x7FFF_FFFF;

/// Branding chunk payload must be strictly smaller than this.
pub const MAX_BRANDING_LEN: usize = 1024;

/// Upload pre-check ceilings for the blueprint payload class.
pub const MIN_UPLOAD_BYTES: usize = 100;
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Extension every blueprint upload must carry.
pub const BLUEPRINT_EXTENSION: &str = "af";

/// Length of the all-null prefix that is treated as a disguised container.
pub const NULL_PREFIX_LEN: usize = 16;

/// Encoded terminator chunk: zero length, `IEND`, CRC 0xAE426082.
pub const TERMINATOR_CHUNK: [u8; 12] = [
    0x00, 0x00, 0x00, 0x00, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82,
];

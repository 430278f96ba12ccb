//! branding/types.rs

use std::fmt;

use crate::chunk::ChunkError;
use crate::container::StructureError;

/// Outcome of a typed embed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmbedOutcome {
    /// New buffer with the branding chunk spliced before the terminator.
    Embedded(Vec<u8>),
    /// Input already carries a branding chunk; nothing was written.
    AlreadyBranded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandingError {
    /// Input does not open with the container signature.
    NotAContainer,

    /// Branding image is empty.
    EmptyBranding,

    /// Branding image is not smaller than the ceiling.
    BrandingTooLarge { have: usize, max: usize },

    /// No terminator chunk found while walking.
    NoTerminator,

    /// Chunk walk failed before the terminator.
    Walk(StructureError),

    /// Branding chunk could not be encoded.
    Encode(ChunkError),
}

impl fmt::Display for BrandingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BrandingError::*;
        match self {
            NotAContainer => write!(f, "input is not a container"),
            EmptyBranding => write!(f, "branding image is empty"),
            BrandingTooLarge { have, max } =>
                write!(f, "branding image too large: {} >= {}", have, max),
            NoTerminator => write!(f, "no terminator chunk to brand before"),
            Walk(e) => write!(f, "chunk walk failed: {}", e),
            Encode(e) => write!(f, "branding chunk encode failed: {}", e),
        }
    }
}

impl std::error::Error for BrandingError {}

impl From<StructureError> for BrandingError {
    fn from(e: StructureError) -> Self {
        BrandingError::Walk(e)
    }
}

impl From<ChunkError> for BrandingError {
    fn from(e: ChunkError) -> Self {
        BrandingError::Encode(e)
    }
}

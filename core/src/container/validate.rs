//! container/validate.rs
//!
//! Structural validation of an untrusted container.
//!
//! Order of checks:
//! 1. minimum length (signature + header chunk + terminator chunk)
//! 2. leading signature
//! 3. first chunk is the header chunk with its exact fixed length, and the
//!    record is a legal bit-depth/color-mode combination
//! 4. remaining chunks up to the first terminator, bounded by chunk count and
//!    per-chunk length; no second header; CRCs verified when enforced
//!
//! Every input is an anonymous upload. The ceilings turn a declared
//! "chunk the size of memory" into a deterministic rejection.

use tracing::debug;

use crate::chunk::{ChunkType, ChunkView};
use crate::constants::{CONTAINER_SIGNATURE, HEADER_DATA_LEN, MIN_CONTAINER_LEN, SIGNATURE_LEN, TERMINATOR_DATA_LEN};
use crate::container::types::{ContainerLayout, ContainerLimits, ImageHeader, StructureError};
use crate::container::walker::ChunkWalker;

/// Validate with the default ceilings.
#[inline]
pub fn validate(buf: &[u8]) -> Result<ContainerLayout, StructureError> {
    validate_with_limits(buf, &ContainerLimits::default())
}

pub fn validate_with_limits(
    buf: &[u8],
    limits: &ContainerLimits,
) -> Result<ContainerLayout, StructureError> {
    if buf.len() < MIN_CONTAINER_LEN {
        return Err(StructureError::TooSmall { have: buf.len(), need: MIN_CONTAINER_LEN });
    }

    let mut signature = [0u8; SIGNATURE_LEN];
    signature.copy_from_slice(&buf[..SIGNATURE_LEN]);
    if signature != CONTAINER_SIGNATURE {
        return Err(StructureError::InvalidSignature { have: signature });
    }

    let mut walker = ChunkWalker::new(buf, *limits);

    // --- mandatory header ---
    let first = walker.next().ok_or(StructureError::MissingTerminator { chunks: 0 })??;
    if first.chunk_type != ChunkType::HEADER || first.data_len() != HEADER_DATA_LEN {
        return Err(StructureError::MissingHeader {
            found: first.chunk_type,
            len: first.data_len(),
        });
    }
    check_crc(&first, limits)?;
    let header = ImageHeader::decode(first.data)?;

    // --- chunk stream up to the terminator ---
    let mut branding_offset = None;
    while let Some(item) = walker.next() {
        let chunk = item?;
        check_crc(&chunk, limits)?;

        match chunk.chunk_type {
            ChunkType::HEADER => {
                return Err(StructureError::DuplicateHeader { offset: chunk.offset });
            }
            ChunkType::TERMINATOR => {
                if chunk.data_len() != TERMINATOR_DATA_LEN {
                    return Err(StructureError::InvalidTerminator {
                        offset: chunk.offset,
                        len: chunk.data_len(),
                    });
                }
                let layout = ContainerLayout {
                    header,
                    terminator_offset: chunk.offset,
                    terminator_end: chunk.end(),
                    chunk_count: walker.walked(),
                    branding_offset,
                };
                debug!(
                    chunks = layout.chunk_count,
                    terminator_offset = layout.terminator_offset,
                    trailing = layout.trailing_len(buf.len()),
                    "container structure valid"
                );
                return Ok(layout);
            }
            ChunkType::BRANDING if branding_offset.is_none() => {
                branding_offset = Some(chunk.offset);
            }
            _ => {}
        }
    }

    Err(StructureError::MissingTerminator { chunks: walker.walked() })
}

fn check_crc(chunk: &ChunkView<'_>, limits: &ContainerLimits) -> Result<(), StructureError> {
    if !limits.enforce_crc {
        return Ok(());
    }
    let computed = chunk.computed_crc();
    if computed != chunk.crc {
        return Err(StructureError::ChecksumMismatch {
            offset: chunk.offset,
            chunk_type: chunk.chunk_type,
            stored: chunk.crc,
            computed,
        });
    }
    Ok(())
}

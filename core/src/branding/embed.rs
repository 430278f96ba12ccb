//! branding/embed.rs
//!
//! Insert and read the ancillary watermark chunk.
//!
//! `embed_branding` is best-effort: any internal fault hands back the input
//! unchanged. Every other operation in this crate propagates a typed error;
//! `try_embed_branding` is the typed form for callers that want the reason.

use tracing::{debug, warn};

use crate::chunk::{append_chunk, ChunkType};
use crate::constants::{CONTAINER_SIGNATURE, CHUNK_OVERHEAD, MAX_BRANDING_LEN};
use crate::container::{ChunkWalker, ContainerLimits};
use crate::branding::types::{BrandingError, EmbedOutcome};

/// Splice a branding chunk immediately before the terminator.
///
/// Never fails: on any fault, or when the input is already branded, a copy of
/// the input is returned.
pub fn embed_branding(buf: &[u8], branding: &[u8]) -> Vec<u8> {
    match try_embed_branding(buf, branding) {
        Ok(EmbedOutcome::Embedded(out)) => out,
        Ok(EmbedOutcome::AlreadyBranded) => {
            debug!("container already branded, leaving untouched");
            buf.to_vec()
        }
        Err(e) => {
            warn!(error = %e, "branding skipped");
            buf.to_vec()
        }
    }
}

/// Typed form of [`embed_branding`].
///
/// The input is expected to be this crate's own output, so only the chunk
/// stream is walked; CRCs are not re-verified.
pub fn try_embed_branding(buf: &[u8], branding: &[u8]) -> Result<EmbedOutcome, BrandingError> {
    if branding.is_empty() {
        return Err(BrandingError::EmptyBranding);
    }
    if branding.len() >= MAX_BRANDING_LEN {
        return Err(BrandingError::BrandingTooLarge { have: branding.len(), max: MAX_BRANDING_LEN });
    }
    if !buf.starts_with(&CONTAINER_SIGNATURE) {
        return Err(BrandingError::NotAContainer);
    }

    let Some(terminator_offset) = locate_terminator(buf)? else {
        return Ok(EmbedOutcome::AlreadyBranded);
    };

    let mut out = Vec::with_capacity(buf.len() + CHUNK_OVERHEAD + branding.len());
    out.extend_from_slice(&buf[..terminator_offset]);
    append_chunk(&mut out, ChunkType::BRANDING, branding)?;
    out.extend_from_slice(&buf[terminator_offset..]);

    debug!(bytes = branding.len(), at = terminator_offset, "branding embedded");
    Ok(EmbedOutcome::Embedded(out))
}

/// Offset of the terminator, or `None` if a branding chunk precedes it.
fn locate_terminator(buf: &[u8]) -> Result<Option<usize>, BrandingError> {
    let limits = ContainerLimits { enforce_crc: false, ..ContainerLimits::default() };
    for item in ChunkWalker::new(buf, limits) {
        let chunk = item?;
        if chunk.chunk_type == ChunkType::BRANDING {
            return Ok(None);
        }
        if chunk.chunk_type == ChunkType::TERMINATOR {
            return Ok(Some(chunk.offset));
        }
    }
    Err(BrandingError::NoTerminator)
}

/// Return the data of the first branding chunk before the terminator.
///
/// `None` when the terminator comes first, the input is not a container, the
/// walk fails, or the branding chunk's CRC does not verify.
pub fn extract_branding(buf: &[u8]) -> Option<Vec<u8>> {
    if !buf.starts_with(&CONTAINER_SIGNATURE) {
        return None;
    }
    for item in ChunkWalker::new(buf, ContainerLimits::default()) {
        let chunk = item.ok()?;
        if chunk.chunk_type == ChunkType::TERMINATOR {
            return None;
        }
        if chunk.chunk_type == ChunkType::BRANDING {
            return chunk.crc_ok().then(|| chunk.data.to_vec());
        }
    }
    None
}

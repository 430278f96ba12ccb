//! payload/extract.rs
//!
//! Split a validated container into raster and trailing payload, and strip it
//! down to the smallest container that still carries the payload.
//!
//! The stripped artifact is `signature ‖ header chunk ‖ terminator chunk ‖ payload`.
//! Every chunk between header and terminator (pixel data, branding, text) is
//! dropped, so the output is still a valid container and still a blueprint.

use tracing::debug;

use crate::constants::{BLUEPRINT_MAGIC, BLUEPRINT_MAGIC_LEN, CHUNK_OVERHEAD, HEADER_DATA_LEN, SIGNATURE_LEN};
use crate::container::{validate_with_limits, ContainerLayout, ContainerLimits, StructureError};
use crate::payload::types::{ContainerParts, ExtractedPayload, PayloadError};

/// End offset of the header chunk (fixed: signature + 12 + 13).
const HEADER_CHUNK_END: usize = SIGNATURE_LEN + CHUNK_OVERHEAD + HEADER_DATA_LEN;

/// Validate `buf` and cut it at the end of the terminator chunk.
pub fn split(buf: &[u8]) -> Result<ContainerParts<'_>, StructureError> {
    let layout = validate_with_limits(buf, &ContainerLimits::default())?;
    Ok(split_at_layout(buf, &layout))
}

/// Cut `buf` using an already established layout.
#[inline]
pub fn split_at_layout<'a>(buf: &'a [u8], layout: &ContainerLayout) -> ContainerParts<'a> {
    let (raster, payload) = buf.split_at(layout.terminator_end.min(buf.len()));
    ContainerParts { raster, payload }
}

/// Check that `payload` opens with the blueprint magic.
pub fn verify_payload_signature(payload: &[u8]) -> Result<(), PayloadError> {
    if payload.is_empty() {
        return Err(PayloadError::NoPayload);
    }
    if !payload.starts_with(&BLUEPRINT_MAGIC) {
        let prefix = payload[..payload.len().min(BLUEPRINT_MAGIC_LEN)].to_vec();
        return Err(PayloadError::BadPayloadSignature { prefix });
    }
    Ok(())
}

/// Strip a container with the default ceilings.
#[inline]
pub fn extract(buf: &[u8]) -> Result<ExtractedPayload, PayloadError> {
    extract_with_limits(buf, &ContainerLimits::default())
}

pub fn extract_with_limits(
    buf: &[u8],
    limits: &ContainerLimits,
) -> Result<ExtractedPayload, PayloadError> {
    let layout = validate_with_limits(buf, limits)?;
    extract_at_layout(buf, &layout)
}

/// Strip a container whose layout has already been validated.
pub fn extract_at_layout(buf: &[u8], layout: &ContainerLayout) -> Result<ExtractedPayload, PayloadError> {
    let parts = split_at_layout(buf, layout);
    verify_payload_signature(parts.payload)?;

    let terminator = &buf[layout.terminator_offset..layout.terminator_end];
    let mut stripped = Vec::with_capacity(HEADER_CHUNK_END + terminator.len() + parts.payload.len());
    stripped.extend_from_slice(&buf[..HEADER_CHUNK_END]); // signature + header chunk
    stripped.extend_from_slice(terminator);
    stripped.extend_from_slice(parts.payload);

    let extracted = ExtractedPayload::new(stripped, buf.len());
    debug!(
        original = extracted.original_size,
        stripped = extracted.stripped_size,
        ratio = extracted.compression_ratio_percent,
        "payload extracted"
    );
    Ok(extracted)
}

//! payload/attach.rs
//! Build a dual-purpose artifact from a cover raster and a blueprint payload.

use crate::container::validate;
use crate::payload::extract::{split_at_layout, verify_payload_signature};
use crate::payload::types::PayloadError;

/// Append `payload` after the terminator of `cover`.
///
/// The cover must validate; anything already trailing its terminator is
/// discarded so the result carries exactly one payload. The payload must open
/// with the blueprint magic.
pub fn attach_payload(cover: &[u8], payload: &[u8]) -> Result<Vec<u8>, PayloadError> {
    verify_payload_signature(payload)?;
    let layout = validate(cover)?;
    let raster = split_at_layout(cover, &layout).raster;

    let mut out = Vec::with_capacity(raster.len() + payload.len());
    out.extend_from_slice(raster);
    out.extend_from_slice(payload);
    Ok(out)
}

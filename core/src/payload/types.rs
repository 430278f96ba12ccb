//! payload/types.rs
//! Split views, the extraction summary handed to collaborators, and payload errors.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Serialize, Serializer};

use crate::constants::BLUEPRINT_MAGIC;
use crate::container::StructureError;
use crate::utils::{fmt_bytes, reduction_percent};

/// A validated container cut at the end of its terminator chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerParts<'a> {
    /// Signature through terminator chunk.
    pub raster: &'a [u8],
    /// Everything after the terminator (possibly empty).
    pub payload: &'a [u8],
}

/// Result of stripping a container down to header + terminator + payload.
///
/// `stripped_size` and `compression_ratio_percent` always describe the
/// stripped artifact. When branding was added afterwards, `stripped_payload`
/// holds the branded bytes and `branded_size` their length.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedPayload {
    #[serde(serialize_with = "as_base64")]
    pub stripped_payload: Vec<u8>,
    pub original_size: usize,
    pub stripped_size: usize,
    pub compression_ratio_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branded_size: Option<usize>,
}

impl ExtractedPayload {
    pub fn new(stripped_payload: Vec<u8>, original_size: usize) -> Self {
        let stripped_size = stripped_payload.len();
        Self {
            stripped_payload,
            original_size,
            stripped_size,
            compression_ratio_percent: reduction_percent(original_size, stripped_size),
            branded_size: None,
        }
    }

    /// Swap in the branded artifact. Sizes of the stripped artifact are kept;
    /// an unchanged buffer (branding skipped) records nothing.
    pub fn with_branding(mut self, branded: Vec<u8>) -> Self {
        if branded != self.stripped_payload {
            self.branded_size = Some(branded.len());
            self.stripped_payload = branded;
        }
        self
    }

    /// Bytes saved by stripping.
    pub fn saved_bytes(&self) -> usize {
        self.original_size.saturating_sub(self.stripped_size)
    }
}

fn as_base64<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&STANDARD.encode(bytes))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The container itself is malformed.
    Structure(StructureError),

    /// Nothing follows the terminator.
    NoPayload,

    /// Trailing bytes do not open with the blueprint magic.
    /// `prefix` holds up to the first 17 bytes found.
    BadPayloadSignature { prefix: Vec<u8> },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PayloadError::*;
        match self {
            Structure(e) => write!(f, "{}", e),
            NoPayload => write!(f, "no blueprint payload after terminator"),
            BadPayloadSignature { prefix } =>
                write!(f, "bad payload signature: expected {}, got {}",
                    fmt_bytes(&BLUEPRINT_MAGIC), fmt_bytes(prefix)),
        }
    }
}

impl std::error::Error for PayloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PayloadError::Structure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StructureError> for PayloadError {
    fn from(e: StructureError) -> Self {
        PayloadError::Structure(e)
    }
}

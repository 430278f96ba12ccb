//! blueprint-core
//!
//! Container guard for blueprint uploads: a PNG-style raster preview with the
//! blueprint payload appended after the terminator chunk.
//! Pure functions over in-memory buffers. No I/O, no shared state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Container format
pub mod chunk;
pub mod container;
pub mod payload;
pub mod branding;

// Defense in depth
pub mod threat;
pub mod policy;

pub mod telemetry;
pub mod pipeline;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::branding::{embed_branding, extract_branding, try_embed_branding, EmbedOutcome};
    pub use crate::chunk::{decode_chunk, encode_chunk, ChunkType, ChunkView};
    pub use crate::config::GuardConfig;
    pub use crate::container::{validate, validate_with_limits, ContainerLayout, ContainerLimits, StructureError};
    pub use crate::payload::{attach_payload, extract, ExtractedPayload, PayloadError};
    pub use crate::pipeline::{inspect_upload, inspect_upload_branded, Inspection, UploadReport};
    pub use crate::policy::{check_filename, check_size, PolicyError};
    pub use crate::threat::{scan_content, scan_signature, ScanOutcome, Threat, ThreatKind};
    pub use crate::types::{ErrorCode, GuardError, Verdict};
}

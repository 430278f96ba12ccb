//! payload/mod.rs
//! Payload splitter/extractor.
//!
//! Responsibilities:
//! - Cut a validated container at its terminator
//! - Verify the blueprint magic on the trailing bytes
//! - Re-emit the minimal container (anti-bloat strip)
//! - Attach a payload to a cover
//!
//! Non-responsibilities:
//! - Interpreting the payload schema
//! - Decoding pixel data

pub mod types;
pub mod extract;
pub mod attach;

pub use types::{ContainerParts, ExtractedPayload, PayloadError};
pub use extract::{extract, extract_at_layout, extract_with_limits, split, split_at_layout, verify_payload_signature};
pub use attach::attach_payload;

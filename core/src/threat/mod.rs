//! threat/mod.rs
//! Stateless threat scanner.
//!
//! Two tiers:
//! - signature: denylist of foreign formats at fixed offsets, authoritative
//! - content: command-interpreter substrings, advisory (adds threat records)

pub mod types;
pub mod signatures;
pub mod content;

pub use types::{ScanOutcome, Threat, ThreatKind};
pub use signatures::{scan_signature, Signature, DENYLIST};
pub use content::{content_threats, scan_content, DANGEROUS_STRINGS};

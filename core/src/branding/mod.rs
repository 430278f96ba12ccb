//! branding/mod.rs
//! Branding embedder: one ancillary `bpWm` chunk carrying a small secondary
//! image, inserted at most once directly before the terminator. Generic
//! readers skip it because the tag is ancillary.

pub mod types;
pub mod embed;

pub use types::{BrandingError, EmbedOutcome};
pub use embed::{embed_branding, extract_branding, try_embed_branding};

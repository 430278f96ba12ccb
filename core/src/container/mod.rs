//! container/mod.rs
//! Container walker and structural validator.
//!
//! A container is the 8-byte signature followed by chunks, ending the raster
//! region at exactly one terminator chunk. Anything after the terminator is
//! the trailing payload and is not interpreted here.

pub mod types;
pub mod header;
pub mod walker;
pub mod validate;
pub mod builder;

pub use types::*;
pub use walker::ChunkWalker;
pub use builder::ContainerBuilder;
pub use validate::{validate, validate_with_limits};

//! chunk/mod.rs
//! Codec for a single length-prefixed, typed, CRC-checked chunk.
//!
//! Wire layout (big-endian):
//!
//! ```text
//! [ length (4) ][ type (4) ][ data (length) ][ crc32 (4) ]
//! ```
//!
//! The CRC covers `type ‖ data`. Decoding borrows from the input buffer and
//! never allocates, so a declared length can only cost a bounds check.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;

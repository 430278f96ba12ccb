//! container/builder.rs
//! Assemble a container chunk by chunk: signature, header, caller chunks, terminator.

use crate::chunk::{append_chunk, ChunkError, ChunkType};
use crate::constants::{CONTAINER_SIGNATURE, TERMINATOR_CHUNK};
use crate::container::types::ImageHeader;

#[derive(Debug, Clone)]
pub struct ContainerBuilder {
    out: Vec<u8>,
}

impl ContainerBuilder {
    /// Start a container with the signature and the given header record.
    pub fn new(header: ImageHeader) -> Self {
        let mut out = Vec::with_capacity(64);
        out.extend_from_slice(&CONTAINER_SIGNATURE);
        // 13 bytes never exceed the length ceiling.
        let _ = append_chunk(&mut out, ChunkType::HEADER, &header.encode());
        Self { out }
    }

    /// Append one chunk between header and terminator.
    pub fn push(&mut self, chunk_type: ChunkType, data: &[u8]) -> Result<&mut Self, ChunkError> {
        append_chunk(&mut self.out, chunk_type, data)?;
        Ok(self)
    }

    /// Close the raster region with the terminator.
    pub fn finish(mut self) -> Vec<u8> {
        self.out.extend_from_slice(&TERMINATOR_CHUNK);
        self.out
    }
}

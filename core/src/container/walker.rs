//! container/walker.rs
//! Bounded iteration over the chunk stream that follows the signature.

use crate::chunk::{decode_chunk_with_limit, ChunkType, ChunkView};
use crate::constants::SIGNATURE_LEN;
use crate::container::types::{ContainerLimits, StructureError};

/// Walks chunks from offset 8 until the terminator, the end of the buffer,
/// the first error, or the chunk ceiling.
///
/// The walker does not check the signature or CRCs; `validate` layers those
/// policies on top. After yielding the terminator or an error it is fused.
#[derive(Debug, Clone)]
pub struct ChunkWalker<'a> {
    buf: &'a [u8],
    offset: usize,
    limits: ContainerLimits,
    walked: usize,
    done: bool,
}

impl<'a> ChunkWalker<'a> {
    pub fn new(buf: &'a [u8], limits: ContainerLimits) -> Self {
        Self { buf, offset: SIGNATURE_LEN, limits, walked: 0, done: false }
    }

    /// Chunks successfully decoded so far.
    #[inline]
    pub fn walked(&self) -> usize {
        self.walked
    }

    fn fail(&mut self, e: StructureError) -> Option<Result<ChunkView<'a>, StructureError>> {
        self.done = true;
        Some(Err(e))
    }
}

impl<'a> Iterator for ChunkWalker<'a> {
    type Item = Result<ChunkView<'a>, StructureError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.buf.len() {
            self.done = true;
            return None;
        }
        if self.walked >= self.limits.max_chunks {
            return self.fail(StructureError::TooManyChunks { max: self.limits.max_chunks });
        }

        let chunk = match decode_chunk_with_limit(self.buf, self.offset, self.limits.max_chunk_len) {
            Ok(chunk) => chunk,
            Err(e) => return self.fail(e.into()),
        };
        if !chunk.chunk_type.is_well_formed() {
            return self.fail(StructureError::InvalidChunkType {
                offset: chunk.offset,
                tag: chunk.chunk_type.0,
            });
        }

        self.walked += 1;
        self.offset = chunk.end();
        if chunk.chunk_type == ChunkType::TERMINATOR {
            self.done = true;
        }
        Some(Ok(chunk))
    }
}

impl std::iter::FusedIterator for ChunkWalker<'_> {}

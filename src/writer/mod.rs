//! Stream writer: joins chunks back into a complete PNG byte buffer

use crate::chunk::Chunk;
use crate::utils::PNG_SIGNATURE;
use crate::{ChunkError, ChunkResult};

/// Serialize a chunk sequence into a PNG buffer.
///
/// Emits the signature followed by each chunk's full record in order,
/// with nothing in between. Every chunk is validity-checked before any
/// byte is produced; a single bad chunk fails the whole write with
/// [`ChunkError::InvalidChunk`]. Chunks are taken by reference and never
/// mutated.
///
/// A sequence obtained from [`crate::split_chunks`] with
/// [`crate::ChunkFilter::All`] serializes back to the original file
/// byte for byte.
pub fn write_png(chunks: &[Chunk<'_>]) -> ChunkResult<Vec<u8>> {
    for (index, chunk) in chunks.iter().enumerate() {
        if !chunk.is_valid() {
            return Err(ChunkError::InvalidChunk(index));
        }
    }

    let total: usize = chunks.iter().map(|c| c.as_bytes().len()).sum();
    let mut image = Vec::with_capacity(8 + total);
    image.extend_from_slice(&PNG_SIGNATURE);
    for chunk in chunks {
        image.extend_from_slice(chunk.as_bytes());
    }

    Ok(image)
}

//! Stream parser: walks a PNG buffer and splits it into validated chunks

use crate::chunk::Chunk;
use crate::chunk::kind::ChunkFilter;
use crate::utils::{is_png_signature, read_u32_be};
use crate::{ChunkError, ChunkResult};

const IEND: [u8; 4] = *b"IEND";

/// Split a PNG buffer into its chunks, keeping those the filter matches.
///
/// The buffer must start with the PNG signature. Every materialized chunk
/// is CRC-verified and a mismatch aborts the whole parse; chunks the
/// filter skips are stepped over without being checked. Parsing stops
/// after the IEND chunk, so trailing bytes beyond it are tolerated.
///
/// The returned chunks borrow `image`.
pub fn split_chunks(image: &[u8], filter: ChunkFilter) -> ChunkResult<Vec<Chunk<'_>>> {
    if !is_png_signature(image) {
        return Err(ChunkError::InvalidSignature);
    }

    let mut chunks = Vec::new();
    let mut index = 8;

    while index < image.len() {
        // The length and type fields must be present before reading them.
        if image.len() - index < 8 {
            return Err(ChunkError::TruncatedChunk(index));
        }

        let length = read_u32_be(image, index) as usize;

        // The data and CRC regions must fit in what remains.
        if image.len() - index < 12 || image.len() - index - 12 < length {
            return Err(ChunkError::TruncatedChunk(index));
        }

        let chunk_type = [
            image[index + 4],
            image[index + 5],
            image[index + 6],
            image[index + 7],
        ];

        if filter.matches(&chunk_type) {
            chunks.push(Chunk::parse(&image[index..index + 12 + length])?);
        }

        index += 12 + length;

        if chunk_type == IEND {
            break;
        }
    }

    Ok(chunks)
}

/// Non-erroring form of [`split_chunks`].
///
/// Applies the identical parsing logic and returns `None` on any abort
/// condition, never a partial sequence.
pub fn try_split_chunks(image: &[u8], filter: ChunkFilter) -> Option<Vec<Chunk<'_>>> {
    split_chunks(image, filter).ok()
}

//! # png-chunks
//!
//! This library parses, validates, and re-serializes the chunk structure of
//! PNG files without decoding any pixel data. A PNG file is an 8-byte
//! signature followed by length-prefixed, typed, CRC-protected chunks, and
//! everything here operates on that container level only.
//!
//! Parsing produces [`Chunk`] views that borrow the input buffer, so a full
//! parse allocates nothing beyond the output vector. [`write_png`] turns a
//! chunk sequence back into a byte-exact file, and [`ChunkBuf`] builds fresh
//! chunks with their CRC computed up front.

// Public API exports
pub mod chunk;
pub mod reader;
pub mod utils;
pub mod writer;

pub use chunk::kind::{ChunkFilter, is_additional, is_ancillary, is_critical};
pub use chunk::{Chunk, ChunkBuf};
pub use reader::{split_chunks, try_split_chunks};
pub use writer::write_png;

/// Result type alias for chunk operations
pub type ChunkResult<T> = Result<T, ChunkError>;

/// Error type covering every failure the codec distinguishes
#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    #[error("not a PNG: bad or missing signature")]
    InvalidSignature,

    #[error("truncated chunk at byte offset {0}")]
    TruncatedChunk(usize),

    #[error("malformed chunk: {0}")]
    MalformedChunk(String),

    #[error("CRC mismatch in chunk {0}")]
    CrcMismatch(String),

    #[error("chunk type must be exactly 4 bytes, got {0}")]
    InvalidTypeLength(usize),

    #[error("invalid chunk at index {0} in output sequence")]
    InvalidChunk(usize),
}

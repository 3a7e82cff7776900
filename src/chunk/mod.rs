//! Chunk codec: borrowed views over single chunk regions and owned
//! construction of fresh chunks

pub mod kind;

use std::fmt;

use crate::utils::{calculate_crc32, read_u32_be, write_u32_be};
use crate::{ChunkError, ChunkResult};

/// One PNG chunk, borrowed from a parsed buffer.
///
/// Wraps the complete record: a 4-byte big-endian data length, the 4-byte
/// type tag, `length` data bytes, and a 4-byte CRC computed over type and
/// data. All part accessors are zero-copy slices into the source buffer,
/// so a `Chunk` is only usable while that buffer lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    raw: &'a [u8],
}

impl<'a> Chunk<'a> {
    /// Parse and validate one complete chunk region.
    ///
    /// The region must be exactly `12 + length` bytes for its declared
    /// length and carry a matching CRC. Regions shorter than 12 bytes are
    /// malformed; there is no partial-chunk support.
    pub fn parse(raw: &'a [u8]) -> ChunkResult<Self> {
        if raw.len() < 12 {
            return Err(ChunkError::MalformedChunk(format!(
                "chunk region is {} bytes, minimum is 12",
                raw.len()
            )));
        }

        let declared = read_u32_be(raw, 0) as usize;
        if raw.len() - 12 != declared {
            return Err(ChunkError::MalformedChunk(format!(
                "declared data length {} does not match region of {} bytes",
                declared,
                raw.len()
            )));
        }

        let chunk = Self { raw };
        if chunk.crc() != chunk.calculated_crc() {
            return Err(ChunkError::CrcMismatch(chunk.type_string()));
        }

        Ok(chunk)
    }

    /// Non-erroring form of [`Chunk::parse`]: `None` on any failure.
    pub fn try_parse(raw: &'a [u8]) -> Option<Self> {
        Self::parse(raw).ok()
    }

    /// Wrap a region without validating it.
    ///
    /// Accessors on the result may panic unless [`Chunk::is_valid`] holds;
    /// callers that defer validation must check it before anything else.
    pub fn from_raw(raw: &'a [u8]) -> Self {
        Self { raw }
    }

    /// The whole record, length field through CRC.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    /// The 4 length bytes.
    pub fn length_part(&self) -> &'a [u8] {
        &self.raw[..4]
    }

    /// The 4 type bytes.
    pub fn type_part(&self) -> &'a [u8] {
        &self.raw[4..8]
    }

    /// The data payload.
    pub fn data_part(&self) -> &'a [u8] {
        &self.raw[8..self.raw.len() - 4]
    }

    /// The 4 CRC bytes.
    pub fn crc_part(&self) -> &'a [u8] {
        &self.raw[self.raw.len() - 4..]
    }

    /// The type tag as a fixed 4-byte array.
    pub fn chunk_type(&self) -> [u8; 4] {
        [self.raw[4], self.raw[5], self.raw[6], self.raw[7]]
    }

    /// The declared data length.
    pub fn data_len(&self) -> u32 {
        read_u32_be(self.raw, 0)
    }

    /// The stored CRC field.
    pub fn crc(&self) -> u32 {
        read_u32_be(self.raw, self.raw.len() - 4)
    }

    /// CRC freshly computed over the type and data bytes.
    pub fn calculated_crc(&self) -> u32 {
        calculate_crc32(&self.raw[4..self.raw.len() - 4])
    }

    /// The type tag as text (lossy UTF-8).
    pub fn type_string(&self) -> String {
        String::from_utf8_lossy(self.type_part()).into_owned()
    }

    /// The data payload as text (lossy UTF-8).
    pub fn data_string(&self) -> String {
        String::from_utf8_lossy(self.data_part()).into_owned()
    }

    /// Re-derive the length and CRC invariants from the live bytes.
    pub fn is_valid(&self) -> bool {
        self.raw.len() >= 12
            && self.raw.len() - 12 == read_u32_be(self.raw, 0) as usize
            && self.crc() == self.calculated_crc()
    }
}

impl fmt::Display for Chunk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_string(), self.data_string())
    }
}

/// An owned chunk built from a type tag and a data payload.
///
/// The length and CRC fields are filled in at construction, never taken
/// from the caller, so the backing bytes always form a valid record. To
/// change the type or data of an existing chunk, build a replacement; no
/// in-place mutation is offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkBuf {
    raw: Vec<u8>,
}

impl ChunkBuf {
    /// Build a chunk from a 4-byte type tag and a payload.
    pub fn new(chunk_type: &[u8], data: &[u8]) -> ChunkResult<Self> {
        if chunk_type.len() != 4 {
            return Err(ChunkError::InvalidTypeLength(chunk_type.len()));
        }

        let mut raw = vec![0u8; 12 + data.len()];
        write_u32_be(&mut raw, 0, data.len() as u32);
        raw[4..8].copy_from_slice(chunk_type);
        raw[8..8 + data.len()].copy_from_slice(data);
        let crc = calculate_crc32(&raw[4..8 + data.len()]);
        write_u32_be(&mut raw, 8 + data.len(), crc);

        Ok(Self { raw })
    }

    /// Build a chunk from text, both parts encoded as UTF-8.
    pub fn from_strs(chunk_type: &str, data: &str) -> ChunkResult<Self> {
        Self::new(chunk_type.as_bytes(), data.as_bytes())
    }

    /// Build a chunk with an empty payload.
    pub fn empty(chunk_type: &[u8]) -> ChunkResult<Self> {
        Self::new(chunk_type, &[])
    }

    /// Borrow as a [`Chunk`] view.
    pub fn as_chunk(&self) -> Chunk<'_> {
        Chunk { raw: &self.raw }
    }

    /// The full serialized record.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Consume into the serialized record.
    pub fn into_bytes(self) -> Vec<u8> {
        self.raw
    }
}

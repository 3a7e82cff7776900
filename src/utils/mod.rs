//! Shared helpers: CRC-32, big-endian field access, the PNG signature

use byteorder::{BigEndian, ByteOrder};
use crc32fast::Hasher;

/// The fixed 8-byte magic number at the start of every PNG file
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Calculate CRC32 checksum for given data
pub fn calculate_crc32(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Read a big-endian u32 from byte slice
pub fn read_u32_be(bytes: &[u8], offset: usize) -> u32 {
    BigEndian::read_u32(&bytes[offset..offset + 4])
}

/// Write a big-endian u32 to byte slice
pub fn write_u32_be(bytes: &mut [u8], offset: usize, value: u32) {
    BigEndian::write_u32(&mut bytes[offset..offset + 4], value)
}

/// Validate PNG signature
pub fn is_png_signature(data: &[u8]) -> bool {
    data.len() >= 8 && data[0..8] == PNG_SIGNATURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_known_vectors() {
        assert_eq!(calculate_crc32(b""), 0);
        assert_eq!(calculate_crc32(b"Hello, World!"), 0x4AC2_B0C9);
        // CRC over the IEND tag alone, the trailer of every PNG file.
        assert_eq!(calculate_crc32(b"IEND"), 0xAE42_6082);
    }

    #[test]
    fn test_u32_be_operations() {
        let mut buf = vec![0u8; 4];
        write_u32_be(&mut buf, 0, 0xDEADBEEF);
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(read_u32_be(&buf, 0), 0xDEADBEEF);
    }

    #[test]
    fn test_u32_be_at_offset() {
        let mut buf = vec![0u8; 8];
        write_u32_be(&mut buf, 3, 0x0102_0304);
        assert_eq!(read_u32_be(&buf, 3), 0x0102_0304);
        assert_eq!(buf[0..3], [0, 0, 0]);
    }

    #[test]
    fn test_png_signature_validation() {
        assert!(is_png_signature(&PNG_SIGNATURE));

        let mut wrong = PNG_SIGNATURE;
        wrong[0] = 0x00;
        assert!(!is_png_signature(&wrong));

        assert!(!is_png_signature(&PNG_SIGNATURE[..7]));
        assert!(!is_png_signature(&[]));
    }
}

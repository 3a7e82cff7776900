//! Chunk type classification: critical, ancillary, or additional

/// The four chunk types every conforming decoder must understand
pub const CRITICAL_CHUNKS: [[u8; 4]; 4] = [*b"IHDR", *b"PLTE", *b"IDAT", *b"IEND"];

/// The optional chunk types named by the PNG specification
pub const ANCILLARY_CHUNKS: [[u8; 4]; 14] = [
    *b"cHRM", *b"gAMA", *b"iCCP", *b"sBIT", *b"sRGB", *b"bKGD", *b"hIST", *b"tRNS", *b"pHYs",
    *b"sPLT", *b"tIME", *b"iTXt", *b"tEXt", *b"zTXt",
];

/// True for IHDR, PLTE, IDAT, and IEND.
pub fn is_critical(chunk_type: &[u8; 4]) -> bool {
    CRITICAL_CHUNKS.contains(chunk_type)
}

/// True for the ancillary chunk types listed in [`ANCILLARY_CHUNKS`].
pub fn is_ancillary(chunk_type: &[u8; 4]) -> bool {
    ANCILLARY_CHUNKS.contains(chunk_type)
}

/// True for any tag in neither fixed table.
///
/// Defined as the negation of the other two predicates, so the three
/// classes partition the whole tag space.
pub fn is_additional(chunk_type: &[u8; 4]) -> bool {
    !is_critical(chunk_type) && !is_ancillary(chunk_type)
}

/// Selects which chunks a parse materializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkFilter {
    All,
    CriticalOnly,
    AncillaryOnly,
    AdditionalOnly,
    WithoutCritical,
    WithoutAncillary,
    WithoutAdditional,
}

impl ChunkFilter {
    /// Whether a chunk of the given type passes this filter.
    pub fn matches(self, chunk_type: &[u8; 4]) -> bool {
        match self {
            ChunkFilter::All => true,
            ChunkFilter::CriticalOnly => is_critical(chunk_type),
            ChunkFilter::AncillaryOnly => is_ancillary(chunk_type),
            ChunkFilter::AdditionalOnly => is_additional(chunk_type),
            ChunkFilter::WithoutCritical => !is_critical(chunk_type),
            ChunkFilter::WithoutAncillary => !is_ancillary(chunk_type),
            ChunkFilter::WithoutAdditional => !is_additional(chunk_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_critical_table() {
        for tag in &CRITICAL_CHUNKS {
            assert!(is_critical(tag));
            assert!(!is_ancillary(tag));
            assert!(!is_additional(tag));
        }
    }

    #[test]
    fn test_ancillary_table() {
        for tag in &ANCILLARY_CHUNKS {
            assert!(is_ancillary(tag));
            assert!(!is_critical(tag));
            assert!(!is_additional(tag));
        }
    }

    #[test]
    fn test_unknown_tags_are_additional() {
        for tag in [b"TEST", b"vrCd", b"abcd", b"\x00\x00\x00\x00"] {
            assert!(is_additional(tag));
            assert!(!is_critical(tag));
            assert!(!is_ancillary(tag));
        }
    }

    #[test]
    fn test_case_matters() {
        // Tags are opaque bytes; "ihdr" is not the critical IHDR.
        assert!(is_critical(b"IHDR"));
        assert!(is_additional(b"ihdr"));
        assert!(is_ancillary(b"tEXt"));
        assert!(is_additional(b"text"));
    }

    #[test]
    fn test_filter_matches_predicates() {
        assert!(ChunkFilter::All.matches(b"IHDR"));
        assert!(ChunkFilter::All.matches(b"gAMA"));
        assert!(ChunkFilter::All.matches(b"TEST"));

        assert!(ChunkFilter::CriticalOnly.matches(b"IHDR"));
        assert!(!ChunkFilter::CriticalOnly.matches(b"gAMA"));
        assert!(!ChunkFilter::CriticalOnly.matches(b"TEST"));

        assert!(ChunkFilter::AncillaryOnly.matches(b"gAMA"));
        assert!(!ChunkFilter::AncillaryOnly.matches(b"IHDR"));

        assert!(ChunkFilter::AdditionalOnly.matches(b"TEST"));
        assert!(!ChunkFilter::AdditionalOnly.matches(b"gAMA"));

        assert!(!ChunkFilter::WithoutCritical.matches(b"IDAT"));
        assert!(ChunkFilter::WithoutCritical.matches(b"tIME"));
    }

    proptest! {
        #[test]
        fn classification_partitions_tag_space(tag in proptest::array::uniform4(any::<u8>())) {
            let classes = [is_critical(&tag), is_ancillary(&tag), is_additional(&tag)];
            prop_assert_eq!(classes.iter().filter(|c| **c).count(), 1);
        }

        #[test]
        fn filters_agree_with_their_negations(tag in proptest::array::uniform4(any::<u8>())) {
            prop_assert_eq!(
                ChunkFilter::CriticalOnly.matches(&tag),
                !ChunkFilter::WithoutCritical.matches(&tag)
            );
            prop_assert_eq!(
                ChunkFilter::AncillaryOnly.matches(&tag),
                !ChunkFilter::WithoutAncillary.matches(&tag)
            );
            prop_assert_eq!(
                ChunkFilter::AdditionalOnly.matches(&tag),
                !ChunkFilter::WithoutAdditional.matches(&tag)
            );
            prop_assert!(ChunkFilter::All.matches(&tag));
        }
    }
}

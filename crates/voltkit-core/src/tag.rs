//! Tagged 64-bit index words.
//!
//! The solver shares one numeric-identifier universe between several index
//! categories (node indices, branch indices, matrix rows). A [`Tag`]
//! reserves the low bits of a word for the index payload and stamps a fixed
//! pattern into the high bits, so category membership is checkable without
//! a separate discriminant field.

use crate::error::{Error, Result};

/// Immutable bit layout for one tagged index category.
///
/// Construct once per category and share; every call is a pure function of
/// the word and the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pattern: u64,
    payload_bits: u32,
    low_mask: u64,
    high_mask: u64,
}

impl Tag {
    /// Create a tag reserving `payload_bits` low bits for payloads, with
    /// `pattern` stamped into the remaining high bits.
    ///
    /// A pattern that intrudes into the payload bits would corrupt every
    /// encoded word, so overlap is rejected here instead.
    pub fn new(pattern: u64, payload_bits: u32) -> Result<Self> {
        if payload_bits == 0 || payload_bits > 63 {
            return Err(Error::InvalidPayloadWidth(payload_bits));
        }

        let low_mask = (1u64 << payload_bits) - 1;
        let high_mask = !low_mask;

        if pattern & low_mask != 0 {
            return Err(Error::TagPatternOverlap {
                pattern,
                payload_bits,
            });
        }

        Ok(Self {
            pattern,
            payload_bits,
            low_mask,
            high_mask,
        })
    }

    /// Number of low bits reserved for payloads.
    pub fn payload_bits(self) -> u32 {
        self.payload_bits
    }

    /// Largest payload this tag can carry.
    pub fn max_payload(self) -> u64 {
        self.low_mask
    }

    /// Pack a payload into a tagged word.
    pub fn encode(self, payload: u64) -> Result<u64> {
        if payload > self.low_mask {
            return Err(Error::PayloadOverflow {
                payload,
                payload_bits: self.payload_bits,
            });
        }

        Ok(self.pattern | payload)
    }

    /// Whether the high bits of `word` carry exactly this tag's pattern.
    pub fn is_tagged(self, word: u64) -> bool {
        (self.pattern ^ (word & self.high_mask)) == 0
    }

    /// Extract the payload from a tagged word.
    ///
    /// Does not re-check the tag; gate on [`is_tagged`](Self::is_tagged)
    /// when membership is not already established by context.
    pub fn decode(self, word: u64) -> u64 {
        word & self.low_mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_bounds() {
        assert!(Tag::new(0, 1).is_ok());
        assert!(Tag::new(0, 63).is_ok());
        assert!(matches!(
            Tag::new(0, 0).unwrap_err(),
            Error::InvalidPayloadWidth(0)
        ));
        assert!(matches!(
            Tag::new(0, 64).unwrap_err(),
            Error::InvalidPayloadWidth(64)
        ));
    }

    #[test]
    fn test_pattern_overlap_rejected() {
        // Pattern bit 0 sits inside the 4 payload bits
        assert!(matches!(
            Tag::new(0x3, 4).unwrap_err(),
            Error::TagPatternOverlap { .. }
        ));
        assert!(Tag::new(0x10, 4).is_ok());
    }

    #[test]
    fn test_encode_bounds() {
        let tag = Tag::new(0, 4).unwrap();

        assert_eq!(tag.encode(15).unwrap(), 15);
        assert!(matches!(
            tag.encode(16).unwrap_err(),
            Error::PayloadOverflow {
                payload: 16,
                payload_bits: 4,
            }
        ));
        assert_eq!(tag.max_payload(), 15);
    }

    #[test]
    fn test_roundtrip() {
        let nodes = Tag::new(0x4000_0000_0000_0000, 32).unwrap();

        for payload in [0u64, 1, 42, u32::MAX as u64] {
            let word = nodes.encode(payload).unwrap();
            assert!(nodes.is_tagged(word));
            assert_eq!(nodes.decode(word), payload);
        }
    }

    #[test]
    fn test_disjoint_tags_do_not_collide() {
        let nodes = Tag::new(0x4000_0000_0000_0000, 32).unwrap();
        let branches = Tag::new(0x8000_0000_0000_0000, 32).unwrap();

        for payload in [0u64, 7, u32::MAX as u64] {
            let word = branches.encode(payload).unwrap();
            assert!(!nodes.is_tagged(word));
            assert!(branches.is_tagged(word));
        }

        // Untagged plain integers match neither
        assert!(!nodes.is_tagged(123));
        assert!(!branches.is_tagged(123));
    }
}

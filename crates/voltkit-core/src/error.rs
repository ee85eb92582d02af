//! Error types for voltkit-core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid number format: {0}")]
    InvalidNumberFormat(String),

    #[error("payload {payload} does not fit in {payload_bits} bits")]
    PayloadOverflow { payload: u64, payload_bits: u32 },

    #[error("tag pattern {pattern:#x} overlaps the {payload_bits} payload bits")]
    TagPatternOverlap { pattern: u64, payload_bits: u32 },

    #[error("payload width must be 1..=63 bits, got {0}")]
    InvalidPayloadWidth(u32),
}

pub type Result<T> = std::result::Result<T, Error>;

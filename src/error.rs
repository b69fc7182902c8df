// ─── Error ──────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackError {
    #[error("key length {0} exceeds the u16 length field")]
    KeyTooLong(usize),
    #[error("value length {0} exceeds the 12-bit length field")]
    ValueTooLarge(usize),
    #[error("value type not representable in the packed format")]
    UnsupportedType,
    #[error("truncated record: need {needed} bytes at offset {offset}, {available} available")]
    TruncatedRecord {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("unknown type tag: {0:#06b}")]
    UnknownTypeTag(u8),
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

//! Error types for Amino tags, codec, JSON envelopes and addresses.

use thiserror::Error;

use crate::tags::TypeTag;

/// Errors that can occur while decoding Amino binary data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("varint overflows u64 while reading {context}")]
    VarintOverflow { context: &'static str },

    #[error("non-canonical varint encoding for {context}")]
    NonCanonicalVarint { context: &'static str },

    #[error("value {value} out of range for {context}")]
    ValueOutOfRange { context: &'static str, value: i128 },

    #[error("invalid bool byte 0x{value:02x}")]
    InvalidBool { value: u8 },

    #[error("invalid UTF-8 in {context}")]
    InvalidUtf8 { context: &'static str },

    #[error("{field} length {len} exceeds limit {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("length prefix declares {declared} bytes but {actual} remain")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("no registered type for prefix bytes {}", hex::encode(.prefix))]
    UnknownPrefix { prefix: [u8; 4] },

    #[error(
        "disambiguation bytes {} do not match {tag} (expected {})",
        hex::encode(.found),
        hex::encode(.expected)
    )]
    DisambMismatch {
        tag: TypeTag,
        expected: [u8; 3],
        found: [u8; 3],
    },

    #[error("invalid time: {reason}")]
    InvalidTime { reason: &'static str },

    #[error("unexpected field {field} with typ3 {typ3}")]
    UnexpectedField { field: u64, typ3: u8 },
}

/// Errors that can occur while encoding Amino binary data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("invalid time: {reason}")]
    InvalidTime { reason: &'static str },
}

/// A string that is not one of the registered type tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type tag {tag:?}")]
pub struct UnknownTypeTag {
    pub tag: String,
}

/// Errors from the Amino JSON envelope.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    #[error("missing field {field:?}")]
    MissingField { field: &'static str },

    #[error("field {field:?} is not a string")]
    NotAString { field: &'static str },

    #[error(transparent)]
    UnknownTypeTag(#[from] UnknownTypeTag),

    #[error("expected type {expected}, found {found}")]
    TagMismatch { expected: TypeTag, found: TypeTag },
}

/// Errors from Bech32 address encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("bech32 error: {0}")]
    Bech32(#[from] bech32::Error),

    #[error("expected bech32 checksum, found bech32m")]
    InvalidVariant,
}

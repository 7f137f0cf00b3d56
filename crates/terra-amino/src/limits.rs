//! Wire constants and security limits for Amino encoding/decoding.
//!
//! These limits protect against resource exhaustion attacks
//! when processing untrusted input.

/// Maximum bytes for a uvarint (LEB128 can overflow u64 at 10 bytes).
pub const MAX_VARINT_BYTES: usize = 10;

/// Maximum length for string fields (16 MB).
pub const MAX_STRING_LEN: usize = 16 * 1024 * 1024;

/// Maximum length for byte slice fields (64 MB).
pub const MAX_BYTES_LEN: usize = 64 * 1024 * 1024;

/// Length of the prefix bytes that identify a registered concrete type.
pub const PREFIX_LEN: usize = 4;

/// Length of the disambiguation bytes preceding the prefix.
pub const DISAMB_LEN: usize = 3;

/// Length of a full disfix header: `0x00 || disamb || prefix`.
pub const DISFIX_HEADER_LEN: usize = 1 + DISAMB_LEN + PREFIX_LEN;

/// Earliest encodable time, 0001-01-01T00:00:00Z.
pub const MIN_TIME_SECONDS: i64 = -62_135_596_800;

/// First second past the latest encodable time, 10000-01-01T00:00:00Z.
pub const MAX_TIME_SECONDS: i64 = 253_402_300_800;

/// Largest nanosecond component of a time.
pub const MAX_TIME_NANOS: u32 = 999_999_999;

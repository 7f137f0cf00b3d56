//! Binary encoding and decoding for Amino.
//!
//! - `primitives`: varints, fixed-width integers, cursors
//! - `value`: the Amino basic types
//! - `registered`: prefix-byte framing of registered concrete types

pub mod primitives;
pub mod registered;
pub mod value;

pub use primitives::{byte_slice_size, uvarint_size, varint_size, Reader, Writer};
pub use registered::{
    decode_disamb_prefix_bytes, decode_registered, encode_registered, resolve_header, DisfixHeader,
    Registered,
};
pub use value::*;

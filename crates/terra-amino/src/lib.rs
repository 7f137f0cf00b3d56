//! Amino type tags and codec primitives for Terra.
//!
//! This crate provides:
//! - The closed set of registered type tags ([`tags`]), as constants and as
//!   the [`TypeTag`] enum
//! - Disambiguation and prefix bytes derived from those tags ([`model`])
//! - Lookup by tag string or prefix bytes ([`registry`])
//! - Binary encoding of Amino basic types and registered-type framing
//!   ([`codec`])
//! - Amino JSON `{"type", "value"}` envelopes ([`json`])
//! - Bech32 addresses ([`address`])
//!
//! # Example
//!
//! ```
//! use terra_amino::{decode_registered, encode_registered, TypeTag};
//!
//! let bytes = encode_registered(TypeTag::TendermintPubKeyEd25519, &[0x20], false);
//! assert_eq!(&bytes[..4], &[0x16, 0x24, 0xDE, 0x64]);
//!
//! let decoded = decode_registered(&bytes, false).unwrap();
//! assert_eq!(decoded.tag, TypeTag::TendermintPubKeyEd25519);
//! assert_eq!(decoded.body, &[0x20]);
//! ```

pub mod address;
pub mod codec;
pub mod error;
pub mod json;
pub mod limits;
pub mod model;
pub mod registry;
pub mod tags;

pub use address::{decode_bech32, encode_bech32};
pub use codec::{
    byte_slice_size, decode_disamb_prefix_bytes, decode_registered, encode_registered,
    uvarint_size, varint_size, DisfixHeader, Reader, Registered, Writer,
};
pub use error::{AddressError, DecodeError, EncodeError, JsonError, UnknownTypeTag};
pub use json::{expect_tagged_json, from_tagged_json, to_tagged_json, TaggedJson};
pub use model::{name_to_disfix, DisambBytes, PrefixBytes, Timestamp};
pub use tags::TypeTag;

//! Framing of registered concrete types.
//!
//! A registered value is written as its 4 prefix bytes followed by the
//! encoded struct body. The "length-prefixed" form puts a uvarint of the
//! total length in front. A decoder may also meet the long header
//! `0x00 || disamb(3) || prefix(4)`, which names the type unambiguously.

use tracing::debug;

use crate::codec::primitives::{uvarint_size, Reader, Writer};
use crate::error::DecodeError;
use crate::limits::{DISFIX_HEADER_LEN, MAX_BYTES_LEN, PREFIX_LEN};
use crate::model::{DisambBytes, PrefixBytes};
use crate::registry;
use crate::tags::TypeTag;

/// The type header at the start of a registered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisfixHeader {
    /// Present only for the long `0x00`-led header.
    pub disamb: Option<DisambBytes>,
    pub prefix: PrefixBytes,
}

impl DisfixHeader {
    /// Number of bytes this header occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        if self.disamb.is_some() {
            DISFIX_HEADER_LEN
        } else {
            PREFIX_LEN
        }
    }
}

/// A decoded registered value: the resolved tag and the undecoded body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registered<'a> {
    pub tag: TypeTag,
    pub body: &'a [u8],
}

/// Reads the disambiguation/prefix header.
pub fn decode_disamb_prefix_bytes(reader: &mut Reader<'_>) -> Result<DisfixHeader, DecodeError> {
    if reader.remaining().len() < PREFIX_LEN {
        return Err(DecodeError::UnexpectedEof {
            context: "prefix bytes",
        });
    }
    if reader.peek_byte() == Some(0x00) {
        if reader.remaining().len() < DISFIX_HEADER_LEN {
            return Err(DecodeError::UnexpectedEof {
                context: "disamb bytes",
            });
        }
        reader.read_byte("disfix marker")?;
        let disamb = reader.read_array("disamb bytes")?;
        let prefix = reader.read_array("prefix bytes")?;
        return Ok(DisfixHeader {
            disamb: Some(disamb),
            prefix,
        });
    }
    let prefix = reader.read_array("prefix bytes")?;
    Ok(DisfixHeader { disamb: None, prefix })
}

/// Resolves a header to a registered tag.
pub fn resolve_header(header: &DisfixHeader) -> Result<TypeTag, DecodeError> {
    let tag = registry::lookup_prefix(&header.prefix).ok_or(DecodeError::UnknownPrefix {
        prefix: header.prefix,
    })?;
    if let Some(found) = header.disamb {
        let expected = tag.disamb_bytes();
        if found != expected {
            debug!(%tag, found = %hex::encode(found), "disamb bytes do not match prefix");
            return Err(DecodeError::DisambMismatch { tag, expected, found });
        }
    }
    Ok(tag)
}

/// Writes a registered value: prefix bytes then `body`.
pub fn encode_registered(tag: TypeTag, body: &[u8], length_prefixed: bool) -> Vec<u8> {
    let len = PREFIX_LEN + body.len();
    let mut writer = Writer::with_capacity(len + uvarint_size(len as u64));
    if length_prefixed {
        writer.write_varint(len as u64);
    }
    writer.write_bytes(&tag.prefix_bytes());
    writer.write_bytes(body);
    writer.into_bytes()
}

/// Reads a registered value written by [`encode_registered`] or with a long
/// disamb header, and resolves its type.
///
/// In the length-prefixed form the declared length must cover the rest of
/// the input exactly.
pub fn decode_registered(input: &[u8], length_prefixed: bool) -> Result<Registered<'_>, DecodeError> {
    let mut reader = Reader::new(input);

    if length_prefixed {
        let declared = reader.read_varint("length prefix")?;
        let declared = usize::try_from(declared).unwrap_or(usize::MAX);
        if declared > MAX_BYTES_LEN {
            return Err(DecodeError::LengthExceedsLimit {
                field: "registered value",
                len: declared,
                max: MAX_BYTES_LEN,
            });
        }
        let actual = reader.remaining().len();
        if declared != actual {
            return Err(DecodeError::LengthMismatch { declared, actual });
        }
    }

    let header = decode_disamb_prefix_bytes(&mut reader)?;
    let tag = resolve_header(&header)?;

    Ok(Registered {
        tag,
        body: reader.remaining(),
    })
}

//! Low-level reading and writing of Amino wire primitives.
//!
//! Amino uses protobuf-compatible base-128 varints (LEB128), zigzag for
//! signed varints, and little-endian fixed-width integers and floats.

use crate::error::DecodeError;
use crate::limits::MAX_VARINT_BYTES;

/// Maps a signed integer to an unsigned one so small magnitudes stay small.
pub fn zigzag_encode(v: i64) -> u64 {
    ((v << 1) ^ (v >> 63)) as u64
}

/// Inverse of [`zigzag_encode`].
pub fn zigzag_decode(v: u64) -> i64 {
    ((v >> 1) as i64) ^ -((v & 1) as i64)
}

/// Returns the encoded length of a uvarint.
pub fn uvarint_size(v: u64) -> usize {
    if v == 0 {
        return 1;
    }
    let bits = 64 - v.leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Returns the encoded length of a zigzag varint.
pub fn varint_size(v: i64) -> usize {
    uvarint_size(zigzag_encode(v))
}

/// Returns the encoded length of a length-prefixed byte slice.
pub fn byte_slice_size(bytes: &[u8]) -> usize {
    uvarint_size(bytes.len() as u64) + bytes.len()
}

/// A cursor over borrowed input. Reads never copy.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread part of the input.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn peek_byte(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        let byte = self.peek_byte().ok_or(DecodeError::UnexpectedEof { context })?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_bytes(&mut self, len: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(DecodeError::UnexpectedEof { context })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, context)?);
        Ok(out)
    }

    /// Reads an unsigned LEB128 varint, rejecting overlong encodings.
    pub fn read_varint(&mut self, context: &'static str) -> Result<u64, DecodeError> {
        let mut result: u64 = 0;
        for i in 0..MAX_VARINT_BYTES {
            let byte = self.read_byte(context)?;
            // The 10th byte may only contribute the top bit of a u64
            if i == MAX_VARINT_BYTES - 1 && byte > 0x01 {
                return Err(DecodeError::VarintOverflow { context });
            }
            result |= u64::from(byte & 0x7F) << (7 * i);
            if byte & 0x80 == 0 {
                if i > 0 && byte == 0 {
                    return Err(DecodeError::NonCanonicalVarint { context });
                }
                return Ok(result);
            }
        }
        Err(DecodeError::VarintOverflow { context })
    }

    /// Reads a zigzag-encoded signed varint.
    pub fn read_signed_varint(&mut self, context: &'static str) -> Result<i64, DecodeError> {
        Ok(zigzag_decode(self.read_varint(context)?))
    }

    pub fn read_u32_le(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array(context)?))
    }

    pub fn read_u64_le(&mut self, context: &'static str) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_array(context)?))
    }

    pub fn read_f32(&mut self, context: &'static str) -> Result<f32, DecodeError> {
        Ok(f32::from_bits(self.read_u32_le(context)?))
    }

    pub fn read_f64(&mut self, context: &'static str) -> Result<f64, DecodeError> {
        Ok(f64::from_bits(self.read_u64_le(context)?))
    }

    /// Reads a uvarint length followed by that many bytes.
    pub fn read_bytes_prefixed(
        &mut self,
        max_len: usize,
        context: &'static str,
    ) -> Result<&'a [u8], DecodeError> {
        let len = self.read_varint(context)?;
        let len = usize::try_from(len).unwrap_or(usize::MAX);
        if len > max_len {
            return Err(DecodeError::LengthExceedsLimit {
                field: context,
                len,
                max: max_len,
            });
        }
        self.read_bytes(len, context)
    }

    /// Reads a length-prefixed UTF-8 string (zero-copy).
    pub fn read_str(&mut self, max_len: usize, context: &'static str) -> Result<&'a str, DecodeError> {
        let bytes = self.read_bytes_prefixed(max_len, context)?;
        std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 { context })
    }
}

/// A growable output buffer.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_varint(&mut self, mut v: u64) {
        while v >= 0x80 {
            self.buf.push((v as u8) | 0x80);
            v >>= 7;
        }
        self.buf.push(v as u8);
    }

    pub fn write_signed_varint(&mut self, v: i64) {
        self.write_varint(zigzag_encode(v));
    }

    pub fn write_u32_le(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u64_le(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_f32(&mut self, v: f32) {
        self.write_u32_le(v.to_bits());
    }

    pub fn write_f64(&mut self, v: f64) {
        self.write_u64_le(v.to_bits());
    }

    /// Writes a uvarint length followed by the bytes.
    pub fn write_bytes_prefixed(&mut self, bytes: &[u8]) {
        self.write_varint(bytes.len() as u64);
        self.write_bytes(bytes);
    }

    pub fn write_string(&mut self, s: &str) {
        self.write_bytes_prefixed(s.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_varint_known_encodings() {
        let cases: [(u64, &[u8]); 5] = [
            (0, &[0x00]),
            (1, &[0x01]),
            (127, &[0x7F]),
            (300, &[0xAC, 0x02]),
            (u64::MAX, &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]),
        ];
        for (value, expected) in cases {
            let mut writer = Writer::new();
            writer.write_varint(value);
            assert_eq!(writer.as_bytes(), expected);
            assert_eq!(uvarint_size(value), expected.len());

            let mut reader = Reader::new(expected);
            assert_eq!(reader.read_varint("test").unwrap(), value);
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn test_zigzag() {
        assert_eq!(zigzag_encode(0), 0);
        assert_eq!(zigzag_encode(-1), 1);
        assert_eq!(zigzag_encode(1), 2);
        assert_eq!(zigzag_encode(-2), 3);
        assert_eq!(zigzag_encode(i64::MAX), u64::MAX - 1);
        assert_eq!(zigzag_encode(i64::MIN), u64::MAX);
    }

    #[test]
    fn test_varint_non_canonical() {
        let mut reader = Reader::new(&[0x80, 0x00]);
        assert_eq!(
            reader.read_varint("test"),
            Err(DecodeError::NonCanonicalVarint { context: "test" })
        );
    }

    #[test]
    fn test_varint_overflow() {
        let mut reader = Reader::new(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x02]);
        assert_eq!(
            reader.read_varint("test"),
            Err(DecodeError::VarintOverflow { context: "test" })
        );

        let mut reader = Reader::new(&[0x80; 11]);
        assert_eq!(
            reader.read_varint("test"),
            Err(DecodeError::VarintOverflow { context: "test" })
        );
    }

    #[test]
    fn test_varint_eof() {
        let mut reader = Reader::new(&[0x80]);
        assert_eq!(
            reader.read_varint("test"),
            Err(DecodeError::UnexpectedEof { context: "test" })
        );
    }

    #[test]
    fn test_read_bytes_prefixed_limits() {
        let mut reader = Reader::new(&[0x05, 1, 2]);
        assert!(matches!(
            reader.read_bytes_prefixed(4, "bytes"),
            Err(DecodeError::LengthExceedsLimit { len: 5, max: 4, .. })
        ));

        let mut reader = Reader::new(&[0x05, 1, 2]);
        assert!(matches!(
            reader.read_bytes_prefixed(16, "bytes"),
            Err(DecodeError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_byte_slice_size() {
        assert_eq!(byte_slice_size(&[]), 1);
        assert_eq!(byte_slice_size(&[0u8; 127]), 128);
        assert_eq!(byte_slice_size(&[0u8; 128]), 130);
    }

    proptest! {
        #[test]
        fn prop_uvarint(v in any::<u64>()) {
            let mut writer = Writer::new();
            writer.write_varint(v);
            prop_assert_eq!(writer.len(), uvarint_size(v));

            let mut reader = Reader::new(writer.as_bytes());
            prop_assert_eq!(reader.read_varint("v").unwrap(), v);
            prop_assert!(reader.is_empty());
        }

        #[test]
        fn prop_varint(v in any::<i64>()) {
            let mut writer = Writer::new();
            writer.write_signed_varint(v);
            prop_assert_eq!(writer.len(), varint_size(v));

            let mut reader = Reader::new(writer.as_bytes());
            prop_assert_eq!(reader.read_signed_varint("v").unwrap(), v);
        }

        #[test]
        fn prop_padded_uvarint_rejected(v in 0u64..(1 << 56)) {
            // Same value with a redundant continuation byte
            let mut writer = Writer::new();
            writer.write_varint(v);
            let mut bytes = writer.into_bytes();
            let last = bytes.len() - 1;
            bytes[last] |= 0x80;
            bytes.push(0x00);

            let mut reader = Reader::new(&bytes);
            prop_assert!(reader.read_varint("v").is_err());
        }
    }
}

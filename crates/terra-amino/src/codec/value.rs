//! Encoding/decoding of Amino basic types.
//!
//! Small integers (byte, int8/16, uint8/16) are varints on the wire, while
//! 32- and 64-bit integers are fixed-width little-endian. `varint`/`uvarint`
//! are the variable-length 64-bit forms.

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{MAX_BYTES_LEN, MAX_STRING_LEN, MAX_TIME_NANOS, MAX_TIME_SECONDS, MIN_TIME_SECONDS};
use crate::model::Timestamp;

/// Amino wire types, the low 3 bits of a field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Typ3 {
    Varint = 0,
    EightByte = 1,
    ByteLength = 2,
    FourByte = 5,
}

/// Field key for time seconds: field 1, varint.
const TIME_SECONDS_KEY: u64 = (1 << 3) | Typ3::Varint as u64;

/// Field key for time nanos: field 2, varint.
const TIME_NANOS_KEY: u64 = (2 << 3) | Typ3::Varint as u64;

/// Runs a decoder over `bytes`, returning the value and the bytes consumed.
pub fn decode_with<'a, T>(
    bytes: &'a [u8],
    decode: impl FnOnce(&mut Reader<'a>) -> Result<T, DecodeError>,
) -> Result<(T, usize), DecodeError> {
    let mut reader = Reader::new(bytes);
    let value = decode(&mut reader)?;
    Ok((value, reader.position()))
}

/// Runs an encoder into a fresh buffer.
pub fn encode_with(encode: impl FnOnce(&mut Writer)) -> Vec<u8> {
    let mut writer = Writer::new();
    encode(&mut writer);
    writer.into_bytes()
}

// =============================================================================
// ENCODING
// =============================================================================

pub fn encode_byte(writer: &mut Writer, v: u8) {
    writer.write_varint(u64::from(v));
}

pub fn encode_byte_slice(writer: &mut Writer, bytes: &[u8]) {
    writer.write_bytes_prefixed(bytes);
}

pub fn encode_int8(writer: &mut Writer, v: i8) {
    writer.write_signed_varint(i64::from(v));
}

pub fn encode_int16(writer: &mut Writer, v: i16) {
    writer.write_signed_varint(i64::from(v));
}

pub fn encode_int32(writer: &mut Writer, v: i32) {
    writer.write_u32_le(v as u32);
}

pub fn encode_int64(writer: &mut Writer, v: i64) {
    writer.write_u64_le(v as u64);
}

pub fn encode_varint(writer: &mut Writer, v: i64) {
    writer.write_signed_varint(v);
}

pub fn encode_uint8(writer: &mut Writer, v: u8) {
    writer.write_varint(u64::from(v));
}

pub fn encode_uint16(writer: &mut Writer, v: u16) {
    writer.write_varint(u64::from(v));
}

pub fn encode_uint32(writer: &mut Writer, v: u32) {
    writer.write_u32_le(v);
}

pub fn encode_uint64(writer: &mut Writer, v: u64) {
    writer.write_u64_le(v);
}

pub fn encode_uvarint(writer: &mut Writer, v: u64) {
    writer.write_varint(v);
}

pub fn encode_float32(writer: &mut Writer, v: f32) {
    writer.write_f32(v);
}

pub fn encode_float64(writer: &mut Writer, v: f64) {
    writer.write_f64(v);
}

pub fn encode_bool(writer: &mut Writer, v: bool) {
    writer.write_byte(if v { 0x01 } else { 0x00 });
}

pub fn encode_string(writer: &mut Writer, s: &str) {
    writer.write_string(s);
}

/// Encodes a time as a struct with seconds (field 1) and nanos (field 2).
///
/// Zero fields are omitted, so the Unix epoch encodes to no bytes at all.
/// Negative seconds are written as the uvarint of their two's complement.
pub fn encode_time(writer: &mut Writer, time: &Timestamp) -> Result<(), EncodeError> {
    if let Some(reason) = time.validate() {
        return Err(EncodeError::InvalidTime { reason });
    }
    if time.seconds != 0 {
        writer.write_varint(TIME_SECONDS_KEY);
        writer.write_varint(time.seconds as u64);
    }
    if time.nanos != 0 {
        writer.write_varint(TIME_NANOS_KEY);
        writer.write_varint(u64::from(time.nanos));
    }
    Ok(())
}

// =============================================================================
// DECODING
// =============================================================================

fn out_of_range(context: &'static str, value: impl Into<i128>) -> DecodeError {
    DecodeError::ValueOutOfRange {
        context,
        value: value.into(),
    }
}

pub fn decode_byte(reader: &mut Reader<'_>) -> Result<u8, DecodeError> {
    let v = reader.read_varint("byte")?;
    u8::try_from(v).map_err(|_| out_of_range("byte", v))
}

pub fn decode_byte_slice<'a>(reader: &mut Reader<'a>) -> Result<&'a [u8], DecodeError> {
    reader.read_bytes_prefixed(MAX_BYTES_LEN, "byte slice")
}

pub fn decode_int8(reader: &mut Reader<'_>) -> Result<i8, DecodeError> {
    let v = reader.read_signed_varint("int8")?;
    i8::try_from(v).map_err(|_| out_of_range("int8", v))
}

pub fn decode_int16(reader: &mut Reader<'_>) -> Result<i16, DecodeError> {
    let v = reader.read_signed_varint("int16")?;
    i16::try_from(v).map_err(|_| out_of_range("int16", v))
}

pub fn decode_int32(reader: &mut Reader<'_>) -> Result<i32, DecodeError> {
    Ok(reader.read_u32_le("int32")? as i32)
}

pub fn decode_int64(reader: &mut Reader<'_>) -> Result<i64, DecodeError> {
    Ok(reader.read_u64_le("int64")? as i64)
}

pub fn decode_varint(reader: &mut Reader<'_>) -> Result<i64, DecodeError> {
    reader.read_signed_varint("varint")
}

pub fn decode_uint8(reader: &mut Reader<'_>) -> Result<u8, DecodeError> {
    let v = reader.read_varint("uint8")?;
    u8::try_from(v).map_err(|_| out_of_range("uint8", v))
}

pub fn decode_uint16(reader: &mut Reader<'_>) -> Result<u16, DecodeError> {
    let v = reader.read_varint("uint16")?;
    u16::try_from(v).map_err(|_| out_of_range("uint16", v))
}

pub fn decode_uint32(reader: &mut Reader<'_>) -> Result<u32, DecodeError> {
    reader.read_u32_le("uint32")
}

pub fn decode_uint64(reader: &mut Reader<'_>) -> Result<u64, DecodeError> {
    reader.read_u64_le("uint64")
}

pub fn decode_uvarint(reader: &mut Reader<'_>) -> Result<u64, DecodeError> {
    reader.read_varint("uvarint")
}

pub fn decode_float32(reader: &mut Reader<'_>) -> Result<f32, DecodeError> {
    reader.read_f32("float32")
}

pub fn decode_float64(reader: &mut Reader<'_>) -> Result<f64, DecodeError> {
    reader.read_f64("float64")
}

pub fn decode_bool(reader: &mut Reader<'_>) -> Result<bool, DecodeError> {
    let byte = reader.read_byte("bool")?;
    match byte {
        0x00 => Ok(false),
        0x01 => Ok(true),
        _ => Err(DecodeError::InvalidBool { value: byte }),
    }
}

pub fn decode_string<'a>(reader: &mut Reader<'a>) -> Result<&'a str, DecodeError> {
    reader.read_str(MAX_STRING_LEN, "string")
}

/// Decodes a time written by [`encode_time`].
///
/// Reading stops at the first key that is neither the seconds nor the nanos
/// field, leaving it for the caller. Empty input is the Unix epoch.
pub fn decode_time(reader: &mut Reader<'_>) -> Result<Timestamp, DecodeError> {
    let mut time = Timestamp::UNIX_EPOCH;

    if next_field(reader, 1)? {
        let raw = reader.read_varint("time.seconds")?;
        let seconds = raw as i64;
        if !(MIN_TIME_SECONDS..MAX_TIME_SECONDS).contains(&seconds) {
            return Err(DecodeError::InvalidTime {
                reason: "seconds have to be >= -62135596800 and < 253402300800",
            });
        }
        time.seconds = seconds;
    }

    if next_field(reader, 2)? {
        let raw = reader.read_varint("time.nanos")?;
        if raw > u64::from(MAX_TIME_NANOS) {
            return Err(DecodeError::InvalidTime {
                reason: "nanoseconds have to be >= 0 and <= 999999999",
            });
        }
        time.nanos = raw as u32;
    }

    Ok(time)
}

/// Consumes the next field key if it names `field`. The field must be a varint.
fn next_field(reader: &mut Reader<'_>, field: u64) -> Result<bool, DecodeError> {
    if reader.is_empty() {
        return Ok(false);
    }
    let mut probe = reader.clone();
    let key = probe.read_varint("time.key")?;
    if key >> 3 != field {
        return Ok(false);
    }
    let typ3 = (key & 0x07) as u8;
    if typ3 != Typ3::Varint as u8 {
        return Err(DecodeError::UnexpectedField { field, typ3 });
    }
    *reader = probe;
    Ok(true)
}

//! Low-level byte codec for instruction payloads
//!
//! This module provides manual byte-level encoding and decoding for the
//! primitive types that appear in on-chain instruction data: fixed-width
//! little-endian integers, booleans, 32-byte public keys, length-prefixed
//! UTF-8 strings, and optional values.
//!
//! Every `decode_*` function either fully succeeds, advancing the cursor by
//! exactly the encoded width, or fails leaving the cursor position unchanged.

use crate::error::{IxforgeError, Result};
use crate::pubkey::{PublicKey, PUBKEY_BYTES};
use std::io::Cursor;

/// Read `len` bytes from the cursor, advancing it only on success
fn read_bytes<'a>(cursor: &mut Cursor<&'a [u8]>, len: usize) -> Result<&'a [u8]> {
    let position = cursor.position() as usize;
    let data: &'a [u8] = *cursor.get_ref();

    if position + len > data.len() {
        return Err(IxforgeError::Length {
            needed: position + len,
            available: data.len(),
        });
    }

    cursor.set_position((position + len) as u64);
    Ok(&data[position..position + len])
}

/// Encode a u8
pub fn encode_u8(value: u8, writer: &mut Vec<u8>) -> Result<()> {
    writer.push(value);
    Ok(())
}

/// Decode a u8
pub fn decode_u8(cursor: &mut Cursor<&[u8]>) -> Result<u8> {
    Ok(read_bytes(cursor, 1)?[0])
}

/// Encode a u16 in little-endian format
pub fn encode_u16(value: u16, writer: &mut Vec<u8>) -> Result<()> {
    writer.extend_from_slice(&value.to_le_bytes());
    Ok(())
}

/// Decode a u16 in little-endian format
pub fn decode_u16(cursor: &mut Cursor<&[u8]>) -> Result<u16> {
    let mut bytes = [0u8; 2];
    bytes.copy_from_slice(read_bytes(cursor, 2)?);
    Ok(u16::from_le_bytes(bytes))
}

/// Encode a u32 in little-endian format
pub fn encode_u32(value: u32, writer: &mut Vec<u8>) -> Result<()> {
    writer.extend_from_slice(&value.to_le_bytes());
    Ok(())
}

/// Decode a u32 in little-endian format
pub fn decode_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32> {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(read_bytes(cursor, 4)?);
    Ok(u32::from_le_bytes(bytes))
}

/// Encode a u64 in little-endian format
pub fn encode_u64(value: u64, writer: &mut Vec<u8>) -> Result<()> {
    writer.extend_from_slice(&value.to_le_bytes());
    Ok(())
}

/// Decode a u64 in little-endian format
pub fn decode_u64(cursor: &mut Cursor<&[u8]>) -> Result<u64> {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(read_bytes(cursor, 8)?);
    Ok(u64::from_le_bytes(bytes))
}

/// Encode an i64 in little-endian format (Unix timestamps)
pub fn encode_i64(value: i64, writer: &mut Vec<u8>) -> Result<()> {
    writer.extend_from_slice(&value.to_le_bytes());
    Ok(())
}

/// Decode an i64 in little-endian format
pub fn decode_i64(cursor: &mut Cursor<&[u8]>) -> Result<i64> {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(read_bytes(cursor, 8)?);
    Ok(i64::from_le_bytes(bytes))
}

/// Encode a boolean as a single byte, 0 or 1
pub fn encode_bool(value: bool, writer: &mut Vec<u8>) -> Result<()> {
    writer.push(u8::from(value));
    Ok(())
}

/// Decode a boolean byte, failing closed: only 0 and 1 are accepted
pub fn decode_bool(cursor: &mut Cursor<&[u8]>) -> Result<bool> {
    let start = cursor.position();
    match decode_u8(cursor)? {
        0 => Ok(false),
        1 => Ok(true),
        other => {
            cursor.set_position(start);
            Err(IxforgeError::Format(format!(
                "invalid boolean byte: {other}"
            )))
        }
    }
}

/// Encode a 32-byte public key as a direct copy
pub fn encode_pubkey(pubkey: &PublicKey, writer: &mut Vec<u8>) -> Result<()> {
    writer.extend_from_slice(pubkey.as_bytes());
    Ok(())
}

/// Decode a 32-byte public key
pub fn decode_pubkey(cursor: &mut Cursor<&[u8]>) -> Result<PublicKey> {
    let bytes = read_bytes(cursor, PUBKEY_BYTES)?;
    PublicKey::from_bytes(bytes)
}

/// Encode a string as a 4-byte little-endian length prefix plus UTF-8 bytes
pub fn encode_string(value: &str, writer: &mut Vec<u8>) -> Result<()> {
    let len = u32::try_from(value.len())
        .map_err(|_| IxforgeError::Format(format!("string too long: {} bytes", value.len())))?;
    encode_u32(len, writer)?;
    writer.extend_from_slice(value.as_bytes());
    Ok(())
}

/// Decode a length-prefixed UTF-8 string
pub fn decode_string(cursor: &mut Cursor<&[u8]>) -> Result<String> {
    let start = cursor.position();
    let len = decode_u32(cursor)? as usize;

    let bytes = match read_bytes(cursor, len) {
        Ok(bytes) => bytes,
        Err(err) => {
            cursor.set_position(start);
            return Err(err);
        }
    };

    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_string()),
        Err(err) => {
            cursor.set_position(start);
            Err(IxforgeError::Encoding(err.to_string()))
        }
    }
}

/// Encode an optional value: one presence byte, then the payload if present
///
/// An absent value contributes exactly one byte (the 0 flag).
pub fn encode_option<T>(
    value: Option<&T>,
    writer: &mut Vec<u8>,
    encode: impl FnOnce(&T, &mut Vec<u8>) -> Result<()>,
) -> Result<()> {
    match value {
        None => encode_u8(0, writer),
        Some(inner) => {
            encode_u8(1, writer)?;
            encode(inner, writer)
        }
    }
}

/// Decode an optional value; any presence byte other than 0 or 1 is rejected
pub fn decode_option<T>(
    cursor: &mut Cursor<&[u8]>,
    decode: impl FnOnce(&mut Cursor<&[u8]>) -> Result<T>,
) -> Result<Option<T>> {
    let start = cursor.position();
    let flag = decode_u8(cursor)?;

    let result = match flag {
        0 => Ok(None),
        1 => decode(cursor).map(Some),
        other => Err(IxforgeError::Format(format!(
            "invalid presence flag: {other}"
        ))),
    };

    if result.is_err() {
        cursor.set_position(start);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(bytes: &[u8]) -> Cursor<&[u8]> {
        Cursor::new(bytes)
    }

    #[test]
    fn test_integer_round_trips() {
        let mut buf = Vec::new();
        encode_u8(0xAB, &mut buf).unwrap();
        encode_u16(0xBEEF, &mut buf).unwrap();
        encode_u32(0x12345678, &mut buf).unwrap();
        encode_u64(0xABCDEF0123456789, &mut buf).unwrap();
        encode_i64(-42, &mut buf).unwrap();

        let mut cur = cursor(&buf);
        assert_eq!(decode_u8(&mut cur).unwrap(), 0xAB);
        assert_eq!(decode_u16(&mut cur).unwrap(), 0xBEEF);
        assert_eq!(decode_u32(&mut cur).unwrap(), 0x12345678);
        assert_eq!(decode_u64(&mut cur).unwrap(), 0xABCDEF0123456789);
        assert_eq!(decode_i64(&mut cur).unwrap(), -42);
        assert_eq!(cur.position() as usize, buf.len());
    }

    #[test]
    fn test_u64_little_endian() {
        let mut buf = Vec::new();
        encode_u64(1, &mut buf).unwrap();
        assert_eq!(hex::encode(&buf), "0100000000000000");
    }

    #[test]
    fn test_bool_round_trip() {
        for value in [false, true] {
            let mut buf = Vec::new();
            encode_bool(value, &mut buf).unwrap();
            assert_eq!(buf.len(), 1);
            let mut cur = cursor(&buf);
            assert_eq!(decode_bool(&mut cur).unwrap(), value);
        }
    }

    #[test]
    fn test_bool_fails_closed() {
        let buf = [2u8];
        let mut cur = cursor(&buf);
        let err = decode_bool(&mut cur).unwrap_err();
        assert!(matches!(err, IxforgeError::Format(_)));
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_pubkey_round_trip() {
        let key = PublicKey::new([5u8; 32]);
        let mut buf = Vec::new();
        encode_pubkey(&key, &mut buf).unwrap();
        assert_eq!(buf.len(), 32);

        let mut cur = cursor(&buf);
        assert_eq!(decode_pubkey(&mut cur).unwrap(), key);
        assert_eq!(cur.position(), 32);
    }

    #[test]
    fn test_pubkey_short_buffer_leaves_offset_unchanged() {
        let buf = [0u8; 31];
        let mut cur = cursor(&buf);
        let err = decode_pubkey(&mut cur).unwrap_err();
        assert!(matches!(
            err,
            IxforgeError::Length {
                needed: 32,
                available: 31
            }
        ));
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_string_round_trip() {
        let mut buf = Vec::new();
        encode_string("stake seed", &mut buf).unwrap();
        assert_eq!(&buf[0..4], &[10, 0, 0, 0]);

        let mut cur = cursor(&buf);
        assert_eq!(decode_string(&mut cur).unwrap(), "stake seed");
        assert_eq!(cur.position() as usize, buf.len());
    }

    #[test]
    fn test_string_invalid_utf8() {
        let buf = [2, 0, 0, 0, 0xFF, 0xFE];
        let mut cur = cursor(&buf);
        let err = decode_string(&mut cur).unwrap_err();
        assert!(matches!(err, IxforgeError::Encoding(_)));
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_string_truncated() {
        let buf = [5, 0, 0, 0, b'a'];
        let mut cur = cursor(&buf);
        let err = decode_string(&mut cur).unwrap_err();
        assert!(matches!(err, IxforgeError::Length { .. }));
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_option_absent_is_one_byte() {
        let mut buf = Vec::new();
        encode_option(None::<&u64>, &mut buf, |v, w| encode_u64(*v, w)).unwrap();
        assert_eq!(buf, vec![0]);

        let mut cur = cursor(&buf);
        assert_eq!(decode_option(&mut cur, decode_u64).unwrap(), None);
    }

    #[test]
    fn test_option_present_is_flag_plus_payload() {
        let mut buf = Vec::new();
        encode_option(Some(&7u64), &mut buf, |v, w| encode_u64(*v, w)).unwrap();
        assert_eq!(buf.len(), 1 + 8);
        assert_eq!(buf[0], 1);

        let mut cur = cursor(&buf);
        assert_eq!(decode_option(&mut cur, decode_u64).unwrap(), Some(7));
        assert_eq!(cur.position() as usize, buf.len());
    }

    #[test]
    fn test_option_invalid_presence_flag() {
        let buf = [3u8, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut cur = cursor(&buf);
        let err = decode_option(&mut cur, decode_u64).unwrap_err();
        assert!(matches!(err, IxforgeError::Format(_)));
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn test_decode_at_end_of_buffer() {
        let buf = [1u8];
        let mut cur = cursor(&buf);
        decode_u8(&mut cur).unwrap();
        assert!(matches!(
            decode_u8(&mut cur),
            Err(IxforgeError::Length { .. })
        ));
    }
}

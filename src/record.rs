//! Structured record codec
//!
//! Instruction payload records are declared as ordered field lists. A record
//! has two representations that must agree: a canonical keyed mapping (the
//! JSON form, a `serde_json` object) and the binary form (the concatenation
//! of each field's encoding in declared order). Round-tripping keyed ->
//! binary -> keyed is lossless for every valid record.

use crate::codec;
use crate::error::{IxforgeError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Cursor;

/// Wire shape of a single record field
#[derive(Debug)]
pub enum FieldCodec {
    U8,
    U16,
    U32,
    U64,
    I64,
    Bool,
    PublicKey,
    Str,
    /// One presence byte, then the inner encoding when present
    Option(&'static FieldCodec),
    /// A nested record, encoded as an opaque byte span within the parent
    Record(&'static [FieldSpec]),
}

/// A declared record field: its key in the mapping form and its wire shape
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub codec: &'static FieldCodec,
}

impl FieldSpec {
    pub const fn new(name: &'static str, codec: &'static FieldCodec) -> Self {
        Self { name, codec }
    }
}

fn type_error(name: &str, expected: &str, value: &Value) -> IxforgeError {
    IxforgeError::Format(format!(
        "field `{name}`: expected {expected}, got {value}"
    ))
}

fn encode_value(
    name: &str,
    field_codec: &FieldCodec,
    value: &Value,
    writer: &mut Vec<u8>,
) -> Result<()> {
    match field_codec {
        FieldCodec::U8 => {
            let n = value
                .as_u64()
                .and_then(|n| u8::try_from(n).ok())
                .ok_or_else(|| type_error(name, "u8", value))?;
            codec::encode_u8(n, writer)
        }
        FieldCodec::U16 => {
            let n = value
                .as_u64()
                .and_then(|n| u16::try_from(n).ok())
                .ok_or_else(|| type_error(name, "u16", value))?;
            codec::encode_u16(n, writer)
        }
        FieldCodec::U32 => {
            let n = value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| type_error(name, "u32", value))?;
            codec::encode_u32(n, writer)
        }
        FieldCodec::U64 => {
            let n = value.as_u64().ok_or_else(|| type_error(name, "u64", value))?;
            codec::encode_u64(n, writer)
        }
        FieldCodec::I64 => {
            let n = value.as_i64().ok_or_else(|| type_error(name, "i64", value))?;
            codec::encode_i64(n, writer)
        }
        FieldCodec::Bool => {
            let b = value
                .as_bool()
                .ok_or_else(|| type_error(name, "bool", value))?;
            codec::encode_bool(b, writer)
        }
        FieldCodec::PublicKey => {
            let s = value
                .as_str()
                .ok_or_else(|| type_error(name, "base58 string", value))?;
            let key = s
                .parse()
                .map_err(|_| type_error(name, "base58 public key", value))?;
            codec::encode_pubkey(&key, writer)
        }
        FieldCodec::Str => {
            let s = value
                .as_str()
                .ok_or_else(|| type_error(name, "string", value))?;
            codec::encode_string(s, writer)
        }
        FieldCodec::Option(inner) => match value {
            Value::Null => codec::encode_u8(0, writer),
            present => {
                codec::encode_u8(1, writer)?;
                encode_value(name, inner, present, writer)
            }
        },
        FieldCodec::Record(fields) => {
            let nested = value
                .as_object()
                .ok_or_else(|| type_error(name, "object", value))?;
            encode_record_into(fields, nested, writer)
        }
    }
}

fn decode_value(field_codec: &FieldCodec, cursor: &mut Cursor<&[u8]>) -> Result<Value> {
    match field_codec {
        FieldCodec::U8 => Ok(Value::from(codec::decode_u8(cursor)?)),
        FieldCodec::U16 => Ok(Value::from(codec::decode_u16(cursor)?)),
        FieldCodec::U32 => Ok(Value::from(codec::decode_u32(cursor)?)),
        FieldCodec::U64 => Ok(Value::from(codec::decode_u64(cursor)?)),
        FieldCodec::I64 => Ok(Value::from(codec::decode_i64(cursor)?)),
        FieldCodec::Bool => Ok(Value::from(codec::decode_bool(cursor)?)),
        FieldCodec::PublicKey => Ok(Value::from(codec::decode_pubkey(cursor)?.to_base58())),
        FieldCodec::Str => Ok(Value::from(codec::decode_string(cursor)?)),
        FieldCodec::Option(inner) => {
            let decoded = codec::decode_option(cursor, |cur| decode_value(inner, cur))?;
            Ok(decoded.unwrap_or(Value::Null))
        }
        FieldCodec::Record(fields) => Ok(Value::Object(decode_record(fields, cursor)?)),
    }
}

/// Encode a keyed mapping against a declared field list, appending to `writer`
///
/// Fields are encoded in declared order. A required key that is absent (or
/// `null` for a non-optional field) fails with `MissingField`.
pub fn encode_record_into(
    fields: &[FieldSpec],
    record: &Map<String, Value>,
    writer: &mut Vec<u8>,
) -> Result<()> {
    for field in fields {
        let value = record.get(field.name).unwrap_or(&Value::Null);
        let absent = value.is_null();

        if absent && !matches!(field.codec, FieldCodec::Option(_)) {
            return Err(IxforgeError::MissingField(field.name.to_string()));
        }

        encode_value(field.name, field.codec, value, writer)?;
    }
    Ok(())
}

/// Encode a keyed mapping against a declared field list
pub fn encode_record(fields: &[FieldSpec], record: &Map<String, Value>) -> Result<Vec<u8>> {
    let mut writer = Vec::new();
    encode_record_into(fields, record, &mut writer)?;
    Ok(writer)
}

/// Decode bytes into a keyed mapping, consuming fields in declared order
///
/// Absent optional fields decode to `null`. Fails atomically: on any error
/// the cursor is restored to its starting position.
pub fn decode_record(fields: &[FieldSpec], cursor: &mut Cursor<&[u8]>) -> Result<Map<String, Value>> {
    let start = cursor.position();
    let mut record = Map::new();

    for field in fields {
        match decode_value(field.codec, cursor) {
            Ok(value) => {
                record.insert(field.name.to_string(), value);
            }
            Err(err) => {
                cursor.set_position(start);
                return Err(err);
            }
        }
    }

    Ok(record)
}

/// Typed records with an agreed keyed mapping form and binary form
///
/// The keyed form is the type's JSON representation; the binary form is the
/// declared layout encoded field by field. Both are derived from the same
/// field list, so the two conversion paths cannot drift apart.
pub trait RecordSerialize: Serialize + DeserializeOwned {
    /// Declared field list; declaration order is wire order
    const LAYOUT: &'static [FieldSpec];

    /// Canonical keyed mapping form
    fn to_record(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(IxforgeError::Format(format!(
                "record must map to an object, got {other}"
            ))),
            Err(err) => Err(IxforgeError::Format(err.to_string())),
        }
    }

    /// Rebuild the typed value from its keyed mapping form
    fn from_record(record: Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(record))
            .map_err(|err| IxforgeError::Format(err.to_string()))
    }

    /// Append this record's binary form to `writer`
    fn encode(&self, writer: &mut Vec<u8>) -> Result<()> {
        encode_record_into(Self::LAYOUT, &self.to_record()?, writer)
    }

    /// Binary form of this record
    fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let mut writer = Vec::new();
        self.encode(&mut writer)?;
        Ok(writer)
    }

    /// Decode this record's binary form from the cursor
    fn decode(cursor: &mut Cursor<&[u8]>) -> Result<Self> {
        Self::from_record(decode_record(Self::LAYOUT, cursor)?)
    }
}

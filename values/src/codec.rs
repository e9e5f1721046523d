//! Consensus byte serialization of Clarity values, rendered as hex.
//!
//! The canonical form is the `0x`-prefixed lowercase hex of the value's
//! byte serialization: one type tag byte followed by the variant body.
//! Encoding is a pure function of the value's structure, so two equal
//! values always render to the same string and event payloads can be
//! compared by exact string equality.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::value::{ClarityValue, PrincipalData};

const HEX_PREFIX: &str = "0x";

const TAG_INT: u8 = 0x00;
const TAG_UINT: u8 = 0x01;
const TAG_BUFFER: u8 = 0x02;
const TAG_BOOL_TRUE: u8 = 0x03;
const TAG_BOOL_FALSE: u8 = 0x04;
const TAG_STANDARD_PRINCIPAL: u8 = 0x05;
const TAG_CONTRACT_PRINCIPAL: u8 = 0x06;
const TAG_RESPONSE_OK: u8 = 0x07;
const TAG_RESPONSE_ERR: u8 = 0x08;
const TAG_OPTIONAL_NONE: u8 = 0x09;
const TAG_OPTIONAL_SOME: u8 = 0x0a;
const TAG_LIST: u8 = 0x0b;
const TAG_TUPLE: u8 = 0x0c;
const TAG_STRING_ASCII: u8 = 0x0d;
const TAG_STRING_UTF8: u8 = 0x0e;

/// Errors produced while decoding a canonical hex string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("encoding must start with 0x")]
    MissingPrefix,

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("unknown type tag 0x{0:02x}")]
    UnknownTypeTag(u8),

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("trailing bytes after value")]
    TrailingBytes,

    #[error("invalid string payload: {0}")]
    InvalidString(String),
}

/// Render a value as its canonical hex string.
pub fn to_canonical_hex(value: &ClarityValue) -> String {
    let mut bytes = Vec::new();
    encode_into(value, &mut bytes);
    format!("{HEX_PREFIX}{}", hex::encode(bytes))
}

/// Parse a canonical hex string back into a value.
pub fn from_canonical_hex(encoded: &str) -> Result<ClarityValue, CodecError> {
    let body = encoded
        .strip_prefix(HEX_PREFIX)
        .ok_or(CodecError::MissingPrefix)?;
    let bytes = hex::decode(body).map_err(|err| CodecError::InvalidHex(err.to_string()))?;

    let mut cursor = Cursor::new(&bytes);
    let value = decode_value(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(CodecError::TrailingBytes);
    }
    Ok(value)
}

fn encode_into(value: &ClarityValue, out: &mut Vec<u8>) {
    match value {
        ClarityValue::Int(n) => {
            out.push(TAG_INT);
            out.extend_from_slice(&n.to_be_bytes());
        }
        ClarityValue::UInt(n) => {
            out.push(TAG_UINT);
            out.extend_from_slice(&n.to_be_bytes());
        }
        ClarityValue::Buffer(bytes) => {
            out.push(TAG_BUFFER);
            push_length(out, bytes.len());
            out.extend_from_slice(bytes);
        }
        ClarityValue::Bool(true) => out.push(TAG_BOOL_TRUE),
        ClarityValue::Bool(false) => out.push(TAG_BOOL_FALSE),
        ClarityValue::StandardPrincipal(principal) => {
            out.push(TAG_STANDARD_PRINCIPAL);
            encode_principal(principal, out);
        }
        ClarityValue::ContractPrincipal { issuer, name } => {
            out.push(TAG_CONTRACT_PRINCIPAL);
            encode_principal(issuer, out);
            out.push(name.len() as u8);
            out.extend_from_slice(name.as_bytes());
        }
        ClarityValue::ResponseOk(inner) => {
            out.push(TAG_RESPONSE_OK);
            encode_into(inner, out);
        }
        ClarityValue::ResponseErr(inner) => {
            out.push(TAG_RESPONSE_ERR);
            encode_into(inner, out);
        }
        ClarityValue::OptionalNone => out.push(TAG_OPTIONAL_NONE),
        ClarityValue::OptionalSome(inner) => {
            out.push(TAG_OPTIONAL_SOME);
            encode_into(inner, out);
        }
        ClarityValue::List(items) => {
            out.push(TAG_LIST);
            push_length(out, items.len());
            for item in items {
                encode_into(item, out);
            }
        }
        ClarityValue::Tuple(entries) => {
            out.push(TAG_TUPLE);
            push_length(out, entries.len());
            // BTreeMap iteration keeps tuple entries in key order.
            for (name, entry) in entries {
                out.push(name.len() as u8);
                out.extend_from_slice(name.as_bytes());
                encode_into(entry, out);
            }
        }
        ClarityValue::StringAscii(contents) => {
            out.push(TAG_STRING_ASCII);
            push_length(out, contents.len());
            out.extend_from_slice(contents.as_bytes());
        }
        ClarityValue::StringUtf8(contents) => {
            out.push(TAG_STRING_UTF8);
            push_length(out, contents.len());
            out.extend_from_slice(contents.as_bytes());
        }
    }
}

fn encode_principal(principal: &PrincipalData, out: &mut Vec<u8>) {
    out.push(principal.version);
    out.extend_from_slice(&principal.hash_bytes);
}

fn push_length(out: &mut Vec<u8>, length: usize) {
    out.extend_from_slice(&(length as u32).to_be_bytes());
}

struct Cursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn is_empty(&self) -> bool {
        self.offset == self.bytes.len()
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], CodecError> {
        let end = self
            .offset
            .checked_add(count)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(CodecError::UnexpectedEnd)?;
        let taken = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(taken)
    }

    fn take_byte(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    fn take_length(&mut self) -> Result<usize, CodecError> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(u32::from_be_bytes(raw) as usize)
    }
}

fn decode_value(cursor: &mut Cursor<'_>) -> Result<ClarityValue, CodecError> {
    let tag = cursor.take_byte()?;
    match tag {
        TAG_INT => {
            let mut raw = [0u8; 16];
            raw.copy_from_slice(cursor.take(16)?);
            Ok(ClarityValue::Int(i128::from_be_bytes(raw)))
        }
        TAG_UINT => {
            let mut raw = [0u8; 16];
            raw.copy_from_slice(cursor.take(16)?);
            Ok(ClarityValue::UInt(u128::from_be_bytes(raw)))
        }
        TAG_BUFFER => {
            let length = cursor.take_length()?;
            Ok(ClarityValue::Buffer(cursor.take(length)?.to_vec()))
        }
        TAG_BOOL_TRUE => Ok(ClarityValue::Bool(true)),
        TAG_BOOL_FALSE => Ok(ClarityValue::Bool(false)),
        TAG_STANDARD_PRINCIPAL => Ok(ClarityValue::StandardPrincipal(decode_principal(cursor)?)),
        TAG_CONTRACT_PRINCIPAL => {
            let issuer = decode_principal(cursor)?;
            let name_length = cursor.take_byte()? as usize;
            let name = ascii_string(cursor.take(name_length)?)?;
            Ok(ClarityValue::ContractPrincipal { issuer, name })
        }
        TAG_RESPONSE_OK => Ok(ClarityValue::ok(decode_value(cursor)?)),
        TAG_RESPONSE_ERR => Ok(ClarityValue::err(decode_value(cursor)?)),
        TAG_OPTIONAL_NONE => Ok(ClarityValue::OptionalNone),
        TAG_OPTIONAL_SOME => Ok(ClarityValue::some(decode_value(cursor)?)),
        TAG_LIST => {
            let count = cursor.take_length()?;
            let mut items = Vec::new();
            for _ in 0..count {
                items.push(decode_value(cursor)?);
            }
            Ok(ClarityValue::List(items))
        }
        TAG_TUPLE => {
            let count = cursor.take_length()?;
            let mut entries = BTreeMap::new();
            for _ in 0..count {
                let name_length = cursor.take_byte()? as usize;
                let name = ascii_string(cursor.take(name_length)?)?;
                entries.insert(name, decode_value(cursor)?);
            }
            Ok(ClarityValue::Tuple(entries))
        }
        TAG_STRING_ASCII => {
            let length = cursor.take_length()?;
            Ok(ClarityValue::StringAscii(ascii_string(
                cursor.take(length)?,
            )?))
        }
        TAG_STRING_UTF8 => {
            let length = cursor.take_length()?;
            let contents = String::from_utf8(cursor.take(length)?.to_vec())
                .map_err(|err| CodecError::InvalidString(err.to_string()))?;
            Ok(ClarityValue::StringUtf8(contents))
        }
        unknown => Err(CodecError::UnknownTypeTag(unknown)),
    }
}

fn decode_principal(cursor: &mut Cursor<'_>) -> Result<PrincipalData, CodecError> {
    let version = cursor.take_byte()?;
    let mut hash_bytes = [0u8; 20];
    hash_bytes.copy_from_slice(cursor.take(20)?);
    Ok(PrincipalData::new(version, hash_bytes))
}

fn ascii_string(bytes: &[u8]) -> Result<String, CodecError> {
    if !bytes.is_ascii() {
        return Err(CodecError::InvalidString(
            "expected ascii contents".to_string(),
        ));
    }
    String::from_utf8(bytes.to_vec()).map_err(|err| CodecError::InvalidString(err.to_string()))
}

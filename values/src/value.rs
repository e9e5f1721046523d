//! The tagged value domain.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A standard principal: one version byte and a 20-byte public key hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalData {
    pub version: u8,
    pub hash_bytes: [u8; 20],
}

impl PrincipalData {
    pub fn new(version: u8, hash_bytes: [u8; 20]) -> Self {
        Self {
            version,
            hash_bytes,
        }
    }
}

/// A Clarity value as generated by the harness or decoded from an event
/// payload.
///
/// Absence and presence are explicit variants; the numeric type tags of
/// the wire form exist only inside the codec.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ClarityValue {
    Int(i128),
    UInt(u128),
    Buffer(Vec<u8>),
    Bool(bool),
    StandardPrincipal(PrincipalData),
    ContractPrincipal {
        issuer: PrincipalData,
        name: String,
    },
    ResponseOk(Box<ClarityValue>),
    ResponseErr(Box<ClarityValue>),
    OptionalNone,
    OptionalSome(Box<ClarityValue>),
    List(Vec<ClarityValue>),
    Tuple(BTreeMap<String, ClarityValue>),
    StringAscii(String),
    StringUtf8(String),
}

impl ClarityValue {
    /// A present optional wrapping `inner`.
    pub fn some(inner: ClarityValue) -> Self {
        ClarityValue::OptionalSome(Box::new(inner))
    }

    /// The absent optional.
    pub fn none() -> Self {
        ClarityValue::OptionalNone
    }

    pub fn ok(inner: ClarityValue) -> Self {
        ClarityValue::ResponseOk(Box::new(inner))
    }

    pub fn err(inner: ClarityValue) -> Self {
        ClarityValue::ResponseErr(Box::new(inner))
    }

    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        ClarityValue::Buffer(bytes.into())
    }

    pub fn string_ascii(contents: impl Into<String>) -> Self {
        ClarityValue::StringAscii(contents.into())
    }

    pub fn string_utf8(contents: impl Into<String>) -> Self {
        ClarityValue::StringUtf8(contents.into())
    }

    /// Whether the value is an option shape, present or absent.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            ClarityValue::OptionalNone | ClarityValue::OptionalSome(_)
        )
    }
}

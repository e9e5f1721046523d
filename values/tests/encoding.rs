use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use tryst_values::{from_canonical_hex, to_canonical_hex, ClarityValue, CodecError, PrincipalData};

fn principal() -> PrincipalData {
    PrincipalData::new(0x1a, [0x01; 20])
}

#[test]
fn encodes_unsigned_integers() {
    assert_eq!(
        to_canonical_hex(&ClarityValue::UInt(1)),
        "0x0100000000000000000000000000000001"
    );
}

#[test]
fn encodes_negative_integers_as_twos_complement() {
    assert_eq!(
        to_canonical_hex(&ClarityValue::Int(-1)),
        "0x00ffffffffffffffffffffffffffffffff"
    );
}

#[test]
fn encodes_booleans() {
    assert_eq!(to_canonical_hex(&ClarityValue::Bool(true)), "0x03");
    assert_eq!(to_canonical_hex(&ClarityValue::Bool(false)), "0x04");
}

#[test]
fn encodes_buffers_with_length_prefix() {
    assert_eq!(
        to_canonical_hex(&ClarityValue::buffer(*b"hello")),
        "0x020000000568656c6c6f"
    );
}

#[test]
fn encodes_optionals() {
    assert_eq!(to_canonical_hex(&ClarityValue::none()), "0x09");
    assert_eq!(
        to_canonical_hex(&ClarityValue::some(ClarityValue::UInt(1))),
        "0x0a0100000000000000000000000000000001"
    );
}

#[test]
fn wrapping_changes_the_encoding() {
    let inner = ClarityValue::buffer(*b"hello");
    let wrapped = ClarityValue::some(inner.clone());
    assert_ne!(to_canonical_hex(&inner), to_canonical_hex(&wrapped));
}

#[test]
fn encodes_responses() {
    assert_eq!(
        to_canonical_hex(&ClarityValue::ok(ClarityValue::Bool(true))),
        "0x0703"
    );
    assert_eq!(
        to_canonical_hex(&ClarityValue::err(ClarityValue::Bool(false))),
        "0x0804"
    );
}

#[test]
fn encodes_strings() {
    assert_eq!(
        to_canonical_hex(&ClarityValue::string_ascii("hello")),
        "0x0d0000000568656c6c6f"
    );
    // Length counts bytes, not characters.
    assert_eq!(
        to_canonical_hex(&ClarityValue::string_utf8("h\u{e9}llo")),
        "0x0e0000000668c3a96c6c6f"
    );
}

#[test]
fn encodes_lists_with_count_prefix() {
    let list = ClarityValue::List(vec![ClarityValue::UInt(1), ClarityValue::UInt(2)]);
    assert_eq!(
        to_canonical_hex(&list),
        concat!(
            "0x0b00000002",
            "0100000000000000000000000000000001",
            "0100000000000000000000000000000002",
        )
    );
}

#[test]
fn encodes_tuples_in_key_order() {
    let mut entries = BTreeMap::new();
    entries.insert("b".to_string(), ClarityValue::Bool(false));
    entries.insert("a".to_string(), ClarityValue::Bool(true));
    assert_eq!(
        to_canonical_hex(&ClarityValue::Tuple(entries)),
        "0x0c00000002016103016204"
    );
}

#[test]
fn encodes_principals() {
    assert_eq!(
        to_canonical_hex(&ClarityValue::StandardPrincipal(principal())),
        "0x051a0101010101010101010101010101010101010101"
    );
    assert_eq!(
        to_canonical_hex(&ClarityValue::ContractPrincipal {
            issuer: principal(),
            name: "token".to_string(),
        }),
        "0x061a010101010101010101010101010101010101010105746f6b656e"
    );
}

#[test]
fn decodes_nested_values() {
    let value = ClarityValue::some(ClarityValue::ok(ClarityValue::buffer(*b"memo")));
    let decoded = from_canonical_hex(&to_canonical_hex(&value)).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn rejects_missing_prefix() {
    assert_eq!(from_canonical_hex("09"), Err(CodecError::MissingPrefix));
}

#[test]
fn rejects_invalid_hex() {
    assert!(matches!(
        from_canonical_hex("0xg9"),
        Err(CodecError::InvalidHex(_))
    ));
}

#[test]
fn rejects_unknown_type_tags() {
    assert_eq!(
        from_canonical_hex("0xff"),
        Err(CodecError::UnknownTypeTag(0xff))
    );
}

#[test]
fn rejects_truncated_input() {
    assert_eq!(from_canonical_hex("0x01ff"), Err(CodecError::UnexpectedEnd));
}

#[test]
fn rejects_trailing_bytes() {
    assert_eq!(from_canonical_hex("0x0303"), Err(CodecError::TrailingBytes));
}

#[test]
fn rejects_non_ascii_ascii_strings() {
    assert!(matches!(
        from_canonical_hex("0x0d00000001ff"),
        Err(CodecError::InvalidString(_))
    ));
}

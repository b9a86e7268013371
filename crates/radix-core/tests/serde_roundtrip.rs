use radix_core::{hex_to_decimal, Radix, RadixError};
use serde_json::Value;

#[test]
fn error_round_trips_json() {
    let err = hex_to_decimal("0xFFFFFFFF").unwrap_err();
    let json = serde_json::to_string_pretty(&err).expect("serialize");
    let decoded: RadixError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn error_json_is_tagged_by_kind() {
    let err = hex_to_decimal("0xZZ").unwrap_err();
    let value: Value = serde_json::to_value(&err).expect("serialize");
    assert_eq!(value["kind"], "invalid_format");
    assert_eq!(value["detail"]["code"], "invalid_hex");
    assert!(value["detail"]["context"].get("position").is_some());
}

#[test]
fn radix_serializes_as_snake_case() {
    let json = serde_json::to_string(&Radix::Hex).expect("serialize");
    assert_eq!(json, "\"hex\"");
    let decoded: Radix = serde_json::from_str("\"binary\"").expect("deserialize");
    assert_eq!(decoded, Radix::Binary);
}

use radix_core::{
    binary_to_decimal, binary_to_hex, decimal_to_binary, decimal_to_hex, hex_to_binary,
    hex_to_decimal, ErrorKind,
};

fn max_binary() -> String {
    format!("0b{}", "1".repeat(31))
}

#[test]
fn largest_values_convert() {
    assert_eq!(hex_to_decimal("0x7FFFFFFF").unwrap(), 2_147_483_647);
    assert_eq!(hex_to_binary("0x7FFFFFFF").unwrap(), max_binary());
    assert_eq!(binary_to_decimal(max_binary().as_str()).unwrap(), i32::MAX);
    assert_eq!(binary_to_hex(max_binary().as_str()).unwrap(), "0x7FFFFFFF");
    assert_eq!(decimal_to_binary(i32::MAX), Some(max_binary()));
    assert_eq!(decimal_to_hex(i32::MAX).as_deref(), Some("0x7FFFFFFF"));
}

#[test]
fn eight_digit_hex_above_range_overflows() {
    for input in ["0x80000000", "0xFFFFFFFF", "0x9ABCDEF0"] {
        assert_eq!(hex_to_decimal(input).unwrap_err().kind(), ErrorKind::Overflow, "{input}");
        assert_eq!(hex_to_binary(input).unwrap_err().kind(), ErrorKind::Overflow, "{input}");
    }
}

#[test]
fn malformed_eight_digit_hex_is_a_format_error() {
    for input in ["0xGGGGGGGG", "0x8000000Z", "0xFfffffff", "0xG0000000"] {
        assert_eq!(
            hex_to_decimal(input).unwrap_err().kind(),
            ErrorKind::InvalidFormat,
            "{input}"
        );
        assert_eq!(
            hex_to_binary(input).unwrap_err().kind(),
            ErrorKind::InvalidFormat,
            "{input}"
        );
    }
}

#[test]
fn too_long_inputs_fail_shape() {
    let binary = format!("0b{}", "1".repeat(32));
    assert_eq!(binary_to_hex(binary.as_str()).unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(binary_to_decimal(binary.as_str()).unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(hex_to_decimal("0x7FFFFFFF0").unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(hex_to_binary("0x000000001").unwrap_err().kind(), ErrorKind::InvalidFormat);
}

#[test]
fn empty_payloads_fail_shape() {
    assert_eq!(binary_to_hex("0b").unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(hex_to_decimal("0x").unwrap_err().kind(), ErrorKind::InvalidFormat);
    assert_eq!(binary_to_decimal("").unwrap_err().kind(), ErrorKind::InvalidFormat);
}

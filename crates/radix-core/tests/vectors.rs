use radix_core::{
    binary_to_decimal, binary_to_hex, decimal_to_binary, decimal_to_hex, hex_to_binary,
    hex_to_decimal,
};

#[test]
fn reference_vectors() {
    assert_eq!(binary_to_hex("0b1010").unwrap(), "0xA");
    assert_eq!(hex_to_binary("0xA").unwrap(), "0b1010");
    assert_eq!(decimal_to_binary(13).as_deref(), Some("0b1101"));
    assert_eq!(binary_to_decimal("0b1101").unwrap(), 13);
    assert_eq!(decimal_to_hex(255).as_deref(), Some("0xFF"));
    assert_eq!(hex_to_decimal("0xFF").unwrap(), 255);
}

#[test]
fn zero_has_a_single_digit() {
    assert_eq!(decimal_to_binary(0).as_deref(), Some("0b0"));
    assert_eq!(decimal_to_hex(0).as_deref(), Some("0x0"));
    assert_eq!(binary_to_hex("0b0").unwrap(), "0x0");
    assert_eq!(hex_to_binary("0x0").unwrap(), "0b0");
    assert_eq!(binary_to_decimal("0b0").unwrap(), 0);
    assert_eq!(hex_to_decimal("0x0").unwrap(), 0);
}

#[test]
fn negative_decimals_have_no_value() {
    assert_eq!(decimal_to_binary(-1), None);
    assert_eq!(decimal_to_hex(-1), None);
    assert_eq!(decimal_to_binary(i32::MIN), None);
    assert_eq!(decimal_to_hex(i32::MIN), None);
}

#[test]
fn leading_zeros_are_accepted_and_stripped() {
    assert_eq!(binary_to_hex("0b00001111").unwrap(), "0xF");
    assert_eq!(hex_to_binary("0x000F").unwrap(), "0b1111");
    assert_eq!(binary_to_decimal("0b0000101").unwrap(), 5);
    assert_eq!(hex_to_decimal("0x0010").unwrap(), 16);
}

#[test]
fn mixed_digit_vectors() {
    assert_eq!(binary_to_hex("0b110111101010110110111110111").unwrap(), "0x6F56DF7");
    assert_eq!(hex_to_binary("0x1F3").unwrap(), "0b111110011");
    assert_eq!(hex_to_decimal("0xC0FFEE").unwrap(), 0xC0FFEE);
    assert_eq!(decimal_to_hex(48879).as_deref(), Some("0xBEEF"));
    assert_eq!(decimal_to_binary(1024).as_deref(), Some("0b10000000000"));
}

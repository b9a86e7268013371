//! Static lookup tables shared by the hex and binary conversions.
//!
//! Both tables are indexed by nibble value, so `HEX_DIGITS[n]` and
//! `NIBBLE_PATTERNS[n]` always describe the same quantity.

/// Uppercase hexadecimal digits ordered by value.
pub const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Four-bit binary patterns ordered by value.
pub const NIBBLE_PATTERNS: [&str; 16] = [
    "0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111", "1000", "1001", "1010",
    "1011", "1100", "1101", "1110", "1111",
];

/// Returns the value of an uppercase hexadecimal digit.
pub fn hex_value(digit: char) -> Option<u8> {
    HEX_DIGITS
        .iter()
        .position(|&candidate| candidate == digit)
        .map(|value| value as u8)
}

/// Returns the value of a four-byte group of binary digits.
pub fn nibble_value(group: &[u8]) -> Option<u8> {
    NIBBLE_PATTERNS
        .iter()
        .position(|pattern| pattern.as_bytes() == group)
        .map(|value| value as u8)
}

/// Returns the hex digit for a nibble value in `0..16`.
pub(crate) fn hex_digit(value: u32) -> char {
    HEX_DIGITS[(value & 0xF) as usize]
}

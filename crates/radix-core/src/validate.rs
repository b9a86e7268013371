//! Shape checks, digit checks and the 8-digit hexadecimal range guard.

use crate::errors::RadixError;
use crate::tables::hex_value;

/// Prefix carried by every binary string.
pub const BINARY_PREFIX: &str = "0b";
/// Prefix carried by every hexadecimal string.
pub const HEX_PREFIX: &str = "0x";
/// Maximum number of binary digits after the prefix.
pub const MAX_BINARY_DIGITS: usize = 31;
/// Maximum number of hexadecimal digits after the prefix.
pub const MAX_HEX_DIGITS: usize = 8;

/// Returns `true` when `binary` has the length and prefix of a binary string.
///
/// Digits are not inspected.
pub fn is_valid_binary_shape(binary: &str) -> bool {
    let len = binary.len();
    (BINARY_PREFIX.len() + 1..=BINARY_PREFIX.len() + MAX_BINARY_DIGITS).contains(&len)
        && binary.starts_with(BINARY_PREFIX)
}

/// Returns `true` when `hex` has the length and prefix of a hexadecimal string.
///
/// Digits are not inspected.
pub fn is_valid_hex_shape(hex: &str) -> bool {
    let len = hex.len();
    (HEX_PREFIX.len() + 1..=HEX_PREFIX.len() + MAX_HEX_DIGITS).contains(&len)
        && hex.starts_with(HEX_PREFIX)
}

/// Checks that every payload character of `hex` after the first `skip` is an
/// uppercase hexadecimal digit.
///
/// The `"0x"` prefix is optional. Reported positions index the payload.
pub fn check_hex_digits(hex: &str, skip: usize) -> Result<(), RadixError> {
    let digits = hex.strip_prefix(HEX_PREFIX).unwrap_or(hex);
    let invalid = digits
        .chars()
        .enumerate()
        .skip(skip)
        .find(|(_, character)| hex_value(*character).is_none());
    match invalid {
        Some((position, character)) => Err(RadixError::invalid_hex(hex).at(position, character)),
        None => Ok(()),
    }
}

/// Applies the range guard to a shape-valid hexadecimal string.
///
/// A full 8-digit payload only fits a non-negative `i32` when its leading
/// digit is `0`..`7`. Otherwise the input is an overflow if it is well formed
/// and a format error if it is not.
pub fn check_hex_range(hex: &str) -> Result<(), RadixError> {
    let digits = hex.strip_prefix(HEX_PREFIX).unwrap_or(hex);
    if digits.len() < MAX_HEX_DIGITS {
        return Ok(());
    }
    let Some(lead) = digits.chars().next() else {
        return Ok(());
    };
    if ('0'..='7').contains(&lead) {
        return Ok(());
    }
    check_hex_digits(hex, 1)?;
    if hex_value(lead).is_none() {
        return Err(RadixError::invalid_hex(hex).at(0, lead));
    }
    Err(RadixError::hex_overflow(hex))
}

/// Removes leading `'0'` characters, keeping at least one digit.
pub fn strip_leading_zeros(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}

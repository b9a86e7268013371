//! The six conversions between binary strings, hexadecimal strings and `i32`.
//!
//! String inputs are taken as `impl Into<Option<&str>>` so callers pass a
//! plain `&str` in the common case and `None` when no value is available.
//! Negative integers are outside the domain of the decimal conversions and
//! yield `None` rather than an error.

use std::fmt::Display;

use tracing::{debug, trace};

use crate::errors::RadixError;
use crate::tables::{hex_digit, hex_value, nibble_value, HEX_DIGITS, NIBBLE_PATTERNS};
use crate::validate::{
    check_hex_range, is_valid_binary_shape, is_valid_hex_shape, strip_leading_zeros,
    BINARY_PREFIX, HEX_PREFIX,
};

/// Converts a binary string such as `"0b1010"` to its hexadecimal form `"0xA"`.
pub fn binary_to_hex<'a>(binary: impl Into<Option<&'a str>>) -> Result<String, RadixError> {
    let binary = require(binary.into(), "binary")?;
    traced("binary_to_hex", binary, binary_to_hex_inner(binary))
}

fn binary_to_hex_inner(binary: &str) -> Result<String, RadixError> {
    let digits = binary_payload(binary)?;
    let pad = (4 - digits.len() % 4) % 4;
    let padded = format!("{}{}", "0".repeat(pad), digits);

    let mut hex = String::with_capacity(padded.len() / 4);
    for (index, group) in padded.as_bytes().chunks(4).enumerate() {
        let value = nibble_value(group).ok_or_else(|| {
            let start = (index * 4).saturating_sub(pad);
            let (position, character) = first_non_binary(digits, start);
            RadixError::invalid_binary(binary).at(position, character)
        })?;
        hex.push(HEX_DIGITS[value as usize]);
    }
    Ok(format!("{HEX_PREFIX}{}", strip_leading_zeros(&hex)))
}

/// Converts a hexadecimal string such as `"0xA"` to its binary form `"0b1010"`.
///
/// Fails with [`RadixError::Overflow`] when the value would need a 32nd bit.
pub fn hex_to_binary<'a>(hex: impl Into<Option<&'a str>>) -> Result<String, RadixError> {
    let hex = require(hex.into(), "hex")?;
    traced("hex_to_binary", hex, hex_to_binary_inner(hex))
}

fn hex_to_binary_inner(hex: &str) -> Result<String, RadixError> {
    let digits = hex_payload(hex)?;
    let mut binary = String::with_capacity(digits.len() * 4);
    for (position, character) in digits.chars().enumerate() {
        let value = hex_value(character)
            .ok_or_else(|| RadixError::invalid_hex(hex).at(position, character))?;
        binary.push_str(NIBBLE_PATTERNS[value as usize]);
    }
    Ok(format!("{BINARY_PREFIX}{}", strip_leading_zeros(&binary)))
}

/// Converts a non-negative integer to a binary string.
///
/// Returns `None` for negative input.
pub fn decimal_to_binary(decimal: i32) -> Option<String> {
    let output = render(decimal, 2, BINARY_PREFIX)?;
    trace!(op = "decimal_to_binary", decimal, output = %output, "converted");
    Some(output)
}

/// Converts a binary string to its integer value.
pub fn binary_to_decimal<'a>(binary: impl Into<Option<&'a str>>) -> Result<i32, RadixError> {
    let binary = require(binary.into(), "binary")?;
    traced("binary_to_decimal", binary, binary_to_decimal_inner(binary))
}

fn binary_to_decimal_inner(binary: &str) -> Result<i32, RadixError> {
    let digits = binary_payload(binary)?;
    let mut value: u64 = 0;
    let mut factor: u64 = 1;
    for (position, character) in digits.chars().rev().enumerate() {
        let bit = match character {
            '0' => 0,
            '1' => 1,
            _ => {
                let position = digits.chars().count() - 1 - position;
                return Err(RadixError::invalid_binary(binary).at(position, character));
            }
        };
        value += bit * factor;
        factor *= 2;
    }
    // 31 digits never exceed i32::MAX
    i32::try_from(value).map_err(|_| RadixError::invalid_binary(binary))
}

/// Converts a non-negative integer to a hexadecimal string.
///
/// Returns `None` for negative input.
pub fn decimal_to_hex(decimal: i32) -> Option<String> {
    let output = render(decimal, 16, HEX_PREFIX)?;
    trace!(op = "decimal_to_hex", decimal, output = %output, "converted");
    Some(output)
}

/// Converts a hexadecimal string to its integer value.
///
/// Fails with [`RadixError::Overflow`] for well-formed values above
/// `0x7FFFFFFF`.
pub fn hex_to_decimal<'a>(hex: impl Into<Option<&'a str>>) -> Result<i32, RadixError> {
    let hex = require(hex.into(), "hex")?;
    traced("hex_to_decimal", hex, hex_to_decimal_inner(hex))
}

fn hex_to_decimal_inner(hex: &str) -> Result<i32, RadixError> {
    let digits = hex_payload(hex)?;
    let mut value: u64 = 0;
    let mut factor: u64 = 1;
    for (position, character) in digits.chars().rev().enumerate() {
        let digit = hex_value(character).ok_or_else(|| {
            let position = digits.chars().count() - 1 - position;
            RadixError::invalid_hex(hex).at(position, character)
        })?;
        value += u64::from(digit) * factor;
        factor *= 16;
    }
    i32::try_from(value).map_err(|_| RadixError::hex_overflow(hex))
}

pub(crate) fn require<'a>(input: Option<&'a str>, param: &str) -> Result<&'a str, RadixError> {
    input.ok_or_else(|| {
        debug!(param, "missing argument");
        RadixError::missing(param)
    })
}

fn binary_payload(binary: &str) -> Result<&str, RadixError> {
    if !is_valid_binary_shape(binary) {
        return Err(RadixError::invalid_binary(binary));
    }
    Ok(&binary[BINARY_PREFIX.len()..])
}

fn hex_payload(hex: &str) -> Result<&str, RadixError> {
    if !is_valid_hex_shape(hex) {
        return Err(RadixError::invalid_hex(hex));
    }
    check_hex_range(hex)?;
    Ok(&hex[HEX_PREFIX.len()..])
}

fn first_non_binary(digits: &str, from: usize) -> (usize, char) {
    digits
        .chars()
        .enumerate()
        .skip(from)
        .find(|(_, character)| !matches!(character, '0' | '1'))
        .unwrap_or((from, '?'))
}

fn render(decimal: i32, base: u32, prefix: &str) -> Option<String> {
    if decimal < 0 {
        return None;
    }
    let mut remaining = decimal.unsigned_abs();
    if remaining == 0 {
        return Some(format!("{prefix}0"));
    }
    let mut digits = Vec::new();
    while remaining > 0 {
        digits.push(hex_digit(remaining % base));
        remaining /= base;
    }
    let payload: String = digits.into_iter().rev().collect();
    Some(format!("{prefix}{payload}"))
}

fn traced<T: Display>(
    op: &'static str,
    input: &str,
    result: Result<T, RadixError>,
) -> Result<T, RadixError> {
    match &result {
        Ok(output) => trace!(op, input, output = %output, "converted"),
        Err(err) => debug!(op, input, code = %err.info().code, "rejected input"),
    }
    result
}

//! Dispatch between the three representations by name.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::convert::{
    binary_to_decimal, binary_to_hex, decimal_to_binary, decimal_to_hex, hex_to_binary,
    hex_to_decimal, require,
};
use crate::errors::RadixError;
use crate::validate::{BINARY_PREFIX, HEX_PREFIX};

/// A supported number representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Radix {
    /// `"0b"`-prefixed base 2 string.
    Binary,
    /// `"0x"`-prefixed uppercase base 16 string.
    Hex,
    /// Plain base 10 integer.
    Decimal,
}

impl Radix {
    /// Returns the textual prefix, empty for decimal.
    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => BINARY_PREFIX,
            Radix::Hex => HEX_PREFIX,
            Radix::Decimal => "",
        }
    }

    /// Returns the numeric base.
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Hex => 16,
            Radix::Decimal => 10,
        }
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Radix::Binary => "binary",
            Radix::Hex => "hex",
            Radix::Decimal => "decimal",
        };
        f.write_str(name)
    }
}

impl FromStr for Radix {
    type Err = RadixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" | "b" => Ok(Radix::Binary),
            "hex" | "x" => Ok(Radix::Hex),
            "decimal" | "dec" | "d" => Ok(Radix::Decimal),
            _ => Err(RadixError::unknown_radix(s)),
        }
    }
}

/// Parses `input` in the `from` representation and renders it in `to`.
///
/// Returns `Ok(None)` when the value is a negative decimal, mirroring
/// [`decimal_to_binary`] and [`decimal_to_hex`]. Same-radix conversions
/// canonicalize the input.
pub fn convert<'a>(
    input: impl Into<Option<&'a str>>,
    from: Radix,
    to: Radix,
) -> Result<Option<String>, RadixError> {
    let input = input.into();
    match from {
        Radix::Binary => match to {
            Radix::Binary => binary_to_decimal(input).map(decimal_to_binary),
            Radix::Hex => binary_to_hex(input).map(Some),
            Radix::Decimal => binary_to_decimal(input).map(|value| Some(value.to_string())),
        },
        Radix::Hex => match to {
            Radix::Binary => hex_to_binary(input).map(Some),
            Radix::Hex => hex_to_decimal(input).map(decimal_to_hex),
            Radix::Decimal => hex_to_decimal(input).map(|value| Some(value.to_string())),
        },
        Radix::Decimal => {
            let value = parse_decimal(require(input, "decimal")?)?;
            Ok(match to {
                Radix::Binary => decimal_to_binary(value),
                Radix::Hex => decimal_to_hex(value),
                Radix::Decimal => (value >= 0).then(|| value.to_string()),
            })
        }
    }
}

/// Parses a base 10 string into an `i32`.
pub fn parse_decimal(input: &str) -> Result<i32, RadixError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| RadixError::invalid_decimal(input))
}

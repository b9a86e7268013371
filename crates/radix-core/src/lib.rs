#![deny(missing_docs)]
#![doc = "Validated conversions between `0b` binary strings, `0x` hexadecimal strings and non-negative `i32` values."]

pub mod convert;
pub mod errors;
pub mod radix;
pub mod tables;
pub mod validate;

pub use convert::{
    binary_to_decimal, binary_to_hex, decimal_to_binary, decimal_to_hex, hex_to_binary,
    hex_to_decimal,
};
pub use errors::{ErrorInfo, ErrorKind, RadixError};
pub use radix::{convert, parse_decimal, Radix};
pub use validate::strip_leading_zeros;

/// Version of this crate, reported by the command line front end.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

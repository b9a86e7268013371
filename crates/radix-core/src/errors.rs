//! Structured error types returned by the conversion functions.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`RadixError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (offending input, position, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Category of a [`RadixError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No input was supplied.
    MissingArgument,
    /// The input failed shape or digit validation.
    InvalidFormat,
    /// The input is well formed but exceeds the non-negative `i32` range.
    Overflow,
}

/// Canonical error type for radix conversions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RadixError {
    /// Input reference was absent where a string was required.
    #[error("missing argument: {0}")]
    MissingArgument(ErrorInfo),
    /// Input string failed shape or digit-set validation.
    #[error("invalid format: {0}")]
    InvalidFormat(ErrorInfo),
    /// Syntactically valid input whose value does not fit a non-negative `i32`.
    #[error("overflow: {0}")]
    Overflow(ErrorInfo),
}

impl RadixError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            RadixError::MissingArgument(info)
            | RadixError::InvalidFormat(info)
            | RadixError::Overflow(info) => info,
        }
    }

    /// Returns the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RadixError::MissingArgument(_) => ErrorKind::MissingArgument,
            RadixError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            RadixError::Overflow(_) => ErrorKind::Overflow,
        }
    }

    pub(crate) fn missing(param: &str) -> Self {
        RadixError::MissingArgument(
            ErrorInfo::new("missing_argument", "no value was passed as a parameter")
                .with_context("param", param),
        )
    }

    pub(crate) fn invalid_binary(input: &str) -> Self {
        RadixError::InvalidFormat(
            ErrorInfo::new("invalid_binary", "the parameter is not a valid binary string")
                .with_context("input", input)
                .with_hint("expected \"0b\" followed by 1 to 31 digits 0 or 1"),
        )
    }

    pub(crate) fn invalid_hex(input: &str) -> Self {
        RadixError::InvalidFormat(
            ErrorInfo::new("invalid_hex", "the parameter is not a valid hexadecimal string")
                .with_context("input", input)
                .with_hint("expected \"0x\" followed by 1 to 8 digits 0-9 or A-F"),
        )
    }

    pub(crate) fn hex_overflow(input: &str) -> Self {
        RadixError::Overflow(
            ErrorInfo::new(
                "hex_overflow",
                "hexadecimal value is too large to fit a non-negative 32-bit integer",
            )
            .with_context("input", input)
            .with_context("max", "0x7FFFFFFF"),
        )
    }

    pub(crate) fn invalid_decimal(input: &str) -> Self {
        RadixError::InvalidFormat(
            ErrorInfo::new("invalid_decimal", "the parameter is not a valid decimal integer")
                .with_context("input", input)
                .with_hint("expected an integer between 0 and 2147483647"),
        )
    }

    pub(crate) fn unknown_radix(input: &str) -> Self {
        RadixError::InvalidFormat(
            ErrorInfo::new("unknown_radix", "unrecognised number representation")
                .with_context("input", input)
                .with_hint("use one of: binary, hex, decimal"),
        )
    }

    /// Attaches the offending character and its payload position.
    pub(crate) fn at(self, position: usize, character: char) -> Self {
        let attach = |info: ErrorInfo| {
            info.with_context("position", position.to_string())
                .with_context("character", character.to_string())
        };
        match self {
            RadixError::MissingArgument(info) => RadixError::MissingArgument(attach(info)),
            RadixError::InvalidFormat(info) => RadixError::InvalidFormat(attach(info)),
            RadixError::Overflow(info) => RadixError::Overflow(attach(info)),
        }
    }
}

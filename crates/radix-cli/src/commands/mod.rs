pub mod convert;
pub mod version;

use std::process::ExitCode;

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A value was produced.
    Converted,
    /// The input was rejected by validation.
    Rejected,
    /// The input lies outside the conversion domain (negative decimal).
    NotApplicable,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Converted => ExitCode::SUCCESS,
            Outcome::Rejected => ExitCode::FAILURE,
            Outcome::NotApplicable => ExitCode::from(3),
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single reason an RFC failed validation.
///
/// Variants are declared in check order; a result never lists a kind twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The normalized input does not match `[A-ZÑ&]{3,4}[0-9]{6}[A-Z0-9]{3}`.
    InvalidFormat,
    /// The `YYMMDD` block is not a real calendar date in 2000–2099.
    InvalidDate,
    /// The trailing character does not match the computed verification digit.
    InvalidVerificationDigit,
}

impl ErrorKind {
    /// The literal name used in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::InvalidDate => "INVALID_DATE",
            Self::InvalidVerificationDigit => "INVALID_VERIFICATION_DIGIT",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string into a validated [`Rfc`](super::Rfc).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid RFC: {}", join_kinds(.errors))]
pub struct RfcError {
    /// The failed checks, in check order.
    pub errors: Vec<ErrorKind>,
}

fn join_kinds(errors: &[ErrorKind]) -> String {
    errors
        .iter()
        .map(ErrorKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised by the verification digit calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChecksumError {
    /// The identifier is neither 12 nor 13 characters long.
    #[error("expected 12 or 13 characters, got {0}")]
    UnsupportedLength(usize),

    /// A character outside the SAT checksum dictionary.
    #[error("character '{0}' has no checksum value")]
    UnknownCharacter(char),
}

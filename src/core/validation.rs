use std::fmt::Display;

use chrono::NaiveDate;

use super::checksum::has_valid_verification_digit;
use super::date::parse_date;
use super::error::ErrorKind;
use super::format::is_valid_format;
use super::normalize::normalize;
use super::types::{Rfc, RfcType, ValidationResult};

/// Run every applicable check on an already-normalized candidate.
///
/// A format failure suppresses the other checks and is reported alone.
/// Otherwise the date and verification digit are both checked and every
/// failure is collected, in that order. An empty list means the RFC is valid.
pub fn collect_errors(rfc: &str) -> Vec<ErrorKind> {
    check(rfc).err().unwrap_or_default()
}

/// Same checks as [`collect_errors`], keeping the taxpayer kind and date of a
/// valid candidate.
pub(crate) fn check(rfc: &str) -> Result<(RfcType, NaiveDate), Vec<ErrorKind>> {
    let (true, Some(rfc_type)) = (is_valid_format(rfc), RfcType::of(rfc)) else {
        return Err(vec![ErrorKind::InvalidFormat]);
    };

    let mut errors = Vec::new();
    let date = parse_date(rfc);
    if date.is_none() {
        errors.push(ErrorKind::InvalidDate);
    }
    if !has_valid_verification_digit(rfc) {
        errors.push(ErrorKind::InvalidVerificationDigit);
    }

    match date {
        Some(date) if errors.is_empty() => Ok((rfc_type, date)),
        _ => Err(errors),
    }
}

/// Normalize and validate an RFC.
///
/// Accepts any displayable value. Never panics: malformed, empty, or
/// non-string input ends in [`ValidationResult::Invalid`].
pub fn validate(input: impl Display) -> ValidationResult {
    let candidate = normalize(input);
    let len = candidate.chars().count();
    match Rfc::from_normalized(candidate) {
        Ok(rfc) => rfc.into(),
        Err(err) => {
            tracing::debug!(len, errors = ?err.errors, "RFC failed validation");
            err.into()
        }
    }
}

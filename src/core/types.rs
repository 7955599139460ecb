use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::error::{ErrorKind, RfcError};
use super::normalize::normalize;
use super::validation::check;

/// Length of a company RFC (3 name letters).
pub const COMPANY_RFC_LEN: usize = 12;
/// Length of a person RFC (4 name letters).
pub const PERSON_RFC_LEN: usize = 13;

/// Kind of taxpayer an RFC identifies, derived from its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RfcType {
    /// Persona física, 13 characters.
    Person,
    /// Persona moral, 12 characters.
    Company,
}

impl RfcType {
    /// Map a length in characters (not bytes) to a taxpayer kind.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            COMPANY_RFC_LEN => Some(Self::Company),
            PERSON_RFC_LEN => Some(Self::Person),
            _ => None,
        }
    }

    /// Taxpayer kind of a normalized candidate.
    pub fn of(rfc: &str) -> Option<Self> {
        Self::from_len(rfc.chars().count())
    }

    /// Lowercase name used in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Company => "company",
        }
    }
}

impl fmt::Display for RfcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`validate`](super::validate).
///
/// Serializes to `{"isValid", "rfc", "type"}` plus `"errors"` for the
/// invalid case, with `null` for the absent `rfc` and `type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid {
        /// The normalized identifier.
        rfc: String,
        rfc_type: RfcType,
    },
    Invalid {
        /// Failed checks in check order: format, date, verification digit.
        errors: Vec<ErrorKind>,
    },
}

impl ValidationResult {
    /// Whether every check passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The normalized identifier, only for valid results.
    pub fn rfc(&self) -> Option<&str> {
        match self {
            Self::Valid { rfc, .. } => Some(rfc),
            Self::Invalid { .. } => None,
        }
    }

    /// Taxpayer kind, only for valid results.
    pub fn rfc_type(&self) -> Option<RfcType> {
        match self {
            Self::Valid { rfc_type, .. } => Some(*rfc_type),
            Self::Invalid { .. } => None,
        }
    }

    /// Failed checks; empty for valid results.
    pub fn errors(&self) -> &[ErrorKind] {
        match self {
            Self::Valid { .. } => &[],
            Self::Invalid { errors } => errors,
        }
    }
}

impl From<Rfc> for ValidationResult {
    fn from(rfc: Rfc) -> Self {
        Self::Valid {
            rfc_type: rfc.rfc_type,
            rfc: rfc.value,
        }
    }
}

impl From<RfcError> for ValidationResult {
    fn from(err: RfcError) -> Self {
        Self::Invalid { errors: err.errors }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid { rfc, rfc_type } => {
                let mut s = serializer.serialize_struct("ValidationResult", 3)?;
                s.serialize_field("isValid", &true)?;
                s.serialize_field("rfc", rfc)?;
                s.serialize_field("type", rfc_type)?;
                s.end()
            }
            Self::Invalid { errors } => {
                let mut s = serializer.serialize_struct("ValidationResult", 4)?;
                s.serialize_field("isValid", &false)?;
                s.serialize_field("rfc", &None::<&str>)?;
                s.serialize_field("type", &None::<RfcType>)?;
                s.serialize_field("errors", errors)?;
                s.end()
            }
        }
    }
}

/// A normalized RFC that passed every check.
///
/// Parsing normalizes first, so `" gode-561231-gr8 "` parses to `GODE561231GR8`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rfc {
    value: String,
    rfc_type: RfcType,
    date: NaiveDate,
}

impl Rfc {
    /// Normalize and validate any displayable value.
    pub fn parse(input: impl fmt::Display) -> Result<Self, RfcError> {
        Self::from_normalized(normalize(input))
    }

    pub(crate) fn from_normalized(value: String) -> Result<Self, RfcError> {
        let (rfc_type, date) = check(&value).map_err(|errors| RfcError { errors })?;
        Ok(Self {
            value,
            rfc_type,
            date,
        })
    }

    /// The normalized identifier.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Person or company, from the identifier length.
    pub fn rfc_type(&self) -> RfcType {
        self.rfc_type
    }

    /// Date embedded in the identifier (birth or incorporation date), read as `20YY`.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Name block: 4 letters for persons, 3 for companies.
    pub fn letters(&self) -> &str {
        // date and suffix blocks are ASCII, 9 bytes in total
        &self.value[..self.value.len() - 9]
    }

    /// Homoclave and verification digit.
    pub fn homoclave(&self) -> &str {
        &self.value[self.value.len() - 3..]
    }

    /// Trailing verification digit (`'0'`–`'9'` or `'A'`).
    pub fn verification_digit(&self) -> char {
        self.value.chars().last().unwrap_or('0')
    }
}

impl fmt::Display for Rfc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Rfc {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rfc {
    type Error = RfcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Rfc> for String {
    fn from(rfc: Rfc) -> Self {
        rfc.value
    }
}

impl AsRef<str> for Rfc {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

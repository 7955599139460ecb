//! Core RFC types, normalization, and the validation pipeline.
//!
//! The checks run in a fixed order: structural format, then the embedded
//! date and the verification digit. Date and digit are only evaluated when
//! the format passes.

mod checksum;
mod date;
mod error;
mod format;
mod normalize;
mod types;
mod validation;

pub use checksum::{has_valid_verification_digit, verification_digit};
pub use date::{is_valid_date, parse_date};
pub use error::*;
pub use format::{RfcParts, is_valid_format, split_parts};
pub use normalize::{is_rfc_char, normalize};
pub use types::*;
pub use validation::*;

//! # rfc-mx
//!
//! Validation of Mexican RFC identifiers (Registro Federal de Contribuyentes)
//! for both persons (13 characters) and companies (12 characters).
//!
//! Raw input is normalized, checked against the structural format, the
//! embedded `YYMMDD` date is checked against the calendar, and the trailing
//! verification digit is recomputed with the SAT weighting algorithm.
//! Failures are reported as data, never as panics.
//!
//! ## Quick Start
//!
//! ```rust
//! use rfc_mx::*;
//!
//! let result = validate(" gode-561231-gr8 ");
//! assert!(result.is_valid());
//! assert_eq!(result.rfc(), Some("GODE561231GR8"));
//! assert_eq!(result.rfc_type(), Some(RfcType::Person));
//!
//! let result = validate("MAG041126GT9");
//! assert_eq!(result.errors(), &[ErrorKind::InvalidVerificationDigit]);
//!
//! let rfc: Rfc = "MAG041126GT8".parse().unwrap();
//! assert_eq!(rfc.rfc_type(), RfcType::Company);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Normalization, format/date/checksum validation, result types |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

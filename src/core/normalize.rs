//! Input canonicalization.

use std::fmt::Display;

/// Whether `c` belongs to the RFC alphabet `[0-9A-ZÑ&]`.
pub fn is_rfc_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase() || c == 'Ñ' || c == '&'
}

/// Canonicalize any displayable value into an RFC candidate.
///
/// Trims surrounding whitespace, upper-cases (so `ñ` becomes `Ñ`), then drops
/// every character outside `[0-9A-ZÑ&]`. Never fails; the result may be empty.
pub fn normalize(input: impl Display) -> String {
    input
        .to_string()
        .trim()
        .to_uppercase()
        .chars()
        .filter(|&c| is_rfc_char(c))
        .collect()
}

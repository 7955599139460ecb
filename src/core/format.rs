//! Structural RFC format check.

use std::sync::LazyLock;

use regex::Regex;

static RFC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-ZÑ&]{3,4})([0-9]{6})([A-Z0-9]{3})$").expect("RFC pattern is valid")
});

/// The three blocks of a structurally valid RFC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RfcParts<'a> {
    /// Name block: 3 letters for companies, 4 for persons.
    pub letters: &'a str,
    /// `YYMMDD` block.
    pub date: &'a str,
    /// Homoclave plus verification digit (3 characters).
    pub suffix: &'a str,
}

/// Whether a normalized candidate has the RFC shape.
///
/// Implies a total length of 12 or 13 characters.
pub fn is_valid_format(rfc: &str) -> bool {
    RFC_PATTERN.is_match(rfc)
}

/// Split a normalized candidate into its blocks, or `None` if the shape is wrong.
pub fn split_parts(rfc: &str) -> Option<RfcParts<'_>> {
    let caps = RFC_PATTERN.captures(rfc)?;
    Some(RfcParts {
        letters: caps.get(1)?.as_str(),
        date: caps.get(2)?.as_str(),
        suffix: caps.get(3)?.as_str(),
    })
}

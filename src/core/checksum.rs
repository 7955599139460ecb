//! RFC verification digit (dígito verificador).
//!
//! Each character is mapped to its position in the SAT dictionary, weighted
//! by its distance from the end of a 13-character frame, and summed modulo 11.
//! Company RFCs are 12 characters long and get a leading space so both kinds
//! share the same weights.

use super::error::ChecksumError;
use super::types::{COMPANY_RFC_LEN, PERSON_RFC_LEN};

/// SAT checksum dictionary. A character's value is its index.
const DICTIONARY: [char; 39] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', '&', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ',
    'Ñ',
];

const FRAME_LEN: usize = PERSON_RFC_LEN;
const PADDING: char = ' ';

fn char_value(c: char) -> Result<u32, ChecksumError> {
    DICTIONARY
        .iter()
        .position(|&d| d == c)
        .map(|i| i as u32)
        .ok_or(ChecksumError::UnknownCharacter(c))
}

/// Compute the expected verification digit for a full RFC.
///
/// `rfc` is the complete normalized identifier including its current last
/// character, which is ignored. Returns `'0'`–`'9'` or `'A'`.
pub fn verification_digit(rfc: &str) -> Result<char, ChecksumError> {
    let mut frame: Vec<char> = rfc.chars().collect();
    match frame.len() {
        FRAME_LEN => {}
        COMPANY_RFC_LEN => frame.insert(0, PADDING),
        n => return Err(ChecksumError::UnsupportedLength(n)),
    }

    let mut sum = 0;
    for (i, &c) in frame[..FRAME_LEN - 1].iter().enumerate() {
        sum += char_value(c)? * (FRAME_LEN - i) as u32;
    }

    Ok(match 11 - sum % 11 {
        11 => '0',
        10 => 'A',
        d => char::from(b'0' + d as u8),
    })
}

/// Whether the last character of `rfc` equals its computed verification digit.
///
/// Calculator faults (bad length, unknown characters) count as a mismatch.
pub fn has_valid_verification_digit(rfc: &str) -> bool {
    let Some(actual) = rfc.chars().last() else {
        return false;
    };
    match verification_digit(rfc) {
        Ok(expected) => expected == actual,
        Err(e) => {
            tracing::trace!(error = %e, "verification digit could not be computed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_values() {
        assert_eq!(char_value('0'), Ok(0));
        assert_eq!(char_value('9'), Ok(9));
        assert_eq!(char_value('A'), Ok(10));
        assert_eq!(char_value('N'), Ok(23));
        assert_eq!(char_value('&'), Ok(24));
        assert_eq!(char_value('O'), Ok(25));
        assert_eq!(char_value('Z'), Ok(36));
        assert_eq!(char_value(' '), Ok(37));
        assert_eq!(char_value('Ñ'), Ok(38));
    }

    #[test]
    fn known_person() {
        assert_eq!(verification_digit("GODE561231GR8"), Ok('8'));
        assert_eq!(verification_digit("XEXX010101000"), Ok('0'));
    }

    #[test]
    fn known_company() {
        assert_eq!(verification_digit("MAG041126GT8"), Ok('8'));
        assert_eq!(verification_digit("AAA010101AA1"), Ok('1'));
    }

    #[test]
    fn remainder_one_maps_to_a() {
        assert_eq!(verification_digit("GODE560229GRA"), Ok('A'));
    }

    #[test]
    fn last_character_is_ignored() {
        assert_eq!(verification_digit("GODE561231GRX"), Ok('8'));
        assert_eq!(verification_digit("MAG041126GT0"), Ok('8'));
    }

    #[test]
    fn enye_and_ampersand() {
        assert_eq!(verification_digit("ÑAND800101AB2"), Ok('2'));
        assert_eq!(verification_digit("AÑO900101AB7"), Ok('7'));
        assert_eq!(verification_digit("A&B900101XY5"), Ok('5'));
    }

    #[test]
    fn unsupported_length() {
        assert_eq!(
            verification_digit("GODE561231G"),
            Err(ChecksumError::UnsupportedLength(11))
        );
        assert_eq!(verification_digit(""), Err(ChecksumError::UnsupportedLength(0)));
    }

    #[test]
    fn unknown_character() {
        assert_eq!(
            verification_digit("GODE561231#R8"),
            Err(ChecksumError::UnknownCharacter('#'))
        );
    }

    #[test]
    fn mismatch_and_fault_both_fail() {
        assert!(has_valid_verification_digit("GODE561231GR8"));
        assert!(!has_valid_verification_digit("GODE561231GR9"));
        assert!(!has_valid_verification_digit("GODE561231#R8"));
        assert!(!has_valid_verification_digit(""));
    }
}

//! Property-based tests for the validation pipeline.
//!
//! Run with: `cargo test --test proptest_tests`

use proptest::prelude::*;
use rfc_mx::*;

/// Build an RFC from its blocks with a correct verification digit.
fn with_digit(letters: &str, yy: u32, mm: u32, dd: u32, homoclave: &str) -> String {
    let mut rfc = format!("{letters}{yy:02}{mm:02}{dd:02}{homoclave}0");
    let digit = verification_digit(&rfc).unwrap();
    rfc.pop();
    rfc.push(digit);
    rfc
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

fn arb_letters() -> impl Strategy<Value = String> {
    "[A-ZÑ&]{3,4}"
}

fn arb_homoclave() -> impl Strategy<Value = String> {
    "[A-Z0-9]{2}"
}

/// A well-formed RFC whose date always exists (day capped at 28).
fn arb_valid_rfc() -> impl Strategy<Value = String> {
    (arb_letters(), 0u32..100, 1u32..=12, 1u32..=28, arb_homoclave())
        .prop_map(|(l, yy, mm, dd, h)| with_digit(&l, yy, mm, dd, &h))
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn validate_never_panics(input in ".*") {
        let result = validate(&input);
        match &result {
            ValidationResult::Valid { rfc, rfc_type } => {
                prop_assert_eq!(RfcType::of(rfc), Some(*rfc_type));
            }
            ValidationResult::Invalid { errors } => {
                prop_assert!(!errors.is_empty());
                // strictly increasing: check order, no duplicates
                prop_assert!(errors.windows(2).all(|w| w[0] < w[1]));
                if errors.contains(&ErrorKind::InvalidFormat) {
                    prop_assert_eq!(errors.len(), 1);
                }
            }
        }
    }

    #[test]
    fn normalize_is_idempotent(input in ".*") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(once.chars().all(is_rfc_char));
    }

    #[test]
    fn generated_rfcs_are_valid(rfc in arb_valid_rfc()) {
        let result = validate(&rfc);
        prop_assert!(result.is_valid(), "{} -> {:?}", rfc, result);
        let expected = if rfc.chars().count() == 13 { RfcType::Person } else { RfcType::Company };
        prop_assert_eq!(result.rfc_type(), Some(expected));
    }

    #[test]
    fn valid_result_is_idempotent(rfc in arb_valid_rfc()) {
        let first = validate(&rfc);
        let again = validate(first.rfc().unwrap());
        prop_assert_eq!(first, again);
    }

    #[test]
    fn wrong_digit_fails_checksum_only(
        rfc in arb_valid_rfc(),
        replacement in prop::sample::select(b"0123456789AZ".to_vec()),
    ) {
        let replacement = replacement as char;
        prop_assume!(rfc.chars().last() != Some(replacement));
        let mut mutated = rfc.clone();
        mutated.pop();
        mutated.push(replacement);
        let result = validate(&mutated);
        prop_assert_eq!(result.errors(), &[ErrorKind::InvalidVerificationDigit]);
    }

    #[test]
    fn impossible_month_fails_date_only(
        letters in arb_letters(),
        yy in 0u32..100,
        mm in 13u32..100,
        dd in 1u32..=28,
        homoclave in arb_homoclave(),
    ) {
        let rfc = with_digit(&letters, yy, mm, dd, &homoclave);
        let result = validate(&rfc);
        prop_assert_eq!(result.errors(), &[ErrorKind::InvalidDate]);
    }
}

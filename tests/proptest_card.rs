//! Property-based tests for card number validation
//!
//! These tests verify the checksum and formatting guarantees:
//! - Well-formed numbers on known networks validate
//! - Any single-digit substitution is caught
//! - Display grouping never changes a verdict

use proptest::prelude::*;

use subscription_checkout::domain::card::{
    format_card_number, luhn_valid, validate_number, CardNetwork,
};

// ============================================================================
// Strategies
// ============================================================================

/// Appends the Luhn check digit to `payload`.
fn with_check_digit(payload: &str) -> String {
    let sum: u32 = payload
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    let check = (10 - sum % 10) % 10;
    format!("{payload}{check}")
}

/// Generate valid numbers with their expected network
fn arb_valid_number() -> impl Strategy<Value = (String, CardNetwork)> {
    prop_oneof![
        "4[0-9]{14}".prop_map(|p| (with_check_digit(&p), CardNetwork::Visa)),
        "5[1-5][0-9]{13}".prop_map(|p| (with_check_digit(&p), CardNetwork::Mastercard)),
        "3[47][0-9]{12}".prop_map(|p| (with_check_digit(&p), CardNetwork::Amex)),
        "220[0-4][0-9]{11}".prop_map(|p| (with_check_digit(&p), CardNetwork::Mir)),
        "3[689][0-9]{11}".prop_map(|p| (with_check_digit(&p), CardNetwork::Diners)),
    ]
}

// ============================================================================
// Validation Properties
// ============================================================================

proptest! {
    /// Property: Luhn-valid numbers of the right length on a known network validate
    #[test]
    fn prop_valid_numbers_validate((number, network) in arb_valid_number()) {
        prop_assert_eq!(CardNetwork::detect(&number), network);
        prop_assert_eq!(number.len(), network.number_length());
        prop_assert!(luhn_valid(&number));

        let check = validate_number(&number, true);
        prop_assert!(check.valid, "{} rejected: {:?}", number, check.error);
    }

    /// Property: Substituting any single digit makes the number invalid
    #[test]
    fn prop_single_digit_substitution_is_rejected(
        (number, _network) in arb_valid_number(),
        position in any::<prop::sample::Index>(),
        delta in 1u8..=9,
    ) {
        let mut digits = number.into_bytes();
        let i = position.index(digits.len());
        digits[i] = b'0' + (digits[i] - b'0' + delta) % 10;
        let altered = String::from_utf8(digits).unwrap();

        prop_assert!(!luhn_valid(&altered));
        prop_assert!(!validate_number(&altered, false).valid, "{} accepted", altered);
    }

    /// Property: Display grouping does not change the verdict
    #[test]
    fn prop_grouping_preserves_verdict(
        (number, network) in arb_valid_number(),
        corrupt in any::<bool>(),
    ) {
        let number = if corrupt {
            let mut n = number;
            let last = n.pop().unwrap();
            n.push(if last == '0' { '1' } else { '0' });
            n
        } else {
            number
        };
        let grouped = format_card_number(&number, network);

        prop_assert_eq!(
            validate_number(&grouped, false).valid,
            validate_number(&number, false).valid
        );
    }

    /// Property: Strings with non-digit characters never validate
    #[test]
    fn prop_non_digit_input_is_rejected(input in "[0-9]{4,12}[a-z\\-][0-9]{0,6}") {
        prop_assert!(!validate_number(&input, true).valid);
    }
}

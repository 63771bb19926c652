//! Luhn (mod-10) checksum.

/// Shortest number the checksum is evaluated for.
const MIN_LUHN_DIGITS: usize = 13;

/// Returns true if `digits` passes the Luhn checksum.
///
/// Every second digit from the right is doubled (subtracting 9 when the
/// result exceeds 9) and the sum must be divisible by 10. Inputs shorter
/// than 13 digits or containing anything other than ASCII digits fail.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.len() < MIN_LUHN_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = digits
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
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

    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_test_numbers_pass() {
        assert!(luhn_valid("4111111111111111"));
        assert!(luhn_valid("4000000000000002"));
        assert!(luhn_valid("5555555555554444"));
        assert!(luhn_valid("378282246310005"));
        assert!(luhn_valid("30569309025904"));
    }

    #[test]
    fn altered_digit_fails() {
        assert!(!luhn_valid("4111111111111112"));
        assert!(!luhn_valid("4111111111111121"));
    }

    #[test]
    fn short_numbers_fail() {
        assert!(!luhn_valid("0"));
        assert!(!luhn_valid("000000000000"));
    }

    #[test]
    fn non_digits_fail() {
        assert!(!luhn_valid("4111 1111 1111 1111"));
        assert!(!luhn_valid("411111111111111a"));
    }
}

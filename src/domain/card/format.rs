//! Presentation helpers for masked card inputs.
//!
//! These only rearrange digits for display. Validation always works on the
//! de-formatted digit string, so formatting can never change a verdict.

use super::CardNetwork;

/// Removes whitespace from a card number as typed.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Groups card digits for display: 4-6-5 for Amex, blocks of four otherwise.
///
/// Non-digit characters are dropped.
pub fn format_card_number(raw: &str, network: CardNetwork) -> String {
    let digits = digits_only(raw);
    let groups: Vec<&str> = match network {
        CardNetwork::Amex => {
            let cuts = [0, 4, 10, digits.len()];
            cuts.windows(2)
                .filter_map(|w| {
                    let (start, end) = (w[0].min(digits.len()), w[1].min(digits.len()));
                    (start < end).then(|| &digits[start..end])
                })
                .collect()
        }
        _ => (0..digits.len())
            .step_by(4)
            .map(|i| &digits[i..(i + 4).min(digits.len())])
            .collect(),
    };
    groups.join(" ")
}

/// Inserts `/` after the two month digits (`1229` -> `12/29`).
///
/// Non-digit characters are dropped first.
pub fn format_expiry(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// What the card-number field should display after a keystroke.
///
/// Input made only of digits and whitespace is regrouped for its detected
/// network; anything else is kept verbatim so validation can report it.
pub fn sanitize_card_number_input(raw: &str) -> String {
    if raw.chars().all(|c| c.is_ascii_digit() || c.is_whitespace()) {
        let network = CardNetwork::detect(raw);
        format_card_number(raw, network)
    } else {
        raw.to_string()
    }
}

/// What the expiry field should display after a keystroke.
pub fn sanitize_expiry_input(raw: &str) -> String {
    if raw.chars().all(|c| c.is_ascii_digit() || c == '/') {
        format_expiry(raw)
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_sixteen_digits_in_fours() {
        assert_eq!(
            format_card_number("4111111111111111", CardNetwork::Visa),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn groups_partial_number() {
        assert_eq!(format_card_number("411111", CardNetwork::Visa), "4111 11");
        assert_eq!(format_card_number("", CardNetwork::Visa), "");
    }

    #[test]
    fn groups_amex_four_six_five() {
        assert_eq!(
            format_card_number("378282246310005", CardNetwork::Amex),
            "3782 822463 10005"
        );
        assert_eq!(format_card_number("37828", CardNetwork::Amex), "3782 8");
    }

    #[test]
    fn regrouping_drops_existing_spaces() {
        assert_eq!(
            format_card_number("41 11 1111 11", CardNetwork::Visa),
            "4111 1111 11"
        );
    }

    #[test]
    fn expiry_gets_slash_after_month() {
        assert_eq!(format_expiry("1229"), "12/29");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12/29"), "12/29");
    }

    #[test]
    fn sanitize_keeps_invalid_text_verbatim() {
        assert_eq!(sanitize_card_number_input("4111-1111"), "4111-1111");
        assert_eq!(sanitize_card_number_input("41111111"), "4111 1111");
        assert_eq!(sanitize_expiry_input("12-29"), "12-29");
        assert_eq!(sanitize_expiry_input("1229"), "12/29");
    }

    #[test]
    fn strip_whitespace_removes_grouping() {
        assert_eq!(strip_whitespace("4111 1111 1111 1111"), "4111111111111111");
    }
}

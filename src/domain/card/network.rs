//! Card network detection from leading digits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment network a card number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Amex,
    Mir,
    Diners,
    Discover,
    Jcb,
    Unknown,
}

impl CardNetwork {
    /// Detects the network from the leading digits of a card number.
    ///
    /// Whitespace is ignored. Networks are tried in a fixed order and the
    /// first match wins; anything unmatched is `Unknown`.
    pub fn detect(number: &str) -> Self {
        let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return CardNetwork::Unknown;
        }

        let prefix_in = |len: usize, lo: u32, hi: u32| {
            digits
                .get(..len)
                .and_then(|p| p.parse::<u32>().ok())
                .is_some_and(|p| (lo..=hi).contains(&p))
        };

        if prefix_in(1, 4, 4) {
            CardNetwork::Visa
        } else if prefix_in(2, 51, 55) || prefix_in(4, 2221, 2720) {
            CardNetwork::Mastercard
        } else if prefix_in(2, 34, 34) || prefix_in(2, 37, 37) {
            CardNetwork::Amex
        } else if prefix_in(4, 2200, 2204) {
            CardNetwork::Mir
        } else if prefix_in(3, 300, 305) || prefix_in(2, 36, 36) || prefix_in(2, 38, 39) {
            CardNetwork::Diners
        } else if prefix_in(4, 6011, 6011) || prefix_in(3, 644, 649) || prefix_in(2, 65, 65) {
            CardNetwork::Discover
        } else if prefix_in(4, 3528, 3589) {
            CardNetwork::Jcb
        } else {
            CardNetwork::Unknown
        }
    }

    /// Number of digits a complete card number has on this network.
    pub fn number_length(&self) -> usize {
        match self {
            CardNetwork::Amex => 15,
            CardNetwork::Diners => 14,
            _ => 16,
        }
    }

    /// Number of digits in the security code.
    pub fn cvv_length(&self) -> usize {
        match self {
            CardNetwork::Amex => 4,
            _ => 3,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CardNetwork::Unknown)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::Mastercard => "Mastercard",
            CardNetwork::Amex => "American Express",
            CardNetwork::Mir => "Mir",
            CardNetwork::Diners => "Diners Club",
            CardNetwork::Discover => "Discover",
            CardNetwork::Jcb => "JCB",
            CardNetwork::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

//! Raw card form input.

use serde::{Deserialize, Serialize};

use crate::domain::card::{sanitize_card_number_input, sanitize_expiry_input, CardNetwork};

/// Card fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInput {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl CardInput {
    pub fn new(
        number: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }

    /// Network detected from the number typed so far.
    pub fn network(&self) -> CardNetwork {
        CardNetwork::detect(&self.number)
    }

    /// The input with number and expiry regrouped for display.
    pub fn for_display(&self) -> Self {
        Self {
            number: sanitize_card_number_input(&self.number),
            expiry: sanitize_expiry_input(&self.expiry),
            cvv: self.cvv.clone(),
        }
    }
}

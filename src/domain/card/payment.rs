//! Simulated payment against the test-card table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::strip_whitespace;
use super::validation::{validate_card, CardValidationResult};
use crate::domain::catalog::TestCardTable;

/// Why a simulated payment was declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclineReason {
    #[error("Card declined")]
    GenericDecline,

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Card reported stolen")]
    StolenCard,

    #[error("Suspected fraud")]
    SuspectedFraud,

    #[error("Processing error, please try again")]
    ProcessingError,

    #[error("Incorrect CVC")]
    IncorrectCvc,
}

impl DeclineReason {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            DeclineReason::GenericDecline => "card_declined",
            DeclineReason::InsufficientFunds => "insufficient_funds",
            DeclineReason::StolenCard => "stolen_card",
            DeclineReason::SuspectedFraud => "fraudulent",
            DeclineReason::ProcessingError => "processing_error",
            DeclineReason::IncorrectCvc => "incorrect_cvc",
        }
    }

    /// Whether retrying the same card may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DeclineReason::ProcessingError)
    }
}

/// Result of a payment that passed field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum PaymentOutcome {
    Success,
    Declined(DeclineReason),
}

impl PaymentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PaymentOutcome::Success)
    }
}

/// Payment aborted before reaching the card table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("card details are invalid")]
pub struct InvalidCard(pub CardValidationResult);

/// Validates the card fields and simulates a charge.
///
/// All three fields are validated with messages. Any failure aborts with the
/// validation result; otherwise the outcome scripted for the normalized
/// number is returned, and unscripted numbers succeed.
pub fn attempt_payment(
    number: &str,
    expiry: &str,
    cvv: &str,
    today: NaiveDate,
    test_cards: &TestCardTable,
) -> Result<PaymentOutcome, InvalidCard> {
    let validation = validate_card(number, expiry, cvv, true, today);
    if !validation.is_payable() {
        tracing::debug!(
            network = %validation.network,
            "Payment blocked by card validation"
        );
        return Err(InvalidCard(validation));
    }

    let outcome = test_cards.outcome_for(&strip_whitespace(number));
    match outcome {
        PaymentOutcome::Success => {
            tracing::info!(network = %validation.network, "Simulated payment succeeded");
        }
        PaymentOutcome::Declined(reason) => {
            tracing::warn!(
                network = %validation.network,
                reason = reason.code(),
                "Simulated payment declined"
            );
        }
    }
    Ok(outcome)
}

//! Test payment cards with scripted outcomes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::card::{DeclineReason, PaymentOutcome};

/// Lookup table from normalized card number to the outcome a payment with
/// that card produces. Numbers not in the table succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestCardTable {
    cards: BTreeMap<String, PaymentOutcome>,
}

impl TestCardTable {
    pub fn new(cards: BTreeMap<String, PaymentOutcome>) -> Self {
        Self { cards }
    }

    /// Outcome for a digits-only card number.
    pub fn outcome_for(&self, digits: &str) -> PaymentOutcome {
        self.cards
            .get(digits)
            .copied()
            .unwrap_or(PaymentOutcome::Success)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, PaymentOutcome)> {
        self.cards.iter().map(|(n, o)| (n.as_str(), *o))
    }
}

impl Default for TestCardTable {
    fn default() -> Self {
        let declined = |reason| PaymentOutcome::Declined(reason);
        Self::new(BTreeMap::from([
            ("4111111111111111".to_string(), PaymentOutcome::Success),
            ("4000000000000002".to_string(), declined(DeclineReason::GenericDecline)),
            ("4000000000009995".to_string(), declined(DeclineReason::InsufficientFunds)),
            ("4000000000009979".to_string(), declined(DeclineReason::StolenCard)),
            ("4000000000004954".to_string(), declined(DeclineReason::SuspectedFraud)),
            ("4000000000000119".to_string(), declined(DeclineReason::ProcessingError)),
            ("4000000000000127".to_string(), declined(DeclineReason::IncorrectCvc)),
        ]))
    }
}

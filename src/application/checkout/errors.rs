//! Checkout errors.

use thiserror::Error;

use crate::domain::card::{CardValidationResult, DeclineReason, InvalidCard};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::promo::PromoRejection;

/// Errors returned by [`super::CheckoutEngine`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Unknown tariff '{0}'")]
    UnknownTariff(String),

    #[error("Billing period of {0} months is not allowed")]
    InvalidPeriod(u32),

    #[error("Card details are invalid")]
    InvalidCard(CardValidationResult),

    #[error("Payment declined: {0}")]
    Declined(DeclineReason),

    #[error(transparent)]
    Promo(#[from] PromoRejection),
}

impl CheckoutError {
    /// Text the form shows for this error.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::Promo(rejection) => rejection.user_message(),
            CheckoutError::InvalidCard(result) => {
                let messages = result.messages();
                if messages.is_empty() {
                    self.to_string()
                } else {
                    messages.join("; ")
                }
            }
            _ => self.to_string(),
        }
    }
}

impl From<InvalidCard> for CheckoutError {
    fn from(err: InvalidCard) -> Self {
        CheckoutError::InvalidCard(err.0)
    }
}

impl From<CheckoutError> for DomainError {
    fn from(err: CheckoutError) -> Self {
        let message = err.user_message();
        match err {
            CheckoutError::Promo(rejection) => rejection.into(),
            CheckoutError::UnknownTariff(id) => {
                DomainError::new(ErrorCode::TariffNotFound, message).with_detail("tariff_id", id)
            }
            CheckoutError::InvalidPeriod(months) => DomainError::validation("period_months", message)
                .with_detail("period_months", months.to_string()),
            CheckoutError::InvalidCard(_) => DomainError::new(ErrorCode::CardInvalid, message),
            CheckoutError::Declined(reason) => {
                DomainError::new(ErrorCode::PaymentDeclined, message).with_detail("reason", reason.code())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declined_maps_to_payment_declined_code() {
        let err: DomainError = CheckoutError::Declined(DeclineReason::InsufficientFunds).into();
        assert_eq!(err.code, ErrorCode::PaymentDeclined);
        assert_eq!(err.message, "Payment declined: Insufficient funds");
        assert_eq!(
            err.details.get("reason").map(String::as_str),
            Some("insufficient_funds")
        );
    }

    #[test]
    fn unknown_tariff_maps_to_not_found() {
        let err: DomainError = CheckoutError::UnknownTariff("gold".to_string()).into();
        assert_eq!(err.code, ErrorCode::TariffNotFound);
    }

    #[test]
    fn promo_message_passes_through() {
        let err = CheckoutError::from(PromoRejection::NotFound);
        assert_eq!(err.user_message(), PromoRejection::NotFound.user_message());
    }
}

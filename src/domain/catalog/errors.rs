//! Catalog loading and consistency errors.

use thiserror::Error;

use super::{PromoCode, TariffId};
use crate::domain::foundation::{DomainError, ErrorCode, Percentage, ValidationError};

/// Errors raised while building or loading a catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Catalog must define at least one tariff")]
    NoTariffs,

    #[error("Tariff '{0}' is defined more than once")]
    DuplicateTariff(TariffId),

    #[error("Tariff '{0}' has a zero monthly price")]
    FreeTariff(TariffId),

    #[error("Billing period of zero months is not allowed")]
    ZeroLengthPeriod,

    #[error("Discount of {rate} for {months}-month period must be below 100%")]
    PeriodDiscountTooLarge { months: u32, rate: Percentage },

    #[error("Promo code '{0}' is defined more than once")]
    DuplicatePromo(PromoCode),

    #[error("Promo code '{code}' references unknown tariff '{tariff}'")]
    UnknownTariffReference { code: PromoCode, tariff: TariffId },

    #[error("Invalid catalog record: {0}")]
    InvalidRecord(#[from] ValidationError),

    #[error("Catalog source '{source_name}' could not be read: {reason}")]
    Unavailable { source_name: String, reason: String },
}

impl CatalogError {
    pub fn unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        CatalogError::Unavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let code = match err {
            CatalogError::Unavailable { .. } => ErrorCode::CatalogUnavailable,
            _ => ErrorCode::CatalogInvalid,
        };
        DomainError::new(code, err.to_string())
    }
}

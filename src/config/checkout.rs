//! Checkout form defaults

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::checkout::{DEFAULT_PERIOD_MONTHS, DEFAULT_TARIFF};

/// Selection preloaded when a checkout form opens
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    /// Tariff id selected by default
    #[serde(default = "default_tariff")]
    pub default_tariff: String,

    /// Billing period selected by default
    #[serde(default = "default_period_months")]
    pub default_period_months: u32,
}

impl CheckoutConfig {
    /// Validate checkout configuration
    ///
    /// Whether the tariff exists is only known once the catalog is loaded,
    /// so that check happens in `AppConfig::build_engine`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_tariff.trim().is_empty() {
            return Err(ValidationError::MissingRequired("checkout.default_tariff"));
        }
        if self.default_period_months == 0 {
            return Err(ValidationError::InvalidDefaultPeriod);
        }
        Ok(())
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            default_tariff: default_tariff(),
            default_period_months: default_period_months(),
        }
    }
}

fn default_tariff() -> String {
    DEFAULT_TARIFF.to_string()
}

fn default_period_months() -> u32 {
    DEFAULT_PERIOD_MONTHS
}

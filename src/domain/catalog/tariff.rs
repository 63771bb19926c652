//! Tariff definitions.
//!
//! A tariff is a subscription plan with a fixed monthly price. Tariffs are
//! loaded once with the catalog and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Money, ValidationError};

/// Identifier of a tariff (`basic`, `premium`, `family`, ...).
///
/// Normalized to lowercase so lookups are stable regardless of how the form
/// spells the id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TariffId(String);

impl TariffId {
    /// Creates a tariff id, trimming and lowercasing the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the id is empty or contains whitespace.
    pub fn try_new(id: &str) -> Result<Self, ValidationError> {
        let normalized = id.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("tariff_id"));
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(ValidationError::invalid_format(
                "tariff_id",
                format!("must not contain whitespace, got '{}'", normalized),
            ));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TariffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for TariffId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// A subscription plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    pub id: TariffId,
    /// Display name shown to the customer.
    pub name: String,
    /// Price of one month of service.
    pub monthly_price: Money,
    /// Feature bullet points, in display order.
    pub features: Vec<String>,
}

impl Tariff {
    pub fn new(
        id: TariffId,
        name: impl Into<String>,
        monthly_price: Money,
        features: Vec<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            monthly_price,
            features,
        }
    }
}

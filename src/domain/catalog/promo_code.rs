//! Promo code value object.
//!
//! The normalized, case-insensitive key under which a promotion is stored
//! and looked up. Normalization trims surrounding whitespace and uppercases,
//! so `" welcome10 "` and `"WELCOME10"` are the same code.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A normalized promotional code.
///
/// # Example
///
/// ```ignore
/// let code = PromoCode::try_new("  summer25 ")?;
/// assert_eq!(code.as_str(), "SUMMER25");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromoCode(String);

impl PromoCode {
    /// Creates a PromoCode from user or catalog input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if nothing but whitespace was
    /// entered.
    pub fn try_new(code: &str) -> Result<Self, ValidationError> {
        let normalized = code.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("promo_code"));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PromoCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<String> for PromoCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value)
    }
}

impl From<PromoCode> for String {
    fn from(code: PromoCode) -> Self {
        code.0
    }
}

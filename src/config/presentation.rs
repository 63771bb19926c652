//! Display configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::presentation::{Locale, Presenter, DEFAULT_CURRENCY_SYMBOL};

/// Currency glyph and language for rendered values
#[derive(Debug, Clone, Deserialize)]
pub struct PresentationConfig {
    /// Glyph appended to amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Language for period labels and dates (`en` or `ru`)
    #[serde(default)]
    pub locale: Locale,
}

impl PresentationConfig {
    pub fn presenter(&self) -> Presenter {
        Presenter::new(self.currency_symbol.clone(), self.locale)
    }

    /// Validate presentation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ValidationError::MissingRequired("presentation.currency_symbol"));
        }
        Ok(())
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            locale: Locale::default(),
        }
    }
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

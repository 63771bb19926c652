//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SUBSCRIPTION_CHECKOUT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use subscription_checkout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let engine = config.build_engine().expect("Failed to build checkout engine");
//! let selection = engine.default_selection();
//! ```

mod catalog;
mod checkout;
mod error;
mod logging;
mod presentation;

pub use catalog::CatalogConfig;
pub use checkout::CheckoutConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use presentation::PresentationConfig;

use serde::Deserialize;
use std::sync::Arc;

use crate::adapters::SystemClock;
use crate::application::CheckoutEngine;
use crate::domain::presentation::Presenter;
use crate::ports::Clock;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration backed by the embedded catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog source (embedded or YAML file)
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Default selection for new checkout forms
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Currency glyph and display language
    #[serde(default)]
    pub presentation: PresentationConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SUBSCRIPTION_CHECKOUT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SUBSCRIPTION_CHECKOUT__CATALOG__PATH=./catalog.yaml` -> `catalog.path`
    /// - `SUBSCRIPTION_CHECKOUT__CHECKOUT__DEFAULT_PERIOD_MONTHS=3` -> `checkout.default_period_months = 3`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SUBSCRIPTION_CHECKOUT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.checkout.validate()?;
        self.presentation.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Presenter for the configured currency and locale
    pub fn presenter(&self) -> Presenter {
        self.presentation.presenter()
    }

    /// Loads the catalog and builds an engine on the system clock
    pub fn build_engine(&self) -> Result<CheckoutEngine, ConfigError> {
        self.build_engine_with_clock(Arc::new(SystemClock))
    }

    /// Loads the catalog and builds an engine on the given clock
    ///
    /// # Errors
    ///
    /// - `Catalog` if the catalog cannot be read or is inconsistent
    /// - `Checkout` if the default tariff is not in the catalog
    pub fn build_engine_with_clock(
        &self,
        clock: Arc<dyn Clock>,
    ) -> Result<CheckoutEngine, ConfigError> {
        let source = self.catalog.source();
        let catalog = source.load()?;
        tracing::info!(source = %source.describe(), "Catalog ready");

        let engine = CheckoutEngine::new(Arc::new(catalog), clock).with_defaults(
            &self.checkout.default_tariff,
            self.checkout.default_period_months,
        )?;
        Ok(engine)
    }
}

//! Configuration error types

use thiserror::Error;

use crate::application::CheckoutError;
use crate::domain::catalog::CatalogError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Catalog could not be loaded: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Checkout defaults rejected: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Default billing period must be at least one month")]
    InvalidDefaultPeriod,

    #[error("Catalog path does not exist: {0}")]
    CatalogPathNotFound(String),

    #[error("Invalid log level filter: {0}")]
    InvalidLogLevel(String),
}

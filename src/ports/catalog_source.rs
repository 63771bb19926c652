//! Catalog source port.
//!
//! Defines where tariffs, promotions, period discounts and test cards come
//! from. Sources are read once when the engine is built; the resulting
//! [`Catalog`] is immutable.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use subscription_checkout::adapters::{EmbeddedCatalog, SystemClock};
//! use subscription_checkout::application::CheckoutEngine;
//! use subscription_checkout::ports::CatalogSource;
//!
//! let catalog = EmbeddedCatalog.load()?;
//! let engine = CheckoutEngine::new(Arc::new(catalog), Arc::new(SystemClock));
//! ```

use crate::domain::catalog::{Catalog, CatalogError};

/// Port for loading a validated catalog.
pub trait CatalogSource: Send + Sync {
    /// Loads and validates the catalog.
    ///
    /// # Returns
    ///
    /// - `Ok(Catalog)` - Data was readable and internally consistent
    /// - `Err(CatalogError::Unavailable)` - The source could not be read or parsed
    /// - `Err(_)` - Data was read but failed consistency checks
    fn load(&self) -> Result<Catalog, CatalogError>;

    /// Short name used in logs and errors.
    fn describe(&self) -> String;
}

//! Catalog compiled into the binary.

use crate::domain::catalog::{Catalog, CatalogError};
use crate::ports::CatalogSource;

use super::records::CatalogRecord;

const DEFAULT_CATALOG: &str = include_str!("default_catalog.yaml");

/// The standard tariffs, promotions and test cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = CatalogRecord::from_yaml(DEFAULT_CATALOG, "embedded")?.into_catalog()?;
        tracing::info!(
            tariffs = catalog.tariffs().len(),
            promos = catalog.promos().len(),
            "Loaded embedded catalog"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

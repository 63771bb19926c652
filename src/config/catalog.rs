//! Catalog source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::{EmbeddedCatalog, YamlFileCatalog};
use crate::ports::CatalogSource;

/// Where tariffs, promotions and test cards are read from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; the embedded catalog is used when unset
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    /// The catalog source this configuration selects
    pub fn source(&self) -> Box<dyn CatalogSource> {
        match &self.path {
            Some(path) => Box::new(YamlFileCatalog::new(path)),
            None => Box::new(EmbeddedCatalog),
        }
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.path {
            if !path.is_file() {
                return Err(ValidationError::CatalogPathNotFound(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}

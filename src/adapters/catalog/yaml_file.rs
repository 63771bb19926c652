//! YAML file catalog adapter.

use std::path::{Path, PathBuf};

use crate::domain::catalog::{Catalog, CatalogError};
use crate::ports::CatalogSource;

use super::records::CatalogRecord;

/// Reads the catalog from a YAML document on disk.
#[derive(Debug, Clone)]
pub struct YamlFileCatalog {
    path: PathBuf,
}

impl YamlFileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for YamlFileCatalog {
    fn load(&self) -> Result<Catalog, CatalogError> {
        let source_name = self.describe();
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::unavailable(&source_name, e))?;

        let catalog = CatalogRecord::from_yaml(&text, &source_name)?.into_catalog()?;
        tracing::info!(
            path = %self.path.display(),
            tariffs = catalog.tariffs().len(),
            promos = catalog.promos().len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

//! Catalog Adapters
//!
//! Implementations of the CatalogSource port.
//!
//! ## Available Adapters
//!
//! - **EmbeddedCatalog** - The standard catalog compiled into the crate
//! - **YamlFileCatalog** - A catalog read from a YAML file
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::catalog::{EmbeddedCatalog, YamlFileCatalog};
//!
//! // Default data
//! let catalog = EmbeddedCatalog.load()?;
//!
//! // Operator-supplied data
//! let catalog = YamlFileCatalog::new("./catalog.yaml").load()?;
//! ```

mod embedded;
mod records;
mod yaml_file;

pub use embedded::EmbeddedCatalog;
pub use records::{CatalogRecord, OutcomeRecord, PromoRecord, TariffRecord};
pub use yaml_file::YamlFileCatalog;

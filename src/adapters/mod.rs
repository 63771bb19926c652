//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Catalog sources (embedded YAML, YAML file)
//! - `clock` - System and fixed clocks

pub mod catalog;
pub mod clock;

pub use catalog::{EmbeddedCatalog, YamlFileCatalog};
pub use clock::{FixedClock, SystemClock};

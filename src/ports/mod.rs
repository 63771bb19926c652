//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Current date for validity windows and expiry checks
//! - `CatalogSource` - Loading of tariffs, promotions and test cards

mod catalog_source;
mod clock;

pub use catalog_source::CatalogSource;
pub use clock::Clock;

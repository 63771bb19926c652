//! Clock port.
//!
//! Promo validity windows, card expiry and renewal dates all depend on
//! "today". Reading it through this port keeps the engine deterministic
//! under test.

use chrono::NaiveDate;

/// Source of the current calendar date.
pub trait Clock: Send + Sync {
    /// The current local date.
    fn today(&self) -> NaiveDate;
}

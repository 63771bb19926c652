//! Presentation helpers for the checkout form.
//!
//! # Module Structure
//!
//! - `locale` - Supported display languages
//! - `presenter` - Currency, period and date formatting

mod locale;
mod presenter;

pub use locale::Locale;
pub use presenter::{group_thousands, renews_on, Presenter, DEFAULT_CURRENCY_SYMBOL};

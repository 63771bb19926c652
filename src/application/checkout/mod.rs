//! Checkout orchestration.
//!
//! # Module Structure
//!
//! - `engine` - `CheckoutEngine`, the entry point for the checkout form
//! - `selection` - Caller-held selection and operation results
//! - `card_input` - Raw card fields as typed
//! - `receipt` - Successful payment receipt
//! - `errors` - `CheckoutError`

mod card_input;
mod engine;
mod errors;
mod receipt;
mod selection;

pub use card_input::CardInput;
pub use engine::{CheckoutEngine, DEFAULT_PERIOD_MONTHS, DEFAULT_TARIFF};
pub use errors::CheckoutError;
pub use receipt::PaymentReceipt;
pub use selection::{PromoApplied, Selection, SelectionChange, TariffOffer};

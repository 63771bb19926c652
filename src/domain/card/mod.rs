//! Payment-card domain module.
//!
//! # Module Structure
//!
//! - `network` - Network detection from leading digits
//! - `luhn` - Mod-10 checksum
//! - `validation` - Number, expiry and CVV field validators
//! - `format` - Display grouping for masked inputs
//! - `payment` - Simulated charge against the test-card table

mod format;
mod luhn;
mod network;
mod payment;
mod validation;

pub use format::{
    format_card_number, format_expiry, sanitize_card_number_input, sanitize_expiry_input,
    strip_whitespace,
};
pub use luhn::luhn_valid;
pub use network::CardNetwork;
pub use payment::{attempt_payment, DeclineReason, InvalidCard, PaymentOutcome};
pub use validation::{
    validate_card, validate_cvv, validate_expiry, validate_number, CardFieldError,
    CardValidationResult, FieldCheck,
};

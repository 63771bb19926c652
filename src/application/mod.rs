//! Application layer - Use cases exposed to the checkout form.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The form calls [`CheckoutEngine`] and renders what it returns.

pub mod checkout;

pub use checkout::{
    CardInput, CheckoutEngine, CheckoutError, PaymentReceipt, PromoApplied, Selection,
    SelectionChange, TariffOffer,
};

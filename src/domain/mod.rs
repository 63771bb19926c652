//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (money, percentages, errors)
//! - `catalog` - Tariffs, promotions, period discounts and test cards
//! - `pricing` - Price calculation for a selection
//! - `promo` - Promo code eligibility rules
//! - `card` - Payment card validation and simulated payment
//! - `presentation` - Display formatting for the checkout form

pub mod card;
pub mod catalog;
pub mod foundation;
pub mod presentation;
pub mod pricing;
pub mod promo;

//! Pricing domain module.
//!
//! Pure price calculation from tariff, billing period and an optional
//! promotion.

mod calculator;

pub use calculator::{compute_price, PriceBreakdown};

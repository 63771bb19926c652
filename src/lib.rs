//! Subscription Checkout - Pricing and promotion engine for a subscription form
//!
//! This crate computes subscription prices (period discounts and promo codes),
//! decides whether a promo code is eligible for the current selection, and
//! validates payment card input before simulating a charge against scripted
//! test cards. Everything is synchronous and side-effect free apart from
//! logging.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;

//! Promo validation domain module.
//!
//! # Module Structure
//!
//! - `validator` - Ordered eligibility checks
//! - `rejection` - Typed, user-facing rejection reasons

mod rejection;
mod validator;

pub use rejection::PromoRejection;
pub use validator::{validate_promo, PromoContext};

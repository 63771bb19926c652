//! Catalog domain module.
//!
//! Static reference data the checkout prices against.
//!
//! # Module Structure
//!
//! - `aggregate` - Validated `Catalog` aggregate
//! - `tariff` - Subscription plans
//! - `period` - Billing-period discount schedule
//! - `promo_code` - Normalized promo code key
//! - `promo` - Promotion records and eligibility data
//! - `test_card` - Scripted payment outcomes for test cards
//! - `errors` - Catalog consistency errors

mod aggregate;
mod errors;
mod period;
pub(crate) mod promo;
mod promo_code;
mod tariff;
mod test_card;

pub use aggregate::Catalog;
pub use errors::CatalogError;
pub use period::PeriodDiscountSchedule;
pub use promo::{Applicability, Promo, PromoKind};
pub use promo_code::PromoCode;
pub use tariff::{Tariff, TariffId};
pub use test_card::TestCardTable;

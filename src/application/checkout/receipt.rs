//! Successful payment receipt.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::{PromoCode, TariffId};
use crate::domain::foundation::Money;

/// Proof of a successful simulated payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: Uuid,
    pub tariff_id: TariffId,
    pub period_months: u32,
    /// Amount charged.
    pub amount: Money,
    pub promo_code: Option<PromoCode>,
    /// Date the subscription next renews.
    pub renews_on: NaiveDate,
}

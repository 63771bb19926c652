//! Caller-held checkout state.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::catalog::{Promo, PromoCode, Tariff, TariffId};
use crate::domain::pricing::PriceBreakdown;
use crate::domain::promo::PromoRejection;

/// What the customer has picked so far.
///
/// Created by [`super::CheckoutEngine`], which keeps the tariff and period
/// valid and the applied promo consistent with them. The caller owns it and
/// passes it back on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub(super) tariff_id: TariffId,
    pub(super) period_months: u32,
    pub(super) applied_promo: Option<Promo>,
    used_codes: BTreeSet<PromoCode>,
}

impl Selection {
    pub(super) fn new(tariff_id: TariffId, period_months: u32) -> Self {
        Self {
            tariff_id,
            period_months,
            applied_promo: None,
            used_codes: BTreeSet::new(),
        }
    }

    /// Records the codes this customer has already redeemed.
    ///
    /// Single-use promos in this set are rejected.
    pub fn with_used_codes(mut self, used_codes: impl IntoIterator<Item = PromoCode>) -> Self {
        self.used_codes = used_codes.into_iter().collect();
        self
    }

    pub fn tariff_id(&self) -> &TariffId {
        &self.tariff_id
    }

    pub fn period_months(&self) -> u32 {
        self.period_months
    }

    pub fn applied_promo(&self) -> Option<&Promo> {
        self.applied_promo.as_ref()
    }

    pub fn used_codes(&self) -> &BTreeSet<PromoCode> {
        &self.used_codes
    }
}

/// Result of changing the tariff or the period.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectionChange {
    /// Set when the previously applied promo no longer fits and was removed.
    pub promo_cleared: Option<PromoRejection>,
}

impl SelectionChange {
    pub fn kept_promo(&self) -> bool {
        self.promo_cleared.is_none()
    }
}

/// A promo that was accepted and applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromoApplied {
    pub promo: Promo,
    pub message: String,
}

/// One tariff priced for a period, without any promo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TariffOffer {
    pub tariff: Tariff,
    pub breakdown: PriceBreakdown,
}

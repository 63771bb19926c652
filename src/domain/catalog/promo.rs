//! Promotion records.
//!
//! A promotion pairs a [`PromoCode`] with the discount it grants and the
//! eligibility rules that decide whether it can be used for a selection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{PromoCode, TariffId};
use crate::domain::foundation::{Money, Percentage};

/// The kind of discount a promotion grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PromoKind {
    /// Percentage off the period-discounted total.
    Percent(Percentage),

    /// Fixed amount off, capped at the remaining total.
    Fixed(Money),

    /// Target effective monthly price after the period discount.
    SetPrice(Money),

    /// A kind this build does not know. Grants no discount.
    Unrecognized(String),
}

/// Which tariffs a promotion may be used with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", content = "tariffs", rename_all = "snake_case")]
pub enum Applicability {
    All,
    Only(BTreeSet<TariffId>),
}

impl Applicability {
    pub fn includes(&self, tariff: &TariffId) -> bool {
        match self {
            Applicability::All => true,
            Applicability::Only(ids) => ids.contains(tariff),
        }
    }
}

/// A catalog promotion.
///
/// Read-only from the engine's point of view: `used_count` reflects whatever
/// the catalog source reported and is never incremented here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promo {
    pub code: PromoCode,
    pub kind: PromoKind,
    pub applicable: Applicability,
    /// Tariffs the promotion never applies to, even under `Applicability::All`.
    #[serde(default)]
    pub excluded_tariffs: BTreeSet<TariffId>,
    /// First day the code can be used (inclusive).
    pub valid_from: Option<NaiveDate>,
    /// Last day the code can be used (inclusive).
    pub valid_until: Option<NaiveDate>,
    pub usage_limit: Option<u32>,
    pub used_count: u32,
    /// Minimum total (after the period discount) required to use the code.
    pub min_purchase: Money,
    pub single_use_per_user: bool,
    pub description: String,
}

impl Promo {
    /// Returns true if `today` is before the first valid day.
    pub fn starts_after(&self, today: NaiveDate) -> bool {
        self.valid_from.is_some_and(|from| today < from)
    }

    /// Returns true if `today` is after the last valid day.
    pub fn expired_by(&self, today: NaiveDate) -> bool {
        self.valid_until.is_some_and(|until| today > until)
    }

    /// Returns true if the global redemption cap has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.usage_limit.is_some_and(|limit| self.used_count >= limit)
    }

    pub fn excludes(&self, tariff: &TariffId) -> bool {
        self.excluded_tariffs.contains(tariff)
    }

    /// Tariffs explicitly referenced by applicability or exclusion lists.
    pub(crate) fn referenced_tariffs(&self) -> impl Iterator<Item = &TariffId> {
        let listed = match &self.applicable {
            Applicability::All => None,
            Applicability::Only(ids) => Some(ids.iter()),
        };
        listed.into_iter().flatten().chain(self.excluded_tariffs.iter())
    }
}

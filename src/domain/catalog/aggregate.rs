//! The validated reference-data aggregate.

use serde::Serialize;
use std::collections::HashSet;

use super::{
    CatalogError, PeriodDiscountSchedule, Promo, PromoCode, PromoKind, Tariff, TariffId,
    TestCardTable,
};

/// Tariffs, promotions, period discounts and test cards.
///
/// Constructed once (usually through a `CatalogSource`) and then shared
/// immutably. All cross-references are checked at construction so lookups
/// during checkout never have to deal with dangling ids.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    tariffs: Vec<Tariff>,
    promos: Vec<Promo>,
    period_discounts: PeriodDiscountSchedule,
    test_cards: TestCardTable,
}

impl Catalog {
    /// Builds a catalog, rejecting inconsistent data.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if:
    /// - There are no tariffs
    /// - A tariff id or promo code is duplicated
    /// - A tariff is free (zero monthly price)
    /// - A promotion references an unknown tariff
    /// - A period is zero months or discounted by 100% or more
    pub fn new(
        tariffs: Vec<Tariff>,
        promos: Vec<Promo>,
        period_discounts: PeriodDiscountSchedule,
        test_cards: TestCardTable,
    ) -> Result<Self, CatalogError> {
        if tariffs.is_empty() {
            return Err(CatalogError::NoTariffs);
        }

        let mut tariff_ids = HashSet::new();
        for tariff in &tariffs {
            if !tariff_ids.insert(&tariff.id) {
                return Err(CatalogError::DuplicateTariff(tariff.id.clone()));
            }
            if tariff.monthly_price.is_zero() {
                return Err(CatalogError::FreeTariff(tariff.id.clone()));
            }
        }

        for (months, rate) in period_discounts.entries() {
            if months == 0 {
                return Err(CatalogError::ZeroLengthPeriod);
            }
            if rate.value() >= 100 {
                return Err(CatalogError::PeriodDiscountTooLarge { months, rate });
            }
        }

        let mut codes = HashSet::new();
        for promo in &promos {
            if !codes.insert(&promo.code) {
                return Err(CatalogError::DuplicatePromo(promo.code.clone()));
            }
            if let Some(unknown) = promo.referenced_tariffs().find(|id| !tariff_ids.contains(id)) {
                return Err(CatalogError::UnknownTariffReference {
                    code: promo.code.clone(),
                    tariff: unknown.clone(),
                });
            }
        }

        let catalog = Self {
            tariffs,
            promos,
            period_discounts,
            test_cards,
        };
        catalog.warn_on_raising_set_prices();
        Ok(catalog)
    }

    /// A SetPrice target above a tariff's own price grants nothing there;
    /// pricing clamps it, but the data is most likely a typo.
    fn warn_on_raising_set_prices(&self) {
        for promo in &self.promos {
            let PromoKind::SetPrice(target) = &promo.kind else {
                continue;
            };
            for tariff in &self.tariffs {
                let eligible =
                    promo.applicable.includes(&tariff.id) && !promo.excludes(&tariff.id);
                if eligible && *target > tariff.monthly_price {
                    tracing::warn!(
                        code = %promo.code,
                        tariff = %tariff.id,
                        target = %target,
                        monthly_price = %tariff.monthly_price,
                        "set-price promo exceeds tariff price and will grant no discount"
                    );
                }
            }
        }
    }

    /// The first tariff in display order. Construction guarantees one exists.
    pub fn primary_tariff(&self) -> &Tariff {
        &self.tariffs[0]
    }

    pub fn tariffs(&self) -> &[Tariff] {
        &self.tariffs
    }

    pub fn tariff(&self, id: &TariffId) -> Option<&Tariff> {
        self.tariffs.iter().find(|t| &t.id == id)
    }

    /// Display name of a tariff, falling back to the raw id.
    pub fn tariff_name<'a>(&'a self, id: &'a TariffId) -> &'a str {
        self.tariff(id).map(|t| t.name.as_str()).unwrap_or(id.as_str())
    }

    pub fn promos(&self) -> &[Promo] {
        &self.promos
    }

    /// Case-insensitive lookup (codes are normalized on both sides).
    pub fn promo(&self, code: &PromoCode) -> Option<&Promo> {
        self.promos.iter().find(|p| &p.code == code)
    }

    pub fn period_discounts(&self) -> &PeriodDiscountSchedule {
        &self.period_discounts
    }

    pub fn test_cards(&self) -> &TestCardTable {
        &self.test_cards
    }
}

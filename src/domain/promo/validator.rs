//! Promo code eligibility checks.
//!
//! Checks run in a fixed order and the first failure wins, so the same input
//! always produces the same rejection message.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::PromoRejection;
use crate::domain::catalog::{Applicability, Catalog, Promo, PromoCode, TariffId};
use crate::domain::foundation::Money;

/// The selection a promo code is being checked against.
#[derive(Debug, Clone, Copy)]
pub struct PromoContext<'a> {
    pub tariff_id: &'a TariffId,
    pub period_months: u32,
    /// Period-discounted total of the selection, before any promotion.
    pub current_total: Money,
    /// Codes the current user has already redeemed.
    pub used_codes: &'a BTreeSet<PromoCode>,
}

/// Validates `code_text` for the selection described by `ctx` on `today`.
///
/// # Returns
///
/// - `Ok(promo)` - the catalog record, ready to be applied
/// - `Err(rejection)` - the first rule the code fails
pub fn validate_promo<'c>(
    catalog: &'c Catalog,
    code_text: &str,
    ctx: &PromoContext<'_>,
    today: NaiveDate,
) -> Result<&'c Promo, PromoRejection> {
    // 1. Normalize
    let code = PromoCode::try_new(code_text).map_err(|_| PromoRejection::CodeRequired)?;

    // 2. Lookup
    let promo = catalog.promo(&code).ok_or(PromoRejection::NotFound)?;

    let result = check_rules(catalog, promo, ctx, today);
    match &result {
        Ok(()) => tracing::debug!(
            code = %promo.code,
            tariff = %ctx.tariff_id,
            period_months = ctx.period_months,
            "promo code accepted"
        ),
        Err(rejection) => tracing::debug!(
            code = %promo.code,
            tariff = %ctx.tariff_id,
            period_months = ctx.period_months,
            reason = rejection.code(),
            "promo code rejected"
        ),
    }
    result.map(|()| promo)
}

fn check_rules(
    catalog: &Catalog,
    promo: &Promo,
    ctx: &PromoContext<'_>,
    today: NaiveDate,
) -> Result<(), PromoRejection> {
    // 3. Not started yet
    if let Some(starts_on) = promo.valid_from.filter(|_| promo.starts_after(today)) {
        return Err(PromoRejection::NotYetActive { starts_on });
    }

    // 4. Ended (the last day is still valid)
    if let Some(expired_on) = promo.valid_until.filter(|_| promo.expired_by(today)) {
        return Err(PromoRejection::Expired { expired_on });
    }

    // 5. Global usage cap
    if let Some(limit) = promo.usage_limit.filter(|_| promo.is_exhausted()) {
        return Err(PromoRejection::UsageLimitReached {
            used: promo.used_count,
            limit,
        });
    }

    // 6. Per-user single use
    if promo.single_use_per_user && ctx.used_codes.contains(&promo.code) {
        return Err(PromoRejection::AlreadyUsed);
    }

    // 7. Applicability
    if let Applicability::Only(ids) = &promo.applicable {
        if !ids.contains(ctx.tariff_id) {
            let tariffs = ids
                .iter()
                .map(|id| catalog.tariff_name(id).to_string())
                .collect();
            return Err(PromoRejection::NotApplicable { tariffs });
        }
    }

    // 8. Exclusions override applicability
    if promo.excludes(ctx.tariff_id) {
        return Err(PromoRejection::ExcludedTariff {
            tariff: catalog.tariff_name(ctx.tariff_id).to_string(),
        });
    }

    // 9. Minimum purchase
    if !promo.min_purchase.is_zero() && ctx.current_total < promo.min_purchase {
        return Err(PromoRejection::BelowMinimum {
            minimum: promo.min_purchase,
        });
    }

    Ok(())
}

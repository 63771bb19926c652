//! Price calculation.
//!
//! Every discount step floors to a whole currency unit. Rates are whole
//! percents, so the arithmetic is done in integers scaled by 100 and floored
//! once per step; there is no floating point anywhere in the pipeline.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{PeriodDiscountSchedule, Promo, PromoKind, Tariff};
use crate::domain::foundation::{Money, Percentage};

/// The itemized price of one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Monthly price times period length.
    pub base_total: Money,
    /// Rate applied for the billing period.
    pub period_rate: Percentage,
    /// Amount removed for committing to the period.
    pub period_discount: Money,
    /// Amount removed by the applied promotion.
    pub promo_discount: Money,
    /// Payable amount.
    pub total: Money,
    /// `period_discount + promo_discount`.
    pub total_savings: Money,
}

impl PriceBreakdown {
    /// Total after the period discount but before any promotion.
    pub fn subtotal(&self) -> Money {
        self.base_total.saturating_sub(self.period_discount)
    }

    pub fn has_savings(&self) -> bool {
        !self.total_savings.is_zero()
    }
}

/// Computes the price of `tariff` over `period_months` with an optional
/// promotion applied on top of the period discount.
///
/// The promotion is assumed to have been validated for this selection; this
/// function only does the arithmetic.
pub fn compute_price(
    tariff: &Tariff,
    period_months: u32,
    promo: Option<&Promo>,
    schedule: &PeriodDiscountSchedule,
) -> PriceBreakdown {
    let base_total = tariff.monthly_price.times(period_months);
    let period_rate = schedule.rate_for(period_months);
    let period_discount = period_rate.of(base_total);
    let running = base_total.saturating_sub(period_discount);

    let promo_discount = promo
        .map(|p| discount_for(&p.kind, running, period_months, period_rate))
        .unwrap_or(Money::ZERO);
    let total = running.saturating_sub(promo_discount);

    tracing::debug!(
        tariff = %tariff.id,
        period_months,
        base_total = %base_total,
        period_discount = %period_discount,
        promo = promo.map(|p| p.code.as_str()).unwrap_or("-"),
        promo_discount = %promo_discount,
        total = %total,
        "computed price"
    );

    PriceBreakdown {
        base_total,
        period_rate,
        period_discount,
        promo_discount,
        total,
        total_savings: period_discount + promo_discount,
    }
}

/// Amount a promotion removes from `running` (the period-discounted total).
fn discount_for(kind: &PromoKind, running: Money, period_months: u32, rate: Percentage) -> Money {
    match kind {
        PromoKind::Percent(pct) => pct.of(running),
        PromoKind::Fixed(amount) => (*amount).min(running),
        PromoKind::SetPrice(monthly) => set_price_discount(*monthly, running, period_months, rate),
        PromoKind::Unrecognized(kind) => {
            tracing::warn!(kind = %kind, "unrecognized promo kind grants no discount");
            Money::ZERO
        }
    }
}

/// `floor(running - monthly * months * (1 - rate))`, clamped at zero.
///
/// A target price above the current price would produce a negative discount
/// (a surcharge); that is treated as no discount.
fn set_price_discount(monthly: Money, running: Money, period_months: u32, rate: Percentage) -> Money {
    let target_x100 = i128::from(monthly.value())
        * i128::from(period_months)
        * i128::from(rate.complement().value());
    let diff_x100 = i128::from(running.value()) * 100 - target_x100;
    let discount = diff_x100.div_euclid(100);
    if discount <= 0 {
        if discount < 0 {
            tracing::debug!(
                target_monthly = %monthly,
                running = %running,
                "set-price target above current price, clamping discount to zero"
            );
        }
        return Money::ZERO;
    }
    Money::new(u64::try_from(discount).unwrap_or(u64::MAX).min(running.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::promo::fixtures::open_percent;
    use crate::domain::catalog::TariffId;

    fn tariff(id: &str, price: u64) -> Tariff {
        Tariff::new(TariffId::try_new(id).unwrap(), id, Money::new(price), vec![])
    }

    fn promo(kind: PromoKind) -> Promo {
        let mut p = open_percent("TEST", 0);
        p.kind = kind;
        p
    }

    fn schedule() -> PeriodDiscountSchedule {
        PeriodDiscountSchedule::default()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Period Discount Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn premium_yearly_without_promo() {
        let price = compute_price(&tariff("premium", 499), 12, None, &schedule());
        assert_eq!(price.base_total, Money::new(5988));
        assert_eq!(price.period_discount, Money::new(1197));
        assert_eq!(price.promo_discount, Money::ZERO);
        assert_eq!(price.total, Money::new(4791));
        assert_eq!(price.total_savings, Money::new(1197));
    }

    #[test]
    fn monthly_period_has_no_discount() {
        let price = compute_price(&tariff("basic", 299), 1, None, &schedule());
        assert_eq!(price.total, Money::new(299));
        assert!(!price.has_savings());
    }

    #[test]
    fn quarterly_discount_floors() {
        // 897 * 10% = 89.7 -> 89
        let price = compute_price(&tariff("basic", 299), 3, None, &schedule());
        assert_eq!(price.period_discount, Money::new(89));
        assert_eq!(price.total, Money::new(808));
    }

    #[test]
    fn unknown_period_gets_no_discount() {
        let price = compute_price(&tariff("family", 799), 6, None, &schedule());
        assert_eq!(price.period_rate, Percentage::ZERO);
        assert_eq!(price.total, Money::new(4794));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Promo Discount Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn percent_promo_applies_after_period_discount() {
        let welcome = promo(PromoKind::Percent(Percentage::new(10)));
        let price = compute_price(&tariff("premium", 499), 12, Some(&welcome), &schedule());
        assert_eq!(price.promo_discount, Money::new(479));
        assert_eq!(price.total, Money::new(4312));
        assert_eq!(price.total_savings, Money::new(1676));
        assert_eq!(price.subtotal(), Money::new(4791));
    }

    #[test]
    fn fixed_promo_is_capped_at_remaining_total() {
        let big = promo(PromoKind::Fixed(Money::new(1000)));
        let price = compute_price(&tariff("basic", 299), 1, Some(&big), &schedule());
        assert_eq!(price.promo_discount, Money::new(299));
        assert_eq!(price.total, Money::ZERO);
    }

    #[test]
    fn fixed_promo_subtracts_amount() {
        let family300 = promo(PromoKind::Fixed(Money::new(300)));
        let price = compute_price(&tariff("family", 799), 1, Some(&family300), &schedule());
        assert_eq!(price.total, Money::new(499));
    }

    #[test]
    fn set_price_promo_sets_effective_monthly_price() {
        let basic199 = promo(PromoKind::SetPrice(Money::new(199)));
        let price = compute_price(&tariff("basic", 299), 1, Some(&basic199), &schedule());
        assert_eq!(price.promo_discount, Money::new(100));
        assert_eq!(price.total, Money::new(199));
    }

    #[test]
    fn set_price_promo_respects_period_rate() {
        // running 2871 (3588 - 717), target 199 * 12 * 0.8 = 1910.4
        let basic199 = promo(PromoKind::SetPrice(Money::new(199)));
        let price = compute_price(&tariff("basic", 299), 12, Some(&basic199), &schedule());
        assert_eq!(price.period_discount, Money::new(717));
        assert_eq!(price.promo_discount, Money::new(960));
        assert_eq!(price.total, Money::new(1911));
    }

    #[test]
    fn set_price_above_current_price_grants_nothing() {
        let raise = promo(PromoKind::SetPrice(Money::new(999)));
        let price = compute_price(&tariff("basic", 299), 1, Some(&raise), &schedule());
        assert_eq!(price.promo_discount, Money::ZERO);
        assert_eq!(price.total, Money::new(299));
    }

    #[test]
    fn unrecognized_promo_grants_nothing() {
        let odd = promo(PromoKind::Unrecognized("bogo".to_string()));
        let price = compute_price(&tariff("premium", 499), 3, Some(&odd), &schedule());
        assert_eq!(price.promo_discount, Money::ZERO);
        assert_eq!(price.total, price.subtotal());
    }

    #[test]
    fn hundred_percent_promo_makes_it_free() {
        let free = promo(PromoKind::Percent(Percentage::HUNDRED));
        let price = compute_price(&tariff("family", 799), 12, Some(&free), &schedule());
        assert_eq!(price.total, Money::ZERO);
    }

    #[test]
    fn very_large_monthly_price_does_not_overflow() {
        let price = compute_price(
            &tariff("enterprise", 200_000_000_000_000_000),
            12,
            None,
            &schedule(),
        );
        assert_eq!(price.base_total, Money::new(2_400_000_000_000_000_000));
        assert_eq!(price.period_discount, Money::new(480_000_000_000_000_000));
        assert_eq!(price.total, Money::new(1_920_000_000_000_000_000));

        let half = promo(PromoKind::Percent(Percentage::new(50)));
        let price = compute_price(&tariff("enterprise", u64::MAX), 12, Some(&half), &schedule());
        assert!(price.total <= price.base_total);
    }
}

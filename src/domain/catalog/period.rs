//! Billing period discount schedule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Percentage;

/// Discount rate per billing-period length (in months).
///
/// Periods missing from the schedule get no discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodDiscountSchedule {
    rates: BTreeMap<u32, Percentage>,
}

impl PeriodDiscountSchedule {
    pub fn new(rates: BTreeMap<u32, Percentage>) -> Self {
        Self { rates }
    }

    /// Discount rate for a period length; zero when the period is unknown.
    pub fn rate_for(&self, months: u32) -> Percentage {
        self.rates.get(&months).copied().unwrap_or(Percentage::ZERO)
    }

    /// Returns true if the period is offered.
    pub fn supports(&self, months: u32) -> bool {
        self.rates.contains_key(&months)
    }

    /// Offered period lengths in ascending order.
    pub fn periods(&self) -> impl Iterator<Item = u32> + '_ {
        self.rates.keys().copied()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (u32, Percentage)> + '_ {
        self.rates.iter().map(|(m, r)| (*m, *r))
    }
}

impl Default for PeriodDiscountSchedule {
    /// 1 month: 0%, 3 months: 10%, 12 months: 20%.
    fn default() -> Self {
        Self::new(BTreeMap::from([
            (1, Percentage::ZERO),
            (3, Percentage::new(10)),
            (12, Percentage::new(20)),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_has_standard_rates() {
        let schedule = PeriodDiscountSchedule::default();
        assert_eq!(schedule.rate_for(1), Percentage::ZERO);
        assert_eq!(schedule.rate_for(3), Percentage::new(10));
        assert_eq!(schedule.rate_for(12), Percentage::new(20));
    }

    #[test]
    fn unknown_period_has_zero_rate() {
        let schedule = PeriodDiscountSchedule::default();
        assert_eq!(schedule.rate_for(6), Percentage::ZERO);
        assert!(!schedule.supports(6));
    }

    #[test]
    fn periods_are_ascending() {
        let schedule = PeriodDiscountSchedule::default();
        assert_eq!(schedule.periods().collect::<Vec<_>>(), vec![1, 3, 12]);
    }

    #[test]
    fn deserializes_from_map() {
        let schedule: PeriodDiscountSchedule =
            serde_json::from_str(r#"{"1":0,"6":15}"#).unwrap();
        assert_eq!(schedule.rate_for(6), Percentage::new(15));
    }
}

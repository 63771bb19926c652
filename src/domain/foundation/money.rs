//! Money value object.
//!
//! Amounts are whole currency units with no minor unit, matching how the
//! checkout quotes prices (299, 4 791, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative whole-unit currency amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates an amount.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw amount.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns true for a zero amount.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a count (e.g. months), saturating on overflow.
    pub fn times(&self, count: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(count)))
    }

    /// Subtracts, flooring at zero.
    pub fn saturating_sub(&self, other: Money) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl From<u64> for Money {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_multiplies_by_months() {
        assert_eq!(Money::new(499).times(12), Money::new(5988));
    }

    #[test]
    fn saturating_sub_never_goes_negative() {
        assert_eq!(Money::new(100).saturating_sub(Money::new(300)), Money::ZERO);
        assert_eq!(Money::new(799).saturating_sub(Money::new(300)), Money::new(499));
    }

    #[test]
    fn sum_adds_amounts() {
        let total: Money = [Money::new(1197), Money::new(479)].into_iter().sum();
        assert_eq!(total, Money::new(1676));
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Money::new(4791)).unwrap(), "4791");
        let m: Money = serde_json::from_str("299").unwrap();
        assert_eq!(m, Money::new(299));
    }
}

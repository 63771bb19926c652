//! On-disk catalog records.
//!
//! The file format is flat and forgiving (a promo's discount is a `type`
//! string plus a numeric `value`, applicability is a list that may contain
//! `all`). Records are converted into domain types and then checked as a
//! whole by `Catalog::new`.

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::card::{DeclineReason, PaymentOutcome};
use crate::domain::catalog::{
    Applicability, Catalog, CatalogError, PeriodDiscountSchedule, Promo, PromoCode, PromoKind,
    Tariff, TariffId, TestCardTable,
};
use crate::domain::foundation::{Money, Percentage, ValidationError};

/// Applicability entry meaning "every tariff".
const ALL_TARIFFS: &str = "all";

/// Top-level catalog document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogRecord {
    pub tariffs: Vec<TariffRecord>,
    #[serde(default)]
    pub promos: Vec<PromoRecord>,
    /// Months -> whole-percent discount. Absent means the standard schedule.
    #[serde(default)]
    pub period_discounts: Option<BTreeMap<u32, u8>>,
    /// Card number -> scripted outcome. Absent means the standard test cards.
    #[serde(default)]
    pub test_cards: Option<BTreeMap<String, OutcomeRecord>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TariffRecord {
    pub id: String,
    pub name: String,
    pub monthly_price: u64,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromoRecord {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: u64,
    #[serde(default = "default_applicable_to")]
    pub applicable_to: Vec<String>,
    #[serde(default)]
    pub excluded_tariffs: Vec<String>,
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub min_purchase: u64,
    #[serde(default)]
    pub single_use_per_user: bool,
    #[serde(default)]
    pub description: String,
}

fn default_applicable_to() -> Vec<String> {
    vec![ALL_TARIFFS.to_string()]
}

/// Scripted outcome of a test card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeRecord {
    Success,
    GenericDecline,
    InsufficientFunds,
    StolenCard,
    SuspectedFraud,
    ProcessingError,
    IncorrectCvc,
}

impl From<OutcomeRecord> for PaymentOutcome {
    fn from(record: OutcomeRecord) -> Self {
        let reason = match record {
            OutcomeRecord::Success => return PaymentOutcome::Success,
            OutcomeRecord::GenericDecline => DeclineReason::GenericDecline,
            OutcomeRecord::InsufficientFunds => DeclineReason::InsufficientFunds,
            OutcomeRecord::StolenCard => DeclineReason::StolenCard,
            OutcomeRecord::SuspectedFraud => DeclineReason::SuspectedFraud,
            OutcomeRecord::ProcessingError => DeclineReason::ProcessingError,
            OutcomeRecord::IncorrectCvc => DeclineReason::IncorrectCvc,
        };
        PaymentOutcome::Declined(reason)
    }
}

impl TryFrom<TariffRecord> for Tariff {
    type Error = ValidationError;

    fn try_from(record: TariffRecord) -> Result<Self, Self::Error> {
        Ok(Tariff::new(
            TariffId::try_new(&record.id)?,
            record.name,
            Money::new(record.monthly_price),
            record.features,
        ))
    }
}

impl PromoRecord {
    fn discount_kind(&self) -> Result<PromoKind, ValidationError> {
        let kind = match self.kind.trim().to_ascii_lowercase().as_str() {
            "percent" => PromoKind::Percent(percent_value("value", self.value)?),
            "fixed" => PromoKind::Fixed(Money::new(self.value)),
            "set_price" => PromoKind::SetPrice(Money::new(self.value)),
            other => {
                tracing::warn!(
                    code = %self.code,
                    kind = other,
                    "Unknown promo type, promo will grant no discount"
                );
                PromoKind::Unrecognized(other.to_string())
            }
        };
        Ok(kind)
    }

    fn applicability(&self) -> Result<Applicability, ValidationError> {
        if self
            .applicable_to
            .iter()
            .any(|t| t.trim().eq_ignore_ascii_case(ALL_TARIFFS))
        {
            return Ok(Applicability::All);
        }
        Ok(Applicability::Only(tariff_set(&self.applicable_to)?))
    }
}

impl TryFrom<PromoRecord> for Promo {
    type Error = ValidationError;

    fn try_from(record: PromoRecord) -> Result<Self, Self::Error> {
        let kind = record.discount_kind()?;
        let applicable = record.applicability()?;
        Ok(Promo {
            code: PromoCode::try_new(&record.code)?,
            kind,
            applicable,
            excluded_tariffs: tariff_set(&record.excluded_tariffs)?,
            valid_from: record.valid_from,
            valid_until: record.valid_until,
            usage_limit: record.usage_limit,
            used_count: record.used_count,
            min_purchase: Money::new(record.min_purchase),
            single_use_per_user: record.single_use_per_user,
            description: record.description,
        })
    }
}

fn tariff_set(ids: &[String]) -> Result<BTreeSet<TariffId>, ValidationError> {
    ids.iter().map(|id| TariffId::try_new(id)).collect()
}

fn percent_value(field: &str, value: u64) -> Result<Percentage, ValidationError> {
    u8::try_from(value)
        .ok()
        .and_then(|v| Percentage::try_new(v).ok())
        .ok_or_else(|| {
            ValidationError::out_of_range(field, 0, 100, i64::try_from(value).unwrap_or(i64::MAX))
        })
}

impl CatalogRecord {
    /// Parses a YAML catalog document.
    pub fn from_yaml(text: &str, source_name: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(text).map_err(|e| CatalogError::unavailable(source_name, e))
    }

    /// Converts records into a validated catalog.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let tariffs = self
            .tariffs
            .into_iter()
            .map(Tariff::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let promos = self
            .promos
            .into_iter()
            .map(Promo::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let period_discounts = match self.period_discounts {
            Some(rates) => {
                let rates = rates
                    .into_iter()
                    .map(|(months, pct)| {
                        percent_value("period_discount", u64::from(pct)).map(|p| (months, p))
                    })
                    .collect::<Result<BTreeMap<_, _>, _>>()?;
                PeriodDiscountSchedule::new(rates)
            }
            None => PeriodDiscountSchedule::default(),
        };

        let test_cards = match self.test_cards {
            Some(cards) => TestCardTable::new(
                cards
                    .into_iter()
                    .map(|(number, outcome)| {
                        let digits: String =
                            number.chars().filter(|c| !c.is_whitespace()).collect();
                        (digits, PaymentOutcome::from(outcome))
                    })
                    .collect(),
            ),
            None => TestCardTable::default(),
        };

        Catalog::new(tariffs, promos, period_discounts, test_cards)
    }
}

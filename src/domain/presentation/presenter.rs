//! Formatting of amounts, periods and dates for display.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Locale;
use crate::domain::catalog::PromoKind;
use crate::domain::foundation::Money;

/// Currency glyph used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₷";

const RU_MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Formats an amount with spaces between thousands (`4791` -> `4 791`).
pub fn group_thousands(amount: Money) -> String {
    let digits = amount.value().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

/// Date a subscription bought on `today` for `months` renews.
///
/// The day is clamped to the last day of the target month
/// (31 January + 1 month renews on 28/29 February).
pub fn renews_on(today: NaiveDate, months: u32) -> NaiveDate {
    today
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Renders checkout values for one locale and currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presenter {
    currency_symbol: String,
    locale: Locale,
}

impl Presenter {
    pub fn new(currency_symbol: impl Into<String>, locale: Locale) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            locale,
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Amount without currency, grouped by thousands.
    pub fn format_amount(&self, amount: Money) -> String {
        group_thousands(amount)
    }

    /// Amount followed by the currency glyph (`4 791 ₷`).
    pub fn format_money(&self, amount: Money) -> String {
        format!("{} {}", group_thousands(amount), self.currency_symbol)
    }

    /// Human label for a billing period (`3 months`, `3 месяца`).
    pub fn period_label(&self, months: u32) -> String {
        match self.locale {
            Locale::En if months == 1 => "1 month".to_string(),
            Locale::En => format!("{} months", months),
            Locale::Ru => format!("{} {}", months, ru_month_word(months)),
        }
    }

    /// Long-form renewal date (`16 October 2027`, `16 октября 2027`).
    pub fn renewal_date(&self, today: NaiveDate, months: u32) -> String {
        self.long_date(renews_on(today, months))
    }

    pub fn long_date(&self, date: NaiveDate) -> String {
        match self.locale {
            Locale::En => date.format("%-d %B %Y").to_string(),
            Locale::Ru => format!(
                "{} {} {}",
                date.day(),
                RU_MONTHS_GENITIVE[date.month0() as usize],
                date.year()
            ),
        }
    }

    /// Promo end date as `dd.mm.yyyy`, or the open-ended label.
    pub fn promo_validity(&self, valid_until: Option<NaiveDate>) -> String {
        match (valid_until, self.locale) {
            (Some(date), _) => date.format("%d.%m.%Y").to_string(),
            (None, Locale::En) => "Unlimited".to_string(),
            (None, Locale::Ru) => "Бессрочно".to_string(),
        }
    }

    /// Short badge describing a promo's discount.
    ///
    /// Unrecognized kinds have no badge.
    pub fn promo_badge(&self, kind: &PromoKind) -> Option<String> {
        match kind {
            PromoKind::Percent(pct) => Some(format!("-{}", pct)),
            PromoKind::Fixed(amount) => Some(format!("-{}", self.format_money(*amount))),
            PromoKind::SetPrice(price) => {
                let per_month = match self.locale {
                    Locale::En => "mo",
                    Locale::Ru => "мес",
                };
                Some(format!("{}/{}", self.format_money(*price), per_month))
            }
            PromoKind::Unrecognized(_) => None,
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL, Locale::default())
    }
}

/// Russian plural of "month" for a count.
fn ru_month_word(months: u32) -> &'static str {
    match (months % 10, months % 100) {
        (_, 11..=14) => "месяцев",
        (1, _) => "месяц",
        (2..=4, _) => "месяца",
        _ => "месяцев",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Percentage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ru() -> Presenter {
        Presenter::new(DEFAULT_CURRENCY_SYMBOL, Locale::Ru)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Amount Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(group_thousands(Money::new(0)), "0");
        assert_eq!(group_thousands(Money::new(799)), "799");
        assert_eq!(group_thousands(Money::new(4791)), "4 791");
        assert_eq!(group_thousands(Money::new(1_234_567)), "1 234 567");
    }

    #[test]
    fn money_carries_currency_glyph() {
        assert_eq!(Presenter::default().format_money(Money::new(7670)), "7 670 ₷");
        let rub = Presenter::new("₽", Locale::Ru);
        assert_eq!(rub.format_money(Money::new(300)), "300 ₽");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Period Label Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn english_period_labels() {
        let p = Presenter::default();
        assert_eq!(p.period_label(1), "1 month");
        assert_eq!(p.period_label(3), "3 months");
        assert_eq!(p.period_label(12), "12 months");
    }

    #[test]
    fn russian_period_labels() {
        let p = ru();
        assert_eq!(p.period_label(1), "1 месяц");
        assert_eq!(p.period_label(3), "3 месяца");
        assert_eq!(p.period_label(12), "12 месяцев");
        assert_eq!(p.period_label(6), "6 месяцев");
        assert_eq!(p.period_label(21), "21 месяц");
        assert_eq!(p.period_label(24), "24 месяца");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Date Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn renewal_advances_by_months() {
        assert_eq!(renews_on(date(2026, 10, 16), 12), date(2027, 10, 16));
        assert_eq!(renews_on(date(2026, 10, 16), 3), date(2027, 1, 16));
    }

    #[test]
    fn renewal_clamps_to_month_end() {
        assert_eq!(renews_on(date(2027, 1, 31), 1), date(2027, 2, 28));
        assert_eq!(renews_on(date(2028, 1, 31), 1), date(2028, 2, 29));
    }

    #[test]
    fn renewal_date_in_long_form() {
        assert_eq!(
            Presenter::default().renewal_date(date(2026, 10, 16), 12),
            "16 October 2027"
        );
        assert_eq!(ru().renewal_date(date(2026, 10, 16), 12), "16 октября 2027");
        assert_eq!(ru().long_date(date(2027, 3, 1)), "1 марта 2027");
    }

    #[test]
    fn promo_validity_labels() {
        assert_eq!(
            Presenter::default().promo_validity(Some(date(2024, 6, 30))),
            "30.06.2024"
        );
        assert_eq!(Presenter::default().promo_validity(None), "Unlimited");
        assert_eq!(ru().promo_validity(None), "Бессрочно");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Badge Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn promo_badges_by_kind() {
        let p = Presenter::default();
        assert_eq!(
            p.promo_badge(&PromoKind::Percent(Percentage::new(10))).as_deref(),
            Some("-10%")
        );
        assert_eq!(
            p.promo_badge(&PromoKind::Fixed(Money::new(300))).as_deref(),
            Some("-300 ₷")
        );
        assert_eq!(
            p.promo_badge(&PromoKind::SetPrice(Money::new(199))).as_deref(),
            Some("199 ₷/mo")
        );
        assert_eq!(
            ru().promo_badge(&PromoKind::SetPrice(Money::new(199))).as_deref(),
            Some("199 ₷/мес")
        );
        assert!(p
            .promo_badge(&PromoKind::Unrecognized("bogo".into()))
            .is_none());
    }
}

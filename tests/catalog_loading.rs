//! Integration tests for loading catalogs from YAML files.
//!
//! Verifies that an operator-supplied catalog drives the engine end to end
//! and that broken files are reported rather than silently replaced.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use subscription_checkout::adapters::{FixedClock, YamlFileCatalog};
use subscription_checkout::application::{CardInput, CheckoutEngine};
use subscription_checkout::domain::card::{DeclineReason, PaymentOutcome};
use subscription_checkout::domain::catalog::CatalogError;
use subscription_checkout::domain::foundation::Money;
use subscription_checkout::domain::promo::PromoRejection;
use subscription_checkout::ports::CatalogSource;

// =============================================================================
// Test Infrastructure
// =============================================================================

const STUDIO_CATALOG: &str = r#"
tariffs:
  - id: solo
    name: Solo
    monthly_price: 1000
    features: [1 seat]
  - id: team
    name: Team
    monthly_price: 2500
    features: [5 seats, Shared workspace]

period_discounts:
  1: 0
  6: 15

promos:
  - code: launch
    type: percent
    value: 50
    applicable_to: [team]
    valid_from: 2025-01-01
    valid_until: 2025-01-31
    min_purchase: 5000
  - code: GIFT
    type: voucher
    value: 100

test_cards:
  "5555555555554444": suspected_fraud
"#;

fn write_catalog(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn studio_engine() -> (CheckoutEngine, NamedTempFile) {
    let file = write_catalog(STUDIO_CATALOG);
    let catalog = YamlFileCatalog::new(file.path()).load().unwrap();
    let clock = FixedClock::ymd(2025, 1, 15).unwrap();
    (CheckoutEngine::new(Arc::new(catalog), Arc::new(clock)), file)
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn custom_schedule_replaces_standard_periods() {
    let (engine, _file) = studio_engine();
    let selection = engine.new_selection("team", 6).unwrap();

    let price = engine.quote(&selection).unwrap();

    assert_eq!(price.base_total, Money::new(15000));
    assert_eq!(price.period_discount, Money::new(2250));
    assert_eq!(price.total, Money::new(12750));
}

#[test]
fn default_selection_falls_back_to_first_tariff() {
    let (engine, _file) = studio_engine();
    assert_eq!(engine.default_selection().tariff_id().as_str(), "solo");
}

#[test]
fn file_promo_rules_apply() {
    let (engine, _file) = studio_engine();
    let mut selection = engine.new_selection("team", 2).unwrap();

    engine.apply_promo(&mut selection, "launch").unwrap();

    assert_eq!(engine.quote(&selection).unwrap().total, Money::new(2500));
    let solo = engine.new_selection("solo", 12).unwrap();
    assert_eq!(
        engine.validate_promo(&solo, "LAUNCH").unwrap_err(),
        PromoRejection::NotApplicable {
            tariffs: vec!["Team".to_string()]
        }
    );
}

#[test]
fn minimum_purchase_is_checked_before_promo() {
    let (engine, _file) = studio_engine();

    // Exactly at the minimum before the 50% discount is applied
    let at_minimum = engine.new_selection("team", 2).unwrap();
    assert!(engine.validate_promo(&at_minimum, "LAUNCH").is_ok());

    let below = engine.new_selection("team", 1).unwrap();
    let rejection = engine.validate_promo(&below, "LAUNCH").unwrap_err();
    assert_eq!(
        rejection,
        PromoRejection::BelowMinimum {
            minimum: Money::new(5000)
        }
    );
    assert!(rejection.user_message().contains("5 000"));
}

#[test]
fn unknown_promo_type_applies_without_discount() {
    let (engine, _file) = studio_engine();
    let mut selection = engine.new_selection("solo", 1).unwrap();

    engine.apply_promo(&mut selection, "gift").unwrap();
    let price = engine.quote(&selection).unwrap();

    assert_eq!(price.promo_discount, Money::ZERO);
    assert_eq!(price.total, Money::new(1000));
}

#[test]
fn file_test_cards_replace_standard_cards() {
    let (engine, _file) = studio_engine();

    assert_eq!(
        engine
            .attempt_payment(&CardInput::new("5555 5555 5555 4444", "12/29", "123"))
            .unwrap(),
        PaymentOutcome::Declined(DeclineReason::SuspectedFraud)
    );
    assert_eq!(
        engine
            .attempt_payment(&CardInput::new("4000000000000002", "12/29", "123"))
            .unwrap(),
        PaymentOutcome::Success
    );
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn inconsistent_catalog_is_rejected() {
    let file = write_catalog(
        "tariffs:\n  - id: solo\n    name: Solo\n    monthly_price: 1000\n  - id: SOLO\n    name: Again\n    monthly_price: 5\n",
    );

    match YamlFileCatalog::new(file.path()).load() {
        Err(CatalogError::DuplicateTariff(id)) => assert_eq!(id.as_str(), "solo"),
        other => panic!("Expected DuplicateTariff, got {:?}", other),
    }
}

#[test]
fn full_period_discount_is_rejected() {
    let file = write_catalog(
        "tariffs:\n  - id: solo\n    name: Solo\n    monthly_price: 1000\nperiod_discounts:\n  12: 100\n",
    );

    assert!(matches!(
        YamlFileCatalog::new(file.path()).load(),
        Err(CatalogError::PeriodDiscountTooLarge { months: 12, .. })
    ));
}

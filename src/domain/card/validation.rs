//! Card field validators.
//!
//! Each validator runs the same checks whether the user is still typing or
//! has pressed "Pay"; `show_errors` only decides whether the failure is
//! surfaced as a message. None of them panic on any input.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::strip_whitespace;
use super::{luhn_valid, CardNetwork};

/// Unknown networks are only reported once this many digits are in.
const NETWORK_DECISION_DIGITS: usize = 6;

/// Expiry dates further out than this many years are rejected.
const MAX_EXPIRY_YEARS_AHEAD: i32 = 5;

/// Why a card field is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CardFieldError {
    #[error("This field is required")]
    Required,

    #[error("Digits only")]
    DigitsOnly,

    #[error("Card number must contain {expected} digits")]
    WrongLength { expected: usize },

    #[error("Unsupported payment network")]
    UnsupportedNetwork,

    #[error("Invalid card number")]
    ChecksumFailed,

    #[error("Format: MM/YY")]
    ExpiryFormat,

    #[error("Month must be between 01 and 12")]
    MonthOutOfRange,

    #[error("Card has expired")]
    Expired,

    #[error("Expiry date cannot be more than 5 years ahead")]
    TooFarInFuture,

    #[error("CVV must contain {expected} digits")]
    CvvLength { expected: usize },
}

/// Outcome of validating one card field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub valid: bool,
    /// Typed failure, always present when `valid` is false.
    pub error: Option<CardFieldError>,
    /// Human-readable failure, only populated when errors were requested.
    pub message: Option<String>,
}

impl FieldCheck {
    fn ok() -> Self {
        Self {
            valid: true,
            error: None,
            message: None,
        }
    }

    fn fail(error: CardFieldError, show_errors: bool) -> Self {
        Self {
            valid: false,
            error: Some(error),
            message: show_errors.then(|| error.to_string()),
        }
    }

    fn from_result(result: Result<(), CardFieldError>, show_errors: bool) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(error) => Self::fail(error, show_errors),
        }
    }
}

/// Validates a card number as typed (spaces allowed).
pub fn validate_number(raw: &str, show_errors: bool) -> FieldCheck {
    FieldCheck::from_result(check_number(raw), show_errors)
}

fn check_number(raw: &str) -> Result<(), CardFieldError> {
    let cleaned = strip_whitespace(raw);
    if cleaned.is_empty() {
        return Err(CardFieldError::Required);
    }
    if !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CardFieldError::DigitsOnly);
    }

    let network = CardNetwork::detect(&cleaned);
    let expected = network.number_length();
    if cleaned.len() < expected {
        return Err(CardFieldError::WrongLength { expected });
    }
    if cleaned.len() >= NETWORK_DECISION_DIGITS && !network.is_known() {
        return Err(CardFieldError::UnsupportedNetwork);
    }
    if cleaned.len() != expected {
        return Err(CardFieldError::WrongLength { expected });
    }
    if !luhn_valid(&cleaned) {
        return Err(CardFieldError::ChecksumFailed);
    }
    Ok(())
}

/// Validates an `MM/YY` expiry against the month containing `today`.
pub fn validate_expiry(raw: &str, show_errors: bool, today: NaiveDate) -> FieldCheck {
    FieldCheck::from_result(check_expiry(raw, today), show_errors)
}

fn check_expiry(raw: &str, today: NaiveDate) -> Result<(), CardFieldError> {
    if raw.is_empty() {
        return Err(CardFieldError::Required);
    }
    let (month, year) = parse_expiry(raw).ok_or(CardFieldError::ExpiryFormat)?;

    if !(1..=12).contains(&month) {
        return Err(CardFieldError::MonthOutOfRange);
    }
    let (current_year, current_month) = (today.year(), today.month());
    if year < current_year || (year == current_year && month < current_month) {
        return Err(CardFieldError::Expired);
    }
    if year > current_year + MAX_EXPIRY_YEARS_AHEAD {
        return Err(CardFieldError::TooFarInFuture);
    }
    Ok(())
}

/// Parses exactly `MM/YY` into (month, 20YY).
fn parse_expiry(raw: &str) -> Option<(u32, i32)> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b'/'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !well_formed {
        return None;
    }
    let month = raw[..2].parse().ok()?;
    let year: i32 = raw[3..].parse().ok()?;
    Some((month, 2000 + year))
}

/// Validates a security code for the given network.
pub fn validate_cvv(raw: &str, show_errors: bool, network: CardNetwork) -> FieldCheck {
    FieldCheck::from_result(check_cvv(raw, network), show_errors)
}

fn check_cvv(raw: &str, network: CardNetwork) -> Result<(), CardFieldError> {
    if raw.is_empty() {
        return Err(CardFieldError::Required);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CardFieldError::DigitsOnly);
    }
    let expected = network.cvv_length();
    if raw.len() != expected {
        return Err(CardFieldError::CvvLength { expected });
    }
    Ok(())
}

/// Validity of the whole card form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardValidationResult {
    pub network: CardNetwork,
    pub number: FieldCheck,
    pub expiry: FieldCheck,
    pub cvv: FieldCheck,
}

impl CardValidationResult {
    /// True when every field is valid (the "Pay" button is enabled).
    pub fn is_payable(&self) -> bool {
        self.number.valid && self.expiry.valid && self.cvv.valid
    }

    /// Messages of the failing fields, in form order.
    pub fn messages(&self) -> Vec<&str> {
        [&self.number, &self.expiry, &self.cvv]
            .into_iter()
            .filter_map(|f| f.message.as_deref())
            .collect()
    }
}

/// Validates all three card fields independently.
///
/// The CVV length follows the network detected from `number`.
pub fn validate_card(
    number: &str,
    expiry: &str,
    cvv: &str,
    show_errors: bool,
    today: NaiveDate,
) -> CardValidationResult {
    let network = CardNetwork::detect(number);
    CardValidationResult {
        network,
        number: validate_number(number, show_errors),
        expiry: validate_expiry(expiry, show_errors, today),
        cvv: validate_cvv(cvv, show_errors, network),
    }
}

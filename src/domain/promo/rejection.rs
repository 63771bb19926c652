//! Reasons a promo code cannot be used.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, Money};
use crate::domain::presentation::group_thousands;

/// Why a promo code was rejected for the current selection.
///
/// These are expected, user-facing outcomes; the form shows
/// [`PromoRejection::user_message`] next to the promo input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromoRejection {
    /// Nothing was entered.
    CodeRequired,

    /// Code does not exist in the catalog.
    NotFound,

    /// Code is not valid yet (future campaign).
    NotYetActive {
        /// First day the code can be used.
        starts_on: NaiveDate,
    },

    /// Code's campaign has ended.
    Expired {
        /// Last day the code could be used.
        expired_on: NaiveDate,
    },

    /// Code has reached its global redemption cap.
    UsageLimitReached {
        used: u32,
        limit: u32,
    },

    /// Single-use code the current user has already redeemed.
    AlreadyUsed,

    /// Code is restricted to other tariffs.
    NotApplicable {
        /// Display names of the tariffs the code is valid for.
        tariffs: Vec<String>,
    },

    /// Code explicitly excludes the selected tariff.
    ExcludedTariff {
        /// Display name of the selected tariff.
        tariff: String,
    },

    /// Selection total is below the code's minimum purchase.
    BelowMinimum {
        minimum: Money,
    },

    /// The same code is already applied to this selection.
    AlreadyApplied,
}

impl PromoRejection {
    /// Get a user-facing message for the rejection.
    pub fn user_message(&self) -> String {
        match self {
            PromoRejection::CodeRequired => "Promo code required.".to_string(),
            PromoRejection::NotFound => {
                "Promo code not found. Please check and try again.".to_string()
            }
            PromoRejection::NotYetActive { starts_on } => format!(
                "This promo code is not yet active. It starts on {}.",
                starts_on.format("%Y-%m-%d")
            ),
            PromoRejection::Expired { expired_on } => format!(
                "This promo code expired on {}.",
                expired_on.format("%Y-%m-%d")
            ),
            PromoRejection::UsageLimitReached { .. } => {
                "This promo code has reached its usage limit.".to_string()
            }
            PromoRejection::AlreadyUsed => "You have already used this promo code.".to_string(),
            PromoRejection::NotApplicable { tariffs } => {
                format!("This promo code is only valid for: {}.", tariffs.join(", "))
            }
            PromoRejection::ExcludedTariff { tariff } => {
                format!("This promo code is not valid for the {} tariff.", tariff)
            }
            PromoRejection::BelowMinimum { minimum } => format!(
                "The minimum purchase for this promo code is {}.",
                group_thousands(*minimum)
            ),
            PromoRejection::AlreadyApplied => "This promo code is already applied.".to_string(),
        }
    }

    /// Stable machine-readable identifier.
    pub fn code(&self) -> &'static str {
        match self {
            PromoRejection::CodeRequired => "code_required",
            PromoRejection::NotFound => "not_found",
            PromoRejection::NotYetActive { .. } => "not_yet_active",
            PromoRejection::Expired { .. } => "expired",
            PromoRejection::UsageLimitReached { .. } => "usage_limit_reached",
            PromoRejection::AlreadyUsed => "already_used",
            PromoRejection::NotApplicable { .. } => "not_applicable",
            PromoRejection::ExcludedTariff { .. } => "excluded_tariff",
            PromoRejection::BelowMinimum { .. } => "below_minimum",
            PromoRejection::AlreadyApplied => "already_applied",
        }
    }
}

impl fmt::Display for PromoRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for PromoRejection {}

impl From<PromoRejection> for DomainError {
    fn from(rejection: PromoRejection) -> Self {
        let code = match rejection {
            PromoRejection::NotFound => ErrorCode::PromoNotFound,
            _ => ErrorCode::PromoRejected,
        };
        DomainError::new(code, rejection.user_message()).with_detail("reason", rejection.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn not_found_message_is_helpful() {
        let msg = PromoRejection::NotFound.user_message();
        assert!(msg.contains("not found"));
        assert!(msg.contains("check"));
    }

    #[test]
    fn expired_message_shows_date() {
        let msg = PromoRejection::Expired {
            expired_on: date(2024, 12, 31),
        }
        .user_message();
        assert!(msg.contains("expired"));
        assert!(msg.contains("2024-12-31"));
    }

    #[test]
    fn not_yet_active_message_shows_date() {
        let msg = PromoRejection::NotYetActive {
            starts_on: date(2024, 6, 1),
        }
        .user_message();
        assert!(msg.contains("not yet active"));
        assert!(msg.contains("2024-06-01"));
    }

    #[test]
    fn not_applicable_lists_tariff_names() {
        let msg = PromoRejection::NotApplicable {
            tariffs: vec!["Premium".to_string(), "Family".to_string()],
        }
        .user_message();
        assert!(msg.contains("only valid for: Premium, Family"));
    }

    #[test]
    fn below_minimum_groups_thousands() {
        let msg = PromoRejection::BelowMinimum {
            minimum: Money::new(1500),
        }
        .user_message();
        assert!(msg.contains("1 500"));
    }

    #[test]
    fn display_matches_user_message() {
        let rejection = PromoRejection::AlreadyUsed;
        assert_eq!(format!("{}", rejection), rejection.user_message());
    }

    #[test]
    fn rejection_serializes_with_type_tag() {
        let json = serde_json::to_string(&PromoRejection::UsageLimitReached {
            used: 2000,
            limit: 2000,
        })
        .unwrap();
        assert!(json.contains("\"type\":\"usage_limit_reached\""));
        assert!(json.contains("\"limit\":2000"));
    }

    #[test]
    fn rejection_deserializes_correctly() {
        let reason: PromoRejection = serde_json::from_str(r#"{"type":"not_found"}"#).unwrap();
        assert_eq!(reason, PromoRejection::NotFound);
    }

    #[test]
    fn converts_to_domain_error_with_reason_detail() {
        let err: DomainError = PromoRejection::AlreadyApplied.into();
        assert_eq!(err.code, ErrorCode::PromoRejected);
        assert_eq!(err.details.get("reason"), Some(&"already_applied".to_string()));
    }
}

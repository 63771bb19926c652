//! CheckoutEngine - Orchestrates pricing, promo and card checks for one form.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use super::{
    CardInput, CheckoutError, PaymentReceipt, PromoApplied, Selection, SelectionChange,
    TariffOffer,
};
use crate::domain::card::{self, CardValidationResult, InvalidCard, PaymentOutcome};
use crate::domain::catalog::{Catalog, Promo, Tariff, TariffId};
use crate::domain::foundation::Money;
use crate::domain::presentation::renews_on;
use crate::domain::pricing::{compute_price, PriceBreakdown};
use crate::domain::promo::{self, PromoContext, PromoRejection};
use crate::ports::Clock;

/// Tariff preselected when a form opens.
pub const DEFAULT_TARIFF: &str = "family";

/// Billing period preselected when a form opens.
pub const DEFAULT_PERIOD_MONTHS: u32 = 12;

/// Pricing and promotion engine for the subscription checkout form.
///
/// Holds the immutable catalog and a clock. Every operation is synchronous
/// and works on a caller-owned [`Selection`], so one engine can serve any
/// number of forms concurrently.
pub struct CheckoutEngine {
    catalog: Arc<Catalog>,
    clock: Arc<dyn Clock>,
    default_tariff: TariffId,
    default_period_months: u32,
}

impl CheckoutEngine {
    /// Creates an engine preselecting `family` for 12 months, or the first
    /// catalog tariff when there is no `family` plan.
    pub fn new(catalog: Arc<Catalog>, clock: Arc<dyn Clock>) -> Self {
        let default_tariff = catalog
            .tariffs()
            .iter()
            .find(|t| t.id.as_str() == DEFAULT_TARIFF)
            .unwrap_or_else(|| catalog.primary_tariff())
            .id
            .clone();
        Self {
            catalog,
            clock,
            default_tariff,
            default_period_months: DEFAULT_PERIOD_MONTHS,
        }
    }

    /// Overrides the preselected tariff and period.
    ///
    /// # Errors
    ///
    /// - `UnknownTariff` if the tariff is not in the catalog
    /// - `InvalidPeriod` if `period_months` is zero
    pub fn with_defaults(
        mut self,
        tariff_id: &str,
        period_months: u32,
    ) -> Result<Self, CheckoutError> {
        self.default_tariff = self.resolve_tariff(tariff_id)?.id.clone();
        self.default_period_months = check_period(period_months)?;
        Ok(self)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ════════════════════════════════════════════════════════════════════════
    // Selection
    // ════════════════════════════════════════════════════════════════════════

    /// A fresh selection with the configured defaults and no promo.
    pub fn default_selection(&self) -> Selection {
        Selection::new(self.default_tariff.clone(), self.default_period_months)
    }

    /// A fresh selection for the given tariff and period.
    pub fn new_selection(
        &self,
        tariff_id: &str,
        period_months: u32,
    ) -> Result<Selection, CheckoutError> {
        let tariff = self.resolve_tariff(tariff_id)?;
        let months = check_period(period_months)?;
        Ok(Selection::new(tariff.id.clone(), months))
    }

    /// Switches tariff, re-validating any applied promo.
    pub fn select_tariff(
        &self,
        selection: &mut Selection,
        tariff_id: &str,
    ) -> Result<SelectionChange, CheckoutError> {
        let tariff = self.resolve_tariff(tariff_id)?;
        selection.tariff_id = tariff.id.clone();
        Ok(self.revalidate(selection))
    }

    /// Switches billing period, re-validating any applied promo.
    pub fn select_period(
        &self,
        selection: &mut Selection,
        period_months: u32,
    ) -> Result<SelectionChange, CheckoutError> {
        selection.period_months = check_period(period_months)?;
        Ok(self.revalidate(selection))
    }

    fn revalidate(&self, selection: &mut Selection) -> SelectionChange {
        let Some(applied) = selection.applied_promo.as_ref() else {
            return SelectionChange::default();
        };
        let code = applied.code.clone();

        match self.check_promo(selection, code.as_str()) {
            Ok(promo) => {
                // Pick up the current catalog record for the code.
                selection.applied_promo = Some(promo.clone());
                SelectionChange::default()
            }
            Err(rejection) => {
                tracing::info!(
                    code = %code,
                    tariff = %selection.tariff_id,
                    period_months = selection.period_months,
                    reason = rejection.code(),
                    "Applied promo no longer valid, cleared"
                );
                selection.applied_promo = None;
                SelectionChange {
                    promo_cleared: Some(rejection),
                }
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Pricing
    // ════════════════════════════════════════════════════════════════════════

    /// Every tariff priced for `period_months` without a promo.
    ///
    /// # Errors
    ///
    /// - `InvalidPeriod` if `period_months` is zero
    pub fn offers(&self, period_months: u32) -> Result<Vec<TariffOffer>, CheckoutError> {
        let months = check_period(period_months)?;
        Ok(self
            .catalog
            .tariffs()
            .iter()
            .map(|tariff| TariffOffer {
                tariff: tariff.clone(),
                breakdown: compute_price(tariff, months, None, self.catalog.period_discounts()),
            })
            .collect())
    }

    /// Price of the selection including its applied promo.
    pub fn quote(&self, selection: &Selection) -> Result<PriceBreakdown, CheckoutError> {
        let tariff = self.tariff_of(selection)?;
        Ok(compute_price(
            tariff,
            selection.period_months,
            selection.applied_promo.as_ref(),
            self.catalog.period_discounts(),
        ))
    }

    // ════════════════════════════════════════════════════════════════════════
    // Promo codes
    // ════════════════════════════════════════════════════════════════════════

    /// Checks a code against the selection without applying it.
    pub fn validate_promo(
        &self,
        selection: &Selection,
        code_text: &str,
    ) -> Result<&Promo, PromoRejection> {
        self.check_promo(selection, code_text)
    }

    /// Applies a promo, replacing any promo already applied.
    ///
    /// The code is validated first; any rejection removes the previously
    /// applied promo. A valid code equal to the applied one is rejected with
    /// `AlreadyApplied` and leaves the selection unchanged.
    pub fn apply_promo(
        &self,
        selection: &mut Selection,
        code_text: &str,
    ) -> Result<PromoApplied, PromoRejection> {
        match self.check_promo(selection, code_text) {
            Ok(promo) => {
                if selection
                    .applied_promo
                    .as_ref()
                    .is_some_and(|applied| applied.code == promo.code)
                {
                    return Err(PromoRejection::AlreadyApplied);
                }
                let promo = promo.clone();
                tracing::info!(
                    code = %promo.code,
                    tariff = %selection.tariff_id,
                    period_months = selection.period_months,
                    "Promo code applied"
                );
                selection.applied_promo = Some(promo.clone());
                Ok(PromoApplied {
                    message: format!("Promo code applied: {}", promo.description),
                    promo,
                })
            }
            Err(rejection) => {
                selection.applied_promo = None;
                Err(rejection)
            }
        }
    }

    /// Removes the applied promo, returning it.
    pub fn clear_promo(&self, selection: &mut Selection) -> Option<Promo> {
        selection.applied_promo.take()
    }

    fn check_promo(
        &self,
        selection: &Selection,
        code_text: &str,
    ) -> Result<&Promo, PromoRejection> {
        // Minimum purchase is checked against the total before any promo.
        let current_total = self.tariff_of(selection).map_or(Money::ZERO, |tariff| {
            compute_price(
                tariff,
                selection.period_months,
                None,
                self.catalog.period_discounts(),
            )
            .total
        });
        let ctx = PromoContext {
            tariff_id: &selection.tariff_id,
            period_months: selection.period_months,
            current_total,
            used_codes: selection.used_codes(),
        };
        promo::validate_promo(&self.catalog, code_text, &ctx, self.today())
    }

    // ════════════════════════════════════════════════════════════════════════
    // Card and payment
    // ════════════════════════════════════════════════════════════════════════

    /// Validates the card form. With `show_errors` false, only validity is
    /// computed (used while the customer is still typing).
    pub fn validate_card(&self, input: &CardInput, show_errors: bool) -> CardValidationResult {
        card::validate_card(
            &input.number,
            &input.expiry,
            &input.cvv,
            show_errors,
            self.today(),
        )
    }

    /// Validates the card and simulates a charge against the test cards.
    pub fn attempt_payment(&self, input: &CardInput) -> Result<PaymentOutcome, InvalidCard> {
        card::attempt_payment(
            &input.number,
            &input.expiry,
            &input.cvv,
            self.today(),
            self.catalog.test_cards(),
        )
    }

    /// Pays for the selection.
    ///
    /// # Errors
    ///
    /// - `Promo` if the applied promo stopped being valid
    /// - `InvalidCard` if any card field fails validation
    /// - `Declined` if the simulated charge is declined
    pub fn pay(
        &self,
        selection: &Selection,
        input: &CardInput,
    ) -> Result<PaymentReceipt, CheckoutError> {
        // 1. Re-check the applied promo as of today
        if let Some(applied) = &selection.applied_promo {
            self.check_promo(selection, applied.code.as_str())?;
        }

        // 2. Price the selection
        let breakdown = self.quote(selection)?;

        // 3. Charge the card
        match self.attempt_payment(input)? {
            PaymentOutcome::Declined(reason) => Err(CheckoutError::Declined(reason)),
            PaymentOutcome::Success => {
                let today = self.today();
                let receipt = PaymentReceipt {
                    id: Uuid::new_v4(),
                    tariff_id: selection.tariff_id.clone(),
                    period_months: selection.period_months,
                    amount: breakdown.total,
                    promo_code: selection.applied_promo.as_ref().map(|p| p.code.clone()),
                    renews_on: renews_on(today, selection.period_months),
                };
                tracing::info!(
                    receipt_id = %receipt.id,
                    tariff = %receipt.tariff_id,
                    amount = %receipt.amount,
                    "Subscription paid"
                );
                Ok(receipt)
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════
    // Helpers
    // ════════════════════════════════════════════════════════════════════════

    fn resolve_tariff(&self, tariff_id: &str) -> Result<&Tariff, CheckoutError> {
        TariffId::try_new(tariff_id)
            .ok()
            .and_then(|id| self.catalog.tariff(&id))
            .ok_or_else(|| CheckoutError::UnknownTariff(tariff_id.trim().to_string()))
    }

    fn tariff_of(&self, selection: &Selection) -> Result<&Tariff, CheckoutError> {
        self.catalog
            .tariff(&selection.tariff_id)
            .ok_or_else(|| CheckoutError::UnknownTariff(selection.tariff_id.to_string()))
    }
}

fn check_period(period_months: u32) -> Result<u32, CheckoutError> {
    if period_months == 0 {
        return Err(CheckoutError::InvalidPeriod(period_months));
    }
    Ok(period_months)
}

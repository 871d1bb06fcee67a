//! Rules about subscription metrics: MRR, ARR and churn.

use rust_decimal::Decimal;

use crate::constants::MONTHS_PER_YEAR;
use crate::snapshot::AssetSnapshot;
use crate::verification::model::{Severity, VerificationConfig, VerificationFlag};
use crate::verification::traits::VerificationRule;

/// Fires when MRR is reported without ARR.
pub struct MrrWithoutArrRule;

impl VerificationRule for MrrWithoutArrRule {
    fn code(&self) -> &'static str {
        "MRR_WITHOUT_ARR"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        _config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        if snapshot.mrr.is_none() || snapshot.arr.is_some() {
            return None;
        }
        Some(self.flag(
            "MRR is reported but ARR is not. ARR will be derived as 12x MRR.".to_string(),
        ))
    }
}

/// Fires when ARR deviates from 12x MRR by more than the tolerance.
pub struct ArrMrrMismatchRule;

impl VerificationRule for ArrMrrMismatchRule {
    fn code(&self) -> &'static str {
        "ARR_MRR_MISMATCH"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        let (mrr, arr) = (snapshot.mrr?, snapshot.arr?);
        if mrr <= Decimal::ZERO {
            return None;
        }

        let expected = mrr.saturating_mul(Decimal::from(MONTHS_PER_YEAR));
        // None when the ratio leaves the Decimal range, which is always a mismatch
        let deviation = arr
            .checked_sub(expected)
            .and_then(|diff| diff.abs().checked_div(expected));
        if deviation.is_some_and(|d| d <= config.arr_mismatch_tolerance) {
            return None;
        }

        let message = match deviation.and_then(|d| d.checked_mul(Decimal::ONE_HUNDRED)) {
            Some(pct) => format!(
                "ARR ({}) differs from 12x MRR ({}) by {}%.",
                arr.normalize(),
                expected.normalize(),
                pct.round_dp(1).normalize()
            ),
            None => format!(
                "ARR ({}) is far out of line with 12x MRR ({}).",
                arr.normalize(),
                expected.normalize()
            ),
        };
        Some(self.flag(message))
    }
}

/// Fires when a subscription-type asset reports neither MRR nor ARR.
pub struct MissingRecurringMetricsRule;

impl VerificationRule for MissingRecurringMetricsRule {
    fn code(&self) -> &'static str {
        "MISSING_RECURRING_METRICS"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        _config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        if !snapshot.asset_type.is_recurring() || snapshot.has_recurring_revenue() {
            return None;
        }
        Some(self.flag(format!(
            "{} listings are usually valued on MRR or ARR, but neither is reported.",
            snapshot.asset_type.label()
        )))
    }
}

/// Fires when churn is above the configured threshold.
pub struct HighChurnRule;

impl VerificationRule for HighChurnRule {
    fn code(&self) -> &'static str {
        "HIGH_CHURN"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        let churn = snapshot.churn_rate?;
        if churn <= config.churn_warning_threshold {
            return None;
        }
        Some(self.flag(format!(
            "Monthly churn of {}% is above the {}% threshold.",
            churn.normalize(),
            config.churn_warning_threshold.normalize()
        )))
    }
}

/// Fires when a subscription-type asset has recurring revenue but no churn rate.
pub struct MissingChurnRule;

impl VerificationRule for MissingChurnRule {
    fn code(&self) -> &'static str {
        "MISSING_CHURN"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        _config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        if !snapshot.asset_type.is_recurring()
            || !snapshot.has_recurring_revenue()
            || snapshot.churn_rate.is_some()
        {
            return None;
        }
        Some(self.flag("Recurring revenue is reported without a churn rate.".to_string()))
    }
}

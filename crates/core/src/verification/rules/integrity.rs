//! Rules about the presence and consistency of the financial figures.

use crate::snapshot::AssetSnapshot;
use crate::verification::model::{Severity, VerificationConfig, VerificationFlag};
use crate::verification::traits::VerificationRule;

/// Fires when any reported amount is negative.
pub struct NegativeFiguresRule;

impl VerificationRule for NegativeFiguresRule {
    fn code(&self) -> &'static str {
        "NEGATIVE_FIGURES"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        _config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        let negative: Vec<&str> = snapshot
            .amounts()
            .into_iter()
            .filter(|(_, value)| value.is_some_and(|v| v.is_sign_negative() && !v.is_zero()))
            .map(|(field, _)| field)
            .collect();

        if negative.is_empty() {
            return None;
        }

        Some(self.flag(format!(
            "Negative values reported for: {}. Figures must be zero or greater.",
            negative.join(", ")
        )))
    }
}

/// Fires when none of revenue, profit, MRR or ARR is reported.
pub struct NoFinancialDataRule;

impl VerificationRule for NoFinancialDataRule {
    fn code(&self) -> &'static str {
        "NO_FINANCIAL_DATA"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        _config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        if snapshot.has_financial_data() {
            return None;
        }
        Some(self.flag(
            "No revenue, profit, MRR or ARR reported. Buyers cannot assess this listing."
                .to_string(),
        ))
    }
}

/// Fires when monthly profit is larger than monthly revenue.
pub struct ProfitExceedsRevenueRule;

impl VerificationRule for ProfitExceedsRevenueRule {
    fn code(&self) -> &'static str {
        "PROFIT_EXCEEDS_REVENUE"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        _config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        let (profit, revenue) = (snapshot.monthly_profit?, snapshot.monthly_revenue?);
        if profit <= revenue {
            return None;
        }
        Some(self.flag(format!(
            "Monthly profit ({}) is higher than monthly revenue ({}).",
            profit.normalize(),
            revenue.normalize()
        )))
    }
}

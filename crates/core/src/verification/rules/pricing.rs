//! Rules about the seller's asking price.

use rust_decimal::Decimal;

use crate::constants::MONTHS_PER_YEAR;
use crate::snapshot::AssetSnapshot;
use crate::verification::model::{Severity, VerificationConfig, VerificationFlag};
use crate::verification::traits::VerificationRule;

/// Fires when the listing has no asking price.
pub struct MissingAskingPriceRule;

impl VerificationRule for MissingAskingPriceRule {
    fn code(&self) -> &'static str {
        "MISSING_ASKING_PRICE"
    }

    fn severity(&self) -> Severity {
        Severity::Critical
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        _config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        if snapshot.asking_price.is_some() {
            return None;
        }
        Some(self.flag("No asking price set for this listing.".to_string()))
    }
}

/// Fires when the asking price exceeds the configured multiple of annual profit.
pub struct AskingPriceAboveMultipleRule;

impl VerificationRule for AskingPriceAboveMultipleRule {
    fn code(&self) -> &'static str {
        "ASKING_PRICE_ABOVE_MULTIPLE"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        let asking_price = snapshot.asking_price?;
        let monthly_profit = snapshot.monthly_profit?;
        if monthly_profit <= Decimal::ZERO {
            return None;
        }

        let annual_profit = monthly_profit.saturating_mul(Decimal::from(MONTHS_PER_YEAR));
        let ceiling = annual_profit.saturating_mul(config.max_profit_multiple);
        if asking_price <= ceiling {
            return None;
        }

        let message = match asking_price.checked_div(annual_profit) {
            Some(implied_multiple) => format!(
                "Asking price is {}x annual profit, above the typical maximum of {}x.",
                implied_multiple.round_dp(1).normalize(),
                config.max_profit_multiple.normalize()
            ),
            None => format!(
                "Asking price is far above the typical maximum of {}x annual profit.",
                config.max_profit_multiple.normalize()
            ),
        };
        Some(self.flag(message))
    }
}

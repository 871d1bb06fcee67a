//! Verification rule implementations.
//!
//! `default_rules` fixes the declaration order, which is also the order of
//! flags sharing a severity in a report.

mod audience;
mod integrity;
mod pricing;
mod recurring;

pub use audience::MissingAudienceDataRule;
pub use integrity::{NegativeFiguresRule, NoFinancialDataRule, ProfitExceedsRevenueRule};
pub use pricing::{AskingPriceAboveMultipleRule, MissingAskingPriceRule};
pub use recurring::{
    ArrMrrMismatchRule, HighChurnRule, MissingChurnRule, MissingRecurringMetricsRule,
    MrrWithoutArrRule,
};

use super::traits::VerificationRule;

/// The standard rule set, in declaration order.
pub fn default_rules() -> Vec<Box<dyn VerificationRule>> {
    vec![
        Box::new(NegativeFiguresRule),
        Box::new(MissingAskingPriceRule),
        Box::new(NoFinancialDataRule),
        Box::new(MrrWithoutArrRule),
        Box::new(ArrMrrMismatchRule),
        Box::new(MissingRecurringMetricsRule),
        Box::new(HighChurnRule),
        Box::new(MissingChurnRule),
        Box::new(ProfitExceedsRevenueRule),
        Box::new(AskingPriceAboveMultipleRule),
        Box::new(MissingAudienceDataRule),
    ]
}

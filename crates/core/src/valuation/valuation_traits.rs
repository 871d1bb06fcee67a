use super::valuation_model::ValuationResult;
use super::valuation_rules::ValuationRules;
use crate::snapshot::AssetSnapshot;

/// Trait for computing listing valuations.
pub trait ValuationServiceTrait: Send + Sync {
    /// Computes the low/high valuation range for a snapshot.
    fn calculate_valuation(&self, snapshot: &AssetSnapshot) -> ValuationResult;

    /// The rule table in use.
    fn rules(&self) -> &ValuationRules;
}

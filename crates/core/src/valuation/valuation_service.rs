use log::info;

use super::valuation_calculator::calculate_valuation_with_rules;
use super::valuation_model::ValuationResult;
use super::valuation_rules::ValuationRules;
use super::valuation_traits::ValuationServiceTrait;
use crate::errors::Result;
use crate::snapshot::AssetSnapshot;

/// Valuation engine over a fixed, validated rule table.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    rules: ValuationRules,
}

impl ValuationEngine {
    /// Creates an engine with the default rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a custom rule table, rejecting invalid tables.
    pub fn with_rules(rules: ValuationRules) -> Result<Self> {
        rules.validate()?;
        info!("Valuation engine configured with custom rule table");
        Ok(Self { rules })
    }

    pub fn calculate(&self, snapshot: &AssetSnapshot) -> ValuationResult {
        calculate_valuation_with_rules(snapshot, &self.rules)
    }
}

impl ValuationServiceTrait for ValuationEngine {
    fn calculate_valuation(&self, snapshot: &AssetSnapshot) -> ValuationResult {
        self.calculate(snapshot)
    }

    fn rules(&self) -> &ValuationRules {
        &self.rules
    }
}

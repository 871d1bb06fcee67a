//! Valuation module - rule table, calculator and engine.

mod valuation_calculator;
mod valuation_model;
mod valuation_rules;
mod valuation_service;
mod valuation_traits;

#[cfg(test)]
mod valuation_calculator_tests;

pub use valuation_calculator::{calculate_valuation, calculate_valuation_with_rules};
pub use valuation_model::{
    BasisMetric, BasisRule, MultipleMode, MultipleRange, MultipleUsed, ValuationBasis,
    ValuationResult,
};
pub use valuation_rules::{rule_id, ValuationRules, DEFAULT_VALUATION_RULES};
pub use valuation_service::ValuationEngine;
pub use valuation_traits::ValuationServiceTrait;

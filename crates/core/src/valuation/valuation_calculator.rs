use log::{debug, warn};
use rust_decimal::Decimal;

use super::valuation_model::{
    BasisMetric, BasisRule, MultipleMode, MultipleUsed, ValuationBasis, ValuationResult,
};
use super::valuation_rules::{rule_id, ValuationRules, DEFAULT_VALUATION_RULES};
use crate::constants::VALUATION_DECIMAL_PRECISION;
use crate::snapshot::AssetSnapshot;

/// Computes a valuation range with the default rule table.
pub fn calculate_valuation(snapshot: &AssetSnapshot) -> ValuationResult {
    calculate_valuation_with_rules(snapshot, &DEFAULT_VALUATION_RULES)
}

/// Computes a valuation range for `snapshot` using `rules`.
///
/// Picks the first rule of the asset type whose metric is present (a
/// reported zero counts as present), annualizes currency metrics where the
/// multiple is annual, and multiplies by the low/high multiples. When no
/// candidate metric is present the zero "insufficient data" range is
/// returned.
///
/// Negative figures are clamped to zero.
pub fn calculate_valuation_with_rules(
    snapshot: &AssetSnapshot,
    rules: &ValuationRules,
) -> ValuationResult {
    let asset_type = snapshot.asset_type;

    let Some((rule, raw_value)) = select_basis(snapshot, rules.rules_for(asset_type)) else {
        debug!(
            "No basis metric available for {} snapshot, returning insufficient data",
            asset_type.as_str()
        );
        return ValuationResult::insufficient_data();
    };

    let value = clamp_non_negative(raw_value, rule.metric);
    let basis_value = basis_value(value, rule);
    let low = apply_multiple(basis_value, rule.multiple.low);
    let high = apply_multiple(basis_value, rule.multiple.high);

    let rule_id = rule_id(asset_type, rule.metric);
    debug!(
        "Valuation rule {} applied to {}: {} - {}",
        rule_id, basis_value, low, high
    );

    ValuationResult {
        low,
        high,
        multiple_used: Some(MultipleUsed {
            rule_id,
            low: rule.multiple.low,
            high: rule.multiple.high,
            mode: rule.multiple.mode,
        }),
        basis: ValuationBasis::from(rule.metric),
        basis_value,
    }
}

/// First rule in precedence order whose metric the snapshot carries.
fn select_basis<'a>(
    snapshot: &AssetSnapshot,
    rules: &'a [BasisRule],
) -> Option<(&'a BasisRule, Decimal)> {
    rules
        .iter()
        .find_map(|rule| rule.metric.value_in(snapshot).map(|value| (rule, value)))
}

fn clamp_non_negative(value: Decimal, metric: BasisMetric) -> Decimal {
    if value.is_sign_negative() && !value.is_zero() {
        warn!(
            "Negative {} ({}) clamped to zero for valuation",
            metric.as_str(),
            value
        );
        Decimal::ZERO
    } else {
        value.abs()
    }
}

/// The figure the multiple applies to: annual amount or raw head count.
fn basis_value(value: Decimal, rule: &BasisRule) -> Decimal {
    match rule.multiple.mode {
        MultipleMode::AnnualMultiple => value.saturating_mul(rule.metric.annualization_factor()),
        MultipleMode::PerUnit => value,
    }
}

fn apply_multiple(basis_value: Decimal, multiple: Decimal) -> Decimal {
    basis_value
        .saturating_mul(multiple)
        .round_dp(VALUATION_DECIMAL_PRECISION)
}

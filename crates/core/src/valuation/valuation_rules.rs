//! Per-asset-type valuation rule table.
//!
//! Each asset type maps to an ordered list of basis rules. The calculator
//! walks the list and applies the first rule whose metric the snapshot
//! carries, so the order here is the basis precedence.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use super::valuation_model::{BasisMetric, BasisRule, MultipleMode, MultipleRange};
use crate::errors::{Error, Result};
use crate::snapshot::AssetType;

/// Default rule table, built once.
pub static DEFAULT_VALUATION_RULES: Lazy<ValuationRules> = Lazy::new(ValuationRules::default);

/// Rule table keyed by asset type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValuationRules {
    rules: BTreeMap<AssetType, Vec<BasisRule>>,
}

impl ValuationRules {
    /// Builds a table from explicit entries. Call `validate` before use.
    pub fn from_entries(entries: impl IntoIterator<Item = (AssetType, Vec<BasisRule>)>) -> Self {
        Self {
            rules: entries.into_iter().collect(),
        }
    }

    /// Parses and validates a JSON table.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let rules: ValuationRules = serde_json::from_str(raw)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reads, parses and validates a JSON table from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    /// Ordered basis rules for an asset type; empty if the type is missing.
    pub fn rules_for(&self, asset_type: AssetType) -> &[BasisRule] {
        self.rules
            .get(&asset_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssetType, &Vec<BasisRule>)> {
        self.rules.iter()
    }

    /// Checks that the table is complete and every range is well formed.
    pub fn validate(&self) -> Result<()> {
        for asset_type in AssetType::ALL {
            let rules = self.rules_for(asset_type);
            if rules.is_empty() {
                return Err(Error::InvalidConfigValue(format!(
                    "No valuation rules for asset type {}",
                    asset_type.as_str()
                )));
            }

            let mut seen = HashSet::new();
            for rule in rules {
                let rule_id = rule_id(asset_type, rule.metric);
                if !seen.insert(rule.metric) {
                    return Err(Error::InvalidConfigValue(format!(
                        "Duplicate metric in rule {}",
                        rule_id
                    )));
                }

                let MultipleRange { low, high, mode } = rule.multiple;
                if low.is_sign_negative() || high.is_sign_negative() {
                    return Err(Error::InvalidConfigValue(format!(
                        "Negative multiple in rule {}",
                        rule_id
                    )));
                }
                if low > high {
                    return Err(Error::InvalidConfigValue(format!(
                        "Low multiple exceeds high multiple in rule {}",
                        rule_id
                    )));
                }

                let expected_mode = if rule.metric.is_audience() {
                    MultipleMode::PerUnit
                } else {
                    MultipleMode::AnnualMultiple
                };
                if mode != expected_mode {
                    return Err(Error::InvalidConfigValue(format!(
                        "Rule {} must use {:?} multiples",
                        rule_id, expected_mode
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for ValuationRules {
    fn default() -> Self {
        use BasisMetric::*;

        fn annual(metric: BasisMetric, low: Decimal, high: Decimal) -> BasisRule {
            BasisRule::new(metric, MultipleRange::annual(low, high))
        }
        fn per_unit(metric: BasisMetric, low: Decimal, high: Decimal) -> BasisRule {
            BasisRule::new(metric, MultipleRange::per_unit(low, high))
        }

        Self::from_entries([
            (
                AssetType::Saas,
                vec![
                    annual(Mrr, dec!(2.5), dec!(4.5)),
                    annual(Arr, dec!(2.5), dec!(4.5)),
                    annual(MonthlyProfit, dec!(3.0), dec!(5.0)),
                    annual(MonthlyRevenue, dec!(2.0), dec!(3.5)),
                ],
            ),
            (
                AssetType::Ecommerce,
                vec![
                    annual(MonthlyProfit, dec!(2.0), dec!(3.5)),
                    annual(MonthlyRevenue, dec!(0.5), dec!(1.0)),
                ],
            ),
            (
                AssetType::ContentSite,
                vec![
                    annual(MonthlyProfit, dec!(2.5), dec!(4.0)),
                    annual(MonthlyRevenue, dec!(2.0), dec!(3.0)),
                    per_unit(MonthlyVisitors, dec!(0.10), dec!(0.30)),
                ],
            ),
            (
                AssetType::Newsletter,
                vec![
                    annual(Mrr, dec!(1.5), dec!(3.0)),
                    annual(MonthlyProfit, dec!(2.0), dec!(4.0)),
                    annual(MonthlyRevenue, dec!(1.5), dec!(3.0)),
                    per_unit(EmailSubscribers, dec!(1.00), dec!(3.00)),
                ],
            ),
            (
                AssetType::MobileApp,
                vec![
                    annual(Mrr, dec!(2.0), dec!(4.0)),
                    annual(Arr, dec!(2.0), dec!(4.0)),
                    annual(MonthlyProfit, dec!(2.5), dec!(4.0)),
                    annual(MonthlyRevenue, dec!(1.5), dec!(3.0)),
                ],
            ),
            (
                AssetType::YoutubeChannel,
                vec![
                    annual(MonthlyProfit, dec!(2.0), dec!(3.5)),
                    annual(MonthlyRevenue, dec!(1.5), dec!(3.0)),
                    per_unit(SocialFollowers, dec!(0.05), dec!(0.25)),
                ],
            ),
            (
                AssetType::SocialMedia,
                vec![
                    annual(MonthlyProfit, dec!(1.5), dec!(3.0)),
                    annual(MonthlyRevenue, dec!(1.0), dec!(2.0)),
                    per_unit(SocialFollowers, dec!(0.01), dec!(0.05)),
                ],
            ),
            (
                AssetType::Community,
                vec![
                    annual(Mrr, dec!(1.5), dec!(3.0)),
                    annual(MonthlyRevenue, dec!(1.0), dec!(2.5)),
                    per_unit(EmailSubscribers, dec!(0.50), dec!(2.00)),
                ],
            ),
            (
                AssetType::Other,
                vec![
                    annual(MonthlyProfit, dec!(2.0), dec!(3.0)),
                    annual(MonthlyRevenue, dec!(0.5), dec!(1.5)),
                ],
            ),
        ])
    }
}

/// Stable identifier of a rule, e.g. "SAAS:MRR".
pub fn rule_id(asset_type: AssetType, metric: BasisMetric) -> String {
    format!("{}:{}", asset_type.as_str(), metric.as_str())
}

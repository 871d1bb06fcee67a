use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;
use crate::snapshot::AssetSnapshot;

/// A snapshot field that can serve as the multiplication base of a valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BasisMetric {
    Mrr,
    Arr,
    MonthlyProfit,
    MonthlyRevenue,
    MonthlyVisitors,
    EmailSubscribers,
    SocialFollowers,
}

impl BasisMetric {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BasisMetric::Mrr => "MRR",
            BasisMetric::Arr => "ARR",
            BasisMetric::MonthlyProfit => "MONTHLY_PROFIT",
            BasisMetric::MonthlyRevenue => "MONTHLY_REVENUE",
            BasisMetric::MonthlyVisitors => "MONTHLY_VISITORS",
            BasisMetric::EmailSubscribers => "EMAIL_SUBSCRIBERS",
            BasisMetric::SocialFollowers => "SOCIAL_FOLLOWERS",
        }
    }

    /// Audience metrics are head counts rather than currency amounts.
    pub const fn is_audience(&self) -> bool {
        matches!(
            self,
            BasisMetric::MonthlyVisitors
                | BasisMetric::EmailSubscribers
                | BasisMetric::SocialFollowers
        )
    }

    /// Factor that turns the raw figure into an annual amount.
    ///
    /// Only meaningful for currency metrics; ARR is already annual.
    pub fn annualization_factor(&self) -> Decimal {
        match self {
            BasisMetric::Mrr | BasisMetric::MonthlyProfit | BasisMetric::MonthlyRevenue => {
                Decimal::from(MONTHS_PER_YEAR)
            }
            _ => Decimal::ONE,
        }
    }

    /// Reads the metric from a snapshot; `None` when the seller left it out.
    pub fn value_in(&self, snapshot: &AssetSnapshot) -> Option<Decimal> {
        match self {
            BasisMetric::Mrr => snapshot.mrr,
            BasisMetric::Arr => snapshot.arr,
            BasisMetric::MonthlyProfit => snapshot.monthly_profit,
            BasisMetric::MonthlyRevenue => snapshot.monthly_revenue,
            BasisMetric::MonthlyVisitors => snapshot.monthly_visitors.map(Decimal::from),
            BasisMetric::EmailSubscribers => snapshot.email_subscribers.map(Decimal::from),
            BasisMetric::SocialFollowers => snapshot.social_followers.map(Decimal::from),
        }
    }
}

impl std::fmt::Display for BasisMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a multiple range is applied to its basis metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MultipleMode {
    /// Multiplier of the annualized amount (e.g. 3x ARR)
    AnnualMultiple,
    /// Flat rate per subscriber, follower or monthly visitor
    PerUnit,
}

/// Low/high multiple pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleRange {
    pub low: Decimal,
    pub high: Decimal,
    pub mode: MultipleMode,
}

impl MultipleRange {
    pub const fn annual(low: Decimal, high: Decimal) -> Self {
        Self {
            low,
            high,
            mode: MultipleMode::AnnualMultiple,
        }
    }

    pub const fn per_unit(low: Decimal, high: Decimal) -> Self {
        Self {
            low,
            high,
            mode: MultipleMode::PerUnit,
        }
    }
}

/// One entry of an asset type's ordered basis list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasisRule {
    pub metric: BasisMetric,
    pub multiple: MultipleRange,
}

impl BasisRule {
    pub const fn new(metric: BasisMetric, multiple: MultipleRange) -> Self {
        Self { metric, multiple }
    }
}

/// Which figure a valuation was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuationBasis {
    Mrr,
    Arr,
    MonthlyProfit,
    MonthlyRevenue,
    MonthlyVisitors,
    EmailSubscribers,
    SocialFollowers,
    /// No candidate metric was present on the snapshot
    InsufficientData,
}

impl From<BasisMetric> for ValuationBasis {
    fn from(metric: BasisMetric) -> Self {
        match metric {
            BasisMetric::Mrr => ValuationBasis::Mrr,
            BasisMetric::Arr => ValuationBasis::Arr,
            BasisMetric::MonthlyProfit => ValuationBasis::MonthlyProfit,
            BasisMetric::MonthlyRevenue => ValuationBasis::MonthlyRevenue,
            BasisMetric::MonthlyVisitors => ValuationBasis::MonthlyVisitors,
            BasisMetric::EmailSubscribers => ValuationBasis::EmailSubscribers,
            BasisMetric::SocialFollowers => ValuationBasis::SocialFollowers,
        }
    }
}

/// The rule that produced a valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleUsed {
    /// "<ASSET_TYPE>:<METRIC>", e.g. "SAAS:MRR"
    pub rule_id: String,
    pub low: Decimal,
    pub high: Decimal,
    pub mode: MultipleMode,
}

/// Low/high valuation range for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub low: Decimal,
    pub high: Decimal,
    pub multiple_used: Option<MultipleUsed>,
    pub basis: ValuationBasis,
    /// Figure the multiple was applied to, after annualization
    pub basis_value: Decimal,
}

impl ValuationResult {
    /// The zero range returned when no basis metric is available.
    pub fn insufficient_data() -> Self {
        Self {
            low: Decimal::ZERO,
            high: Decimal::ZERO,
            multiple_used: None,
            basis: ValuationBasis::InsufficientData,
            basis_value: Decimal::ZERO,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        self.basis == ValuationBasis::InsufficientData
    }
}

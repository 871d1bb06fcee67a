use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::MAX_CHURN_RATE_PCT;
use crate::errors::ValidationError;

/// Category of a listed digital asset.
///
/// Closed set: the valuation rule table carries one entry per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Saas,
    Ecommerce,
    ContentSite, // Blogs, niche sites, affiliate sites
    Newsletter,
    MobileApp,
    YoutubeChannel,
    SocialMedia, // Instagram, TikTok, X accounts
    Community,   // Paid communities, forums, Discord servers
    Other,
}

impl AssetType {
    /// Every asset type, in declaration order.
    pub const ALL: [AssetType; 9] = [
        AssetType::Saas,
        AssetType::Ecommerce,
        AssetType::ContentSite,
        AssetType::Newsletter,
        AssetType::MobileApp,
        AssetType::YoutubeChannel,
        AssetType::SocialMedia,
        AssetType::Community,
        AssetType::Other,
    ];

    /// Returns the wire representation (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetType::Saas => "SAAS",
            AssetType::Ecommerce => "ECOMMERCE",
            AssetType::ContentSite => "CONTENT_SITE",
            AssetType::Newsletter => "NEWSLETTER",
            AssetType::MobileApp => "MOBILE_APP",
            AssetType::YoutubeChannel => "YOUTUBE_CHANNEL",
            AssetType::SocialMedia => "SOCIAL_MEDIA",
            AssetType::Community => "COMMUNITY",
            AssetType::Other => "OTHER",
        }
    }

    /// Returns a human-friendly label.
    pub const fn label(&self) -> &'static str {
        match self {
            AssetType::Saas => "SaaS",
            AssetType::Ecommerce => "E-commerce",
            AssetType::ContentSite => "Content Site",
            AssetType::Newsletter => "Newsletter",
            AssetType::MobileApp => "Mobile App",
            AssetType::YoutubeChannel => "YouTube Channel",
            AssetType::SocialMedia => "Social Media Account",
            AssetType::Community => "Community",
            AssetType::Other => "Other",
        }
    }

    /// Whether buyers expect subscription metrics (MRR/ARR, churn) for this type.
    pub const fn is_recurring(&self) -> bool {
        matches!(
            self,
            AssetType::Saas | AssetType::Newsletter | AssetType::MobileApp | AssetType::Community
        )
    }

    /// Whether the audience size is a meaningful proxy when revenue is missing.
    pub const fn is_audience_based(&self) -> bool {
        matches!(
            self,
            AssetType::ContentSite
                | AssetType::Newsletter
                | AssetType::YoutubeChannel
                | AssetType::SocialMedia
                | AssetType::Community
        )
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AssetType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ValidationError::InvalidInput(format!("Unknown asset type '{}'", s)))
    }
}

/// Normalized financial and audience snapshot of a listed asset.
///
/// `None` means the seller did not provide the figure, which is not the same
/// as a reported zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSnapshot {
    pub asset_type: AssetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_profit: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrr: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arr: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_visitors: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_subscribers: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_followers: Option<u64>,
    /// Monthly customer churn in percent (5 = 5%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub churn_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asking_price: Option<Decimal>,
}

impl AssetSnapshot {
    /// Creates a snapshot with every figure absent.
    pub fn new(asset_type: AssetType) -> Self {
        Self {
            asset_type,
            monthly_revenue: None,
            monthly_profit: None,
            mrr: None,
            arr: None,
            monthly_visitors: None,
            email_subscribers: None,
            social_followers: None,
            churn_rate: None,
            asking_price: None,
        }
    }

    pub fn with_monthly_revenue(mut self, value: Decimal) -> Self {
        self.monthly_revenue = Some(value);
        self
    }

    pub fn with_monthly_profit(mut self, value: Decimal) -> Self {
        self.monthly_profit = Some(value);
        self
    }

    pub fn with_mrr(mut self, value: Decimal) -> Self {
        self.mrr = Some(value);
        self
    }

    pub fn with_arr(mut self, value: Decimal) -> Self {
        self.arr = Some(value);
        self
    }

    pub fn with_monthly_visitors(mut self, value: u64) -> Self {
        self.monthly_visitors = Some(value);
        self
    }

    pub fn with_email_subscribers(mut self, value: u64) -> Self {
        self.email_subscribers = Some(value);
        self
    }

    pub fn with_social_followers(mut self, value: u64) -> Self {
        self.social_followers = Some(value);
        self
    }

    pub fn with_churn_rate(mut self, value: Decimal) -> Self {
        self.churn_rate = Some(value);
        self
    }

    pub fn with_asking_price(mut self, value: Decimal) -> Self {
        self.asking_price = Some(value);
        self
    }

    /// Decimal-valued fields paired with their wire names, in declaration order.
    pub fn amounts(&self) -> [(&'static str, Option<Decimal>); 6] {
        [
            ("monthlyRevenue", self.monthly_revenue),
            ("monthlyProfit", self.monthly_profit),
            ("mrr", self.mrr),
            ("arr", self.arr),
            ("churnRate", self.churn_rate),
            ("askingPrice", self.asking_price),
        ]
    }

    /// True when any of revenue, profit, MRR or ARR is present.
    pub fn has_financial_data(&self) -> bool {
        self.monthly_revenue.is_some()
            || self.monthly_profit.is_some()
            || self.mrr.is_some()
            || self.arr.is_some()
    }

    /// True when MRR or ARR is present.
    pub fn has_recurring_revenue(&self) -> bool {
        self.mrr.is_some() || self.arr.is_some()
    }

    /// True when any audience figure is present.
    pub fn has_audience_data(&self) -> bool {
        self.monthly_visitors.is_some()
            || self.email_subscribers.is_some()
            || self.social_followers.is_some()
    }

    /// Checks the boundary invariants: present amounts are non-negative and
    /// churn is a percentage.
    ///
    /// Returns the first violation in field declaration order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in self.amounts() {
            if value.is_some_and(|v| v.is_sign_negative() && !v.is_zero()) {
                return Err(ValidationError::NegativeValue { field });
            }
        }

        if let Some(churn) = self.churn_rate {
            if churn > Decimal::from(MAX_CHURN_RATE_PCT) {
                return Err(ValidationError::out_of_range(
                    "churnRate",
                    format!("must be at most {}", MAX_CHURN_RATE_PCT),
                ));
            }
        }

        Ok(())
    }
}

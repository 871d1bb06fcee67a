//! Verification domain models.
//!
//! - Severity levels for flags
//! - The flag value emitted by a rule
//! - The aggregated, severity-sorted report
//! - Thresholds used by the rules

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{Error, Result};

// =============================================================================
// Severity
// =============================================================================

/// Severity levels for verification flags.
///
/// Ordered from lowest to highest: Info < Warning < Critical.
/// Reports list flags from highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[derive(Default)]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Returns the string representation of this severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Verification Flag
// =============================================================================

/// A finding emitted by one verification rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationFlag {
    pub severity: Severity,
    /// Stable rule identifier (e.g., "NO_FINANCIAL_DATA")
    pub code: String,
    /// Explanation shown to the seller
    pub message: String,
}

impl VerificationFlag {
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Sorts flags by descending severity, keeping rule order within a severity.
pub fn sort_flags(flags: &mut [VerificationFlag]) {
    // slice::sort_by is stable
    flags.sort_by(|a, b| b.severity.cmp(&a.severity));
}

// =============================================================================
// Verification Report
// =============================================================================

/// Result of running every verification rule against a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    /// Flags, highest severity first
    pub flags: Vec<VerificationFlag>,

    /// The highest severity among the flags, if any fired
    pub highest_severity: Option<Severity>,

    /// Count of flags at each severity level
    pub counts: BTreeMap<Severity, u32>,
}

impl VerificationReport {
    /// Builds a report from flags in rule-declaration order.
    pub fn from_flags(mut flags: Vec<VerificationFlag>) -> Self {
        sort_flags(&mut flags);

        let mut counts: BTreeMap<Severity, u32> = BTreeMap::new();
        for flag in &flags {
            *counts.entry(flag.severity).or_insert(0) += 1;
        }

        Self {
            highest_severity: flags.first().map(|f| f.severity),
            counts,
            flags,
        }
    }

    /// True when no rule fired.
    pub fn is_clean(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns true if any flag has the given code.
    pub fn has_code(&self, code: &str) -> bool {
        self.flags.iter().any(|f| f.code == code)
    }

    /// Returns flags filtered by severity.
    pub fn flags_by_severity(&self, severity: Severity) -> Vec<&VerificationFlag> {
        self.flags
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }

    pub fn into_flags(self) -> Vec<VerificationFlag> {
        self.flags
    }
}

// =============================================================================
// Verification Config
// =============================================================================

/// Thresholds used by the verification rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerificationConfig {
    /// Monthly churn, in percent, above which a Warning fires (default: 10)
    pub churn_warning_threshold: Decimal,

    /// Relative ARR vs 12x MRR deviation tolerated (default: 0.10 = 10%)
    pub arr_mismatch_tolerance: Decimal,

    /// Asking price over annual profit above which a Warning fires (default: 6)
    pub max_profit_multiple: Decimal,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            churn_warning_threshold: dec!(10),
            arr_mismatch_tolerance: dec!(0.10),
            max_profit_multiple: dec!(6),
        }
    }
}

impl VerificationConfig {
    /// Parses and validates a JSON config. Missing keys take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: VerificationConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config from disk.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigIO(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("churnWarningThreshold", self.churn_warning_threshold),
            ("arrMismatchTolerance", self.arr_mismatch_tolerance),
            ("maxProfitMultiple", self.max_profit_multiple),
        ];
        for (name, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must not be negative",
                    name
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Verification engine.
//!
//! Runs every rule against a snapshot, collects the flags that fire and
//! returns them sorted by severity.

use log::debug;
use once_cell::sync::Lazy;

use super::model::{VerificationConfig, VerificationFlag, VerificationReport};
use super::rules::default_rules;
use super::traits::{VerificationRule, VerificationServiceTrait};
use crate::errors::Result;
use crate::snapshot::AssetSnapshot;

static DEFAULT_ENGINE: Lazy<VerificationEngine> = Lazy::new(VerificationEngine::new);

/// Runs the standard rule set with default thresholds.
///
/// Flags come back CRITICAL first, then WARNING, then INFO; flags of equal
/// severity keep the rule declaration order.
pub fn run_verification_checks(snapshot: &AssetSnapshot) -> Vec<VerificationFlag> {
    DEFAULT_ENGINE.run(snapshot).into_flags()
}

/// Engine holding an ordered rule set and its thresholds.
pub struct VerificationEngine {
    config: VerificationConfig,
    rules: Vec<Box<dyn VerificationRule>>,
}

impl VerificationEngine {
    /// Creates an engine with the standard rules and default thresholds.
    pub fn new() -> Self {
        Self {
            config: VerificationConfig::default(),
            rules: default_rules(),
        }
    }

    /// Creates an engine with the standard rules and custom thresholds.
    pub fn with_config(config: VerificationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rules: default_rules(),
        })
    }

    /// Creates an engine with an explicit rule list; list order is declaration order.
    pub fn with_rules(
        config: VerificationConfig,
        rules: Vec<Box<dyn VerificationRule>>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rules })
    }

    /// Evaluates every rule; no rule can suppress another.
    pub fn run(&self, snapshot: &AssetSnapshot) -> VerificationReport {
        let flags: Vec<VerificationFlag> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(snapshot, &self.config))
            .collect();

        debug!(
            "Verification of {} snapshot: {} of {} rules fired",
            snapshot.asset_type.as_str(),
            flags.len(),
            self.rules.len()
        );

        VerificationReport::from_flags(flags)
    }

    /// Codes of the configured rules, in declaration order.
    pub fn rule_codes(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.code()).collect()
    }
}

impl Default for VerificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VerificationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationEngine")
            .field("config", &self.config)
            .field("rules", &self.rule_codes())
            .finish()
    }
}

impl VerificationServiceTrait for VerificationEngine {
    fn run_checks(&self, snapshot: &AssetSnapshot) -> VerificationReport {
        self.run(snapshot)
    }

    fn config(&self) -> &VerificationConfig {
        &self.config
    }
}

//! Verification traits.
//!
//! - `VerificationRule` - one independent predicate over a snapshot
//! - `VerificationServiceTrait` - runs the full rule set

use super::model::{Severity, VerificationConfig, VerificationFlag, VerificationReport};
use crate::snapshot::AssetSnapshot;

/// Trait for implementing a verification rule.
///
/// Rules are pure predicates: they never look at other rules' output and
/// never short-circuit the rule set. A rule either fires once, producing a
/// flag with its own code and severity, or stays silent.
pub trait VerificationRule: Send + Sync {
    /// Stable identifier, used as the flag code.
    fn code(&self) -> &'static str;

    /// Severity of the flag this rule emits.
    fn severity(&self) -> Severity;

    /// Evaluates the rule against a snapshot.
    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        config: &VerificationConfig,
    ) -> Option<VerificationFlag>;

    /// Builds this rule's flag with the given message.
    fn flag(&self, message: String) -> VerificationFlag {
        VerificationFlag::new(self.severity(), self.code(), message)
    }
}

/// Trait for running verification checks.
pub trait VerificationServiceTrait: Send + Sync {
    /// Runs every rule and returns the severity-sorted report.
    fn run_checks(&self, snapshot: &AssetSnapshot) -> VerificationReport;

    /// The thresholds in use.
    fn config(&self) -> &VerificationConfig;
}

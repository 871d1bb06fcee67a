use crate::snapshot::AssetSnapshot;
use crate::verification::model::{Severity, VerificationConfig, VerificationFlag};
use crate::verification::traits::VerificationRule;

/// Fires when an audience-driven asset reports no traffic, subscribers or followers.
pub struct MissingAudienceDataRule;

impl VerificationRule for MissingAudienceDataRule {
    fn code(&self) -> &'static str {
        "MISSING_AUDIENCE_DATA"
    }

    fn severity(&self) -> Severity {
        Severity::Info
    }

    fn evaluate(
        &self,
        snapshot: &AssetSnapshot,
        _config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        if !snapshot.asset_type.is_audience_based() || snapshot.has_audience_data() {
            return None;
        }
        Some(self.flag(format!(
            "No visitor, subscriber or follower counts reported for this {} listing.",
            snapshot.asset_type.label()
        )))
    }
}

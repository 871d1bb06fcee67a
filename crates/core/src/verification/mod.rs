//! Listing verification module.
//!
//! Evaluates an ordered list of independent rules against an asset snapshot
//! and reports the ones that fire as severity-tagged flags.
//!
//! ```text
//! VerificationEngine → [Rule list, declaration order] → VerificationFlag[]
//!        ↓
//! VerificationReport (stable-sorted: CRITICAL, WARNING, INFO)
//! ```
//!
//! - **Models** (`model.rs`) - Severity, VerificationFlag, VerificationReport, VerificationConfig
//! - **Traits** (`traits.rs`) - VerificationRule and VerificationServiceTrait
//! - **Rules** (`rules/`) - Individual rule implementations
//! - **Service** (`service.rs`) - Runs the rules and sorts the flags

pub mod model;
pub mod rules;
pub mod service;
pub mod traits;

#[cfg(test)]
mod tests;

pub use model::{
    sort_flags, Severity, VerificationConfig, VerificationFlag, VerificationReport,
};
pub use rules::default_rules;
pub use service::{run_verification_checks, VerificationEngine};
pub use traits::{VerificationRule, VerificationServiceTrait};

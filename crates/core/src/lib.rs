//! Asset Marketplace Core - listing valuation and verification rules.
//!
//! This crate contains the pricing rules of the marketplace. Both engines are
//! pure functions of an [`AssetSnapshot`]: no I/O, no shared mutable state,
//! safe to call from any number of threads.
//!
//! - [`valuation`] selects a basis metric per asset type and applies a
//!   low/high multiple range.
//! - [`verification`] evaluates an ordered list of independent rules and
//!   reports severity-sorted flags.

pub mod constants;
pub mod errors;
pub mod snapshot;
pub mod valuation;
pub mod verification;

// Re-export the entry points
pub use snapshot::{AssetSnapshot, AssetType};
pub use valuation::{
    calculate_valuation, ValuationBasis, ValuationEngine, ValuationResult, ValuationRules,
    ValuationServiceTrait,
};
pub use verification::{
    run_verification_checks, Severity, VerificationConfig, VerificationEngine, VerificationFlag,
    VerificationReport, VerificationServiceTrait,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;

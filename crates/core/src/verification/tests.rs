//! Engine-level tests for listing verification.

use rust_decimal_macros::dec;

use super::*;
use crate::snapshot::{AssetSnapshot, AssetType};

/// Rule that always fires with a fixed code and severity.
struct AlwaysFires(&'static str, Severity);

impl VerificationRule for AlwaysFires {
    fn code(&self) -> &'static str {
        self.0
    }

    fn severity(&self) -> Severity {
        self.1
    }

    fn evaluate(
        &self,
        _snapshot: &AssetSnapshot,
        _config: &VerificationConfig,
    ) -> Option<VerificationFlag> {
        Some(self.flag(format!("{} fired", self.0)))
    }
}

fn codes(flags: &[VerificationFlag]) -> Vec<&str> {
    flags.iter().map(|f| f.code.as_str()).collect()
}

#[test]
fn test_all_absent_snapshot() {
    let flags = run_verification_checks(&AssetSnapshot::new(AssetType::Saas));

    assert_eq!(
        codes(&flags),
        vec![
            "MISSING_ASKING_PRICE",
            "NO_FINANCIAL_DATA",
            "MISSING_RECURRING_METRICS",
        ]
    );
}

#[test]
fn test_severity_order_across_rules() {
    // INFO declared first, CRITICAL last
    let engine = VerificationEngine::with_rules(
        VerificationConfig::default(),
        vec![
            Box::new(AlwaysFires("INFO_RULE", Severity::Info)),
            Box::new(AlwaysFires("WARNING_RULE", Severity::Warning)),
            Box::new(AlwaysFires("CRITICAL_RULE", Severity::Critical)),
        ],
    )
    .unwrap();

    let report = engine.run(&AssetSnapshot::new(AssetType::Other));
    assert_eq!(
        codes(&report.flags),
        vec!["CRITICAL_RULE", "WARNING_RULE", "INFO_RULE"]
    );
    assert_eq!(report.highest_severity, Some(Severity::Critical));
}

#[test]
fn test_equal_severity_keeps_declaration_order() {
    let engine = VerificationEngine::with_rules(
        VerificationConfig::default(),
        vec![
            Box::new(AlwaysFires("W_SECOND_ALPHA", Severity::Warning)),
            Box::new(AlwaysFires("C_ONLY", Severity::Critical)),
            Box::new(AlwaysFires("W_FIRST_ALPHA", Severity::Warning)),
        ],
    )
    .unwrap();

    let snapshot = AssetSnapshot::new(AssetType::Other);
    for _ in 0..5 {
        let report = engine.run(&snapshot);
        assert_eq!(
            codes(&report.flags),
            vec!["C_ONLY", "W_SECOND_ALPHA", "W_FIRST_ALPHA"]
        );
    }
}

#[test]
fn test_realistic_saas_listing() {
    let snapshot = AssetSnapshot::new(AssetType::Saas)
        .with_mrr(dec!(10000))
        .with_monthly_revenue(dec!(10000))
        .with_monthly_profit(dec!(6000))
        .with_churn_rate(dec!(14))
        .with_asking_price(dec!(400000));

    let report = VerificationEngine::new().run(&snapshot);

    // 400,000 / 72,000 annual profit = 5.6x, under the 6x ceiling
    assert_eq!(codes(&report.flags), vec!["HIGH_CHURN", "MRR_WITHOUT_ARR"]);
    assert_eq!(report.counts.get(&Severity::Warning), Some(&1));
    assert_eq!(report.counts.get(&Severity::Info), Some(&1));
}

#[test]
fn test_one_of_each_severity_from_standard_rules() {
    let snapshot = AssetSnapshot::new(AssetType::Saas)
        .with_mrr(dec!(1000))
        .with_churn_rate(dec!(25));

    let flags = run_verification_checks(&snapshot);
    assert_eq!(
        codes(&flags),
        vec!["MISSING_ASKING_PRICE", "HIGH_CHURN", "MRR_WITHOUT_ARR"]
    );
    assert_eq!(flags[0].severity, Severity::Critical);
    assert_eq!(flags[1].severity, Severity::Warning);
    assert_eq!(flags[2].severity, Severity::Info);
}

#[test]
fn test_negative_input_is_flagged_not_rejected() {
    let snapshot = AssetSnapshot::new(AssetType::Ecommerce)
        .with_monthly_profit(dec!(-100))
        .with_asking_price(dec!(5000));

    let flags = run_verification_checks(&snapshot);
    assert_eq!(flags[0].code, "NEGATIVE_FIGURES");
    assert_eq!(flags[0].severity, Severity::Critical);
}

#[test]
fn test_clean_listing_has_no_flags() {
    let snapshot = AssetSnapshot::new(AssetType::Ecommerce)
        .with_monthly_revenue(dec!(20000))
        .with_monthly_profit(dec!(5000))
        .with_asking_price(dec!(150000));

    let report = VerificationEngine::new().run(&snapshot);
    assert!(report.is_clean());
    assert_eq!(report.highest_severity, None);
}

#[test]
fn test_custom_config_changes_thresholds() {
    let engine = VerificationEngine::with_config(VerificationConfig {
        churn_warning_threshold: dec!(20),
        ..VerificationConfig::default()
    })
    .unwrap();

    let snapshot = AssetSnapshot::new(AssetType::Saas)
        .with_mrr(dec!(1000))
        .with_churn_rate(dec!(15))
        .with_asking_price(dec!(30000));
    assert!(!engine.run(&snapshot).has_code("HIGH_CHURN"));
    assert_eq!(engine.config().churn_warning_threshold, dec!(20));
}

#[test]
fn test_engine_rejects_invalid_config() {
    let result = VerificationEngine::with_config(VerificationConfig {
        arr_mismatch_tolerance: dec!(-0.5),
        ..VerificationConfig::default()
    });
    assert!(result.is_err());
}

#[test]
fn test_engine_debug_lists_rule_codes() {
    let debug = format!("{:?}", VerificationEngine::new());
    assert!(debug.contains("NO_FINANCIAL_DATA"));
}

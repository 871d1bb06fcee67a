//! Tests for the valuation calculator.

#[cfg(test)]
mod tests {
    use crate::snapshot::{AssetSnapshot, AssetType};
    use crate::valuation::{
        calculate_valuation, calculate_valuation_with_rules, BasisMetric, BasisRule,
        MultipleMode, MultipleRange, ValuationBasis, ValuationEngine, ValuationRules,
        ValuationServiceTrait,
    };
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_saas_mrr_is_annualized() {
        let snapshot = AssetSnapshot::new(AssetType::Saas).with_mrr(dec!(10000));
        let result = calculate_valuation(&snapshot);

        // 10,000 MRR -> 120,000 ARR at 2.5x - 4.5x
        assert_eq!(result.basis, ValuationBasis::Mrr);
        assert_eq!(result.basis_value, dec!(120000));
        assert_eq!(result.low, dec!(300000));
        assert_eq!(result.high, dec!(540000));

        let used = result.multiple_used.unwrap();
        assert_eq!(used.rule_id, "SAAS:MRR");
        assert_eq!(used.low, dec!(2.5));
        assert_eq!(used.high, dec!(4.5));
        assert_eq!(used.mode, MultipleMode::AnnualMultiple);
    }

    #[test]
    fn test_saas_arr_is_not_annualized_again() {
        let snapshot = AssetSnapshot::new(AssetType::Saas).with_arr(dec!(120000));
        let result = calculate_valuation(&snapshot);

        assert_eq!(result.basis, ValuationBasis::Arr);
        assert_eq!(result.basis_value, dec!(120000));
        assert_eq!(result.low, dec!(300000));
        assert_eq!(result.high, dec!(540000));
    }

    #[test]
    fn test_newsletter_revenue_example() {
        let snapshot = AssetSnapshot::new(AssetType::Newsletter).with_monthly_revenue(dec!(10000));
        let result = calculate_valuation(&snapshot);

        assert_eq!(result.basis, ValuationBasis::MonthlyRevenue);
        assert_eq!(result.low, dec!(180000));
        assert_eq!(result.high, dec!(360000));
    }

    #[test]
    fn test_missing_all_fields_is_insufficient_data() {
        let result = calculate_valuation(&AssetSnapshot::new(AssetType::Saas));

        assert!(result.is_insufficient());
        assert_eq!(result.basis, ValuationBasis::InsufficientData);
        assert_eq!(result.low, dec!(0));
        assert_eq!(result.high, dec!(0));
        assert!(result.multiple_used.is_none());
    }

    #[test]
    fn test_saas_ignores_audience_only_snapshot() {
        let snapshot = AssetSnapshot::new(AssetType::Saas).with_monthly_visitors(50_000);
        assert!(calculate_valuation(&snapshot).is_insufficient());
    }

    #[test]
    fn test_mrr_takes_precedence_over_profit() {
        let snapshot = AssetSnapshot::new(AssetType::Saas)
            .with_monthly_profit(dec!(50000))
            .with_monthly_revenue(dec!(80000))
            .with_mrr(dec!(1000));
        let result = calculate_valuation(&snapshot);

        assert_eq!(result.basis, ValuationBasis::Mrr);
        assert_eq!(result.low, dec!(30000));
    }

    #[test]
    fn test_profit_takes_precedence_over_revenue() {
        let snapshot = AssetSnapshot::new(AssetType::Ecommerce)
            .with_monthly_revenue(dec!(100000))
            .with_monthly_profit(dec!(10000));
        let result = calculate_valuation(&snapshot);

        // 120,000 annual profit at 2.0x - 3.5x
        assert_eq!(result.basis, ValuationBasis::MonthlyProfit);
        assert_eq!(result.low, dec!(240000));
        assert_eq!(result.high, dec!(420000));
    }

    #[test]
    fn test_reported_zero_is_a_basis() {
        let snapshot = AssetSnapshot::new(AssetType::Saas)
            .with_mrr(dec!(0))
            .with_monthly_profit(dec!(10000));
        let result = calculate_valuation(&snapshot);

        assert_eq!(result.basis, ValuationBasis::Mrr);
        assert_eq!(result.low, dec!(0));
        assert_eq!(result.high, dec!(0));
        assert!(!result.is_insufficient());
    }

    #[test]
    fn test_audience_proxy_uses_per_unit_rate() {
        let snapshot = AssetSnapshot::new(AssetType::Newsletter).with_email_subscribers(20_000);
        let result = calculate_valuation(&snapshot);

        assert_eq!(result.basis, ValuationBasis::EmailSubscribers);
        assert_eq!(result.basis_value, dec!(20000));
        assert_eq!(result.low, dec!(20000));
        assert_eq!(result.high, dec!(60000));
        assert_eq!(result.multiple_used.unwrap().mode, MultipleMode::PerUnit);
    }

    #[test]
    fn test_content_site_visitors_fallback() {
        let snapshot = AssetSnapshot::new(AssetType::ContentSite).with_monthly_visitors(100_000);
        let result = calculate_valuation(&snapshot);

        assert_eq!(result.basis, ValuationBasis::MonthlyVisitors);
        assert_eq!(result.low, dec!(10000));
        assert_eq!(result.high, dec!(30000));
    }

    #[test]
    fn test_bounds_are_rounded_to_cents() {
        let snapshot = AssetSnapshot::new(AssetType::SocialMedia).with_social_followers(333);
        let result = calculate_valuation(&snapshot);

        // 333 * 0.01 = 3.33, 333 * 0.05 = 16.65
        assert_eq!(result.low, dec!(3.33));
        assert_eq!(result.high, dec!(16.65));
    }

    #[test]
    fn test_negative_input_is_clamped() {
        let snapshot = AssetSnapshot::new(AssetType::Ecommerce).with_monthly_profit(dec!(-500));
        let result = calculate_valuation(&snapshot);

        assert_eq!(result.basis, ValuationBasis::MonthlyProfit);
        assert_eq!(result.basis_value, dec!(0));
        assert_eq!(result.low, dec!(0));
        assert_eq!(result.high, dec!(0));
    }

    #[test]
    fn test_custom_rules_are_honoured() {
        let mut entries: Vec<_> = ValuationRules::default()
            .iter()
            .map(|(t, r)| (*t, r.clone()))
            .collect();
        for (asset_type, rules) in entries.iter_mut() {
            if *asset_type == AssetType::Other {
                *rules = vec![BasisRule::new(
                    BasisMetric::MonthlyRevenue,
                    MultipleRange::annual(dec!(1), dec!(1)),
                )];
            }
        }
        let rules = ValuationRules::from_entries(entries);
        let engine = ValuationEngine::with_rules(rules.clone()).unwrap();

        let snapshot = AssetSnapshot::new(AssetType::Other)
            .with_monthly_profit(dec!(999))
            .with_monthly_revenue(dec!(1000));
        let result = engine.calculate_valuation(&snapshot);

        assert_eq!(result.basis, ValuationBasis::MonthlyRevenue);
        assert_eq!(result.low, dec!(12000));
        assert_eq!(result.high, dec!(12000));
        assert_eq!(result, calculate_valuation_with_rules(&snapshot, &rules));
    }

    #[test]
    fn test_engine_rejects_invalid_rules() {
        let rules = ValuationRules::from_entries([(
            AssetType::Saas,
            vec![BasisRule::new(
                BasisMetric::Mrr,
                MultipleRange::annual(dec!(2), dec!(3)),
            )],
        )]);
        assert!(ValuationEngine::with_rules(rules).is_err());
    }

    #[test]
    fn test_result_json_shape() {
        let snapshot = AssetSnapshot::new(AssetType::Saas).with_mrr(dec!(1000));
        let value = serde_json::to_value(calculate_valuation(&snapshot)).unwrap();

        assert_eq!(value["basis"], json!("MRR"));
        assert_eq!(value["low"], json!(30000.0));
        assert_eq!(value["high"], json!(54000.0));
        assert_eq!(value["basisValue"], json!(12000.0));
        assert_eq!(value["multipleUsed"]["ruleId"], json!("SAAS:MRR"));
        assert_eq!(value["multipleUsed"]["mode"], json!("ANNUAL_MULTIPLE"));
    }

    #[test]
    fn test_insufficient_json_shape() {
        let value =
            serde_json::to_value(calculate_valuation(&AssetSnapshot::new(AssetType::Other)))
                .unwrap();
        assert_eq!(value["basis"], json!("INSUFFICIENT_DATA"));
        assert_eq!(value["multipleUsed"], json!(null));
        assert_eq!(value["low"], json!(0.0));
    }
}

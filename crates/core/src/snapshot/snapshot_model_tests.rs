//! Tests for snapshot domain models.

#[cfg(test)]
mod tests {
    use crate::errors::ValidationError;
    use crate::snapshot::{AssetSnapshot, AssetType};
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_asset_type_serialization_all_variants() {
        for asset_type in AssetType::ALL {
            let json = serde_json::to_string(&asset_type).unwrap();
            assert_eq!(json, format!("\"{}\"", asset_type.as_str()));
        }
        assert_eq!(
            serde_json::to_string(&AssetType::YoutubeChannel).unwrap(),
            "\"YOUTUBE_CHANNEL\""
        );
    }

    #[test]
    fn test_asset_type_from_str() {
        assert_eq!("SAAS".parse::<AssetType>().unwrap(), AssetType::Saas);
        assert_eq!("content-site".parse::<AssetType>().unwrap(), AssetType::ContentSite);
        assert_eq!("Mobile App".parse::<AssetType>().unwrap(), AssetType::MobileApp);
        assert!(matches!(
            "crypto".parse::<AssetType>(),
            Err(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_asset_type_groupings() {
        assert!(AssetType::Saas.is_recurring());
        assert!(!AssetType::Saas.is_audience_based());
        assert!(AssetType::Newsletter.is_recurring());
        assert!(AssetType::Newsletter.is_audience_based());
        assert!(!AssetType::Ecommerce.is_recurring());
        assert!(!AssetType::Other.is_audience_based());
    }

    #[test]
    fn test_snapshot_deserializes_flat_camel_case() {
        let snapshot: AssetSnapshot = serde_json::from_value(json!({
            "assetType": "NEWSLETTER",
            "monthlyRevenue": 10000,
            "emailSubscribers": 25000,
            "churnRate": 3.5,
            "mrr": null
        }))
        .unwrap();

        assert_eq!(snapshot.asset_type, AssetType::Newsletter);
        assert_eq!(snapshot.monthly_revenue, Some(dec!(10000)));
        assert_eq!(snapshot.email_subscribers, Some(25000));
        assert_eq!(snapshot.churn_rate, Some(dec!(3.5)));
        assert_eq!(snapshot.mrr, None);
        assert_eq!(snapshot.arr, None);
    }

    #[test]
    fn test_absent_and_zero_are_distinct() {
        let absent = AssetSnapshot::new(AssetType::Saas);
        let zero = AssetSnapshot::new(AssetType::Saas).with_mrr(dec!(0));

        assert!(!absent.has_financial_data());
        assert!(zero.has_financial_data());
        assert!(zero.has_recurring_revenue());
        assert_ne!(absent, zero);
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let snapshot = AssetSnapshot::new(AssetType::Saas).with_mrr(dec!(500));
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value, json!({ "assetType": "SAAS", "mrr": 500.0 }));
    }

    #[test]
    fn test_validate_accepts_clean_snapshot() {
        let snapshot = AssetSnapshot::new(AssetType::Saas)
            .with_mrr(dec!(1000))
            .with_churn_rate(dec!(4))
            .with_asking_price(dec!(50000));
        assert_eq!(snapshot.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_first_negative_field() {
        let snapshot = AssetSnapshot::new(AssetType::Ecommerce)
            .with_monthly_profit(dec!(-5))
            .with_asking_price(dec!(-10));
        assert_eq!(
            snapshot.validate(),
            Err(ValidationError::NegativeValue {
                field: "monthlyProfit"
            })
        );
    }

    #[test]
    fn test_validate_rejects_churn_above_hundred() {
        let snapshot = AssetSnapshot::new(AssetType::Saas).with_churn_rate(dec!(120));
        assert!(matches!(
            snapshot.validate(),
            Err(ValidationError::OutOfRange {
                field: "churnRate",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_allows_negative_zero() {
        let snapshot = AssetSnapshot::new(AssetType::Saas).with_mrr(-dec!(0));
        assert_eq!(snapshot.validate(), Ok(()));
    }
}

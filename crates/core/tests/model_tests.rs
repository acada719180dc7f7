// ═══════════════════════════════════════════════════════════════════
// Model Tests — TransactionRecord, BalanceSnapshot, UserDocument,
// Holding serialization and merge behavior
// ═══════════════════════════════════════════════════════════════════

use chrono::Utc;
use rust_decimal_macros::dec;
use serde_json::{json, Map};

use portfolio_tracker_core::models::balance::{
    BalanceSnapshot, RecalcReport, LAST_UPDATED_FIELD, TOTAL_BALANCE_FIELD,
};
use portfolio_tracker_core::{Holding, TransactionRecord, UserDocument};

// ── TransactionRecord ───────────────────────────────────────────────

mod transaction_record {
    use super::*;

    #[test]
    fn uppercases_symbol() {
        let record = TransactionRecord::new("aapl", dec!(2));
        assert_eq!(record.symbol, "AAPL");
    }

    #[test]
    fn ids_are_unique() {
        let a = TransactionRecord::new("AAPL", dec!(1));
        let b = TransactionRecord::new("AAPL", dec!(1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serde_round_trip_keeps_exact_quantity() {
        let record = TransactionRecord::new("TSLA", dec!(-0.375));
        let text = serde_json::to_string(&record).unwrap();
        let back: TransactionRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.quantity, dec!(-0.375));
    }
}

// ── BalanceSnapshot / RecalcReport ──────────────────────────────────

mod balance_snapshot {
    use super::*;

    #[test]
    fn merge_fields_touch_exactly_two_fields() {
        let snapshot = BalanceSnapshot::new(dec!(207.57), Utc::now());
        let fields = snapshot.merge_fields();

        assert_eq!(fields.len(), 2);
        assert!(fields.contains_key(TOTAL_BALANCE_FIELD));
        assert!(fields.contains_key(LAST_UPDATED_FIELD));
        assert_eq!(fields[TOTAL_BALANCE_FIELD], json!("207.57"));
    }

    #[test]
    fn report_is_fully_priced_without_skips() {
        let snapshot = BalanceSnapshot::new(dec!(0), Utc::now());
        let report = RecalcReport {
            snapshot: snapshot.clone(),
            skipped_symbols: vec![],
        };
        assert!(report.fully_priced());

        let degraded = RecalcReport {
            snapshot,
            skipped_symbols: vec!["UNLISTED".into()],
        };
        assert!(!degraded.fully_priced());
    }
}

// ── UserDocument ────────────────────────────────────────────────────

mod user_document {
    use super::*;

    #[test]
    fn unknown_fields_are_preserved() {
        let doc: UserDocument = serde_json::from_value(json!({
            "displayName": "Alice",
            "favoriteColor": "green",
            "totalBalance": "10",
        }))
        .unwrap();

        assert_eq!(doc.display_name.as_deref(), Some("Alice"));
        assert_eq!(doc.total_balance, Some(dec!(10)));
        assert_eq!(doc.extra["favoriteColor"], json!("green"));
    }

    #[test]
    fn absent_fields_are_not_serialized_as_null() {
        let doc = UserDocument {
            display_name: Some("Alice".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&doc).unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("displayName"));
        assert!(!obj.contains_key("email"));
        assert!(!obj.contains_key("totalBalance"));
    }

    #[test]
    fn merge_overwrites_named_fields_only() {
        let doc: UserDocument = serde_json::from_value(json!({
            "displayName": "Alice",
            "favoriteColor": "green",
            "totalBalance": "10",
        }))
        .unwrap();

        let mut fields = Map::new();
        fields.insert("totalBalance".into(), json!("50"));
        fields.insert("lastUpdated".into(), json!("2026-08-08T12:00:00Z"));
        let merged = doc.merged_with(&fields).unwrap();

        assert_eq!(merged.total_balance, Some(dec!(50)));
        assert!(merged.last_updated.is_some());
        assert_eq!(merged.display_name.as_deref(), Some("Alice"));
        assert_eq!(merged.extra["favoriteColor"], json!("green"));
    }

    #[test]
    fn merge_on_default_document_populates_it() {
        let mut fields = Map::new();
        fields.insert("displayName".into(), json!("Bob"));
        let merged = UserDocument::default().merged_with(&fields).unwrap();
        assert_eq!(merged.display_name.as_deref(), Some("Bob"));
    }
}

// ── Holding ─────────────────────────────────────────────────────────

mod holding {
    use super::*;

    #[test]
    fn unpriced_holding_omits_value_fields() {
        let holding = Holding {
            symbol: "AAPL".into(),
            quantity: dec!(3),
            price: None,
            market_value: None,
        };
        let value = serde_json::to_value(&holding).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj["symbol"], json!("AAPL"));
        assert!(!obj.contains_key("price"));
        assert!(!obj.contains_key("marketValue"));
    }

    #[test]
    fn priced_holding_serializes_camel_case() {
        let holding = Holding {
            symbol: "AAPL".into(),
            quantity: dec!(2),
            price: Some(dec!(190.10)),
            market_value: Some(dec!(380.20)),
        };
        let value = serde_json::to_value(&holding).unwrap();
        assert_eq!(value["marketValue"], json!("380.20"));
    }
}

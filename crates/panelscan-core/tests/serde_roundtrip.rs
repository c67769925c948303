//! Serde serialization/deserialization tests.
//!
//! Records are handed to presentation layers as JSON, so the field names
//! are part of the contract.

#![cfg(feature = "serde")]

use panelscan_core::*;

/// Helper: serialize to JSON string, deserialize back, assert equality.
fn roundtrip<T>(value: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let json = serde_json::to_string(value).expect("serialize failed");
    let restored: T = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(*value, restored, "round-trip mismatch for JSON: {json}");
}

#[test]
fn test_serde_inspection_result_field_names() {
    let result = InspectionResult::new("RBC", "493L", "10^4/uL");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"item": "RBC", "value": "493L", "unit": "10^4/uL"})
    );
    roundtrip(&result);
}

#[test]
fn test_serde_word() {
    roundtrip(&Word::new("g/dL", BBox::new(0.62, 0.31, 0.05, 0.02)));
}

#[test]
fn test_serde_row() {
    let row = Row {
        words: vec![
            Word::new("HGB", BBox::new(0.1, 0.3, 0.05, 0.02)),
            Word::new("11.4L", BBox::new(0.4, 0.3, 0.06, 0.02)),
        ],
        top: 0.3,
    };
    roundtrip(&row);
}

#[test]
fn test_serde_warning() {
    let warning = AnalysisWarning::with_code(WarningCode::ShortRow, "row has 1 word(s)")
        .at_row(8)
        .with_element("TP7.4");
    roundtrip(&warning);

    let json = serde_json::to_value(&WarningCode::DocumentRejected).unwrap();
    assert_eq!(json, serde_json::json!({"type": "DocumentRejected"}));
}

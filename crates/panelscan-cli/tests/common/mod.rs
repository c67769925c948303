//! Helpers for building OCR responses in tests.

#![allow(dead_code)]

use std::io::Write;

/// A word as (text, left, top).
pub type WordSpec<'a> = (&'a str, f64, f64);

/// Build a `DetectDocumentText` response containing the given words.
pub fn ocr_json(words: &[WordSpec<'_>]) -> String {
    let mut blocks = vec![serde_json::json!({
        "BlockType": "PAGE",
        "Id": "page-1",
        "Geometry": {"BoundingBox": {"Width": 1.0, "Height": 1.0, "Left": 0.0, "Top": 0.0}},
    })];
    for (i, (text, left, top)) in words.iter().enumerate() {
        blocks.push(serde_json::json!({
            "BlockType": "WORD",
            "Id": format!("w{i}"),
            "Text": text,
            "Confidence": 98.0,
            "Geometry": {
                "BoundingBox": {"Width": 0.05, "Height": 0.02, "Left": left, "Top": top},
            },
        }));
    }
    serde_json::json!({ "Blocks": blocks }).to_string()
}

/// Words of a row laid out left to right at the given top.
pub fn row<'a>(texts: &[&'a str], top: f64) -> Vec<WordSpec<'a>> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| (*t, 0.1 + 0.2 * i as f64, top))
        .collect()
}

/// The two-row panel used across CLI tests.
pub fn two_row_panel() -> String {
    let mut words = row(&["WBC", "74", "10", "2/ul"], 0.10);
    words.extend(row(&["RBC", "493L", "10", "4/ul"], 0.20));
    ocr_json(&words)
}

/// Write JSON to a temporary file and return it.
pub fn write_temp_json(json: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    f.write_all(json.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

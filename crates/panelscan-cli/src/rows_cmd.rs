use std::path::Path;

use panelscan::{Row, SegmentOptions, segment_rows};

use crate::cli::TextFormat;
use crate::shared::{open_document, print_json};

pub fn run(file: &Path, format: &TextFormat, row_gap: f64) -> Result<(), i32> {
    let doc = open_document(file)?;
    let words = doc.words();
    for warning in &words.warnings {
        eprintln!("Warning: {warning}");
    }

    let opts = SegmentOptions {
        row_gap,
        ..SegmentOptions::default()
    };
    let rows: Vec<Row> = segment_rows(&words.value, &opts).collect();

    match format {
        TextFormat::Text => {
            println!("row\ttop\tcount\twords");
            for (i, row) in rows.iter().enumerate() {
                println!(
                    "{}\t{:.4}\t{}\t{}",
                    i,
                    row.top,
                    row.len(),
                    row.texts().join(" ")
                );
            }
            Ok(())
        }
        TextFormat::Json => {
            let json: Vec<serde_json::Value> = rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let bbox = row.bbox().map(|b| {
                        serde_json::json!({
                            "left": b.left,
                            "top": b.top,
                            "width": b.width,
                            "height": b.height,
                        })
                    });
                    serde_json::json!({
                        "row": i,
                        "top": row.top,
                        "bbox": bbox,
                        "words": row.texts(),
                    })
                })
                .collect();
            print_json(&serde_json::Value::Array(json))
        }
    }
}

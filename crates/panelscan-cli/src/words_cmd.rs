use std::path::Path;

use panelscan::Word;

use crate::cli::OutputFormat;
use crate::shared::{csv_escape, open_document, print_json};

pub fn run(file: &Path, format: &OutputFormat) -> Result<(), i32> {
    let doc = open_document(file)?;
    let words = doc.words();
    for warning in &words.warnings {
        eprintln!("Warning: {warning}");
    }

    match format {
        OutputFormat::Text => write_text(&words.value),
        OutputFormat::Json => write_json(&words.value),
        OutputFormat::Csv => write_csv(&words.value),
    }
}

fn write_text(words: &[Word]) -> Result<(), i32> {
    println!("text\tleft\ttop\twidth\theight");
    for w in words {
        println!(
            "{}\t{:.4}\t{:.4}\t{:.4}\t{:.4}",
            w.text, w.bbox.left, w.bbox.top, w.bbox.width, w.bbox.height
        );
    }
    Ok(())
}

fn write_json(words: &[Word]) -> Result<(), i32> {
    let json = serde_json::to_value(words).map_err(|e| {
        eprintln!("Error: failed to serialize output: {e}");
        1
    })?;
    print_json(&json)
}

fn write_csv(words: &[Word]) -> Result<(), i32> {
    println!("text,left,top,width,height");
    for w in words {
        println!(
            "{},{:.4},{:.4},{:.4},{:.4}",
            csv_escape(&w.text),
            w.bbox.left,
            w.bbox.top,
            w.bbox.width,
            w.bbox.height
        );
    }
    Ok(())
}

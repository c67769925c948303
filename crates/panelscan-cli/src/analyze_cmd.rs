use std::path::{Path, PathBuf};

use panelscan::{AnalyzeOptions, Analyzer, InspectionKind, InspectionResult, TextractFile};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::shared::{ProgressReporter, csv_escape, print_json};

/// Records recovered from one input file.
struct FileReport<'a> {
    file: &'a Path,
    results: Vec<InspectionResult>,
}

pub fn run(
    files: &[PathBuf],
    kind: InspectionKind,
    format: &OutputFormat,
    options: AnalyzeOptions,
    plausible_only: bool,
) -> Result<(), i32> {
    for file in files {
        if !file.exists() {
            eprintln!("Error: file not found: {}", file.display());
            return Err(1);
        }
    }

    let analyzer = Analyzer::new(kind).with_options(options);
    let sources: Vec<TextractFile> = files.iter().map(TextractFile::new).collect();
    let progress = ProgressReporter::new(files.len());
    debug!(kind = %analyzer.kind(), files = files.len(), "analyzing");

    let mut reports = Vec::with_capacity(sources.len());
    let analyses = sources.iter().zip(analyzer.analyze_each(&sources));
    for (i, (source, analysis)) in analyses.enumerate() {
        let file = source.path();
        let analysis = analysis.map_err(|e| {
            eprintln!("Error: {}: {e}", file.display());
            1
        })?;
        progress.report(i + 1);

        for warning in &analysis.warnings {
            debug!(file = %file.display(), %warning, "analysis warning");
        }
        let mut results = analysis.value;
        debug!(
            file = %file.display(),
            records = results.len(),
            warnings = analysis.warnings.len(),
            "file analyzed"
        );
        if results.is_empty() {
            eprintln!("{}: could not analyze this report", file.display());
        }
        if plausible_only {
            results.retain(InspectionResult::has_plausible_item);
        }
        reports.push(FileReport { file, results });
    }
    progress.finish();

    match format {
        OutputFormat::Text => write_text(&reports),
        OutputFormat::Json => write_json(&reports),
        OutputFormat::Csv => write_csv(&reports),
    }
}

fn write_text(reports: &[FileReport<'_>]) -> Result<(), i32> {
    println!("file\titem\tvalue\tunit");
    for report in reports {
        for r in &report.results {
            println!(
                "{}\t{}\t{}\t{}",
                report.file.display(),
                r.item,
                r.value,
                r.unit
            );
        }
    }
    Ok(())
}

fn write_json(reports: &[FileReport<'_>]) -> Result<(), i32> {
    let mut all_results = Vec::new();
    for report in reports {
        for r in &report.results {
            all_results.push(serde_json::json!({
                "file": report.file.display().to_string(),
                "item": r.item,
                "value": r.value,
                "unit": r.unit,
            }));
        }
    }
    print_json(&serde_json::Value::Array(all_results))
}

fn write_csv(reports: &[FileReport<'_>]) -> Result<(), i32> {
    println!("file,item,value,unit");
    for report in reports {
        let file = csv_escape(&report.file.display().to_string());
        for r in &report.results {
            println!(
                "{},{},{},{}",
                file,
                csv_escape(&r.item),
                csv_escape(&r.value),
                csv_escape(&r.unit)
            );
        }
    }
    Ok(())
}

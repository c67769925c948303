use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use panelscan::InspectionKind;

/// Read blood-test results out of OCR responses of scanned reports.
#[derive(Debug, Parser)]
#[command(name = "panelscan", about, version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract item/value/unit records from OCR responses
    Analyze {
        /// OCR response files (DetectDocumentText JSON)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Inspection kind of the reports
        #[arg(long, default_value = "blood")]
        kind: InspectionKind,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Vertical gap (page fraction) that starts a new row (default: 0.08)
        #[arg(long, default_value_t = panelscan::panelscan_core::ROW_GAP)]
        row_gap: f64,

        /// Reject a single-row page whose unit is longer than this (default: 10)
        #[arg(long, default_value_t = panelscan::panelscan_core::MAX_SOLE_UNIT_LEN)]
        max_sole_unit_len: usize,

        /// Drop words whose box is narrower and shorter than this page fraction
        #[arg(long)]
        noise_extent: Option<f64>,

        /// Only print records whose item looks like a test name
        #[arg(long)]
        plausible_only: bool,
    },

    /// Show how words are grouped into rows
    Rows {
        /// OCR response file (DetectDocumentText JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = TextFormat::Text)]
        format: TextFormat,

        /// Vertical gap (page fraction) that starts a new row (default: 0.08)
        #[arg(long, default_value_t = panelscan::panelscan_core::ROW_GAP)]
        row_gap: f64,
    },

    /// List recognized words with bounding boxes
    Words {
        /// OCR response file (DetectDocumentText JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for subcommands that support text and JSON only.
#[derive(Debug, Clone, ValueEnum)]
pub enum TextFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
}

/// Output format for tabular subcommands.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (tab-separated)
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

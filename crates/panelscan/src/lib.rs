//! panelscan: Read blood-test results out of OCR'd report images.
//!
//! This is the public API facade crate for panelscan. It re-exports the
//! types of panelscan-core and adds the pieces that touch the outside world:
//! decoding OCR responses and feeding them to the analysis.
//!
//! # Architecture
//!
//! - **panelscan-core**: Row segmentation and classification, no I/O
//! - **panelscan** (this crate): OCR response decoding, word sources, [`Analyzer`]
//! - **panelscan-cli**: The `panelscan` command-line tool

mod analyzer;
mod error;
mod source;
mod textract;

pub use analyzer::{Analyzer, InspectionKind};
pub use error::{Result, ScanError};
pub use source::{TextractFile, WordSource};
pub use textract::{Block, BlockType, BoundingBox, Geometry, TextractDocument};

pub use panelscan_core;
pub use panelscan_core::{
    AnalysisResult, AnalysisWarning, AnalyzeOptions, BBox, InspectionResult, Row,
    SegmentOptions, WarningCode, Word, analyze_words, classify_row, segment_rows,
};

//! panelscan-core: Row reconstruction for OCR'd lab reports.
//!
//! This crate turns the flat, reading-order word list an OCR engine returns
//! for a scanned blood-panel report into `(item, value, unit)` records. The
//! only layout signal used is each word's bounding box:
//!
//! - [`segment_rows`] groups words into rows by vertical gap.
//! - [`classify_row`] splits a row into item, value and unit, cleaning up
//!   common OCR confusions in the unit.
//! - [`analyze_words`] runs both and rejects pages that did not segment.
//!
//! It performs no I/O; decoding OCR responses lives in the `panelscan` crate.

pub mod analysis;
pub mod classify;
pub mod error;
pub mod geometry;
pub mod segment;
pub mod words;

pub use analysis::{AnalyzeOptions, MAX_SOLE_UNIT_LEN, analyze_words, is_unparseable};
pub use classify::{
    InspectionResult, UNIT_10E2_PER_UL, UNIT_10E4_PER_UL, classify_row, classify_texts,
    normalize_unit, normalize_value,
};
pub use error::{AnalysisResult, AnalysisWarning, WarningCode};
pub use geometry::BBox;
pub use segment::{COMPARISON_GLYPHS, ROW_GAP, Row, RowSegmenter, SegmentOptions, segment_rows};
pub use words::Word;

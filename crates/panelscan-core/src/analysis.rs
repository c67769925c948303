use std::borrow::Cow;

use tracing::{debug, warn};

use crate::classify::{InspectionResult, classify_row};
use crate::error::{AnalysisResult, AnalysisWarning, WarningCode};
use crate::segment::{SegmentOptions, segment_rows};
use crate::words::Word;

/// Longest unit a document with a single detected row may carry before the
/// row is taken to be a whole page collapsed into one line.
pub const MAX_SOLE_UNIT_LEN: usize = 10;

/// Options for analyzing one OCR'd report page.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Row segmentation settings.
    pub segment: SegmentOptions,
    /// Unit length (in characters) above which a single-row result is
    /// rejected (default: 10).
    pub max_sole_unit_len: usize,
    /// If set, words whose box is both narrower and shorter than this page
    /// fraction are dropped before segmentation. Off by default.
    pub noise_extent: Option<f64>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            segment: SegmentOptions::default(),
            max_sole_unit_len: MAX_SOLE_UNIT_LEN,
            noise_extent: None,
        }
    }
}

/// Whether a classified document should be treated as unparseable.
///
/// True when nothing was recovered, or when exactly one record was recovered
/// and its unit is longer than `max_sole_unit_len` characters: a page that
/// failed to split into rows comes back as one garbled record.
pub fn is_unparseable(results: &[InspectionResult], max_sole_unit_len: usize) -> bool {
    rejection_reason(results, max_sole_unit_len).is_some()
}

fn rejection_reason(results: &[InspectionResult], max_sole_unit_len: usize) -> Option<String> {
    match results {
        [] => Some("no rows with a value were detected".to_string()),
        [only] => {
            let unit_len = only.unit.chars().count();
            (unit_len > max_sole_unit_len).then(|| {
                format!("single row with {unit_len}-character unit, page was not split into rows")
            })
        }
        _ => None,
    }
}

/// Turn the OCR words of one report page into inspection records.
///
/// Rows come out in page order, one record per row with at least two
/// words. Rows with fewer words are skipped and reported as
/// [`WarningCode::ShortRow`]. If the document looks unparseable (see
/// [`is_unparseable`]) the value is empty and a
/// [`WarningCode::DocumentRejected`] warning explains why.
pub fn analyze_words(
    words: &[Word],
    options: &AnalyzeOptions,
) -> AnalysisResult<Vec<InspectionResult>> {
    let mut warnings = Vec::new();

    let words: Cow<'_, [Word]> = match options.noise_extent {
        Some(extent) => Cow::Owned(drop_noise_words(words, extent, &mut warnings)),
        None => Cow::Borrowed(words),
    };

    let mut results = Vec::new();
    for (index, row) in segment_rows(words.iter(), &options.segment).enumerate() {
        match classify_row(&row) {
            Some(result) => {
                debug!(
                    row = index,
                    item = %result.item,
                    value = %result.value,
                    unit = %result.unit,
                    "row classified"
                );
                results.push(result);
            }
            None => {
                let texts = row.texts().join(" ");
                warn!(row = index, words = %texts, "row has fewer than two words, skipping");
                warnings.push(
                    AnalysisWarning::with_code(
                        WarningCode::ShortRow,
                        format!("row has {} word(s), expected at least 2", row.len()),
                    )
                    .at_row(index)
                    .with_element(texts),
                );
            }
        }
    }

    if let Some(reason) = rejection_reason(&results, options.max_sole_unit_len) {
        warn!(%reason, "document rejected");
        warnings.push(AnalysisWarning::with_code(
            WarningCode::DocumentRejected,
            reason,
        ));
        return AnalysisResult::with_warnings(Vec::new(), warnings);
    }

    AnalysisResult::with_warnings(results, warnings)
}

fn drop_noise_words(
    words: &[Word],
    extent: f64,
    warnings: &mut Vec<AnalysisWarning>,
) -> Vec<Word> {
    let mut kept = Vec::with_capacity(words.len());
    for word in words {
        if word.bbox.is_smaller_than(extent) {
            debug!(text = %word.text, "dropping noise word");
            warnings.push(
                AnalysisWarning::with_code(
                    WarningCode::NoiseWord,
                    format!("word box smaller than {extent} of the page"),
                )
                .with_element(word.text.clone()),
            );
        } else {
            kept.push(word.clone());
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BBox;

    fn word(text: &str, left: f64, top: f64) -> Word {
        Word::new(text, BBox::new(left, top, 0.05, 0.03))
    }

    fn row(texts: &[&str], top: f64) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| word(t, 0.1 + 0.2 * i as f64, top))
            .collect()
    }

    fn blood_panel() -> Vec<Word> {
        let mut words = row(&["WBC", "74", "10", "2/ul"], 0.10);
        words.extend(row(&["RBC", "493L", "10", "4/ul"], 0.20));
        words
    }

    #[test]
    fn test_end_to_end_two_rows() {
        let result = analyze_words(&blood_panel(), &AnalyzeOptions::default());
        assert!(result.is_clean());
        assert_eq!(
            result.value,
            vec![
                InspectionResult::new("WBC", "74", "10^2/uL"),
                InspectionResult::new("RBC", "493L", "10^4/uL"),
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let words = blood_panel();
        let opts = AnalyzeOptions::default();
        assert_eq!(analyze_words(&words, &opts).value, analyze_words(&words, &opts).value);
    }

    #[test]
    fn test_order_follows_rows() {
        let mut words = Vec::new();
        for (i, item) in ["HGB", "HCT", "MCV", "MCH"].iter().enumerate() {
            words.extend(row(&[item, "1.0", "%"], 0.1 + 0.1 * i as f64));
        }
        let result = analyze_words(&words, &AnalyzeOptions::default());
        let items: Vec<&str> = result.value.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(items, vec!["HGB", "HCT", "MCV", "MCH"]);
    }

    #[test]
    fn test_empty_document_rejected() {
        let result = analyze_words(&[], &AnalyzeOptions::default());
        assert!(result.value.is_empty());
        assert!(result.has_warning(&WarningCode::DocumentRejected));
    }

    #[test]
    fn test_single_row_with_long_unit_rejected() {
        // Whole page collapsed into one line: the unit swallows everything else.
        let words = row(&["WBC", "74", "10^2/uL", "RBC", "493L", "10^4/uL"], 0.10);
        let result = analyze_words(&words, &AnalyzeOptions::default());
        assert!(result.value.is_empty());
        assert!(result.has_warning(&WarningCode::DocumentRejected));
    }

    #[test]
    fn test_single_row_with_short_unit_kept() {
        let words = row(&["HGB", "11.4L", "g/dL"], 0.10);
        let result = analyze_words(&words, &AnalyzeOptions::default());
        assert_eq!(result.value, vec![InspectionResult::new("HGB", "11.4L", "g/dL")]);
    }

    #[test]
    fn test_long_unit_kept_when_other_rows_exist() {
        let mut words = row(&["TP", "7.4", "g/dl", "ref", "range", "6.0-8.0"], 0.10);
        words.extend(row(&["ALB", "3.0", "g/dl"], 0.20));
        let result = analyze_words(&words, &AnalyzeOptions::default());
        assert_eq!(result.value.len(), 2);
        assert!(result.value[0].unit.chars().count() > 10);
    }

    #[test]
    fn test_short_row_skipped_with_warning() {
        let mut words = row(&["HGB", "11.4L", "g/dL"], 0.10);
        words.extend(row(&["TP7.4"], 0.20));
        words.extend(row(&["HCT", "32.9L", "%"], 0.30));
        let result = analyze_words(&words, &AnalyzeOptions::default());
        assert_eq!(result.value.len(), 2);
        assert_eq!(result.value[1].item, "HCT");
        assert_eq!(result.warnings.len(), 1);
        let w = &result.warnings[0];
        assert_eq!(w.code, WarningCode::ShortRow);
        assert_eq!(w.row, Some(1));
        assert_eq!(w.element.as_deref(), Some("TP7.4"));
    }

    #[test]
    fn test_only_short_rows_rejected() {
        let mut words = row(&["WBC"], 0.10);
        words.extend(row(&["RBC"], 0.20));
        let result = analyze_words(&words, &AnalyzeOptions::default());
        assert!(result.value.is_empty());
        assert!(result.has_warning(&WarningCode::ShortRow));
        assert!(result.has_warning(&WarningCode::DocumentRejected));
    }

    #[test]
    fn test_noise_filter_off_by_default() {
        let mut words = row(&["HGB", "11.4L", "g/dL"], 0.10);
        words.insert(2, Word::new("'", BBox::new(0.5, 0.10, 0.005, 0.005)));
        let result = analyze_words(&words, &AnalyzeOptions::default());
        assert_eq!(result.value[0].unit, "'g/dL");
    }

    #[test]
    fn test_noise_filter_drops_specks() {
        let mut words = row(&["HGB", "11.4L", "g/dL"], 0.10);
        words.insert(2, Word::new("'", BBox::new(0.5, 0.10, 0.005, 0.005)));
        let opts = AnalyzeOptions {
            noise_extent: Some(0.02),
            ..AnalyzeOptions::default()
        };
        let result = analyze_words(&words, &opts);
        assert_eq!(result.value, vec![InspectionResult::new("HGB", "11.4L", "g/dL")]);
        assert!(result.has_warning(&WarningCode::NoiseWord));
    }

    #[test]
    fn test_is_unparseable() {
        let ok = InspectionResult::new("HGB", "11.4L", "g/dL");
        let long = InspectionResult::new("WBC", "74", "10^2/uLRBC493");
        assert!(is_unparseable(&[], 10));
        assert!(!is_unparseable(std::slice::from_ref(&ok), 10));
        assert!(is_unparseable(std::slice::from_ref(&long), 10));
        assert!(!is_unparseable(&[long.clone(), ok], 10));
        assert!(!is_unparseable(&[long], 20));
    }
}

//! Analysis entry point tying a word source to the row reconstruction.

use std::fmt;
use std::str::FromStr;

use panelscan_core::{AnalysisResult, AnalyzeOptions, InspectionResult, analyze_words};
use tracing::{debug, info};

use crate::error::{Result, ScanError};
use crate::source::WordSource;

/// The kind of report being analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectionKind {
    /// Single-column blood-panel report.
    #[default]
    Blood,
}

impl InspectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionKind::Blood => "blood",
        }
    }
}

impl fmt::Display for InspectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InspectionKind {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blood" => Ok(InspectionKind::Blood),
            other => Err(ScanError::UnsupportedKind(other.to_string())),
        }
    }
}

/// Analyzes OCR output for one inspection kind.
///
/// # Example
///
/// ```ignore
/// let doc = TextractDocument::open_file("report.json")?;
/// let report = Analyzer::new(InspectionKind::Blood).analyze(&doc)?;
/// for r in &report.value {
///     println!("{}\t{}\t{}", r.item, r.value, r.unit);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    kind: InspectionKind,
    options: AnalyzeOptions,
}

impl Analyzer {
    pub fn new(kind: InspectionKind) -> Self {
        Self {
            kind,
            options: AnalyzeOptions::default(),
        }
    }

    /// Replace the analysis options (builder pattern).
    pub fn with_options(mut self, options: AnalyzeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn kind(&self) -> InspectionKind {
        self.kind
    }

    /// Analyze one document.
    ///
    /// An unparseable document yields an empty value with a
    /// `DocumentRejected` warning, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the source cannot produce its words.
    pub fn analyze<S>(&self, source: &S) -> Result<AnalysisResult<Vec<InspectionResult>>>
    where
        S: WordSource + ?Sized,
    {
        let words = source.read_words()?;
        let mut warnings = words.warnings;
        let analysis = match self.kind {
            InspectionKind::Blood => analyze_words(&words.value, &self.options),
        };
        debug!(
            kind = %self.kind,
            words = words.value.len(),
            records = analysis.value.len(),
            "document analyzed"
        );
        warnings.extend(analysis.warnings);
        Ok(AnalysisResult::with_warnings(analysis.value, warnings))
    }

    /// Analyze documents one at a time, in input order.
    ///
    /// Each document is accepted or rejected on its own, and its warnings
    /// are tagged with the document's index. Sources are read lazily as the
    /// iterator advances.
    pub fn analyze_each<'s, S, I>(
        &self,
        sources: I,
    ) -> impl Iterator<Item = Result<AnalysisResult<Vec<InspectionResult>>>>
    where
        S: WordSource + ?Sized + 's,
        I: IntoIterator<Item = &'s S>,
    {
        sources.into_iter().enumerate().map(
            move |(index, source)| -> Result<AnalysisResult<Vec<InspectionResult>>> {
                let analysis = self.analyze(source)?;
                let warnings = analysis
                    .warnings
                    .into_iter()
                    .map(|w| w.in_document(index))
                    .collect();
                Ok(AnalysisResult::with_warnings(analysis.value, warnings))
            },
        )
    }

    /// Analyze several documents and concatenate their records in input order.
    ///
    /// # Errors
    ///
    /// Stops at the first source that cannot produce its words.
    pub fn analyze_many<'s, S, I>(
        &self,
        sources: I,
    ) -> Result<AnalysisResult<Vec<InspectionResult>>>
    where
        S: WordSource + ?Sized + 's,
        I: IntoIterator<Item = &'s S>,
    {
        let mut results = Vec::new();
        let mut warnings = Vec::new();
        let mut documents = 0;
        for analysis in self.analyze_each(sources) {
            let analysis = analysis?;
            results.extend(analysis.value);
            warnings.extend(analysis.warnings);
            documents += 1;
        }
        info!(documents, records = results.len(), "batch analyzed");
        Ok(AnalysisResult::with_warnings(results, warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TextractFile;
    use panelscan_core::{BBox, WarningCode, Word};

    fn row(texts: &[&str], top: f64) -> Vec<Word> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Word::new(*t, BBox::new(0.1 + 0.2 * i as f64, top, 0.05, 0.02)))
            .collect()
    }

    #[test]
    fn kind_parses_blood_only() {
        assert_eq!("blood".parse::<InspectionKind>().unwrap(), InspectionKind::Blood);
        assert!(matches!(
            "urine".parse::<InspectionKind>(),
            Err(ScanError::UnsupportedKind(k)) if k == "urine"
        ));
        assert!("Blood".parse::<InspectionKind>().is_err());
        assert_eq!(InspectionKind::Blood.to_string(), "blood");
    }

    #[test]
    fn analyze_word_vector() {
        let mut words = row(&["WBC", "74", "10", "2/ul"], 0.10);
        words.extend(row(&["RBC", "493L", "10", "4/ul"], 0.20));
        let report = Analyzer::new(InspectionKind::Blood).analyze(&words).unwrap();
        assert_eq!(
            report.value,
            vec![
                InspectionResult::new("WBC", "74", "10^2/uL"),
                InspectionResult::new("RBC", "493L", "10^4/uL"),
            ]
        );
    }

    #[test]
    fn options_reach_the_segmenter() {
        let mut words = row(&["HGB", "11.4L", "g/dL"], 0.10);
        words.extend(row(&["HCT", "32.9L", "%"], 0.15));
        // 0.05 apart: one merged row whose unit is too long, so the page is rejected.
        let default = Analyzer::default().analyze(&words).unwrap();
        assert!(default.value.is_empty());
        assert!(default.has_warning(&WarningCode::DocumentRejected));

        let mut opts = AnalyzeOptions::default();
        opts.segment.row_gap = 0.04;
        let tight = Analyzer::new(InspectionKind::Blood)
            .with_options(opts)
            .analyze(&words)
            .unwrap();
        assert_eq!(tight.value.len(), 2);
    }

    #[test]
    fn analyze_many_concatenates_and_tags_warnings() {
        let first = row(&["WBC", "74", "10", "2/ul"], 0.10);
        let rejected: Vec<Word> = Vec::new();
        let third = row(&["BUN-PS", "97.3", "mg/d1"], 0.10);
        let docs = [first, rejected, third];

        let report = Analyzer::default().analyze_many(docs.iter()).unwrap();
        let items: Vec<&str> = report.value.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(items, vec!["WBC", "BUN-PS"]);
        assert_eq!(report.value[1].unit, "mg/dl");

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].code, WarningCode::DocumentRejected);
        assert_eq!(report.warnings[0].document, Some(1));
    }

    #[test]
    fn analyze_each_keeps_documents_apart() {
        let first = row(&["HGB", "11.4L", "g/dL"], 0.10);
        let second = row(&["TP"], 0.10);
        let docs = [first, second];

        let reports: Vec<_> = Analyzer::default()
            .analyze_each(docs.iter())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].value, vec![InspectionResult::new("HGB", "11.4L", "g/dL")]);
        assert!(reports[0].is_clean());
        assert!(reports[1].value.is_empty());
        assert!(reports[1].warnings.iter().all(|w| w.document == Some(1)));
        assert!(reports[1].has_warning(&WarningCode::ShortRow));
    }

    #[test]
    fn analyze_each_reports_unreadable_source() {
        let missing = TextractFile::new("/nonexistent/report.json");
        let analyzer = Analyzer::default();
        let mut reports = analyzer.analyze_each([&missing]);
        assert!(matches!(reports.next(), Some(Err(ScanError::Io { .. }))));
        assert!(reports.next().is_none());
    }
}

//! Warning types for report analysis.
//!
//! The analysis itself never fails: malformed rows and unparseable documents
//! are reported as [`AnalysisWarning`]s next to whatever was recovered, using
//! [`AnalysisResult`] to pair the two.

use std::fmt;

/// Machine-readable warning code for categorizing analysis issues.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum WarningCode {
    /// A row had fewer than two words and produced no record.
    ShortRow,
    /// The whole document was judged unparseable and its records discarded.
    DocumentRejected,
    /// A word was dropped by the noise-box filter.
    NoiseWord,
    /// An OCR word block had no text or no bounding box.
    MissingGeometry,
}

impl WarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::ShortRow => "SHORT_ROW",
            WarningCode::DocumentRejected => "DOCUMENT_REJECTED",
            WarningCode::NoiseWord => "NOISE_WORD",
            WarningCode::MissingGeometry => "MISSING_GEOMETRY",
        }
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue encountered while analyzing a document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisWarning {
    /// Machine-readable warning code.
    pub code: WarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// Document index (0-indexed) when several documents are analyzed together.
    pub document: Option<usize>,
    /// Row index (0-indexed, in page order) the warning refers to, if any.
    pub row: Option<usize>,
    /// Element context (e.g. the offending word text).
    pub element: Option<String>,
}

impl AnalysisWarning {
    /// Create a warning with a specific code and description.
    pub fn with_code(code: WarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            document: None,
            row: None,
            element: None,
        }
    }

    /// Attach the document index (builder pattern).
    pub fn in_document(mut self, document: usize) -> Self {
        self.document = Some(document);
        self
    }

    /// Attach the row index (builder pattern).
    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Attach element context (builder pattern).
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(document) = self.document {
            write!(f, " (document {document})")?;
        }
        if let Some(row) = self.row {
            write!(f, " (row {row})")?;
        }
        if let Some(ref element) = self.element {
            write!(f, " [{element}]")?;
        }
        Ok(())
    }
}

/// Result wrapper that pairs a value with collected warnings.
#[derive(Debug, Clone)]
pub struct AnalysisResult<T> {
    /// The recovered value.
    pub value: T,
    /// Warnings collected during analysis.
    pub warnings: Vec<AnalysisWarning>,
}

impl<T> AnalysisResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<AnalysisWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns true if any warning carries the given code.
    pub fn has_warning(&self, code: &WarningCode) -> bool {
        self.warnings.iter().any(|w| &w.code == code)
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AnalysisResult<U> {
        AnalysisResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

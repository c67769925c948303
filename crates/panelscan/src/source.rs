//! Where analysis input comes from.
//!
//! The OCR engine is an external collaborator: callers hand the analyzer
//! something that can produce the recognized words instead of the analyzer
//! calling an OCR service itself.

use std::path::{Path, PathBuf};

use panelscan_core::{AnalysisResult, Word};

use crate::error::Result;
use crate::textract::TextractDocument;

/// A provider of recognized words in reading order.
pub trait WordSource {
    /// Produce the words, with any warnings raised while decoding them.
    fn read_words(&self) -> Result<AnalysisResult<Vec<Word>>>;
}

impl WordSource for TextractDocument {
    fn read_words(&self) -> Result<AnalysisResult<Vec<Word>>> {
        Ok(self.words())
    }
}

impl WordSource for [Word] {
    fn read_words(&self) -> Result<AnalysisResult<Vec<Word>>> {
        Ok(AnalysisResult::ok(self.to_vec()))
    }
}

impl WordSource for Vec<Word> {
    fn read_words(&self) -> Result<AnalysisResult<Vec<Word>>> {
        self.as_slice().read_words()
    }
}

/// An OCR response saved on disk, read when the words are requested.
#[derive(Debug, Clone)]
pub struct TextractFile {
    path: PathBuf,
}

impl TextractFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for TextractFile {
    fn read_words(&self) -> Result<AnalysisResult<Vec<Word>>> {
        TextractDocument::open_file(&self.path)?.read_words()
    }
}

//! Decoding of OCR responses in the AWS Textract `DetectDocumentText` shape.
//!
//! Only `WORD` blocks are used; `PAGE` and `LINE` blocks carry no
//! information the row reconstruction needs.

use std::io::Read;
use std::path::Path;

use panelscan_core::{AnalysisResult, AnalysisWarning, BBox, WarningCode, Word};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Result, ScanError};

/// An OCR response as returned by `DetectDocumentText`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TextractDocument {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Kind of an OCR block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Page,
    Line,
    Word,
    #[serde(other)]
    Other,
}

/// A single OCR block. Fields other than these are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    pub block_type: BlockType,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Geometry {
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
}

/// Normalized bounding box as reported by the OCR service.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

impl From<BoundingBox> for BBox {
    fn from(b: BoundingBox) -> Self {
        BBox::new(b.left, b.top, b.width, b.height)
    }
}

impl TextractDocument {
    /// Parse an OCR response from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an OCR response from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parse an OCR response from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and parse an OCR response saved to a file.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] if the file cannot be read and
    /// [`ScanError::Json`] if its content is not an OCR response.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_slice(&bytes)?;
        debug!(path = %path.display(), blocks = doc.blocks.len(), "loaded OCR response");
        Ok(doc)
    }

    /// Extract the `WORD` blocks in response order.
    ///
    /// Word blocks without text or without a bounding box cannot be placed
    /// on the page; they are skipped and reported as
    /// [`WarningCode::MissingGeometry`].
    pub fn words(&self) -> AnalysisResult<Vec<Word>> {
        let mut words = Vec::new();
        let mut warnings = Vec::new();

        for block in self.blocks.iter().filter(|b| b.block_type == BlockType::Word) {
            let bbox = block.geometry.as_ref().and_then(|g| g.bounding_box);
            match (&block.text, bbox) {
                (Some(text), Some(bbox)) => words.push(Word::new(text.clone(), bbox.into())),
                (text, _) => {
                    let id = block.id.as_deref().unwrap_or("<no id>");
                    warn!(block = id, "word block without text or bounding box");
                    let mut warning = AnalysisWarning::with_code(
                        WarningCode::MissingGeometry,
                        format!("word block {id} has no text or bounding box"),
                    );
                    if let Some(text) = text {
                        warning = warning.with_element(text.clone());
                    }
                    warnings.push(warning);
                }
            }
        }

        AnalysisResult::with_warnings(words, warnings)
    }
}

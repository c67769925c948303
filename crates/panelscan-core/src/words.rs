use crate::geometry::BBox;

/// A word recognized by the OCR engine.
///
/// Words carry no identity beyond their position in the OCR response; the
/// order in which they arrive is the reading order the segmenter relies on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// The recognized text.
    pub text: String,
    /// Bounding box in page-fraction units.
    pub bbox: BBox,
}

impl Word {
    pub fn new(text: impl Into<String>, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }

    /// Distance from the top of the page to the top of this word.
    pub fn top(&self) -> f64 {
        self.bbox.top
    }

    /// Number of characters (Unicode scalar values) in the text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

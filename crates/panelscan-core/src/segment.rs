use tracing::debug;

use crate::geometry::BBox;
use crate::words::Word;

/// Vertical gap (page fraction) above which a word starts a new row.
pub const ROW_GAP: f64 = 0.08;

/// Glyphs the OCR engine reports as standalone words next to values
/// (`= 74`, `< 0.5`). They never belong to a row.
pub const COMPARISON_GLYPHS: [&str; 3] = ["=", "<", ">"];

/// Options for row segmentation, tuned for single-column lab reports.
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// A word whose top lies more than this below the top of the current
    /// row's first word closes the row (default: 0.08).
    pub row_gap: f64,
    /// Word texts that are dropped wherever they appear.
    pub skip_glyphs: Vec<String>,
    /// If true, a single-character word is dropped when it would be the
    /// first word of a row (bullets, page artifacts).
    pub drop_leading_single_char: bool,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            row_gap: ROW_GAP,
            skip_glyphs: COMPARISON_GLYPHS.iter().map(|g| g.to_string()).collect(),
            drop_leading_single_char: true,
        }
    }
}

/// A group of words judged to lie on the same printed line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Words in this row, in OCR reading order.
    pub words: Vec<Word>,
    /// The `top` of the word that opened this row.
    pub top: f64,
}

impl Row {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Texts of the words in this row.
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.text.as_str()).collect()
    }

    /// Union of the word boxes, or `None` for an empty row.
    pub fn bbox(&self) -> Option<BBox> {
        self.words.iter().map(|w| w.bbox).reduce(|a, b| a.union(&b))
    }
}

/// Lazily groups a reading-order word sequence into rows.
///
/// Created by [`segment_rows`]. Each call to [`next()`](Iterator::next)
/// consumes words until a row boundary is found and yields the finished
/// row. Empty rows (every word skipped) are never yielded.
pub struct RowSegmenter<'a, I> {
    words: std::iter::Fuse<I>,
    options: &'a SegmentOptions,
    previous_top: Option<f64>,
    current: Vec<Word>,
}

impl<'a, 'w, I> RowSegmenter<'a, I>
where
    I: Iterator<Item = &'w Word>,
{
    fn new(words: I, options: &'a SegmentOptions) -> Self {
        Self {
            words: words.fuse(),
            options,
            previous_top: None,
            current: Vec::new(),
        }
    }

    fn should_skip(&self, word: &Word) -> bool {
        if self.current.is_empty() && self.options.drop_leading_single_char && word.char_len() == 1
        {
            return true;
        }
        self.options.skip_glyphs.iter().any(|g| *g == word.text)
    }

    fn take_row(&mut self, top: f64) -> Option<Row> {
        if self.current.is_empty() {
            debug!(top, "row boundary with no retained words");
            return None;
        }
        let words = std::mem::take(&mut self.current);
        debug!(top, words = words.len(), "row closed");
        Some(Row { words, top })
    }
}

impl<'w, I> Iterator for RowSegmenter<'_, I>
where
    I: Iterator<Item = &'w Word>,
{
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        while let Some(word) = self.words.next() {
            let mut closed = None;
            match self.previous_top {
                None => self.previous_top = Some(word.top()),
                Some(prev) if word.top() - prev > self.options.row_gap => {
                    closed = self.take_row(prev);
                    self.previous_top = Some(word.top());
                }
                Some(_) => {}
            }

            if !self.should_skip(word) {
                self.current.push(word.clone());
            }

            if closed.is_some() {
                return closed;
            }
        }

        let top = self.previous_top?;
        self.take_row(top)
    }
}

/// Group words into rows using vertical gaps as the only boundary signal.
///
/// Words must be in the OCR provider's reading order (left-to-right,
/// top-to-bottom). A word starts a new row when its `top` lies more than
/// `row_gap` below the top of the word that opened the current row; words
/// above or level with it stay in the row. Leading single characters and
/// comparison glyphs are dropped as they are encountered.
pub fn segment_rows<'a, 'w, I>(
    words: I,
    options: &'a SegmentOptions,
) -> RowSegmenter<'a, I::IntoIter>
where
    I: IntoIterator<Item = &'w Word>,
{
    RowSegmenter::new(words.into_iter(), options)
}

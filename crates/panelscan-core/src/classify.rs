use std::sync::LazyLock;

use regex::Regex;

use crate::segment::Row;

/// Canonical spelling for counts reported per 100 µL.
pub const UNIT_10E2_PER_UL: &str = "10^2/uL";
/// Canonical spelling for counts reported per 10,000 µL.
pub const UNIT_10E4_PER_UL: &str = "10^4/uL";

/// Lower-cased OCR readings of `10^2/uL` (the superscript is either lost
/// or kept as `²`).
const READINGS_10E2_PER_UL: [&str; 2] = ["102/ul", "10²/ul"];
const READINGS_10E4_PER_UL: [&str; 1] = ["104/ul"];

/// Characters the report font makes indistinguishable from `l` in unit
/// abbreviations, replaced in this order.
const L_LOOKALIKES: [char; 3] = ['I', ')', '1'];

static ITEM_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]").expect("valid item pattern"));

/// One line of a lab report: what was measured, the reading, and its unit.
///
/// `value` is kept as text: clinical flags such as a trailing `L` or `H`
/// are meaningful to the reader and are not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InspectionResult {
    pub item: String,
    pub value: String,
    pub unit: String,
}

impl InspectionResult {
    pub fn new(
        item: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            value: value.into(),
            unit: unit.into(),
        }
    }

    /// Whether `item` looks like a test name rather than a misread value
    /// or unit: it starts with an ASCII capital, contains no `/`, and is
    /// longer than one character.
    pub fn has_plausible_item(&self) -> bool {
        ITEM_START.is_match(&self.item)
            && !self.item.contains('/')
            && self.item.chars().count() != 1
    }
}

/// Remove `=` decorations and any spaces from a value token.
pub fn normalize_value(raw: &str) -> String {
    raw.chars().filter(|&c| c != '=' && c != ' ').collect()
}

/// Turn the concatenated unit words of a row into their display form.
///
/// Known cell-count units map to a canonical spelling; anything else gets
/// the lossy `I`/`)`/`1` to `l` substitution, so digits do not survive in
/// units outside the known set.
pub fn normalize_unit(raw: &str) -> String {
    let unit = raw.replace(' ', "");
    let folded = unit.to_lowercase();
    if READINGS_10E2_PER_UL.contains(&folded.as_str()) {
        return UNIT_10E2_PER_UL.to_string();
    }
    if READINGS_10E4_PER_UL.contains(&folded.as_str()) {
        return UNIT_10E4_PER_UL.to_string();
    }
    L_LOOKALIKES
        .iter()
        .fold(unit, |acc, &c| acc.replace(c, "l"))
}

/// Classify the word texts of one row by position.
///
/// The first text is the item, the second the value, and the rest are
/// concatenated into the unit. Returns `None` when there are fewer than
/// two texts, since such a row has no value to report.
pub fn classify_texts<'t, I>(texts: I) -> Option<InspectionResult>
where
    I: IntoIterator<Item = &'t str>,
{
    let mut texts = texts.into_iter();
    let item = texts.next()?;
    let value = texts.next()?;
    let unit_raw: String = texts.collect();
    Some(InspectionResult {
        item: item.to_string(),
        value: normalize_value(value),
        unit: normalize_unit(&unit_raw),
    })
}

/// Classify a segmented row. See [`classify_texts`].
pub fn classify_row(row: &Row) -> Option<InspectionResult> {
    classify_texts(row.words.iter().map(|w| w.text.as_str()))
}

/// Bounding box in normalized page coordinates.
///
/// All fields are fractions of the page size in `[0, 1]`, measured from the
/// top-left corner of the page, matching what OCR engines report:
/// - `left`: left edge
/// - `top`: top edge (distance from top of page)
/// - `width`: horizontal extent
/// - `height`: vertical extent
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge of the bounding box.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge of the bounding box.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Compute the union of two bounding boxes.
    pub fn union(&self, other: &BBox) -> BBox {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        BBox {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// True if the box is both narrower and shorter than `extent`.
    ///
    /// Specks of dirt and stray marks on a scan come back from OCR as tiny
    /// boxes; this is the test used to spot them.
    pub fn is_smaller_than(&self, extent: f64) -> bool {
        self.width < extent && self.height < extent
    }
}

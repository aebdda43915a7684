//! Layout data types for quarter-page reordering
//!
//! These types describe crops and placements without touching any PDF
//! objects. Rendering turns them into XObjects later.

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from PDF box corners `[llx lly urx ury]`, normalizing swapped corners
    pub fn from_corners(llx: f32, lly: f32, urx: f32, ury: f32) -> Self {
        Self {
            x: llx.min(urx),
            y: lly.min(ury),
            width: (urx - llx).abs(),
            height: (ury - lly).abs(),
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// One quarter of a source page.
///
/// A crop descriptor only: it names its parent page and the box to show.
/// The source page itself is never modified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubRegion {
    /// Index of the parent page in the source document (0-based)
    pub source_page: usize,
    /// Position within the parent page (0 = top, 3 = bottom)
    pub quarter: usize,
    /// Crop box in the parent page's coordinate space
    pub bbox: Rect,
}

/// Final placement of a sub-region on an output page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The crop being placed
    pub region: SubRegion,
    /// Slot on the output page (0 = top, 3 = bottom)
    pub slot: usize,
    /// Where the crop's bottom-left corner lands on the output page
    pub target: Rect,
}

impl Placement {
    /// Translation that moves the crop from source coordinates onto its slot
    pub fn translation(&self) -> (f32, f32) {
        (
            self.target.x - self.region.bbox.x,
            self.target.y - self.region.bbox.y,
        )
    }
}

/// One rebuilt output page: four placements stacked top to bottom
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPage {
    /// Output page width in points
    pub width: f32,
    /// Output page height in points
    pub height: f32,
    /// Placements in slot order
    pub placements: Vec<Placement>,
}

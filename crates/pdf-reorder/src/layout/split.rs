//! Slicing source pages into horizontal quarters

use super::types::{Rect, SubRegion};
use crate::constants::QUARTERS_PER_PAGE;
use crate::types::{ReorderError, Result};

/// Split one page into four sub-regions, topmost first.
///
/// Quarter `i` covers `[H - H/4*(i+1), H - H/4*i)` above the page box's
/// bottom edge and spans the full width.
pub fn split_page(source_page: usize, page_box: &Rect) -> Result<[SubRegion; QUARTERS_PER_PAGE]> {
    check_geometry(page_box.width, page_box.height)?;

    let step = page_box.height / QUARTERS_PER_PAGE as f32;
    Ok(std::array::from_fn(|quarter| {
        let top = page_box.height - step * quarter as f32;
        let bottom = top - step;
        SubRegion {
            source_page,
            quarter,
            bbox: Rect::new(page_box.x, page_box.y + bottom, page_box.width, step),
        }
    }))
}

/// Split every page and flatten the result, grouped by page in source order.
pub fn split_pages(page_boxes: &[Rect]) -> Result<Vec<SubRegion>> {
    let mut parts = Vec::with_capacity(page_boxes.len() * QUARTERS_PER_PAGE);
    for (index, page_box) in page_boxes.iter().enumerate() {
        parts.extend(split_page(index, page_box)?);
    }
    Ok(parts)
}

pub(crate) fn check_geometry(width: f32, height: f32) -> Result<()> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
        Ok(())
    } else {
        Err(ReorderError::InvalidGeometry { width, height })
    }
}

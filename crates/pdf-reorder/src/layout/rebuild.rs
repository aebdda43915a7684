//! Regrouping reordered quarters into full output pages

use super::split::check_geometry;
use super::types::{OutputPage, Placement, Rect, SubRegion};
use crate::constants::QUARTERS_PER_PAGE;
use crate::types::{ReorderError, Result};

/// Group the reordered sequence into output pages of size `width x height`.
///
/// Item `k` of each group of four lands in slot `k`, whose bottom edge is at
/// `height - height/4 * (k+1)`. Slots tile the page with no gap or overlap.
pub fn plan_output_pages(
    reordered: &[SubRegion],
    width: f32,
    height: f32,
) -> Result<Vec<OutputPage>> {
    check_geometry(width, height)?;
    if reordered.len() % QUARTERS_PER_PAGE != 0 {
        return Err(ReorderError::InvalidCount(reordered.len()));
    }

    let pages = reordered
        .chunks_exact(QUARTERS_PER_PAGE)
        .map(|group| OutputPage {
            width,
            height,
            placements: group
                .iter()
                .enumerate()
                .map(|(slot, region)| Placement {
                    region: *region,
                    slot,
                    target: slot_rect(slot, width, height),
                })
                .collect(),
        })
        .collect();

    Ok(pages)
}

/// Bounds of slot `slot` (0 = top) on a `width x height` output page
pub fn slot_rect(slot: usize, width: f32, height: f32) -> Rect {
    let step = height / QUARTERS_PER_PAGE as f32;
    Rect::new(0.0, height - step * (slot + 1) as f32, width, step)
}

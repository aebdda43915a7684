//! Cut guide rendering for reordered pages
//!
//! Produces PDF content stream operations for thin dashed lines at the
//! quarter boundaries, where the printed stack gets cut.

use crate::constants::{CUT_LINE_DASH, CUT_LINE_GRAY, CUT_LINE_WIDTH, QUARTERS_PER_PAGE};
use crate::layout::slot_rect;

/// Generate cut guides for a `width x height` output page
pub fn generate_cut_guides(width: f32, height: f32) -> String {
    let mut ops = String::new();

    ops.push_str("q\n");
    ops.push_str(&format!("{} G\n", CUT_LINE_GRAY));
    ops.push_str(&format!("{} w\n", CUT_LINE_WIDTH));
    ops.push_str(&format!("[{} {}] 0 d\n", CUT_LINE_DASH.0, CUT_LINE_DASH.1));

    // One line along the bottom edge of every slot except the last
    for slot in 0..QUARTERS_PER_PAGE - 1 {
        let y = slot_rect(slot, width, height).y;
        ops.push_str(&format!("0 {} m {} {} l S\n", y, width, y));
    }

    ops.push_str("Q\n");
    ops
}

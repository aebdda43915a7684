//! Geometry for quarter-page reordering
//!
//! This module is pure arithmetic over page boxes:
//! - Splitting pages into four horizontal quarters
//! - Stride-reordering the flattened quarters
//! - Planning where each quarter lands on the output pages

mod rebuild;
mod split;
mod stride;
mod types;

pub use rebuild::{plan_output_pages, slot_rect};
pub use split::{split_page, split_pages};
pub use stride::{reorder_stride, stride_source_index};
pub use types::*;

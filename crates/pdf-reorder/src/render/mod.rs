//! PDF rendering for reordered output
//!
//! This module handles all PDF-specific operations:
//! - Reading page boxes (with page tree inheritance)
//! - Creating Form XObjects from source pages
//! - Building output pages from planned placements
//! - Deep copying PDF objects

mod page;
mod xobject;

pub use page::render_output_page;
pub use xobject::{ImportCache, copy_object_deep, page_box, page_xobject};

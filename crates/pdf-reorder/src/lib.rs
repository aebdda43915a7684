mod constants;
pub mod layout;
mod marks;
mod options;
pub mod render;
pub mod reorder;
mod stats;
mod types;

pub use constants::{QUARTERS_PER_PAGE, REORDERED_SUFFIX};
pub use options::*;
pub use reorder::{
    default_output_path, load_pdf, process, process_with_options, reorder_document, save_pdf,
    validate_paths,
};
pub use stats::{calculate_statistics, pile_ranges};
pub use types::*;

use crate::constants::QUARTERS_PER_PAGE;
use crate::render::page_box;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for reordering `document`
pub fn calculate_statistics(document: &Document) -> Result<ReorderStatistics> {
    let pages = document.get_pages();
    let source_pages = pages.len();

    let first_page = match pages.values().next() {
        Some(&id) => id,
        None => return Err(ReorderError::EmptyDocument),
    };
    let template = page_box(document, first_page)?;

    Ok(ReorderStatistics {
        source_pages,
        sub_regions: source_pages * QUARTERS_PER_PAGE,
        output_pages: source_pages,
        page_width_pt: template.width,
        page_height_pt: template.height,
        piles: pile_ranges(source_pages),
    })
}

/// Invoice numbers (1-based, inclusive) collected in each pile after cutting
pub fn pile_ranges(num_pages: usize) -> Vec<std::ops::RangeInclusive<usize>> {
    if num_pages == 0 {
        return Vec::new();
    }
    (0..QUARTERS_PER_PAGE)
        .map(|pile| pile * num_pages + 1..=(pile + 1) * num_pages)
        .collect()
}

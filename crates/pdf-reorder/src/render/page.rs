//! Output page rendering

use super::xobject::{ImportCache, page_xobject};
use crate::layout::{OutputPage, Placement};
use crate::marks::generate_cut_guides;
use crate::types::{ReorderError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Render one planned output page into `output`.
///
/// # Arguments
/// * `output` - The output document
/// * `source` - The source document containing the pages
/// * `source_page_ids` - Object IDs of all source pages, in page order
/// * `page` - The planned placements for this output page
/// * `parent_pages_id` - The parent Pages object ID
/// * `cut_lines` - Whether to draw cut guides between quarters
/// * `cache` - Import cache shared across the whole output document
pub fn render_output_page(
    output: &mut Document,
    source: &Document,
    source_page_ids: &[ObjectId],
    page: &OutputPage,
    parent_pages_id: ObjectId,
    cut_lines: bool,
    cache: &mut ImportCache,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page.width),
            Object::Real(page.height),
        ]),
    );

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();

    for placement in &page.placements {
        let source_idx = placement.region.source_page;
        let source_page_id = *source_page_ids
            .get(source_idx)
            .ok_or(ReorderError::MissingPage(source_idx))?;

        let xobject_id = page_xobject(output, source, source_page_id, cache)?;
        let xobject_name = format!("P{}", source_idx);
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(generate_placement_command(&xobject_name, placement));
    }

    if cut_lines {
        content_ops.push(generate_cut_guides(page.width, page.height));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Clip to the target slot, then draw the source page shifted so the crop
/// fills it.
fn generate_placement_command(xobject_name: &str, placement: &Placement) -> String {
    let slot = &placement.target;
    let (tx, ty) = placement.translation();
    format!(
        "q {} {} {} {} re W n 1 0 0 1 {} {} cm /{} Do Q\n",
        slot.x, slot.y, slot.width, slot.height, tx, ty, xobject_name
    )
}

//! Quarter-page reordering for cut-and-stack printing
//!
//! This module orchestrates a run:
//! 1. Validate the source and destination paths
//! 2. Load the source document
//! 3. Split, stride-reorder and regroup the quarters
//! 4. Render and save the output document

mod io;
mod paths;

pub use io::{load_pdf, save_pdf};
pub use paths::{default_output_path, validate_paths};

use crate::layout::{Rect, plan_output_pages, reorder_stride, split_pages};
use crate::options::ReorderOptions;
use crate::render::{ImportCache, page_box, render_output_page};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::path::Path;

/// Reorder `source_path` into `destination_path`, returning the output page count.
pub async fn process(
    source_path: impl AsRef<Path>,
    destination_path: impl AsRef<Path>,
) -> Result<usize> {
    let options = ReorderOptions {
        output_file: Some(destination_path.as_ref().to_path_buf()),
        ..ReorderOptions::for_input(source_path.as_ref())
    };
    process_with_options(&options).await
}

/// Run a full reorder as configured by `options`.
pub async fn process_with_options(options: &ReorderOptions) -> Result<usize> {
    let src = options.input_file.clone();
    let dst = options.output_path();
    validate_paths(&src, &dst).await?;
    options.validate()?;

    let source = load_pdf(&src).await?;
    let run_options = options.clone();
    let output =
        tokio::task::spawn_blocking(move || reorder_document(&source, &run_options)).await??;
    let page_count = output.get_pages().len();

    save_pdf(output, &dst, options.compress).await?;
    log::info!(
        "Reordered {} -> {} ({} pages)",
        src.display(),
        dst.display(),
        page_count
    );
    Ok(page_count)
}

/// Build the reordered document from an in-memory source.
pub fn reorder_document(source: &Document, options: &ReorderOptions) -> Result<Document> {
    let page_ids: Vec<ObjectId> = source.get_pages().values().copied().collect();
    if page_ids.is_empty() {
        return Err(ReorderError::EmptyDocument);
    }

    let page_boxes = page_ids
        .iter()
        .map(|&id| page_box(source, id))
        .collect::<Result<Vec<Rect>>>()?;
    let template = page_boxes[0];
    warn_on_mixed_sizes(&page_boxes, &template);

    let parts = split_pages(&page_boxes)?;
    let (reordered, num_pages) = reorder_stride(&parts)?;
    let plan = plan_output_pages(&reordered, template.width, template.height)?;
    log::debug!(
        "Split {} pages into {} quarters, rebuilding {} pages at {} x {} pt",
        page_ids.len(),
        parts.len(),
        num_pages,
        template.width,
        template.height
    );

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut cache = ImportCache::new();
    let mut page_refs = Vec::with_capacity(plan.len());

    for page in &plan {
        let page_id = render_output_page(
            &mut output,
            source,
            &page_ids,
            page,
            pages_tree_id,
            options.cut_lines,
            &mut cache,
        )?;
        page_refs.push(Object::Reference(page_id));
    }
    log::debug!("Imported {} source pages as XObjects", cache.imported_pages());

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}

fn warn_on_mixed_sizes(page_boxes: &[Rect], template: &Rect) {
    let mismatched = page_boxes
        .iter()
        .filter(|b| b.width != template.width || b.height != template.height)
        .count();
    if mismatched > 0 {
        log::warn!(
            "{} pages differ from the first page size ({} x {} pt); quarters follow each page's own box",
            mismatched,
            template.width,
            template.height
        );
    }
}

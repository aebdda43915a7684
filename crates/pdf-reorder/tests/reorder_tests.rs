mod common;

use common::{create_sized_pdf, create_test_pdf, page_contents};
use lopdf::{Document, Object};
use pdf_reorder::layout::{Rect, SubRegion, plan_output_pages, reorder_stride, split_pages};
use pdf_reorder::*;

fn letter_boxes(n: usize) -> Vec<Rect> {
    vec![Rect::new(0.0, 0.0, 612.0, 792.0); n]
}

fn form_xobject_contents(doc: &Document) -> Vec<String> {
    let mut contents: Vec<String> = doc
        .objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|s| matches!(s.dict.get(b"Subtype"), Ok(Object::Name(n)) if n == b"Form"))
        .map(|s| String::from_utf8_lossy(&s.content).into_owned())
        .collect();
    contents.sort();
    contents
}

#[test]
fn test_index_law_holds_for_small_documents() {
    for n in 1..=7 {
        let flattened = split_pages(&letter_boxes(n)).unwrap();
        let (reordered, num_pages) = reorder_stride(&flattened).unwrap();
        assert_eq!(num_pages, n);
        assert_eq!(reordered.len(), 4 * n);

        for i in 0..n {
            for j in 0..4 {
                assert_eq!(reordered[i * 4 + j], flattened[i + j * n], "n={n} i={i} j={j}");
            }
        }
    }
}

#[test]
fn test_reorder_is_a_permutation() {
    let flattened = split_pages(&letter_boxes(5)).unwrap();
    let (mut reordered, _) = reorder_stride(&flattened).unwrap();
    reordered.sort_by_key(|r: &SubRegion| (r.source_page, r.quarter));
    assert_eq!(reordered, flattened);
}

#[test]
fn test_each_pile_reads_consecutively() {
    let n = 3;
    let flattened = split_pages(&letter_boxes(n)).unwrap();
    let (reordered, _) = reorder_stride(&flattened).unwrap();

    for pile in 0..4 {
        let stacked: Vec<SubRegion> = (0..n).map(|page| reordered[page * 4 + pile]).collect();
        assert_eq!(stacked, flattened[pile * n..(pile + 1) * n].to_vec());
    }
}

#[test]
fn test_quarter_heights_and_slots_partition_page() {
    let flattened = split_pages(&letter_boxes(2)).unwrap();
    assert!(flattened.iter().all(|r| r.bbox.height == 198.0));

    let (reordered, _) = reorder_stride(&flattened).unwrap();
    let pages = plan_output_pages(&reordered, 612.0, 792.0).unwrap();
    for page in &pages {
        let mut edges: Vec<(f32, f32)> = page
            .placements
            .iter()
            .map(|p| (p.target.y, p.target.top()))
            .collect();
        edges.sort_by(|a, b| a.0.total_cmp(&b.0));
        assert_eq!(edges, vec![(0.0, 198.0), (198.0, 396.0), (396.0, 594.0), (594.0, 792.0)]);
    }
}

#[test]
fn test_reorder_rejects_count_not_divisible_by_four() {
    let parts = vec![0u32; 6];
    match reorder_stride(&parts) {
        Err(ReorderError::InvalidCount(6)) => {}
        other => panic!("Expected InvalidCount, got {:?}", other.map(|(_, n)| n)),
    }
}

#[test]
fn test_reorder_document_two_pages() {
    let source = create_test_pdf(2);
    let output = reorder_document(&source, &ReorderOptions::default()).unwrap();

    let contents = page_contents(&output);
    assert_eq!(contents.len(), 2);

    // Output page 0 = [A0, A2, B0, B2]
    assert_eq!(
        contents[0],
        "q 0 594 612 198 re W n 1 0 0 1 0 0 cm /P0 Do Q\n\
         q 0 396 612 198 re W n 1 0 0 1 0 198 cm /P0 Do Q\n\
         q 0 198 612 198 re W n 1 0 0 1 0 -396 cm /P1 Do Q\n\
         q 0 0 612 198 re W n 1 0 0 1 0 -198 cm /P1 Do Q\n"
    );
    // Output page 1 = [A1, A3, B1, B3]
    assert_eq!(
        contents[1],
        "q 0 594 612 198 re W n 1 0 0 1 0 198 cm /P0 Do Q\n\
         q 0 396 612 198 re W n 1 0 0 1 0 396 cm /P0 Do Q\n\
         q 0 198 612 198 re W n 1 0 0 1 0 -198 cm /P1 Do Q\n\
         q 0 0 612 198 re W n 1 0 0 1 0 0 cm /P1 Do Q\n"
    );

    // One shared XObject per source page
    let forms = form_xobject_contents(&output);
    assert_eq!(forms.len(), 2);
    assert!(forms[0].starts_with("% page 0"));
    assert!(forms[1].starts_with("% page 1"));
}

#[test]
fn test_single_page_keeps_layout() {
    let source = create_test_pdf(1);
    let output = reorder_document(&source, &ReorderOptions::default()).unwrap();

    let contents = page_contents(&output);
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0].matches("1 0 0 1 0 0 cm /P0 Do").count(), 4);
}

#[test]
fn test_output_pages_use_first_page_size() {
    let source = create_sized_pdf(3, 595, 842);
    let output = reorder_document(&source, &ReorderOptions::default()).unwrap();

    for (_, id) in output.get_pages() {
        let media_box = output
            .get_dictionary(id)
            .unwrap()
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .clone();
        assert!(matches!(media_box[2], Object::Real(w) if w == 595.0));
        assert!(matches!(media_box[3], Object::Real(h) if h == 842.0));
    }
}

#[test]
fn test_cut_lines_are_optional() {
    let source = create_test_pdf(2);

    let plain = reorder_document(&source, &ReorderOptions::default()).unwrap();
    assert!(page_contents(&plain).iter().all(|c| !c.contains(" l S")));

    let options = ReorderOptions {
        cut_lines: true,
        ..Default::default()
    };
    let guided = reorder_document(&source, &options).unwrap();
    for content in page_contents(&guided) {
        assert_eq!(content.matches(" l S").count(), 3);
    }
}

#[test]
fn test_reorder_document_empty() {
    let source = create_test_pdf(0);
    let result = reorder_document(&source, &ReorderOptions::default());
    assert!(matches!(result, Err(ReorderError::EmptyDocument)));
}

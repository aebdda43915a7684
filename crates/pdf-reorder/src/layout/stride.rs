//! Stride ordering for cut-and-stack printing
//!
//! With N source pages there are 4N invoices, numbered in reading order.
//! Output page `i` carries invoices `i, i+N, i+2N, i+3N` from top to bottom,
//! so after cutting the printed stack into four piles, pile `j` holds
//! invoices `jN .. jN+N` in order.
//!
//! ```text
//! N = 2, source A = [A0 A1 A2 A3], B = [B0 B1 B2 B3]
//!
//! output page 0    output page 1
//! ┌────────┐       ┌────────┐
//! │   A0   │       │   A1   │   pile 0: A0 A1
//! │   A2   │       │   A3   │   pile 1: A2 A3
//! │   B0   │       │   B1   │   pile 2: B0 B1
//! │   B2   │       │   B3   │   pile 3: B2 B3
//! └────────┘       └────────┘
//! ```

use crate::constants::QUARTERS_PER_PAGE;
use crate::types::{ReorderError, Result};

/// Reorder the flattened quarter sequence into output-page order.
///
/// Returns the reordered items together with the output page count `N`.
/// Satisfies `reordered[i*4 + j] == parts[i + j*N]`.
pub fn reorder_stride<T: Clone>(parts: &[T]) -> Result<(Vec<T>, usize)> {
    let total = parts.len();
    if total % QUARTERS_PER_PAGE != 0 {
        return Err(ReorderError::InvalidCount(total));
    }

    let num_pages = total / QUARTERS_PER_PAGE;
    let reordered = (0..num_pages)
        .flat_map(|page| {
            (0..QUARTERS_PER_PAGE).map(move |slot| stride_source_index(page, slot, num_pages))
        })
        .map(|index| parts[index].clone())
        .collect();

    Ok((reordered, num_pages))
}

/// Flattened-sequence index shown at `slot` of output page `page`.
pub fn stride_source_index(page: usize, slot: usize, num_pages: usize) -> usize {
    page + slot * num_pages
}

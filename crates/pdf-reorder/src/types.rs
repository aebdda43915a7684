use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReorderError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Source PDF is empty.")]
    EmptyDocument,
    #[error("Total invoices must be divisible by 4 (got {0}).")]
    InvalidCount(usize),
    #[error("Invalid page geometry: {width} x {height} pt")]
    InvalidGeometry { width: f32, height: f32 },
    #[error("Source page {0} does not exist")]
    MissingPage(usize),
    #[error("{0}")]
    PathValidation(String),
}

pub type Result<T> = std::result::Result<T, ReorderError>;

/// Statistics about a reorder run
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderStatistics {
    /// Number of pages in the source document
    pub source_pages: usize,
    /// Number of quarter slices cut from the source
    pub sub_regions: usize,
    /// Number of pages in the reordered output
    pub output_pages: usize,
    /// Template page width in points
    pub page_width_pt: f32,
    /// Template page height in points
    pub page_height_pt: f32,
    /// 1-based invoice numbers that end up in each pile after cutting, top pile first
    pub piles: Vec<RangeInclusive<usize>>,
}

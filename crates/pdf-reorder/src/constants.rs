//! Shared constants for quarter-page reordering

// =============================================================================
// Slicing
// =============================================================================

/// Number of stacked invoices on every source page
pub const QUARTERS_PER_PAGE: usize = 4;

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Cut Guides
// =============================================================================

/// Line width for cut guides (points)
pub const CUT_LINE_WIDTH: f32 = 0.25;

/// Dash pattern for cut guides: 4pt dash, 4pt gap
pub const CUT_LINE_DASH: (f32, f32) = (4.0, 4.0);

/// Gray level for cut guides (0 = black, 1 = white)
pub const CUT_LINE_GRAY: f32 = 0.5;

// =============================================================================
// Output Naming
// =============================================================================

/// Suffix appended to the source file stem for the default output path
pub const REORDERED_SUFFIX: &str = "_reordered";

//! Shared constants for blueprint rendering
//!
//! This module centralizes the fixed physical canvas dimensions and
//! presentation constants used throughout the drawing pipeline.

// =============================================================================
// Physical Page (A4)
// =============================================================================

/// Long edge of an A4 page in millimeters
pub const A4_LONG_EDGE_MM: f64 = 297.0;

/// Short edge of an A4 page in millimeters
pub const A4_SHORT_EDGE_MM: f64 = 210.0;

/// Padding reserved on all four sides of the page before content scaling
pub const PAGE_PADDING_MM: f64 = 10.0;

// =============================================================================
// Grid Presentation
// =============================================================================

/// Stroke color for the debug grid (light gray)
pub const GRID_STROKE_COLOR: &str = "rgb(200,200,200)";

/// Stroke width for grid lines, in content units
pub const GRID_STROKE_WIDTH: f64 = 0.05;

/// Group id for the background grid in the output document
pub const GRID_GROUP_ID: &str = "grid";

// =============================================================================
// Entity Footprints
// =============================================================================

/// Footprint edge length assumed for entities that don't report a size
pub const DEFAULT_FOOTPRINT: f64 = 1.0;

//! Layout data types
//!
//! These types represent the intermediate results between entity
//! positions and the final SVG document: bounds in content coordinates,
//! the derived page layout, and the reference grid.

/// Minimal axis-aligned rectangle covering a set of entities, in
/// content coordinates
///
/// Only constructed from a non-empty entity set, so `max_x >= min_x`
/// and `max_y >= min_y` always hold. The empty case is represented by
/// `compute_bounds` returning `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Horizontal extent in content units
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent in content units
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Whether a point lies inside the rectangle (edges included)
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }
}

/// The visible content window mapped 1:1 onto the physical page
///
/// Expressed in content-coordinate units; always spans the entire page
/// including the padding margins, not just the content region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Result of fitting a bounding rectangle onto a physical page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Physical page width in millimeters
    pub page_width_mm: f64,
    /// Physical page height in millimeters
    pub page_height_mm: f64,
    /// Uniform content-units-to-millimeters scale factor
    pub scale: f64,
    /// Content window mapped onto the page
    pub viewbox: ViewBox,
}

/// Which axis a grid line runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Constant x, spanning the vertical extent of the viewbox
    Vertical,
    /// Constant y, spanning the horizontal extent of the viewbox
    Horizontal,
}

/// A single reference grid segment in content coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub axis: Axis,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

//! Layout calculation modules for blueprint drawings
//!
//! This module handles all the geometric calculations for placing a
//! blueprint onto a fixed physical page:
//! - Bounds (minimal axis-aligned rectangle covering every entity)
//! - Canvas (page-fitting scale and viewbox for an A4 page)
//! - Grid (unit-spaced reference lines spanning the viewbox)

mod bounds;
mod canvas;
mod grid;
mod types;

pub use bounds::*;
pub use canvas::*;
pub use grid::*;
pub use types::*;

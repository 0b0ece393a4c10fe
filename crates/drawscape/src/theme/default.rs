//! Default footprint theme
//!
//! Draws every entity as its tile footprint rectangle, with a short
//! direction tick on entities that face somewhere. Intended to read
//! like a pen-plotter schematic.

use svg::node::element::{Group, Line, Rectangle};

use crate::types::Entity;

use super::Theme;

const STROKE: &str = "#333333";
const STROKE_WIDTH: f64 = 0.1;
const WALL_FILL: &str = "#999999";

/// Footprint-rectangle theme
#[derive(Debug, Default)]
pub struct DefaultTheme;

impl DefaultTheme {
    pub fn new() -> Self {
        Self
    }

    /// Footprint rectangle centered on the entity position
    fn footprint(entity: &Entity, fill: &str) -> Rectangle {
        let (w, h) = entity.footprint();
        Rectangle::new()
            .set("x", entity.x - w / 2.0)
            .set("y", entity.y - h / 2.0)
            .set("width", w)
            .set("height", h)
            .set("fill", fill)
            .set("stroke", STROKE)
            .set("stroke-width", STROKE_WIDTH)
    }

    /// Tick from the entity center toward its facing edge
    fn direction_tick(entity: &Entity) -> Option<Line> {
        let direction = entity.direction?;
        // Factorio directions: 0 north, 2 east, 4 south, 6 west
        let (dx, dy) = match (direction / 2) % 4 {
            0 => (0.0, -1.0),
            1 => (1.0, 0.0),
            2 => (0.0, 1.0),
            _ => (-1.0, 0.0),
        };
        let (w, h) = entity.footprint();
        let line = Line::new()
            .set("x1", entity.x)
            .set("y1", entity.y)
            .set("x2", entity.x + dx * w / 2.0)
            .set("y2", entity.y + dy * h / 2.0)
            .set("stroke", STROKE)
            .set("stroke-width", STROKE_WIDTH);
        Some(line)
    }

    fn footprint_with_tick(entity: &Entity, fill: &str) -> Group {
        let group = Group::new().add(Self::footprint(entity, fill));
        match Self::direction_tick(entity) {
            Some(tick) => group.add(tick),
            None => group,
        }
    }
}

impl Theme for DefaultTheme {
    fn render_belt(&self, entity: &Entity) -> Group {
        Self::footprint_with_tick(entity, "none")
    }

    fn render_wall(&self, entity: &Entity) -> Group {
        Group::new().add(Self::footprint(entity, WALL_FILL))
    }

    fn render_splitter(&self, entity: &Entity) -> Group {
        Self::footprint_with_tick(entity, "none")
    }

    fn render_asset(&self, entity: &Entity) -> Group {
        Group::new().add(Self::footprint(entity, "none"))
    }

    fn render_spaceship(&self, entity: &Entity) -> Group {
        Group::new().add(Self::footprint(entity, WALL_FILL))
    }

    fn render_rail(&self, entity: &Entity) -> Group {
        // Rails read better as a center stroke than a filled tile
        let (w, h) = entity.footprint();
        let line = match entity.direction.unwrap_or(0) {
            2 | 6 => Line::new()
                .set("x1", entity.x - w / 2.0)
                .set("y1", entity.y)
                .set("x2", entity.x + w / 2.0)
                .set("y2", entity.y),
            _ => Line::new()
                .set("x1", entity.x)
                .set("y1", entity.y - h / 2.0)
                .set("x2", entity.x)
                .set("y2", entity.y + h / 2.0),
        };
        Group::new().add(
            line.set("stroke", STROKE)
                .set("stroke-width", STROKE_WIDTH * 2.0),
        )
    }
}

//! Circle theme
//!
//! Renders every entity as one circle sized to its footprint. Much
//! cheaper to plot than the default theme and useful for getting a
//! quick density picture of a large base.

use svg::node::element::{Circle, Group};

use crate::types::Entity;

use super::Theme;

const STROKE: &str = "#333333";
const STROKE_WIDTH: f64 = 0.1;

/// One-circle-per-entity theme
#[derive(Debug, Default)]
pub struct CirclesTheme;

impl CirclesTheme {
    pub fn new() -> Self {
        Self
    }

    fn circle(entity: &Entity, fill: &str) -> Group {
        let (w, h) = entity.footprint();
        let radius = w.max(h) / 2.0;
        Group::new().add(
            Circle::new()
                .set("cx", entity.x)
                .set("cy", entity.y)
                .set("r", radius)
                .set("fill", fill)
                .set("stroke", STROKE)
                .set("stroke-width", STROKE_WIDTH),
        )
    }
}

impl Theme for CirclesTheme {
    fn render_belt(&self, entity: &Entity) -> Group {
        Self::circle(entity, "none")
    }

    fn render_wall(&self, entity: &Entity) -> Group {
        Self::circle(entity, "#999999")
    }

    fn render_splitter(&self, entity: &Entity) -> Group {
        Self::circle(entity, "none")
    }

    fn render_asset(&self, entity: &Entity) -> Group {
        Self::circle(entity, "none")
    }

    fn render_spaceship(&self, entity: &Entity) -> Group {
        Self::circle(entity, "#999999")
    }

    fn render_rail(&self, entity: &Entity) -> Group {
        Self::circle(entity, "none")
    }
}

//! Pluggable entity rendering themes
//!
//! A theme turns one entity record into drawable SVG shapes, one render
//! operation per entity category. The layout engine and grid generator
//! never depend on theme internals; the assembler only invokes the
//! trait methods.

use svg::node::element::Group;

use crate::types::{Category, Entity, Template};

mod circles;
mod default;

pub use circles::CirclesTheme;
pub use default::DefaultTheme;

/// One render operation per supported entity category.
///
/// Every method takes the entity in content coordinates and returns a
/// group positioned in the same coordinate space; the assembler applies
/// no further transforms.
pub trait Theme {
    fn render_belt(&self, entity: &Entity) -> Group;
    fn render_wall(&self, entity: &Entity) -> Group;
    fn render_splitter(&self, entity: &Entity) -> Group;
    fn render_asset(&self, entity: &Entity) -> Group;
    fn render_spaceship(&self, entity: &Entity) -> Group;
    fn render_rail(&self, entity: &Entity) -> Group;

    /// Dispatch to the render operation for a category
    fn render(&self, category: Category, entity: &Entity) -> Group {
        match category {
            Category::Belts => self.render_belt(entity),
            Category::Walls => self.render_wall(entity),
            Category::Splitters => self.render_splitter(entity),
            Category::Asset => self.render_asset(entity),
            Category::Spaceship => self.render_spaceship(entity),
            Category::Rails => self.render_rail(entity),
        }
    }
}

/// Instantiate the theme selected by a template name
pub fn theme_for(template: Template) -> Box<dyn Theme> {
    match template {
        Template::Default => Box::new(DefaultTheme::new()),
        Template::Circles => Box::new(CirclesTheme::new()),
    }
}

pub mod constants;
pub mod layout;
mod optimize;
mod options;
mod parse;
mod render;
mod theme;
mod types;

pub use optimize::optimize_svg;
pub use options::*;
pub use parse::{parse_blueprint, parse_blueprint_str};
pub use render::{DrawingSummary, build_document, create};
pub use theme::{CirclesTheme, DefaultTheme, Theme, theme_for};
pub use types::*;

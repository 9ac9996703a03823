//! Calligram Render Library
//!
//! SVG serialization and PNG export for Calligram scenes.

pub mod export;
pub mod shapes;
pub mod svg;

pub use export::{export_png, render_png, ExportError};
pub use shapes::shape_path;
pub use svg::render_svg;

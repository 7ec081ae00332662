//! Board image export.
//!
//! - `font`: built-in monospace glyphs, including box-drawing strokes
//! - `raster`: text → `RgbImage`, and file-to-PNG conversion

pub mod font;
pub mod raster;

pub use raster::{export_file, measure, text_to_image};

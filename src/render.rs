//! Preview rendering of computed frame states.
//!
//! Frame state becomes an SVG document, which `resvg` rasterizes into RGBA8 pixels. Encoding
//! the resulting PNG sequence into a video container is left to external tools.

pub mod raster;
pub mod sequence;
pub mod svg;

//! Rendering half of the pipeline: compositing detection records onto a
//! base raster, and generating the synthetic floor scene used for demos.

pub mod annotate;
pub mod font;
pub mod palette;
pub mod scene;

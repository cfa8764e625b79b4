//! GlyphCipher Render Backend
//!
//! Presentation surfaces that consume a [`CipherSequence`](glyphcipher_core::CipherSequence)
//! read-only:
//!
//! - [`chart`] - scatter plot data, the single-instance [`ChartSlot`], and a raster surface
//! - [`shape`] - radial closed-curve shape rendered as an SVG document
//! - [`raster`] - minimal RGBA pixel buffer with disc and line primitives
//! - [`png`] - deterministic PNG writer
//!
//! # Determinism
//!
//! Rendering uses fixed PNG compression and filter settings and no timestamps,
//! so identical input produces byte-identical files.

pub mod chart;
pub mod error;
pub mod png;
pub mod raster;
pub mod shape;

pub use chart::{ChartData, ChartPoint, ChartSlot, ChartSurface, RasterChart, RasterChartSurface};
pub use error::{RenderError, RenderResult};
pub use shape::{cardinal_closed_path, radial_points, shape_svg, ShapePoint};

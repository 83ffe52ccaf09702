//! Render adapter for hyperwire frames
//!
//! This crate draws [`Frame`](hyperwire_core::Frame)s produced by the geometry
//! engine onto anything that implements [`LineSurface`].
//!
//! ## Key Components
//!
//! - [`LineSurface`] - The drawing boundary: size, clear, stroke
//! - [`StrokeStyle`] - Depth weight to gradient opacity per segment kind
//! - [`draw_frame`] / [`DrawLayers`] - Stroke a frame, optionally by layer
//! - [`AsciiSurface`] - Terminal character grid
//! - [`SvgSurface`] - SVG document
//! - [`LineBuffer`] - Flat line list for GPU upload

pub mod surface;
pub mod stroke;
pub mod draw;
pub mod ascii;
pub mod svg;
pub mod buffer;

pub use surface::{LineSurface, Rgba, StrokedLine};
pub use stroke::{GradientFade, StrokeStyle};
pub use draw::{draw_frame, DrawLayers};
pub use ascii::AsciiSurface;
pub use svg::SvgSurface;
pub use buffer::{LineBuffer, LineVertex};

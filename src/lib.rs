//! hyperwire - rotating tesseract wireframe
//!
//! The binary wires the geometry engine to a terminal or SVG output. This
//! library exposes the configuration and systems so they can be tested.

pub mod config;
pub mod error;
pub mod systems;

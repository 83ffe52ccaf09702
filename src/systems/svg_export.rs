//! SVG export system
//!
//! Writes numbered SVG documents (`frame_0000.svg`, ...) into a directory.

use std::fs;
use std::path::{Path, PathBuf};
use hyperwire_core::GeometryEngine;
use hyperwire_render::{draw_frame, DrawLayers, LineSurface, StrokeStyle, SvgSurface};

use crate::config::SvgConfig;
use crate::error::AppError;
use super::Animator;

/// Renders frames to SVG files
pub struct SvgExportSystem {
    width: f64,
    height: f64,
    background: String,
    output_dir: PathBuf,
    style: StrokeStyle,
    layers: DrawLayers,
}

impl SvgExportSystem {
    pub fn new(config: &SvgConfig, style: StrokeStyle) -> Self {
        Self {
            width: config.width,
            height: config.height,
            background: config.background.clone(),
            output_dir: PathBuf::from(&config.output_dir),
            style,
            layers: DrawLayers::ALL,
        }
    }

    /// Write into a different directory
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Restrict drawing to some segment groups
    pub fn with_layers(mut self, layers: DrawLayers) -> Self {
        self.layers = layers;
        self
    }

    /// Path of the n-th frame file
    pub fn frame_path(&self, index: u64) -> PathBuf {
        self.output_dir.join(format!("frame_{:04}.svg", index))
    }

    /// Render the document for `angle`
    pub fn render(&self, engine: &GeometryEngine, angle: f64) -> Result<String, AppError> {
        let mut surface =
            SvgSurface::new(self.width, self.height).with_background(self.background.as_str());
        let (width, height) = surface.size();
        let frame = engine.frame_for_surface(angle, width, height)?;
        draw_frame(&mut surface, &frame, &self.style, self.layers);
        Ok(surface.finish())
    }

    /// Write `frames` consecutive frames (at least one)
    ///
    /// Returns the written paths in frame order.
    pub fn run(
        &self,
        engine: &GeometryEngine,
        mut animator: Animator,
        frames: u64,
    ) -> Result<Vec<PathBuf>, AppError> {
        let count = frames.max(1);
        fs::create_dir_all(&self.output_dir)?;
        log::info!("Writing {} SVG frame(s) to {}", count, self.output_dir.display());

        let mut written = Vec::with_capacity(count as usize);
        for index in 0..count {
            let document = self.render(engine, animator.angle())?;
            let path = self.frame_path(index);
            fs::write(&path, document)?;
            log::debug!("Wrote {}", path.display());
            written.push(path);
            animator.advance();
        }
        Ok(written)
    }
}

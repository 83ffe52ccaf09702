//! Line list recorder
//!
//! Records strokes as a flat line list of GPU-ready vertices (two per line),
//! the layout a line-list pipeline consumes directly.

use bytemuck::{Pod, Zeroable};
use crate::surface::{LineSurface, StrokedLine};

/// One endpoint of a recorded line
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Surface position
    pub position: [f32; 2],
    /// RGBA color at this endpoint
    pub color: [f32; 4],
}

/// A [`LineSurface`] that records line vertices instead of drawing
#[derive(Clone, Debug, Default)]
pub struct LineBuffer {
    width: f64,
    height: f64,
    vertices: Vec<LineVertex>,
    widths: Vec<f32>,
}

impl LineBuffer {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            vertices: Vec::with_capacity(64),
            widths: Vec::with_capacity(32),
        }
    }

    /// Recorded vertices, two per line
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Line width of each recorded line
    pub fn widths(&self) -> &[f32] {
        &self.widths
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// Raw vertex bytes for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl LineSurface for LineBuffer {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.widths.clear();
    }

    fn stroke(&mut self, line: &StrokedLine) {
        self.vertices.push(LineVertex {
            position: [line.from.x as f32, line.from.y as f32],
            color: line.start.to_array(),
        });
        self.vertices.push(LineVertex {
            position: [line.to.x as f32, line.to.y as f32],
            color: line.end.to_array(),
        });
        self.widths.push(line.width as f32);
    }
}

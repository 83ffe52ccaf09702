//! Per-frame output of the geometry engine

use hyperwire_math::Vec2;
use crate::cube::{CUBE_VERTEX_COUNT, TESSERACT_VERTEX_COUNT};
use crate::projection::ProjectedVertex;
use crate::topology::SegmentKind;

/// A projected segment ready to be stroked
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSegment {
    pub kind: SegmentKind,
    /// Tesseract vertex indices of the endpoints
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    /// Average depth of the two endpoints
    pub depth: f64,
    /// Display weight derived from `depth`
    pub weight: f64,
}

/// Everything needed to draw one animation frame
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Master angle after reduction into one period
    pub angle: f64,
    /// Inner corners 0..8, outer corners 8..16
    pub vertices: [ProjectedVertex; TESSERACT_VERTEX_COUNT],
    /// All 32 segments in draw order
    pub segments: Vec<FrameSegment>,
}

impl Frame {
    /// Projected corners of the inner cube
    pub fn inner(&self) -> &[ProjectedVertex] {
        &self.vertices[..CUBE_VERTEX_COUNT]
    }

    /// Projected corners of the outer cube
    pub fn outer(&self) -> &[ProjectedVertex] {
        &self.vertices[CUBE_VERTEX_COUNT..]
    }

    /// Segments of one kind, in draw order
    pub fn segments_of(&self, kind: SegmentKind) -> impl Iterator<Item = &FrameSegment> {
        self.segments.iter().filter(move |s| s.kind == kind)
    }

    /// Smallest axis-aligned box containing every vertex, as (min, max)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        self.vertices.iter().fold(
            (
                Vec2::new(f64::INFINITY, f64::INFINITY),
                Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            ),
            |(lo, hi), v| {
                (
                    Vec2::new(lo.x.min(v.position.x), lo.y.min(v.position.y)),
                    Vec2::new(hi.x.max(v.position.x), hi.y.max(v.position.y)),
                )
            },
        )
    }
}

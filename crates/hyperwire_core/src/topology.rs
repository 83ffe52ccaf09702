//! Edge and connector topology
//!
//! A tesseract has 32 edges: 12 per cube plus 8 connectors joining matching
//! corners of the two cubes. Indices refer to the vertex order of
//! [`HypercubeLayout::vertices`](crate::HypercubeLayout::vertices): inner
//! corners 0..8, outer corners 8..16.

use crate::cube::CUBE_VERTEX_COUNT;

/// The 12 edges of one cube, as corner indices
pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0), // z = -s face
    (4, 5), (5, 6), (6, 7), (7, 4), // z = +s face
    (0, 4), (1, 5), (2, 6), (3, 7), // between the faces
];

/// The 8 connectors, as (inner vertex, outer vertex) in tesseract indices
pub const CONNECTORS: [(usize, usize); 8] = [
    (0, 8), (1, 9), (2, 10), (3, 11),
    (4, 12), (5, 13), (6, 14), (7, 15),
];

/// Total segment count of one frame
pub const SEGMENT_COUNT: usize = CONNECTORS.len() + 2 * CUBE_EDGES.len();

/// Which part of the tesseract a segment belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Joins inner corner i to outer corner i (extension along W)
    Connector,
    /// Edge of the outer cube
    OuterEdge,
    /// Edge of the inner cube
    InnerEdge,
}

/// A segment between two tesseract vertices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub kind: SegmentKind,
    pub a: usize,
    pub b: usize,
}

impl Segment {
    pub const fn new(kind: SegmentKind, a: usize, b: usize) -> Self {
        Self { kind, a, b }
    }
}

/// All 32 segments in draw order: connectors, outer edges, inner edges
pub fn segments() -> [Segment; SEGMENT_COUNT] {
    let n = CUBE_EDGES.len();
    let c = CONNECTORS.len();
    std::array::from_fn(|i| {
        if i < c {
            let (a, b) = CONNECTORS[i];
            Segment::new(SegmentKind::Connector, a, b)
        } else if i < c + n {
            let (a, b) = CUBE_EDGES[i - c];
            Segment::new(SegmentKind::OuterEdge, a + CUBE_VERTEX_COUNT, b + CUBE_VERTEX_COUNT)
        } else {
            let (a, b) = CUBE_EDGES[i - c - n];
            Segment::new(SegmentKind::InnerEdge, a, b)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{CORNER_SIGNS, TESSERACT_VERTEX_COUNT};
    use std::collections::HashSet;

    #[test]
    fn test_segment_counts() {
        let segs = segments();
        assert_eq!(segs.len(), 32);
        let count = |kind| segs.iter().filter(|s| s.kind == kind).count();
        assert_eq!(count(SegmentKind::Connector), 8);
        assert_eq!(count(SegmentKind::OuterEdge), 12);
        assert_eq!(count(SegmentKind::InnerEdge), 12);
    }

    #[test]
    fn test_cube_edges_join_adjacent_corners() {
        // Adjacent corners differ in exactly one sign
        for &(a, b) in &CUBE_EDGES {
            let differing = (0..3)
                .filter(|&k| CORNER_SIGNS[a][k] != CORNER_SIGNS[b][k])
                .count();
            assert_eq!(differing, 1, "edge ({}, {}) is not a cube edge", a, b);
        }
    }

    #[test]
    fn test_segments_are_unique() {
        let mut seen = HashSet::new();
        for seg in segments() {
            let key = (seg.a.min(seg.b), seg.a.max(seg.b));
            assert!(seen.insert(key), "duplicate segment {:?}", key);
        }
    }

    #[test]
    fn test_every_vertex_has_degree_four() {
        // Each tesseract vertex meets 3 cube edges and 1 connector
        let mut degree = [0usize; TESSERACT_VERTEX_COUNT];
        for seg in segments() {
            degree[seg.a] += 1;
            degree[seg.b] += 1;
        }
        assert!(degree.iter().all(|&d| d == 4), "degrees: {:?}", degree);
    }

    #[test]
    fn test_segments_stay_within_their_cube() {
        for seg in segments() {
            match seg.kind {
                SegmentKind::InnerEdge => assert!(seg.a < 8 && seg.b < 8),
                SegmentKind::OuterEdge => assert!(seg.a >= 8 && seg.b >= 8),
                SegmentKind::Connector => assert_eq!(seg.b, seg.a + 8),
            }
        }
    }

    #[test]
    fn test_draw_order() {
        let segs = segments();
        assert_eq!(segs[0].kind, SegmentKind::Connector);
        assert_eq!(segs[8].kind, SegmentKind::OuterEdge);
        assert_eq!(segs[20].kind, SegmentKind::InnerEdge);
        assert_eq!(segs[31], Segment::new(SegmentKind::InnerEdge, 3, 7));
    }
}

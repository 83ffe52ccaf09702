//! Cube template and the two-cube tesseract layout
//!
//! A tesseract is drawn as two 3D cubes placed at different W positions with
//! matching corners joined. Both cubes come from the same 8-corner template so
//! that corner `i` of the inner cube and corner `i` of the outer cube are the
//! same logical corner.

use hyperwire_math::Vec4;
use serde::{Serialize, Deserialize};

/// Sign pattern of the 8 template corners
///
/// Ordered as a ring around the z = -s face followed by the same ring on the
/// z = +s face, so consecutive corners on a face share an edge.
pub const CORNER_SIGNS: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Number of corners in one cube
pub const CUBE_VERTEX_COUNT: usize = 8;

/// Number of vertices in the full tesseract (inner + outer cube)
pub const TESSERACT_VERTEX_COUNT: usize = 2 * CUBE_VERTEX_COUNT;

/// One cube of the tesseract: its size and where it sits along W
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubeLayer {
    /// Half the side length
    pub half_extent: f64,
    /// Fixed fourth coordinate of every corner
    pub w_offset: f64,
}

impl CubeLayer {
    pub const fn new(half_extent: f64, w_offset: f64) -> Self {
        Self { half_extent, w_offset }
    }

    /// Distance of every corner from the 4D origin
    pub fn corner_radius(&self) -> f64 {
        let s = self.half_extent;
        (3.0 * s * s + self.w_offset * self.w_offset).sqrt()
    }
}

/// Generate the 8 corners of a cube positioned in 4D
///
/// Corners follow [`CORNER_SIGNS`] order.
pub fn cube_vertices(layer: CubeLayer) -> [Vec4; CUBE_VERTEX_COUNT] {
    let s = layer.half_extent;
    CORNER_SIGNS.map(|[sx, sy, sz]| Vec4::new(sx * s, sy * s, sz * s, layer.w_offset))
}

/// Placement of the inner and outer cube
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HypercubeLayout {
    /// Smaller cube, at positive W
    pub inner: CubeLayer,
    /// Larger cube, at negative W
    pub outer: CubeLayer,
}

impl Default for HypercubeLayout {
    fn default() -> Self {
        Self {
            inner: CubeLayer::new(0.5, 0.5),
            outer: CubeLayer::new(1.0, -0.5),
        }
    }
}

impl HypercubeLayout {
    /// All 16 unrotated vertices: inner corners 0..8, outer corners 8..16
    pub fn vertices(&self) -> [Vec4; TESSERACT_VERTEX_COUNT] {
        let inner = cube_vertices(self.inner);
        let outer = cube_vertices(self.outer);
        std::array::from_fn(|i| {
            if i < CUBE_VERTEX_COUNT {
                inner[i]
            } else {
                outer[i - CUBE_VERTEX_COUNT]
            }
        })
    }

    /// Largest distance of any vertex from the origin
    ///
    /// Rotation preserves length, so this bounds every rotated coordinate.
    pub fn max_radius(&self) -> f64 {
        self.inner.corner_radius().max(self.outer.corner_radius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_vertex_order() {
        let v = cube_vertices(CubeLayer::new(1.0, -0.5));
        assert_eq!(v[0], Vec4::new(-1.0, -1.0, -1.0, -0.5));
        assert_eq!(v[1], Vec4::new(1.0, -1.0, -1.0, -0.5));
        assert_eq!(v[2], Vec4::new(1.0, 1.0, -1.0, -0.5));
        assert_eq!(v[7], Vec4::new(-1.0, 1.0, 1.0, -0.5));
    }

    #[test]
    fn test_cube_vertices_share_w() {
        let v = cube_vertices(CubeLayer::new(0.5, 0.5));
        assert!(v.iter().all(|p| p.w == 0.5));
        assert!(v.iter().all(|p| p.x.abs() == 0.5 && p.y.abs() == 0.5 && p.z.abs() == 0.5));
    }

    #[test]
    fn test_corners_are_distinct() {
        let v = cube_vertices(CubeLayer::new(1.0, 0.0));
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert_ne!(v[i], v[j], "corners {} and {} coincide", i, j);
            }
        }
    }

    #[test]
    fn test_layout_vertex_count_and_split() {
        let layout = HypercubeLayout::default();
        let v = layout.vertices();
        assert_eq!(v.len(), 16);
        assert!(v[..8].iter().all(|p| p.w == 0.5));
        assert!(v[8..].iter().all(|p| p.w == -0.5));
    }

    #[test]
    fn test_matching_corners_share_signs() {
        let v = HypercubeLayout::default().vertices();
        for i in 0..8 {
            let inner = v[i];
            let outer = v[i + 8];
            assert_eq!(inner.x.signum(), outer.x.signum());
            assert_eq!(inner.y.signum(), outer.y.signum());
            assert_eq!(inner.z.signum(), outer.z.signum());
        }
    }

    #[test]
    fn test_max_radius() {
        let layout = HypercubeLayout::default();
        // Outer corner (1, 1, 1, -0.5)
        assert!((layout.max_radius() - 3.25f64.sqrt()).abs() < 1e-12);
        for v in layout.vertices() {
            assert!(v.length() <= layout.max_radius() + 1e-12);
        }
    }
}

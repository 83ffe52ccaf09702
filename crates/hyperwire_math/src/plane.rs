//! Rotations in a single coordinate plane
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, XW, YZ, YW, ZW.
//! Every compound motion in this crate is built from [`rotate_2d`] applied
//! to one of these planes at a time.

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// Rotate the pair `(a, b)` by `angle` radians
///
/// Returns `(a cos θ - b sin θ, a sin θ + b cos θ)`.
#[inline]
pub fn rotate_2d(a: f64, b: f64, angle: f64) -> (f64, f64) {
    let (sin_a, cos_a) = angle.sin_cos();
    (a * cos_a - b * sin_a, a * sin_a + b * cos_a)
}

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    /// XY plane - spin in the screen plane
    XY,
    /// XZ plane - turn toward/away from the viewer
    XZ,
    /// YZ plane - tip toward/away from the viewer
    YZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::YZ,
        RotationPlane::XW,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Component indices (0 = x .. 3 = w) spanning this plane, in rotation order
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::YZ => (1, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// Whether rotating in this plane moves points along the W axis
    pub const fn involves_w(self) -> bool {
        self.axes().1 == 3
    }

    /// Two planes are disjoint when they share no axis, so they rotate
    /// independent coordinate pairs
    pub fn is_disjoint(self, other: RotationPlane) -> bool {
        let (a0, a1) = self.axes();
        let (b0, b1) = other.axes();
        a0 != b0 && a0 != b1 && a1 != b0 && a1 != b1
    }

    /// Rotate `v` by `angle` within this plane, leaving the other two
    /// components untouched
    pub fn rotate(self, v: Vec4, angle: f64) -> Vec4 {
        match self {
            RotationPlane::XY => {
                let (x, y) = rotate_2d(v.x, v.y, angle);
                Vec4::new(x, y, v.z, v.w)
            }
            RotationPlane::XZ => {
                let (x, z) = rotate_2d(v.x, v.z, angle);
                Vec4::new(x, v.y, z, v.w)
            }
            RotationPlane::YZ => {
                let (y, z) = rotate_2d(v.y, v.z, angle);
                Vec4::new(v.x, y, z, v.w)
            }
            RotationPlane::XW => {
                let (x, w) = rotate_2d(v.x, v.w, angle);
                Vec4::new(x, v.y, v.z, w)
            }
            RotationPlane::YW => {
                let (y, w) = rotate_2d(v.y, v.w, angle);
                Vec4::new(v.x, y, v.z, w)
            }
            RotationPlane::ZW => {
                let (z, w) = rotate_2d(v.z, v.w, angle);
                Vec4::new(v.x, v.y, z, w)
            }
        }
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RotationPlane::XY => "XY",
            RotationPlane::XZ => "XZ",
            RotationPlane::YZ => "YZ",
            RotationPlane::XW => "XW",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    #[test]
    fn test_rotate_2d_quarter_turn() {
        let (a, b) = rotate_2d(1.0, 0.0, PI / 2.0);
        assert!(approx_eq(a, 0.0));
        assert!(approx_eq(b, 1.0));
    }

    #[test]
    fn test_rotate_2d_zero_angle_is_exact() {
        assert_eq!(rotate_2d(-0.5, 0.75, 0.0), (-0.5, 0.75));
    }

    #[test]
    fn test_rotate_2d_preserves_squared_norm() {
        let pairs = [(1.0, 0.0), (-0.5, 0.5), (1.0, -0.5), (0.3, 0.9)];
        let mut angle = -7.0;
        while angle < 7.0 {
            for &(a, b) in &pairs {
                let (ra, rb) = rotate_2d(a, b, angle);
                assert!(
                    (ra * ra + rb * rb - (a * a + b * b)).abs() < EPSILON,
                    "norm drift at angle {}", angle
                );
            }
            angle += 0.173;
        }
    }

    #[test]
    fn test_xw_rotation_90() {
        // Rotating X by 90° in XW plane should give W
        let rotated = RotationPlane::XW.rotate(Vec4::X, PI / 2.0);
        assert!(vec_approx_eq(rotated, Vec4::W), "Expected W, got {:?}", rotated);
    }

    #[test]
    fn test_yz_rotation_leaves_x_and_w() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let rotated = RotationPlane::YZ.rotate(v, 1.1);
        assert_eq!(rotated.x, 1.0);
        assert_eq!(rotated.w, 4.0);
    }

    #[test]
    fn test_plane_rotation_preserves_length() {
        let v = Vec4::new(1.0, -1.0, 1.0, -0.5);
        for plane in RotationPlane::ALL {
            let rotated = plane.rotate(v, 1.23);
            assert!(approx_eq(v.length(), rotated.length()), "{} changed length", plane);
        }
    }

    #[test]
    fn test_involves_w() {
        let w_planes: Vec<_> = RotationPlane::ALL.iter().filter(|p| p.involves_w()).collect();
        assert_eq!(w_planes, vec![&RotationPlane::XW, &RotationPlane::YW, &RotationPlane::ZW]);
    }

    #[test]
    fn test_disjoint_planes() {
        assert!(RotationPlane::XW.is_disjoint(RotationPlane::YZ));
        assert!(RotationPlane::XY.is_disjoint(RotationPlane::ZW));
        assert!(!RotationPlane::XW.is_disjoint(RotationPlane::XY));
        assert!(!RotationPlane::ZW.is_disjoint(RotationPlane::ZW));
    }
}

//! 4D -> 3D -> 2D projection
//!
//! Two perspective divisions in a row:
//!
//! 1. Divide out W: `k3 = 1 / (D4 - w)`, `(x3, y3, z3) = (x, y, z) * k3`
//! 2. Divide out Z: `k2 = 1 / (D3 - z3)`, `(x2, y2) = (x3, y3) * k2`
//!
//! `k2` is kept as the vertex depth: it grows as a point approaches the viewer.
//!
//! Both denominators must stay well away from zero for every reachable
//! rotated point. [`Projector::clearance`] proves that for a given bounding
//! radius; the engine calls it once at construction.

use bytemuck::{Pod, Zeroable};
use hyperwire_math::{Vec2, Vec4};
use crate::{GeometryError, Viewport};

/// Smallest denominator margin accepted by [`Projector::clearance`]
pub const MIN_CLEARANCE: f64 = 0.25;

/// Denominators below this are clamped at projection time
pub const MIN_DENOMINATOR: f64 = 1e-3;

/// A vertex after projection onto the surface
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ProjectedVertex {
    /// Surface position
    pub position: Vec2,
    /// Perspective weight of the 3D->2D step (styling only)
    pub depth: f64,
}

/// Proven bounds of a projector over a ball of rotated points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clearance {
    /// Smallest possible `D4 - w`
    pub w_margin: f64,
    /// Largest possible `|z3|`
    pub max_z: f64,
    /// Smallest possible `D3 - z3`
    pub view_margin: f64,
    /// Smallest reachable depth
    pub depth_min: f64,
    /// Largest reachable depth
    pub depth_max: f64,
}

/// Two-stage perspective projector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    w_distance: f64,
    view_distance: f64,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            w_distance: Self::DEFAULT_W_DISTANCE,
            view_distance: Self::DEFAULT_VIEW_DISTANCE,
        }
    }
}

impl Projector {
    pub const DEFAULT_W_DISTANCE: f64 = 5.0;
    pub const DEFAULT_VIEW_DISTANCE: f64 = 4.0;

    /// Create a projector
    ///
    /// # Arguments
    /// * `w_distance` - D4, distance of the 4D eye along W
    /// * `view_distance` - D3, distance of the 3D camera along Z
    pub fn new(w_distance: f64, view_distance: f64) -> Result<Self, GeometryError> {
        for (name, value) in [("w_distance", w_distance), ("view_distance", view_distance)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::InvalidDistance { name, value });
            }
        }
        Ok(Self { w_distance, view_distance })
    }

    #[inline]
    pub fn w_distance(&self) -> f64 {
        self.w_distance
    }

    #[inline]
    pub fn view_distance(&self) -> f64 {
        self.view_distance
    }

    /// Check both denominators against geometry of radius `max_radius`
    ///
    /// Rotation preserves length, so `|w|` and `|z|` never exceed the radius.
    /// After the first division `|z3| <= r / (D4 - r)`.
    pub fn clearance(&self, max_radius: f64) -> Result<Clearance, GeometryError> {
        let r = max_radius.abs();

        let w_margin = self.w_distance - r;
        if w_margin < MIN_CLEARANCE {
            return Err(GeometryError::InsufficientClearance {
                name: "w_distance",
                distance: self.w_distance,
                required: r + MIN_CLEARANCE,
            });
        }

        let max_z = r / w_margin;
        let view_margin = self.view_distance - max_z;
        if view_margin < MIN_CLEARANCE {
            return Err(GeometryError::InsufficientClearance {
                name: "view_distance",
                distance: self.view_distance,
                required: max_z + MIN_CLEARANCE,
            });
        }

        Ok(Clearance {
            w_margin,
            max_z,
            view_margin,
            depth_min: 1.0 / (self.view_distance + max_z),
            depth_max: 1.0 / view_margin,
        })
    }

    /// First stage: divide out W
    #[inline]
    pub fn to_3d(&self, v: Vec4) -> [f64; 3] {
        let k3 = guarded_inverse(self.w_distance - v.w, "w");
        [v.x * k3, v.y * k3, v.z * k3]
    }

    /// Project a rotated 4D point onto the surface
    pub fn project(&self, v: Vec4, viewport: &Viewport) -> ProjectedVertex {
        let [x3, y3, z3] = self.to_3d(v);
        let k2 = guarded_inverse(self.view_distance - z3, "z");
        ProjectedVertex {
            position: viewport.to_screen(x3 * k2, y3 * k2),
            depth: k2,
        }
    }
}

/// `1 / denominator`, clamping a near-zero denominator
///
/// Validated projectors never reach the clamp; hitting it means the
/// clearance check was bypassed.
#[inline]
fn guarded_inverse(denominator: f64, stage: &str) -> f64 {
    if denominator < MIN_DENOMINATOR {
        log::error!(
            "projection denominator for {} collapsed to {}; clamping to {}",
            stage, denominator, MIN_DENOMINATOR
        );
        debug_assert!(
            denominator >= MIN_DENOMINATOR,
            "degenerate {} denominator {}",
            stage,
            denominator
        );
        return 1.0 / MIN_DENOMINATOR;
    }
    1.0 / denominator
}

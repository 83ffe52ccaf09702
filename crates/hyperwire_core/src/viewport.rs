//! Mapping from unit geometry to surface coordinates

use hyperwire_math::Vec2;
use crate::GeometryError;

/// Where projected geometry lands on the drawing surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Surface midpoint
    pub center: Vec2,
    /// Surface units per projected unit
    pub view_scale: f64,
}

impl Viewport {
    pub const fn new(center: Vec2, view_scale: f64) -> Self {
        Self { center, view_scale }
    }

    /// Center on a `width` x `height` surface, scaling by the smaller side
    ///
    /// Projected coordinates are small (a few tenths of a unit), so `factor`
    /// is typically well above 1.
    pub fn fit(width: f64, height: f64, factor: f64) -> Result<Self, GeometryError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(GeometryError::InvalidViewport(format!(
                "surface size must be positive, got {}x{}",
                width, height
            )));
        }
        if !valid(factor) {
            return Err(GeometryError::InvalidViewport(format!(
                "scale factor must be positive, got {}",
                factor
            )));
        }

        Ok(Self {
            center: Vec2::new(width * 0.5, height * 0.5),
            view_scale: width.min(height) * factor,
        })
    }

    /// Map a projected 2D coordinate onto the surface
    #[inline]
    pub fn to_screen(&self, x: f64, y: f64) -> Vec2 {
        self.center + Vec2::new(x, y) * self.view_scale
    }
}

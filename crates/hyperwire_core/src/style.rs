//! Depth-to-weight mapping
//!
//! Turns a perspective depth into a bounded display weight (opacity or line
//! intensity): `clamp(base + depth * gain, min_weight, max_weight)`.

use serde::{Serialize, Deserialize};
use crate::GeometryError;

/// Affine-then-clamp depth style
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthStyle {
    pub base: f64,
    pub gain: f64,
    pub min_weight: f64,
    pub max_weight: f64,
}

impl Default for DepthStyle {
    fn default() -> Self {
        Self {
            base: 0.2,
            gain: 2.0,
            min_weight: 0.2,
            max_weight: 1.0,
        }
    }
}

impl DepthStyle {
    /// Reject styles that are not monotonic or have an empty range
    pub fn validate(&self) -> Result<(), GeometryError> {
        let fields = [
            ("base", self.base),
            ("gain", self.gain),
            ("min_weight", self.min_weight),
            ("max_weight", self.max_weight),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GeometryError::InvalidStyle(format!("{} is not finite ({})", name, value)));
        }
        if self.gain < 0.0 {
            return Err(GeometryError::InvalidStyle(format!(
                "gain must be non-negative so nearer edges are never fainter, got {}",
                self.gain
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(GeometryError::InvalidStyle(format!(
                "min_weight {} exceeds max_weight {}",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }

    /// Display weight for a depth value
    #[inline]
    pub fn weight(&self, depth: f64) -> f64 {
        (self.base + depth * self.gain).clamp(self.min_weight, self.max_weight)
    }

    /// Display weight of a segment, from the average of its endpoint depths
    #[inline]
    pub fn segment_weight(&self, depth_a: f64, depth_b: f64) -> f64 {
        self.weight((depth_a + depth_b) * 0.5)
    }
}

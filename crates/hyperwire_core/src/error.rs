//! Geometry engine error types
//!
//! Every variant is a configuration problem caught when the engine is built.
//! Projecting a frame never fails.

use std::fmt;
use hyperwire_math::RotationError;

/// Error type for building the geometry engine
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Cube half-extent must be positive and finite
    InvalidScale(f64),
    /// A projection distance is not positive and finite
    InvalidDistance {
        name: &'static str,
        value: f64,
    },
    /// A projection distance leaves too little room for the rotated geometry
    InsufficientClearance {
        name: &'static str,
        distance: f64,
        required: f64,
    },
    /// Viewport size or scale is not positive and finite
    InvalidViewport(String),
    /// Depth style parameters are inconsistent
    InvalidStyle(String),
    /// The compound rotation is degenerate
    Rotation(RotationError),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidScale(s) => {
                write!(f, "cube half-extent must be positive, got {}", s)
            }
            GeometryError::InvalidDistance { name, value } => {
                write!(f, "{} must be positive and finite, got {}", name, value)
            }
            GeometryError::InsufficientClearance { name, distance, required } => write!(
                f,
                "{} = {} is too close to the geometry; needs more than {}",
                name, distance, required
            ),
            GeometryError::InvalidViewport(msg) => write!(f, "invalid viewport: {}", msg),
            GeometryError::InvalidStyle(msg) => write!(f, "invalid depth style: {}", msg),
            GeometryError::Rotation(err) => write!(f, "invalid rotation: {}", err),
        }
    }
}

impl std::error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeometryError::Rotation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RotationError> for GeometryError {
    fn from(err: RotationError) -> Self {
        GeometryError::Rotation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperwire_math::RotationPlane;

    #[test]
    fn test_display_clearance() {
        let err = GeometryError::InsufficientClearance {
            name: "w_distance",
            distance: 1.5,
            required: 2.3,
        };
        let msg = err.to_string();
        assert!(msg.contains("w_distance"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn test_rotation_error_converts_with_source() {
        use std::error::Error;
        let err: GeometryError = RotationError::ZeroRate(RotationPlane::XW).into();
        assert!(err.to_string().contains("XW"));
        assert!(err.source().is_some());
    }
}

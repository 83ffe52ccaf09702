//! 4D Mathematics Library
//!
//! This crate provides the vector and rotation types the hyperwire geometry
//! engine is built from.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec2`] - 2D point on the drawing surface
//! - [`RotationPlane`] - One of the 6 planes of 4D rotation
//! - [`CompoundRotation`] - Several plane rotations driven by one master angle

mod vec4;
mod vec2;
pub mod plane;
pub mod compound;

pub use vec4::Vec4;
pub use vec2::Vec2;
pub use plane::{rotate_2d, RotationPlane};
pub use compound::{
    CompoundRotation, PlaneSpin, RotationError, DEFAULT_RATE_DENOMINATOR, DEFAULT_SPINS,
};

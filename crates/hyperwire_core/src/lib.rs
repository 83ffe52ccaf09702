//! Geometry engine for the rotating tesseract
//!
//! Builds the 16 tesseract vertices from two cubes at different W positions,
//! rotates them with a [`CompoundRotation`](hyperwire_math::CompoundRotation),
//! projects them 4D -> 3D -> 2D and weights every segment by depth.
//!
//! ## Key Components
//!
//! - [`GeometryEngine`] - Validated, read-only pipeline; `frame(angle, viewport)`
//! - [`HypercubeLayout`] / [`CubeLayer`] - The two cubes and their W offsets
//! - [`Projector`] - Two-stage perspective projection with proven clearance
//! - [`DepthStyle`] - Depth to display weight mapping
//! - [`topology`] - Static edge and connector tables

pub mod cube;
pub mod topology;
pub mod projection;
pub mod style;
pub mod frame;
pub mod engine;
mod viewport;
mod error;

pub use cube::{cube_vertices, CubeLayer, HypercubeLayout, CORNER_SIGNS, TESSERACT_VERTEX_COUNT};
pub use topology::{Segment, SegmentKind, CONNECTORS, CUBE_EDGES, SEGMENT_COUNT};
pub use projection::{Clearance, ProjectedVertex, Projector};
pub use style::DepthStyle;
pub use frame::{Frame, FrameSegment};
pub use engine::{EngineParams, GeometryEngine, DEFAULT_VIEW_SCALE_FACTOR};
pub use viewport::Viewport;
pub use error::GeometryError;

// Re-export math types for convenience
pub use hyperwire_math::{CompoundRotation, PlaneSpin, RotationPlane, Vec2, Vec4};

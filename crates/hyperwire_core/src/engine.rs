//! The geometry engine
//!
//! Holds only read-only state: the 16 template vertices, the compound
//! rotation, the projector and the depth style. Every frame is derived from
//! the master angle alone, so one engine can be shared freely between threads
//! (for example to precompute frames ahead of display).

use hyperwire_math::{CompoundRotation, Vec4};
use crate::cube::{HypercubeLayout, TESSERACT_VERTEX_COUNT};
use crate::frame::{Frame, FrameSegment};
use crate::projection::{Clearance, Projector};
use crate::style::DepthStyle;
use crate::topology;
use crate::{GeometryError, Viewport};

/// Default ratio of view scale to the smaller surface side
pub const DEFAULT_VIEW_SCALE_FACTOR: f64 = 6.0;

/// Parameters of the geometry engine
#[derive(Clone, Debug, PartialEq)]
pub struct EngineParams {
    pub layout: HypercubeLayout,
    pub rotation: CompoundRotation,
    /// D4, see [`Projector`]
    pub w_distance: f64,
    /// D3, see [`Projector`]
    pub view_distance: f64,
    pub style: DepthStyle,
    /// Used by [`GeometryEngine::frame_for_surface`]
    pub view_scale_factor: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            layout: HypercubeLayout::default(),
            rotation: CompoundRotation::default(),
            w_distance: Projector::DEFAULT_W_DISTANCE,
            view_distance: Projector::DEFAULT_VIEW_DISTANCE,
            style: DepthStyle::default(),
            view_scale_factor: DEFAULT_VIEW_SCALE_FACTOR,
        }
    }
}

/// Rotates and projects the tesseract for any master angle
#[derive(Clone, Debug)]
pub struct GeometryEngine {
    base: [Vec4; TESSERACT_VERTEX_COUNT],
    layout: HypercubeLayout,
    rotation: CompoundRotation,
    projector: Projector,
    clearance: Clearance,
    style: DepthStyle,
    view_scale_factor: f64,
}

impl GeometryEngine {
    /// Validate parameters and build the engine
    ///
    /// Fails if a cube is empty, if either projection distance is too close
    /// to the rotated geometry, or if the style is not monotonic.
    pub fn new(params: EngineParams) -> Result<Self, GeometryError> {
        for layer in [params.layout.inner, params.layout.outer] {
            if !layer.half_extent.is_finite() || layer.half_extent <= 0.0 {
                return Err(GeometryError::InvalidScale(layer.half_extent));
            }
            if !layer.w_offset.is_finite() {
                return Err(GeometryError::InvalidDistance {
                    name: "w_offset",
                    value: layer.w_offset,
                });
            }
        }
        if !params.view_scale_factor.is_finite() || params.view_scale_factor <= 0.0 {
            return Err(GeometryError::InvalidViewport(format!(
                "view scale factor must be positive, got {}",
                params.view_scale_factor
            )));
        }
        params.style.validate()?;

        let projector = Projector::new(params.w_distance, params.view_distance)?;
        let clearance = projector.clearance(params.layout.max_radius())?;

        log::debug!(
            "Projection clearance: D4 - |w| >= {:.3}, D3 - |z3| >= {:.3}, depth in [{:.4}, {:.4}]",
            clearance.w_margin,
            clearance.view_margin,
            clearance.depth_min,
            clearance.depth_max
        );
        log::debug!(
            "Rotation: {} planes, period {:.4} rad",
            params.rotation.spins().len(),
            params.rotation.period()
        );

        Ok(Self {
            base: params.layout.vertices(),
            layout: params.layout,
            rotation: params.rotation,
            projector,
            clearance,
            style: params.style,
            view_scale_factor: params.view_scale_factor,
        })
    }

    pub fn layout(&self) -> &HypercubeLayout {
        &self.layout
    }

    pub fn rotation(&self) -> &CompoundRotation {
        &self.rotation
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    pub fn style(&self) -> &DepthStyle {
        &self.style
    }

    /// Proven denominator margins and depth range
    pub fn clearance(&self) -> &Clearance {
        &self.clearance
    }

    /// Viewport filling a surface of the given size
    pub fn viewport(&self, width: f64, height: f64) -> Result<Viewport, GeometryError> {
        Viewport::fit(width, height, self.view_scale_factor)
    }

    /// The 16 vertices rotated to `angle`, before projection
    pub fn rotated_vertices(&self, angle: f64) -> [Vec4; TESSERACT_VERTEX_COUNT] {
        self.base.map(|v| self.rotation.rotate(v, angle))
    }

    /// Compute the frame for a master angle
    pub fn frame(&self, angle: f64, viewport: &Viewport) -> Frame {
        let vertices = self
            .rotated_vertices(angle)
            .map(|v| self.projector.project(v, viewport));

        let segments = topology::segments()
            .iter()
            .map(|seg| {
                let (a, b) = (vertices[seg.a], vertices[seg.b]);
                FrameSegment {
                    kind: seg.kind,
                    a: seg.a,
                    b: seg.b,
                    from: a.position,
                    to: b.position,
                    depth: (a.depth + b.depth) * 0.5,
                    weight: self.style.segment_weight(a.depth, b.depth),
                }
            })
            .collect();

        Frame {
            angle: self.rotation.reduce(angle),
            vertices,
            segments,
        }
    }

    /// Compute the frame for a surface of the given size
    pub fn frame_for_surface(
        &self,
        angle: f64,
        width: f64,
        height: f64,
    ) -> Result<Frame, GeometryError> {
        let viewport = self.viewport(width, height)?;
        Ok(self.frame(angle, &viewport))
    }
}

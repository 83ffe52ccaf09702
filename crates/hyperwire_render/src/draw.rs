//! Drawing a frame onto a surface

use bitflags::bitflags;
use hyperwire_core::{Frame, SegmentKind};
use crate::stroke::StrokeStyle;
use crate::surface::LineSurface;

bitflags! {
    /// Which groups of segments to draw
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct DrawLayers: u8 {
        /// Lines joining matching inner and outer corners
        const CONNECTORS = 1 << 0;
        /// Edges of the outer cube
        const OUTER = 1 << 1;
        /// Edges of the inner cube
        const INNER = 1 << 2;
        /// Full tesseract
        const ALL = Self::CONNECTORS.bits() | Self::OUTER.bits() | Self::INNER.bits();
    }
}

impl Default for DrawLayers {
    fn default() -> Self {
        Self::ALL
    }
}

impl DrawLayers {
    /// Layer a segment kind belongs to
    pub fn for_kind(kind: SegmentKind) -> Self {
        match kind {
            SegmentKind::Connector => Self::CONNECTORS,
            SegmentKind::OuterEdge => Self::OUTER,
            SegmentKind::InnerEdge => Self::INNER,
        }
    }
}

/// Clear the surface and stroke the selected segments in frame order
///
/// Frame order puts connectors first and the inner cube last, so the inner
/// cube is painted on top. Returns the number of lines stroked.
pub fn draw_frame<S: LineSurface + ?Sized>(
    surface: &mut S,
    frame: &Frame,
    style: &StrokeStyle,
    layers: DrawLayers,
) -> usize {
    surface.clear();

    let mut drawn = 0;
    for segment in &frame.segments {
        if layers.contains(DrawLayers::for_kind(segment.kind)) {
            surface.stroke(&style.stroke_for(segment));
            drawn += 1;
        }
    }

    log::trace!("Drew {} segments at angle {:.4}", drawn, frame.angle);
    drawn
}

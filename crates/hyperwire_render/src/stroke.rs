//! Segment styling
//!
//! Every segment is a blue-to-cyan gradient whose opacity follows the
//! segment's depth weight. Connectors are drawn a little fainter than cube
//! edges so the two cubes read as the primary shape.

use hyperwire_core::{FrameSegment, SegmentKind};
use crate::surface::{Rgba, StrokedLine};

/// Opacity multipliers at the start and end of a gradient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientFade {
    pub start: f32,
    pub end: f32,
}

/// How frame segments are turned into stroked lines
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub start_color: Rgba,
    pub end_color: Rgba,
    pub edge_fade: GradientFade,
    pub connector_fade: GradientFade,
    pub line_width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            start_color: Rgba::BLUE,
            end_color: Rgba::CYAN,
            edge_fade: GradientFade { start: 1.0, end: 0.8 },
            connector_fade: GradientFade { start: 0.8, end: 0.6 },
            line_width: 2.0,
        }
    }
}

impl StrokeStyle {
    /// Same style with a different line width
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    fn fade(&self, kind: SegmentKind) -> GradientFade {
        match kind {
            SegmentKind::Connector => self.connector_fade,
            SegmentKind::OuterEdge | SegmentKind::InnerEdge => self.edge_fade,
        }
    }

    /// Style one frame segment
    pub fn stroke_for(&self, segment: &FrameSegment) -> StrokedLine {
        let fade = self.fade(segment.kind);
        let weight = segment.weight as f32;
        StrokedLine {
            from: segment.from,
            to: segment.to,
            start: self.start_color.with_alpha(weight * fade.start),
            end: self.end_color.with_alpha(weight * fade.end),
            width: self.line_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperwire_core::Vec2;

    fn segment(kind: SegmentKind, weight: f64) -> FrameSegment {
        FrameSegment {
            kind,
            a: 0,
            b: 1,
            from: Vec2::new(0.0, 0.0),
            to: Vec2::new(10.0, 0.0),
            depth: 0.25,
            weight,
        }
    }

    #[test]
    fn test_edge_opacity_follows_weight() {
        let line = StrokeStyle::default().stroke_for(&segment(SegmentKind::OuterEdge, 0.5));
        assert!((line.start.a - 0.5).abs() < 1e-6);
        assert!((line.end.a - 0.4).abs() < 1e-6);
        assert_eq!(line.width, 2.0);
    }

    #[test]
    fn test_connectors_are_fainter() {
        let style = StrokeStyle::default();
        let edge = style.stroke_for(&segment(SegmentKind::InnerEdge, 0.7));
        let connector = style.stroke_for(&segment(SegmentKind::Connector, 0.7));
        assert!(connector.start.a < edge.start.a);
        assert!(connector.end.a < edge.end.a);
    }

    #[test]
    fn test_endpoints_are_kept() {
        let line = StrokeStyle::default().stroke_for(&segment(SegmentKind::Connector, 1.0));
        assert_eq!(line.from, Vec2::new(0.0, 0.0));
        assert_eq!(line.to, Vec2::new(10.0, 0.0));
    }
}

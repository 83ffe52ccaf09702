//! SVG document surface
//!
//! Each stroke becomes a `<line>` painted with its own user-space linear
//! gradient, so the color runs along the segment like the on-screen version.

use std::fmt::Write as _;
use crate::surface::{LineSurface, Rgba, StrokedLine};

/// Builds an SVG document from stroked lines
pub struct SvgSurface {
    width: f64,
    height: f64,
    background: String,
    defs: String,
    body: String,
    count: usize,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: "#000000".to_string(),
            defs: String::new(),
            body: String::new(),
            count: 0,
        }
    }

    /// Set the background fill (any SVG color string)
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Number of lines stroked since the last clear
    pub fn line_count(&self) -> usize {
        self.count
    }

    /// Render the complete document
    pub fn finish(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>\n",
            w = self.width,
            h = self.height,
            bg = self.background,
        );
        if !self.defs.is_empty() {
            svg.push_str("<defs>\n");
            svg.push_str(&self.defs);
            svg.push_str("</defs>\n");
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

fn rgb(color: Rgba) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("rgb({},{},{})", r, g, b)
}

impl LineSurface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.defs.clear();
        self.body.clear();
        self.count = 0;
    }

    fn stroke(&mut self, line: &StrokedLine) {
        let id = format!("g{}", self.count);
        let (x1, y1, x2, y2) = (line.from.x, line.from.y, line.to.x, line.to.y);

        // Writing to a String cannot fail
        let _ = writeln!(
            self.defs,
            "  <linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" \
             x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\">\
             <stop offset=\"0\" stop-color=\"{c0}\" stop-opacity=\"{a0:.3}\"/>\
             <stop offset=\"1\" stop-color=\"{c1}\" stop-opacity=\"{a1:.3}\"/>\
             </linearGradient>",
            c0 = rgb(line.start),
            a0 = line.start.a,
            c1 = rgb(line.end),
            a1 = line.end.a,
        );
        let _ = writeln!(
            self.body,
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" \
             stroke=\"url(#{id})\" stroke-width=\"{w}\" stroke-linecap=\"round\"/>",
            w = line.width,
        );
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperwire_math::Vec2;

    fn line() -> StrokedLine {
        StrokedLine {
            from: Vec2::new(10.0, 20.0),
            to: Vec2::new(30.5, 40.25),
            start: Rgba::BLUE.with_alpha(0.75),
            end: Rgba::CYAN.with_alpha(0.5),
            width: 2.0,
        }
    }

    #[test]
    fn test_empty_document() {
        let svg = SvgSurface::new(300.0, 200.0).finish();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"300\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_stroke_emits_line_and_gradient() {
        let mut surface = SvgSurface::new(300.0, 200.0);
        surface.stroke(&line());
        let svg = surface.finish();
        assert!(svg.contains("<line x1=\"10.00\" y1=\"20.00\" x2=\"30.50\" y2=\"40.25\""));
        assert!(svg.contains("stroke=\"url(#g0)\""));
        assert!(svg.contains("<linearGradient id=\"g0\""));
        assert!(svg.contains("stop-opacity=\"0.750\""));
        assert!(svg.contains("stop-color=\"rgb(0,122,255)\""));
    }

    #[test]
    fn test_gradient_ids_are_unique() {
        let mut surface = SvgSurface::new(300.0, 200.0);
        surface.stroke(&line());
        surface.stroke(&line());
        let svg = surface.finish();
        assert!(svg.contains("id=\"g0\""));
        assert!(svg.contains("id=\"g1\""));
        assert_eq!(surface.line_count(), 2);
    }

    #[test]
    fn test_clear_and_background() {
        let mut surface = SvgSurface::new(100.0, 100.0).with_background("#101020");
        surface.stroke(&line());
        surface.clear();
        let svg = surface.finish();
        assert!(!svg.contains("<line"));
        assert!(svg.contains("fill=\"#101020\""));
    }
}

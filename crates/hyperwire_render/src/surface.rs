//! The line-drawing boundary
//!
//! Anything that can stroke a straight line with a two-stop color gradient can
//! display a frame. Surfaces work in their own units; the geometry engine is
//! told the surface size through [`LineSurface::size`].

use hyperwire_math::Vec2;

/// RGBA color, components in `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLUE: Self = Self::rgb(0.0, 0.48, 1.0);
    pub const CYAN: Self = Self::rgb(0.2, 0.68, 0.9);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Component-wise interpolation
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// 8-bit RGB channels, ignoring alpha
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A line with a gradient from `start` (at `from`) to `end` (at `to`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokedLine {
    pub from: Vec2,
    pub to: Vec2,
    pub start: Rgba,
    pub end: Rgba,
    pub width: f64,
}

/// A 2D surface that can draw styled line segments
pub trait LineSurface {
    /// Drawable size as (width, height) in surface units
    fn size(&self) -> (f64, f64);

    /// Erase everything drawn so far
    fn clear(&mut self);

    /// Draw one line
    fn stroke(&mut self, line: &StrokedLine);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgba::BLUE.with_alpha(1.5).a, 1.0);
        assert_eq!(Rgba::BLUE.with_alpha(-0.5).a, 0.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgba::rgb(0.0, 0.0, 0.0);
        let b = Rgba::rgb(1.0, 1.0, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5).r, 0.5);
    }

    #[test]
    fn test_to_rgb8() {
        assert_eq!(Rgba::rgb(1.0, 0.0, 0.5).to_rgb8(), [255, 0, 128]);
    }
}

//! ASCII line rasterizer for terminal output
//!
//! Lines are stepped cell by cell (DDA). Each cell keeps the brightest stroke
//! that crossed it; brightness picks a character from a luminosity ramp and
//! the stroke color is emitted through crossterm.

use crossterm::{
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use crate::surface::{LineSurface, Rgba, StrokedLine};

/// Character luminosity ramp (dimmest to brightest)
const LUMINOSITY_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Terminal cells are about twice as tall as they are wide
pub const CELL_ASPECT: f64 = 2.0;

/// Upper bound on DDA steps for a single line
const MAX_LINE_STEPS: usize = 16_384;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Cell {
    intensity: f32,
    color: Rgba,
}

/// Character grid that implements [`LineSurface`]
///
/// Surface units are columns horizontally and half-rows vertically, so a
/// square in surface units looks square on screen.
pub struct AsciiSurface {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl AsciiSurface {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    fn glyph(intensity: f32) -> char {
        if intensity <= 0.0 {
            return ' ';
        }
        let last = LUMINOSITY_RAMP.len() - 1;
        let index = (intensity.clamp(0.0, 1.0) * last as f32).round() as usize;
        LUMINOSITY_RAMP[index.min(last)]
    }

    fn plot(&mut self, x: f64, y: f64, color: Rgba) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (col, row) = (x as usize, y as usize);
        if col >= self.cols || row >= self.rows {
            return;
        }
        let cell = &mut self.cells[row * self.cols + col];
        if color.a > cell.intensity {
            *cell = Cell { intensity: color.a, color };
        }
    }

    /// Character at a cell, `' '` when nothing was drawn there
    pub fn char_at(&self, col: usize, row: usize) -> char {
        self.cells
            .get(row * self.cols + col)
            .filter(|_| col < self.cols)
            .map_or(' ', |cell| Self::glyph(cell.intensity))
    }

    /// The grid as plain text, one string per row
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| self.char_at(col, row)).collect())
            .collect()
    }

    /// Write the grid to a terminal, starting at the top-left corner
    pub fn present<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            writer.queue(MoveTo(0, row as u16))?;
            for col in 0..self.cols {
                let cell = self.cells[row * self.cols + col];
                if cell.intensity <= 0.0 {
                    writer.queue(Print(' '))?;
                    continue;
                }
                let [r, g, b] = cell.color.to_rgb8();
                writer.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                writer.queue(Print(Self::glyph(cell.intensity)))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl LineSurface for AsciiSurface {
    fn size(&self) -> (f64, f64) {
        (self.cols as f64, self.rows as f64 * CELL_ASPECT)
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn stroke(&mut self, line: &StrokedLine) {
        let (x0, y0) = (line.from.x, line.from.y / CELL_ASPECT);
        let (x1, y1) = (line.to.x, line.to.y / CELL_ASPECT);
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            log::warn!("Skipping non-finite line {:?}", line);
            return;
        }

        let span = (x1 - x0).abs().max((y1 - y0).abs()).ceil();
        let steps = (span as usize).clamp(1, MAX_LINE_STEPS);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let color = line.start.lerp(line.end, t as f32);
            self.plot(
                (x0 + (x1 - x0) * t).round(),
                (y0 + (y1 - y0) * t).round(),
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperwire_math::Vec2;

    fn line(from: Vec2, to: Vec2, alpha: f32) -> StrokedLine {
        StrokedLine {
            from,
            to,
            start: Rgba::BLUE.with_alpha(alpha),
            end: Rgba::BLUE.with_alpha(alpha),
            width: 2.0,
        }
    }

    #[test]
    fn test_size_accounts_for_cell_aspect() {
        let surface = AsciiSurface::new(80, 24);
        assert_eq!(surface.size(), (80.0, 48.0));
    }

    #[test]
    fn test_horizontal_line() {
        let mut surface = AsciiSurface::new(10, 5);
        surface.stroke(&line(Vec2::new(0.0, 4.0), Vec2::new(9.0, 4.0), 1.0));
        let lines = surface.to_lines();
        assert_eq!(lines[2], "@@@@@@@@@@");
        assert_eq!(lines[0], "          ");
    }

    #[test]
    fn test_vertical_line_is_compressed() {
        let mut surface = AsciiSurface::new(5, 5);
        // 8 surface units tall covers rows 0..=4
        surface.stroke(&line(Vec2::new(2.0, 0.0), Vec2::new(2.0, 8.0), 1.0));
        for row in 0..5 {
            assert_eq!(surface.char_at(2, row), '@', "row {}", row);
        }
    }

    #[test]
    fn test_brighter_stroke_wins() {
        let mut surface = AsciiSurface::new(10, 5);
        surface.stroke(&line(Vec2::new(0.0, 4.0), Vec2::new(9.0, 4.0), 1.0));
        surface.stroke(&line(Vec2::new(0.0, 4.0), Vec2::new(9.0, 4.0), 0.1));
        assert_eq!(surface.char_at(5, 2), '@');
    }

    #[test]
    fn test_dim_stroke_uses_dim_glyph() {
        let mut surface = AsciiSurface::new(10, 5);
        surface.stroke(&line(Vec2::new(0.0, 4.0), Vec2::new(9.0, 4.0), 0.05));
        assert_eq!(surface.char_at(3, 2), '.');
    }

    #[test]
    fn test_out_of_bounds_is_clipped() {
        let mut surface = AsciiSurface::new(4, 4);
        surface.stroke(&line(Vec2::new(-10.0, -10.0), Vec2::new(20.0, 40.0), 1.0));
        surface.stroke(&line(Vec2::new(f64::NAN, 0.0), Vec2::new(2.0, 2.0), 1.0));
        assert_eq!(surface.to_lines().len(), 4);
        assert_eq!(surface.char_at(10, 10), ' ');
    }

    #[test]
    fn test_clear() {
        let mut surface = AsciiSurface::new(10, 5);
        surface.stroke(&line(Vec2::new(0.0, 4.0), Vec2::new(9.0, 4.0), 1.0));
        surface.clear();
        assert!(surface.to_lines().iter().all(|l| l.trim().is_empty()));
    }

    #[test]
    fn test_present_writes_glyphs() {
        let mut surface = AsciiSurface::new(6, 2);
        surface.stroke(&line(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0), 1.0));
        let mut out = Vec::new();
        surface.present(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches('@').count(), 6);
    }
}

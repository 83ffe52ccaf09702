//! Terminal output system
//!
//! Rasterizes each frame into an ASCII grid and redraws it in place on the
//! alternate screen. Ctrl-C, `q` or Esc stop the animation.

use std::io::{self, Write};
use std::time::Duration;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    QueueableCommand,
};
use hyperwire_core::GeometryEngine;
use hyperwire_render::{draw_frame, AsciiSurface, DrawLayers, LineSurface, StrokeStyle};

use crate::config::TerminalConfig;
use crate::error::AppError;
use super::Animator;

/// Rows taken by the rotation matrix readout
const MATRIX_ROWS: u16 = 4;

/// Draws frames into a character grid
pub struct TerminalSystem {
    surface: AsciiSurface,
    style: StrokeStyle,
    layers: DrawLayers,
    show_status: bool,
    show_matrix: bool,
}

impl TerminalSystem {
    pub fn new(config: &TerminalConfig, style: StrokeStyle) -> Self {
        Self {
            surface: AsciiSurface::new(config.cols as usize, config.rows as usize),
            style,
            layers: DrawLayers::ALL,
            show_status: config.show_status,
            show_matrix: config.show_matrix,
        }
    }

    /// Restrict drawing to some segment groups
    pub fn with_layers(mut self, layers: DrawLayers) -> Self {
        self.layers = layers;
        self
    }

    /// Shrink the grid so it and the readout fit a terminal of the given size
    pub fn fit_to(mut self, cols: u16, rows: u16) -> Self {
        let cols = (cols as usize).min(self.surface.cols()).max(1);
        let rows = (rows.saturating_sub(self.footer_rows()) as usize)
            .min(self.surface.rows())
            .max(1);
        if (cols, rows) != (self.surface.cols(), self.surface.rows()) {
            log::debug!("Grid clamped to {}x{} to fit the terminal", cols, rows);
            self.surface = AsciiSurface::new(cols, rows);
        }
        self
    }

    pub fn surface(&self) -> &AsciiSurface {
        &self.surface
    }

    /// Rows below the grid used by the readout
    pub fn footer_rows(&self) -> u16 {
        let status = u16::from(self.show_status);
        let matrix = if self.show_matrix { MATRIX_ROWS } else { 0 };
        status + matrix
    }

    /// Rasterize the frame for `angle` without presenting it
    pub fn render(&mut self, engine: &GeometryEngine, angle: f64) -> Result<usize, AppError> {
        let (width, height) = self.surface.size();
        let frame = engine.frame_for_surface(angle, width, height)?;
        Ok(draw_frame(&mut self.surface, &frame, &self.style, self.layers))
    }

    fn status_line(&self, engine: &GeometryEngine, angle: f64) -> String {
        let planes: Vec<String> = engine
            .rotation()
            .plane_angles(angle)
            .iter()
            .map(|(plane, theta)| format!("{}={:.2}", plane, theta))
            .collect();
        format!("angle {:.3}  {}", engine.rotation().reduce(angle), planes.join(" "))
    }

    /// The composed rotation as four text rows
    fn matrix_lines(&self, engine: &GeometryEngine, angle: f64) -> Vec<String> {
        let columns = engine.rotation().to_matrix(angle);
        (0..4)
            .map(|row| {
                let cells: Vec<String> =
                    columns.iter().map(|col| format!("{:+.3}", col[row])).collect();
                format!("| {} |", cells.join(" "))
            })
            .collect()
    }

    /// Present one frame at the top of the terminal
    pub fn present<W: Write>(
        &mut self,
        out: &mut W,
        engine: &GeometryEngine,
        angle: f64,
    ) -> Result<(), AppError> {
        self.render(engine, angle)?;
        self.surface.present(out)?;

        let mut footer = Vec::new();
        if self.show_status {
            footer.push(self.status_line(engine, angle));
        }
        if self.show_matrix {
            footer.extend(self.matrix_lines(engine, angle));
        }
        let top = self.surface.rows() as u16;
        for (i, line) in footer.iter().enumerate() {
            out.queue(MoveTo(0, top + i as u16))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(Print(line))?;
        }
        out.flush()?;
        Ok(())
    }

    /// Animate until `frames` frames were shown (0 = no limit) or `stop`
    /// returns true
    ///
    /// `stop` is polled once per tick. The screen is restored on every exit
    /// path. Returns the number of frames presented.
    pub fn run<W, F>(
        &mut self,
        out: &mut W,
        engine: &GeometryEngine,
        mut animator: Animator,
        frames: u64,
        mut stop: F,
    ) -> Result<u64, AppError>
    where
        W: Write,
        F: FnMut() -> Result<bool, AppError>,
    {
        log::info!(
            "Animating in a {}x{} terminal grid",
            self.surface.cols(),
            self.surface.rows()
        );
        let mut screen = Screen::enter(out)?;

        let mut shown = 0;
        while frames == 0 || shown < frames {
            if stop()? {
                log::info!("Stopped after {} frames", shown);
                break;
            }
            self.present(screen.out(), engine, animator.angle())?;
            shown += 1;
            animator.wait_for_tick();
            animator.advance();
        }
        Ok(shown)
    }

    /// Animate on the process terminal in raw mode, sized to fit it
    pub fn run_interactive(
        self,
        engine: &GeometryEngine,
        animator: Animator,
        frames: u64,
    ) -> Result<u64, AppError> {
        let (cols, rows) = terminal::size()?;
        let mut system = self.fit_to(cols, rows);
        let _raw = RawMode::enable()?;
        let mut stdout = io::stdout().lock();
        system.run(&mut stdout, engine, animator, frames, quit_requested)
    }
}

/// Drain pending terminal events; true on Ctrl-C, `q` or Esc
pub fn quit_requested() -> Result<bool, AppError> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(KeyEvent { code, modifiers, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true)
                }
                _ => {}
            }
        }
    }
    Ok(false)
}

/// Alternate screen with a hidden cursor, left again on drop
struct Screen<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> Screen<'a, W> {
    fn enter(out: &'a mut W) -> io::Result<Self> {
        out.queue(EnterAlternateScreen)?;
        out.queue(Hide)?;
        out.queue(Clear(ClearType::All))?;
        out.flush()?;
        Ok(Self { out })
    }

    fn out(&mut self) -> &mut W {
        &mut *self.out
    }
}

impl<W: Write> Drop for Screen<'_, W> {
    fn drop(&mut self) {
        let restored = self
            .out
            .queue(Show)
            .and_then(|out| out.queue(LeaveAlternateScreen))
            .and_then(|out| out.flush());
        if let Err(e) = restored {
            log::warn!("Failed to restore the terminal: {}", e);
        }
    }
}

/// Raw terminal input, disabled again on drop
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("Failed to leave raw mode: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperwire_core::EngineParams;

    const SHOW_CURSOR: &str = "\x1b[?25h";
    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";

    fn engine() -> GeometryEngine {
        GeometryEngine::new(EngineParams::default()).unwrap()
    }

    fn system() -> TerminalSystem {
        TerminalSystem::new(&TerminalConfig::default(), StrokeStyle::default())
    }

    fn animator() -> Animator {
        Animator::new(0.0, 0.02, Duration::from_millis(1))
    }

    #[test]
    fn test_render_draws_all_segments() {
        let mut terminal = system();
        assert_eq!(terminal.render(&engine(), 0.3).unwrap(), 32);
        let lit = terminal
            .surface()
            .to_lines()
            .iter()
            .map(|l| l.chars().filter(|c| *c != ' ').count())
            .sum::<usize>();
        assert!(lit > 0);
    }

    #[test]
    fn test_render_respects_layers() {
        let mut terminal = system().with_layers(DrawLayers::INNER);
        assert_eq!(terminal.render(&engine(), 0.3).unwrap(), 12);
    }

    #[test]
    fn test_status_line_lists_planes() {
        let terminal = system();
        let status = terminal.status_line(&engine(), 1.0);
        assert!(status.starts_with("angle 1.000"));
        assert!(status.contains("XW=1.00"));
        assert!(status.contains("ZW=0.30"));
    }

    #[test]
    fn test_matrix_lines_at_rest_are_identity() {
        let terminal = system();
        let lines = terminal.matrix_lines(&engine(), 0.0);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "| +1.000 +0.000 +0.000 +0.000 |");
        assert_eq!(lines[3], "| +0.000 +0.000 +0.000 +1.000 |");
    }

    #[test]
    fn test_run_stops_after_frame_count() {
        let mut terminal = system();
        let mut out = Vec::new();
        let shown = terminal
            .run(&mut out, &engine(), animator(), 3, || Ok(false))
            .unwrap();
        assert_eq!(shown, 3);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_unlimited_run_ends_on_stop_and_restores_screen() {
        let mut terminal = system();
        let mut out = Vec::new();
        let mut polls = 0;
        let shown = terminal
            .run(&mut out, &engine(), animator(), 0, || {
                polls += 1;
                Ok(polls > 2)
            })
            .unwrap();
        assert_eq!(shown, 2);

        let text = String::from_utf8_lossy(&out);
        assert!(text.ends_with(&format!("{}{}", SHOW_CURSOR, LEAVE_ALTERNATE_SCREEN)));
    }

    #[test]
    fn test_screen_restored_on_error() {
        let mut terminal = system();
        let mut out = Vec::new();
        let result = terminal.run(&mut out, &engine(), animator(), 0, || {
            Err(AppError::Io(io::Error::new(io::ErrorKind::Other, "input closed")))
        });
        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(String::from_utf8_lossy(&out).contains(SHOW_CURSOR));
    }

    #[test]
    fn test_fit_to_small_terminal() {
        let terminal = system().fit_to(60, 24);
        assert_eq!(terminal.surface().cols(), 60);
        // One row is kept for the status line
        assert_eq!(terminal.surface().rows(), 23);

        let config = TerminalConfig { show_matrix: true, ..TerminalConfig::default() };
        let terminal = TerminalSystem::new(&config, StrokeStyle::default()).fit_to(200, 24);
        assert_eq!(terminal.surface().cols(), 80);
        assert_eq!(terminal.surface().rows(), 19);
    }

    #[test]
    fn test_fit_to_large_terminal_keeps_config_size() {
        let terminal = system().fit_to(200, 100);
        assert_eq!(terminal.surface().cols(), 80);
        assert_eq!(terminal.surface().rows(), 40);
    }

    #[test]
    fn test_tiny_grid_is_an_error() {
        let config = TerminalConfig { cols: 0, rows: 0, show_status: false, show_matrix: false };
        let mut terminal = TerminalSystem::new(&config, StrokeStyle::default());
        assert!(matches!(terminal.render(&engine(), 0.0), Err(AppError::Geometry(_))));
    }
}

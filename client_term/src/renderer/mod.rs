pub mod canvas;
pub mod draw;
pub mod init;

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{cursor, queue, style, terminal};

pub use canvas::{Canvas, Cell};
use init::TerminalModes;

/// Somewhere a finished canvas can be shown
pub trait Surface {
    /// Current size in cells, `(cols, rows)`
    fn size(&self) -> Result<(u16, u16)>;

    fn present(&mut self, canvas: &Canvas) -> Result<()>;
}

/// The controlling terminal. Restored on drop.
pub struct TerminalSurface {
    out: Stdout,
    modes: TerminalModes,
}

impl TerminalSurface {
    pub fn enter() -> Result<Self> {
        let mut out = io::stdout();
        let modes = init::enter_terminal(&mut out)?;
        Ok(Self { out, modes })
    }

    pub fn reports_key_releases(&self) -> bool {
        self.modes.keyboard_enhanced
    }
}

impl Surface for TerminalSurface {
    fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("failed to read terminal size")
    }

    fn present(&mut self, canvas: &Canvas) -> Result<()> {
        write_canvas(&mut self.out, canvas).context("failed to draw frame")
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(e) = init::restore_terminal(&mut self.out, &self.modes) {
            log::error!("failed to restore terminal: {e}");
        }
    }
}

/// Queue a whole canvas, changing colours only where they differ
pub fn write_canvas(out: &mut impl Write, canvas: &Canvas) -> io::Result<()> {
    let mut colors = None;

    for row in 0..canvas.rows() {
        queue!(out, cursor::MoveTo(0, row))?;
        let mut run = String::new();
        for cell in canvas.row(row) {
            if colors != Some((cell.fg, cell.bg)) {
                if !run.is_empty() {
                    queue!(out, style::Print(&run))?;
                    run.clear();
                }
                queue!(
                    out,
                    style::SetForegroundColor(cell.fg),
                    style::SetBackgroundColor(cell.bg)
                )?;
                colors = Some((cell.fg, cell.bg));
            }
            run.push(cell.ch);
        }
        if !run.is_empty() {
            queue!(out, style::Print(&run))?;
        }
    }

    queue!(out, style::ResetColor)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    #[test]
    fn test_write_canvas_emits_text() {
        let mut canvas = Canvas::new(6, 2, Color::DarkGreen);
        canvas.text(0, 1, "Pong", Color::White);

        let mut out = Vec::new();
        write_canvas(&mut out, &canvas).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("Pong"));
        assert!(written.contains("      "));
    }

    #[test]
    fn test_write_canvas_groups_colour_runs() {
        let canvas = Canvas::new(10, 3, Color::Black);

        let mut out = Vec::new();
        write_canvas(&mut out, &canvas).unwrap();

        let written = String::from_utf8(out).unwrap();
        // One colour change for the whole grid
        assert_eq!(written.matches("\x1b[38;5;15m").count(), 1);
    }
}

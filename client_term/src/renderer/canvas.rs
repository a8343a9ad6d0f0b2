use crossterm::style::Color;

use crate::view::CellRect;

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

/// Off-screen character grid, presented to the terminal in one pass
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, bg: Color) -> Self {
        let blank = Cell {
            ch: ' ',
            fg: Color::White,
            bg,
        };
        Self {
            cols,
            rows,
            cells: vec![blank; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    fn index(&self, col: u16, row: u16) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| row as usize * self.cols as usize + col as usize)
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are dropped
    pub fn set(&mut self, col: u16, row: u16, ch: char, fg: Color) {
        if let Some(i) = self.index(col, row) {
            self.cells[i].ch = ch;
            self.cells[i].fg = fg;
        }
    }

    pub fn fill(&mut self, rect: &CellRect, ch: char, fg: Color, bg: Color) {
        for row in rect.row..rect.row.saturating_add(rect.height) {
            for col in rect.col..rect.col.saturating_add(rect.width) {
                if let Some(i) = self.index(col, row) {
                    self.cells[i] = Cell { ch, fg, bg };
                }
            }
        }
    }

    pub fn hline(&mut self, row: u16, from: u16, to: u16, ch: char, fg: Color) {
        for col in from.min(to)..=from.max(to) {
            self.set(col, row, ch, fg);
        }
    }

    pub fn vline(&mut self, col: u16, from: u16, to: u16, ch: char, fg: Color) {
        for row in from.min(to)..=from.max(to) {
            self.set(col, row, ch, fg);
        }
    }

    /// Write text left to right, keeping each cell's background
    pub fn text(&mut self, col: u16, row: u16, text: &str, fg: Color) {
        for (offset, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            self.set(col.saturating_add(offset), row, ch, fg);
        }
    }

    pub fn row(&self, row: u16) -> &[Cell] {
        let start = (row as usize * self.cols as usize).min(self.cells.len());
        let end = (start + self.cols as usize).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Row contents as a plain string
    pub fn row_text(&self, row: u16) -> String {
        self.row(row).iter().map(|cell| cell.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new(4, 2, Color::DarkGreen);
        assert_eq!(canvas.row_text(0), "    ");
        assert_eq!(canvas.get(3, 1).unwrap().bg, Color::DarkGreen);
        assert_eq!(canvas.get(4, 0), None);
    }

    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = Canvas::new(5, 3, Color::Black);
        canvas.fill(&CellRect::new(3, 1, 10, 10), '#', Color::White, Color::Red);
        assert_eq!(canvas.row_text(0), "     ");
        assert_eq!(canvas.row_text(1), "   ##");
        assert_eq!(canvas.row_text(2), "   ##");
        assert_eq!(canvas.get(4, 2).unwrap().bg, Color::Red);
    }

    #[test]
    fn test_lines_accept_either_direction() {
        let mut canvas = Canvas::new(5, 5, Color::Black);
        canvas.hline(0, 3, 1, '-', Color::White);
        canvas.vline(4, 4, 2, '|', Color::White);
        assert_eq!(canvas.row_text(0), " --- ");
        assert_eq!(canvas.row_text(2), "    |");
        assert_eq!(canvas.row_text(4), "    |");
    }

    #[test]
    fn test_text_keeps_background() {
        let mut canvas = Canvas::new(8, 1, Color::Black);
        canvas.fill(&CellRect::new(0, 0, 8, 1), ' ', Color::White, Color::Red);
        canvas.text(2, 0, "Play!!!!", Color::White);
        assert_eq!(canvas.row_text(0), "  Play!!");
        assert_eq!(canvas.get(3, 0).unwrap().bg, Color::Red);
    }
}

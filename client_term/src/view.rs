//! Drawable geometry derived from a match snapshot
//!
//! Everything here is in terminal cells. The simulation works in court
//! pixels; [`Viewport`] scales between the two so physics never depends on
//! what the screen looks like.

use game_core::{Aabb, Court, Snapshot};
use glam::Vec2;

/// Rectangle of terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub fn new(col: u16, row: u16, width: u16, height: u16) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.col
            && col < self.col.saturating_add(self.width)
            && row >= self.row
            && row < self.row.saturating_add(self.height)
    }
}

/// Straight court marking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Horizontal { row: u16, from: u16, to: u16 },
    Vertical { col: u16, from: u16, to: u16 },
}

/// Text placed at a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub col: u16,
    pub row: u16,
    pub text: String,
}

impl Label {
    /// Horizontally centred on a screen `cols` wide
    pub fn centered(text: impl Into<String>, cols: u16, row: u16) -> Self {
        let text = text.into();
        let len = text.chars().count() as u16;
        Self {
            col: cols.saturating_sub(len) / 2,
            row,
            text,
        }
    }
}

/// What a click on a button asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Play,
    PlayAgain,
    Exit,
}

/// Clickable region with a caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub action: ButtonAction,
    pub caption: &'static str,
    pub rect: CellRect,
}

impl Button {
    fn centered(action: ButtonAction, caption: &'static str, cols: u16, row: u16) -> Self {
        let width = (caption.len() as u16 + 8).min(cols.max(1));
        Self {
            action,
            caption,
            rect: CellRect::new(cols.saturating_sub(width) / 2, row, width, 3),
        }
    }
}

/// Maps court pixels onto a terminal of `cols` x `rows` cells
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    scale: Vec2,
}

impl Viewport {
    pub fn new(court: &Court, cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            scale: Vec2::new(cols as f32 / court.width, rows as f32 / court.height),
        }
    }

    /// Cell containing a court point, clamped to the screen
    pub fn cell(&self, point: Vec2) -> (u16, u16) {
        let p = (point * self.scale).floor();
        let col = p.x.clamp(0.0, self.cols.saturating_sub(1) as f32) as u16;
        let row = p.y.clamp(0.0, self.rows.saturating_sub(1) as f32) as u16;
        (col, row)
    }

    /// Cells covered by a court box, at least one cell, clipped to the
    /// screen. `None` when the box is entirely off screen.
    pub fn rect(&self, aabb: &Aabb) -> Option<CellRect> {
        let min = aabb.min * self.scale;
        let max = aabb.max * self.scale;
        let (cols, rows) = (self.cols as f32, self.rows as f32);
        if max.x <= 0.0 || max.y <= 0.0 || min.x >= cols || min.y >= rows {
            return None;
        }

        let left = min.x.floor().max(0.0);
        let top = min.y.floor().max(0.0);
        let right = max.x.ceil().min(cols).max(left + 1.0);
        let bottom = max.y.ceil().min(rows).max(top + 1.0);

        Some(CellRect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }

    fn hline(&self, y: f32, x0: f32, x1: f32) -> Line {
        let (from, row) = self.cell(Vec2::new(x0, y));
        let (to, _) = self.cell(Vec2::new(x1, y));
        Line::Horizontal { row, from, to }
    }

    fn vline(&self, x: f32, y0: f32, y1: f32) -> Line {
        let (col, from) = self.cell(Vec2::new(x, y0));
        let (_, to) = self.cell(Vec2::new(x, y1));
        Line::Vertical { col, from, to }
    }
}

/// One in-match frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub cols: u16,
    pub rows: u16,
    pub court_lines: Vec<Line>,
    pub net: Line,
    pub cpu_score: Label,
    pub player_score: Label,
    pub rackets: Vec<CellRect>,
    pub ball: Option<CellRect>,
}

/// Tennis-court markings in court pixels
fn court_lines(viewport: &Viewport, court: &Court) -> Vec<Line> {
    let (w, h) = (court.width, court.height);
    vec![
        // Singles side lines
        viewport.vline(w / 4.0, h / 8.0, h * 7.0 / 8.0),
        viewport.vline(w * 3.0 / 4.0, h / 8.0, h * 7.0 / 8.0),
        // Base lines
        viewport.hline(h / 8.0, 0.0, w),
        viewport.hline(h * 7.0 / 8.0, 0.0, w),
        // Centre marks
        viewport.hline(h / 2.0, 0.0, 10.0),
        viewport.hline(h / 2.0, w - 10.0, w),
        // Service line
        viewport.hline(h / 2.0, w / 4.0, w * 3.0 / 4.0),
    ]
}

/// Lay out a frame for a terminal of `cols` x `rows`
pub fn frame(snapshot: &Snapshot, cols: u16, rows: u16) -> Frame {
    let court = &snapshot.court;
    let viewport = Viewport::new(court, cols, rows);

    let score_label = |x: f32, score: u32| {
        let (col, row) = viewport.cell(Vec2::new(x, 20.0));
        Label {
            col,
            row,
            text: score.to_string(),
        }
    };

    Frame {
        cols,
        rows,
        court_lines: court_lines(&viewport, court),
        net: viewport.vline(court.width / 2.0, 0.0, court.height),
        cpu_score: score_label(court.width / 4.0, snapshot.cpu_score),
        player_score: score_label(court.width * 3.0 / 4.0, snapshot.player_score),
        rackets: [snapshot.cpu, snapshot.player]
            .iter()
            .filter_map(|racket| viewport.rect(racket))
            .collect(),
        ball: viewport.rect(&snapshot.ball),
    }
}

pub const TITLE: &str = "Tennis Pong";

pub const INSTRUCTIONS: [&str; 4] = [
    "Instructions:",
    "Use the up and down arrow keys to move your racket along your baseline.",
    "Try to hit the ball past your opponent.",
    "First to score 5 points wins!",
];

/// Title screen
#[derive(Debug, Clone, PartialEq)]
pub struct StartScreen {
    pub title: Label,
    pub instructions: Vec<Label>,
    pub play: Button,
}

pub fn start_screen(cols: u16, rows: u16) -> StartScreen {
    let title_row = rows / 6;
    let first_line = rows / 3;
    let instructions = INSTRUCTIONS
        .iter()
        .enumerate()
        .map(|(i, text)| Label::centered(*text, cols, first_line + 2 * i as u16))
        .collect();
    let button_row = (first_line + 2 * INSTRUCTIONS.len() as u16 + 1).min(rows.saturating_sub(3));

    StartScreen {
        title: Label::centered(TITLE, cols, title_row),
        instructions,
        play: Button::centered(ButtonAction::Play, "Play", cols, button_row),
    }
}

/// Result line for a finished match
pub fn winner_line(cpu_score: u32, player_score: u32) -> &'static str {
    if cpu_score > player_score {
        "CPU wins!"
    } else if player_score > cpu_score {
        "Player wins!"
    } else {
        "It's a tie!"
    }
}

/// Final score screen
#[derive(Debug, Clone, PartialEq)]
pub struct EndScreen {
    pub lines: Vec<Label>,
    pub play_again: Button,
    pub exit: Button,
}

pub fn end_screen(cpu_score: u32, player_score: u32, cols: u16, rows: u16) -> EndScreen {
    let mid = rows / 2;
    let top = mid.saturating_sub(6);
    let lines = vec![
        Label::centered(format!("CPU Score: {cpu_score}"), cols, top),
        Label::centered(format!("Player Score: {player_score}"), cols, top + 2),
        Label::centered(winner_line(cpu_score, player_score), cols, top + 4),
    ];

    EndScreen {
        lines,
        play_again: Button::centered(ButtonAction::PlayAgain, "Play Again", cols, top + 6),
        exit: Button::centered(ButtonAction::Exit, "Exit", cols, top + 10),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot {
            court: Court::new(800.0, 600.0),
            ball: Aabb::from_pos_size(Vec2::new(390.0, 290.0), Vec2::splat(20.0)),
            player: Aabb::from_pos_size(Vec2::new(750.0, 250.0), Vec2::new(20.0, 100.0)),
            cpu: Aabb::from_pos_size(Vec2::new(0.0, 250.0), Vec2::new(20.0, 100.0)),
            cpu_score: 3,
            player_score: 1,
        }
    }

    #[test]
    fn test_cell_rect_contains() {
        let rect = CellRect::new(10, 5, 4, 3);
        assert!(rect.contains(10, 5));
        assert!(rect.contains(13, 7));
        assert!(!rect.contains(14, 7));
        assert!(!rect.contains(10, 8));
        assert!(!rect.contains(9, 5));
    }

    #[test]
    fn test_viewport_scales_court() {
        let viewport = Viewport::new(&Court::new(800.0, 600.0), 80, 30);
        assert_eq!(viewport.cell(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(viewport.cell(Vec2::new(400.0, 300.0)), (40, 15));
        assert_eq!(viewport.cell(Vec2::new(800.0, 600.0)), (79, 29));
        assert_eq!(viewport.cell(Vec2::new(-50.0, 900.0)), (0, 29));
    }

    #[test]
    fn test_small_objects_get_a_cell() {
        let viewport = Viewport::new(&Court::new(800.0, 600.0), 80, 30);
        let ball = Aabb::from_pos_size(Vec2::new(395.0, 301.0), Vec2::splat(2.0));
        let rect = viewport.rect(&ball).unwrap();
        assert!(rect.width >= 1 && rect.height >= 1);
    }

    #[test]
    fn test_offscreen_racket_is_skipped() {
        let viewport = Viewport::new(&Court::new(800.0, 600.0), 80, 30);
        let racket = Aabb::from_pos_size(Vec2::new(0.0, -200.0), Vec2::new(20.0, 100.0));
        assert_eq!(viewport.rect(&racket), None);
    }

    #[test]
    fn test_partially_offscreen_is_clipped() {
        let viewport = Viewport::new(&Court::new(800.0, 600.0), 80, 30);
        let racket = Aabb::from_pos_size(Vec2::new(0.0, -50.0), Vec2::new(20.0, 100.0));
        assert_eq!(viewport.rect(&racket), Some(CellRect::new(0, 0, 2, 3)));
    }

    #[test]
    fn test_frame_layout() {
        let frame = frame(&snapshot(), 80, 30);

        assert_eq!(frame.rackets.len(), 2);
        assert_eq!(frame.rackets[0], CellRect::new(0, 12, 2, 6));
        assert_eq!(frame.rackets[1], CellRect::new(75, 12, 2, 6));
        assert_eq!(frame.ball, Some(CellRect::new(39, 14, 2, 2)));
        assert_eq!(frame.net, Line::Vertical { col: 40, from: 0, to: 29 });
        assert_eq!(frame.cpu_score.text, "3");
        assert_eq!(frame.cpu_score.col, 20);
        assert_eq!(frame.player_score.text, "1");
        assert_eq!(frame.player_score.col, 60);
        assert_eq!(frame.court_lines.len(), 7);
        assert!(frame
            .court_lines
            .contains(&Line::Horizontal { row: 15, from: 20, to: 60 }));
    }

    #[test]
    fn test_start_screen_has_play_button() {
        let screen = start_screen(100, 40);
        assert_eq!(screen.title.text, TITLE);
        assert_eq!(screen.title.col, (100 - 11) / 2);
        assert_eq!(screen.instructions.len(), 4);
        assert_eq!(screen.play.action, ButtonAction::Play);

        let rect = screen.play.rect;
        assert!(screen.play.rect.contains(rect.col + 1, rect.row + 1));
        assert!(rect.row + rect.height <= 40);
    }

    #[test]
    fn test_end_screen_buttons_do_not_overlap() {
        let screen = end_screen(5, 2, 100, 40);
        let again = screen.play_again.rect;
        let exit = screen.exit.rect;
        assert!(again.row + again.height <= exit.row);
        assert_eq!(screen.lines[0].text, "CPU Score: 5");
        assert_eq!(screen.lines[1].text, "Player Score: 2");
        assert_eq!(screen.lines[2].text, "CPU wins!");
    }

    #[test]
    fn test_winner_line() {
        assert_eq!(winner_line(5, 3), "CPU wins!");
        assert_eq!(winner_line(2, 5), "Player wins!");
        assert_eq!(winner_line(5, 5), "It's a tie!");
    }
}

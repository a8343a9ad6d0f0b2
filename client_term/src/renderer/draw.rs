use crossterm::style::Color;

use super::canvas::Canvas;
use crate::view::{Button, EndScreen, Frame, Label, Line, StartScreen};

pub const BACKGROUND: Color = Color::DarkGreen;
pub const MARKINGS: Color = Color::White;
pub const NET: Color = Color::Black;
pub const RACKET: Color = Color::White;
pub const BALL: Color = Color::Green;
pub const BUTTON: Color = Color::DarkRed;
pub const TEXT: Color = Color::White;

const BLOCK: char = '█';

fn draw_line(canvas: &mut Canvas, line: &Line, ch_h: char, ch_v: char, fg: Color) {
    match *line {
        Line::Horizontal { row, from, to } => canvas.hline(row, from, to, ch_h, fg),
        Line::Vertical { col, from, to } => canvas.vline(col, from, to, ch_v, fg),
    }
}

fn draw_label(canvas: &mut Canvas, label: &Label) {
    canvas.text(label.col, label.row, &label.text, TEXT);
}

fn draw_button(canvas: &mut Canvas, button: &Button) {
    let rect = button.rect;
    canvas.fill(&rect, ' ', TEXT, BUTTON);
    let len = button.caption.chars().count() as u16;
    let col = rect.col + rect.width.saturating_sub(len) / 2;
    canvas.text(col, rect.row + rect.height / 2, button.caption, TEXT);
}

/// Court, net, rackets, ball and scores
pub fn draw_frame(frame: &Frame) -> Canvas {
    let mut canvas = Canvas::new(frame.cols, frame.rows, BACKGROUND);

    for line in &frame.court_lines {
        draw_line(&mut canvas, line, '─', '│', MARKINGS);
    }
    draw_line(&mut canvas, &frame.net, '┃', '┃', NET);

    for racket in &frame.rackets {
        canvas.fill(racket, BLOCK, RACKET, BACKGROUND);
    }
    if let Some(ball) = &frame.ball {
        canvas.fill(ball, BLOCK, BALL, BACKGROUND);
    }

    draw_label(&mut canvas, &frame.cpu_score);
    draw_label(&mut canvas, &frame.player_score);
    canvas
}

pub fn draw_start(screen: &StartScreen, cols: u16, rows: u16) -> Canvas {
    let mut canvas = Canvas::new(cols, rows, BACKGROUND);
    draw_label(&mut canvas, &screen.title);
    for line in &screen.instructions {
        draw_label(&mut canvas, line);
    }
    draw_button(&mut canvas, &screen.play);
    canvas
}

pub fn draw_end(screen: &EndScreen, cols: u16, rows: u16) -> Canvas {
    let mut canvas = Canvas::new(cols, rows, BACKGROUND);
    for line in &screen.lines {
        draw_label(&mut canvas, line);
    }
    draw_button(&mut canvas, &screen.play_again);
    draw_button(&mut canvas, &screen.exit);
    canvas
}

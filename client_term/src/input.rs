//! Keyboard and mouse input handling

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Exit,
}

/// Terminal events reduced to what the game needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    Click { col: u16, row: u16 },
    Quit,
}

/// Map a key code to a game key
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Key::Confirm),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Exit),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }
    let game_key = key_from_code(key.code)?;
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => Some(InputEvent::KeyDown(game_key)),
        KeyEventKind::Release => Some(InputEvent::KeyUp(game_key)),
    }
}

/// Extract the game event from a terminal event
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
                col: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        _ => None,
    }
}

/// Source of input events, drained once per tick
pub trait InputSource {
    /// Next pending event, without blocking
    fn poll(&mut self) -> Result<Option<InputEvent>>;
}

/// Reads events from the controlling terminal
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Option<InputEvent>> {
        while event::poll(Duration::ZERO).context("failed to poll terminal events")? {
            let event = event::read().context("failed to read terminal event")?;
            if let Some(input) = translate(&event) {
                return Ok(Some(input));
            }
        }
        Ok(None)
    }
}

/// Held-key tracking for the racket keys.
///
/// Terminals that never report key releases get an expiring hold: a pressed
/// key counts down `hold_ticks` ticks and is renewed by every press/repeat.
/// When releases are reported, a key stays held until its release.
#[derive(Debug, Clone)]
pub struct KeyState {
    up: u32,
    down: u32,
    hold_ticks: u32,
    expires: bool,
}

impl KeyState {
    /// Hold that expires after `hold_ticks` ticks without a repeat
    pub fn new(hold_ticks: u32) -> Self {
        Self {
            up: 0,
            down: 0,
            hold_ticks: hold_ticks.max(1),
            expires: true,
        }
    }

    /// Hold that lasts until the key release event
    pub fn until_release() -> Self {
        Self {
            expires: false,
            ..Self::new(1)
        }
    }

    /// Expiring hold unless the terminal reports key releases
    pub fn for_terminal(releases_reported: bool, hold_ticks: u32) -> Self {
        if releases_reported {
            Self::until_release()
        } else {
            Self::new(hold_ticks)
        }
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Up => {
                self.up = self.hold_ticks;
                self.down = 0;
            }
            Key::Down => {
                self.down = self.hold_ticks;
                self.up = 0;
            }
            _ => {}
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Up => self.up = 0,
            Key::Down => self.down = 0,
            _ => {}
        }
    }

    pub fn clear(&mut self) {
        self.up = 0;
        self.down = 0;
    }

    /// Age held keys by one tick
    pub fn tick(&mut self) {
        if !self.expires {
            return;
        }
        self.up = self.up.saturating_sub(1);
        self.down = self.down.saturating_sub(1);
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up > 0,
            Key::Down => self.down > 0,
            _ => false,
        }
    }

    /// Vertical racket command: up wins over down
    pub fn racket_speed(&self, speed: f32) -> f32 {
        if self.is_held(Key::Up) {
            -speed
        } else if self.is_held(Key::Down) {
            speed
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseEvent;

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind))
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_from_code(KeyCode::Up), Some(Key::Up));
        assert_eq!(key_from_code(KeyCode::Char('w')), Some(Key::Up));
        assert_eq!(key_from_code(KeyCode::Down), Some(Key::Down));
        assert_eq!(key_from_code(KeyCode::Char('S')), Some(Key::Down));
        assert_eq!(key_from_code(KeyCode::Enter), Some(Key::Confirm));
        assert_eq!(key_from_code(KeyCode::Esc), Some(Key::Exit));
        assert_eq!(key_from_code(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_translate_press_and_release() {
        assert_eq!(
            translate(&key(KeyCode::Up, KeyEventKind::Press)),
            Some(InputEvent::KeyDown(Key::Up))
        );
        assert_eq!(
            translate(&key(KeyCode::Up, KeyEventKind::Repeat)),
            Some(InputEvent::KeyDown(Key::Up))
        );
        assert_eq!(
            translate(&key(KeyCode::Down, KeyEventKind::Release)),
            Some(InputEvent::KeyUp(Key::Down))
        );
    }

    #[test]
    fn test_translate_ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&event), Some(InputEvent::Quit));
    }

    #[test]
    fn test_translate_left_click() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(&event), Some(InputEvent::Click { col: 12, row: 7 }));

        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(&right), None);
    }

    #[test]
    fn test_speed_from_keys() {
        let mut keys = KeyState::new(10);
        assert_eq!(keys.racket_speed(6.0), 0.0);

        keys.press(Key::Up);
        assert_eq!(keys.racket_speed(6.0), -6.0);

        keys.release(Key::Up);
        keys.press(Key::Down);
        assert_eq!(keys.racket_speed(6.0), 6.0);

        keys.release(Key::Down);
        assert_eq!(keys.racket_speed(6.0), 0.0);
    }

    #[test]
    fn test_up_checked_before_down() {
        let mut keys = KeyState::new(10);
        keys.down = 10;
        keys.up = 10;
        assert_eq!(keys.racket_speed(6.0), -6.0);
    }

    #[test]
    fn test_held_key_expires_without_repeat() {
        let mut keys = KeyState::new(3);
        keys.press(Key::Down);
        for _ in 0..2 {
            keys.tick();
            assert!(keys.is_held(Key::Down));
        }
        keys.tick();
        assert!(!keys.is_held(Key::Down));
    }

    #[test]
    fn test_repeat_renews_hold() {
        let mut keys = KeyState::new(2);
        keys.press(Key::Up);
        keys.tick();
        keys.press(Key::Up);
        keys.tick();
        assert!(keys.is_held(Key::Up));
    }

    #[test]
    fn test_hold_until_release_never_expires() {
        let mut keys = KeyState::until_release();
        keys.press(Key::Up);

        for _ in 0..30 {
            assert_eq!(keys.racket_speed(6.0), -6.0);
            keys.tick();
        }

        keys.release(Key::Up);
        assert_eq!(keys.racket_speed(6.0), 0.0);
    }

    #[test]
    fn test_for_terminal_picks_hold_mode() {
        let mut reported = KeyState::for_terminal(true, 3);
        let mut unreported = KeyState::for_terminal(false, 3);
        reported.press(Key::Down);
        unreported.press(Key::Down);
        for _ in 0..3 {
            reported.tick();
            unreported.tick();
        }
        assert!(reported.is_held(Key::Down));
        assert!(!unreported.is_held(Key::Down));
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut keys = KeyState::new(5);
        keys.press(Key::Up);
        keys.clear();
        assert_eq!(keys.racket_speed(6.0), 0.0);
    }
}

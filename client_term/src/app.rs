//! Tick driver: input, simulation, screens

use std::{
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use game_core::{Match, Side};

use crate::fsm::{FsmState, GameAction, GameFsm};
use crate::input::{InputEvent, InputSource, Key, KeyState};
use crate::renderer::{draw, Surface};
use crate::view::{self, Button, ButtonAction};

/// Whether the loop should keep going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App<S: Surface, I: InputSource> {
    game: Match,
    fsm: GameFsm,
    keys: KeyState,
    surface: S,
    input: I,
    /// Buttons on the last drawn screen, for click hit testing
    buttons: Vec<Button>,
}

impl<S: Surface, I: InputSource> App<S, I> {
    pub fn new(game: Match, surface: S, input: I, keys: KeyState) -> Self {
        Self {
            game,
            fsm: GameFsm::new(),
            keys,
            surface,
            input,
            buttons: Vec::new(),
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Match {
        &mut self.game
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// One loop iteration
    pub fn tick(&mut self) -> Result<Flow> {
        if self.fsm.is_terminated() {
            return Ok(Flow::Exit);
        }

        let mut events = Vec::new();
        while let Some(event) = self.input.poll()? {
            events.push(event);
        }

        // Quit wins over everything else queued this tick
        if events.contains(&InputEvent::Quit) {
            return Ok(self.quit());
        }

        for event in events {
            let action = match event {
                InputEvent::KeyDown(key @ (Key::Up | Key::Down)) => {
                    self.keys.press(key);
                    None
                }
                InputEvent::KeyUp(key) => {
                    self.keys.release(key);
                    None
                }
                InputEvent::KeyDown(Key::Confirm) => self.primary_action(),
                InputEvent::KeyDown(Key::Exit) => Some(ButtonAction::Exit),
                InputEvent::Click { col, row } => self
                    .buttons
                    .iter()
                    .find(|button| button.rect.contains(col, row))
                    .map(|button| button.action),
                InputEvent::Quit => None,
            };

            if let Some(action) = action {
                if self.activate(action) == Flow::Exit {
                    return Ok(Flow::Exit);
                }
            }
        }

        match self.fsm.state() {
            FsmState::NotStarted => self.show_start()?,
            FsmState::Running => self.run_match()?,
            FsmState::Completed => self.show_end()?,
            FsmState::Terminated => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Tick until the app terminates, one tick per pacer period
    pub fn run(&mut self, pacer: &mut Pacer) -> Result<()> {
        while self.tick()? == Flow::Continue {
            pacer.wait();
        }
        Ok(())
    }

    fn quit(&mut self) -> Flow {
        self.fsm.transition(GameAction::Quit);
        Flow::Exit
    }

    /// What Enter/Space does on the current screen
    fn primary_action(&self) -> Option<ButtonAction> {
        match self.fsm.state() {
            FsmState::NotStarted => Some(ButtonAction::Play),
            FsmState::Completed => Some(ButtonAction::PlayAgain),
            _ => None,
        }
    }

    fn activate(&mut self, action: ButtonAction) -> Flow {
        match action {
            ButtonAction::Exit => return self.quit(),
            ButtonAction::Play => {
                if self.fsm.transition(GameAction::Play).success {
                    self.start_rally();
                }
            }
            ButtonAction::PlayAgain => {
                if self.fsm.transition(GameAction::PlayAgain).success {
                    self.game.reset_scores();
                    self.start_rally();
                }
            }
        }
        Flow::Continue
    }

    fn start_rally(&mut self) {
        self.keys.clear();
        // The old screen's buttons are gone
        self.buttons.clear();
    }

    fn show_start(&mut self) -> Result<()> {
        let (cols, rows) = self.surface.size()?;
        let screen = view::start_screen(cols, rows);
        let canvas = draw::draw_start(&screen, cols, rows);
        self.surface.present(&canvas)?;
        self.buttons = vec![screen.play];
        Ok(())
    }

    fn run_match(&mut self) -> Result<()> {
        let speed = self.keys.racket_speed(self.game.config.player_speed);
        self.game.tick(speed);
        self.keys.tick();
        self.log_events();

        let (cols, rows) = self.surface.size()?;
        let frame = view::frame(&self.game.snapshot(), cols, rows);
        self.surface.present(&draw::draw_frame(&frame))?;

        if let Some(winner) = self.game.winner() {
            let score = self.game.score;
            log::info!(
                "{:?} wins the match {}-{}",
                winner,
                score.cpu,
                score.player
            );
            self.fsm.transition(GameAction::GameOver);
        }
        Ok(())
    }

    fn log_events(&self) {
        let events = &self.game.events;
        let score = self.game.score;
        for (scored, side) in [
            (events.cpu_scored, Side::Cpu),
            (events.player_scored, Side::Player),
        ] {
            if scored {
                log::info!(
                    "point to {:?}, cpu {} player {}",
                    side,
                    score.cpu,
                    score.player
                );
            }
        }
    }

    fn show_end(&mut self) -> Result<()> {
        let (cols, rows) = self.surface.size()?;
        let score = self.game.score;
        let screen = view::end_screen(score.cpu, score.player, cols, rows);
        let canvas = draw::draw_end(&screen, cols, rows);
        self.surface.present(&canvas)?;
        self.buttons = vec![screen.play_again, screen.exit];
        Ok(())
    }
}

/// Fixed-rate loop timing
#[derive(Debug)]
pub struct Pacer {
    period: Duration,
    next: Instant,
}

impl Pacer {
    pub fn new(tick_rate: u32) -> Self {
        let period = Duration::from_secs(1) / tick_rate.max(1);
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleep until the next tick is due. A late tick restarts the schedule
    /// instead of bursting to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.next = now + self.period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pacer_period() {
        assert_eq!(Pacer::new(60).period(), Duration::from_secs(1) / 60);
        assert_eq!(Pacer::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn test_pacer_waits_about_one_period() {
        let mut pacer = Pacer::new(100);
        let start = Instant::now();
        pacer.wait();
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}

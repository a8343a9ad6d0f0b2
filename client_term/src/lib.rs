//! Terminal client for Tennis Pong
//!
//! Drives a [`game_core::Match`] at a fixed tick rate, reads the keyboard and
//! mouse through crossterm and draws into the alternate screen.

pub mod app;
pub mod config;
pub mod fsm;
pub mod input;
pub mod renderer;
pub mod view;

pub use app::{App, Flow, Pacer};
pub use config::{Cli, ClientConfig, Settings};

//! Front-end settings: an optional TOML file overlaid by command-line flags

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use game_core::{Config, Params};
use serde::Deserialize;

#[derive(Parser, Debug, Default)]
#[command(name = "tennis_pong", about = "Pong against the computer in your terminal")]
pub struct Cli {
    /// TOML settings file with [game] and [client] sections
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the ball serve; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulation ticks per second
    #[arg(long)]
    pub tick_rate: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub tick_rate: u32,
    /// Ticks a racket key stays held without a repeat or release
    pub key_hold_ticks: u32,
    pub log_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tick_rate: Params::TICK_RATE,
            key_hold_ticks: 12,
            log_file: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub game: Config,
    pub client: ClientConfig,
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid settings")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// File settings (or defaults) with command-line overrides applied
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(rate) = cli.tick_rate {
            settings.client.tick_rate = rate;
        }
        if let Some(path) = &cli.log_file {
            settings.client.log_file = Some(path.clone());
        }
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.client.tick_rate == 0 {
            bail!("tick_rate must be at least 1");
        }
        self.game.validate().context("invalid [game] settings")?;
        Ok(())
    }
}

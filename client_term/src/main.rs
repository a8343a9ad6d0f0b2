use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use client_term::{
    input::{KeyState, TerminalInput},
    renderer::TerminalSurface,
    App, Cli, Pacer, Settings,
};
use env_logger::{Env, Target};
use game_core::{GameRng, Match};

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    // stderr shares the terminal with the game, so only log to a file
    let Some(path) = log_file else {
        env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    init_logging(settings.client.log_file.as_deref())?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}, tick rate {}", settings.client.tick_rate);
    log::info!("{:?}", settings.game);

    let game = Match::new(settings.game.clone(), GameRng::new(seed))
        .context("failed to set up match")?;

    let surface = TerminalSurface::enter()?;
    let keys = KeyState::for_terminal(
        surface.reports_key_releases(),
        settings.client.key_hold_ticks,
    );
    let mut app = App::new(game, surface, TerminalInput, keys);
    let mut pacer = Pacer::new(settings.client.tick_rate);

    // Dropping the app restores the terminal, also on error
    let result = app.run(&mut pacer);
    drop(app);
    log::info!("exiting");
    result
}

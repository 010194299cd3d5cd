//! Strictly Checkers - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_checkers::BoardPreset;
use strictly_checkers_center::{
    CheckersConfig, GameCenter, GameHandle, parse_script, replay, run_repl,
};
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CheckersConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { red, white, preset } => {
            run_play(config.with_overrides(red, white, preset)).await
        }
        Command::Replay {
            script,
            preset,
            json,
        } => run_replay(config.with_overrides(None, None, preset), script, json),
        Command::Presets => {
            for preset in BoardPreset::iter() {
                println!("{:<10}{}", preset.to_string(), preset.description());
            }
            Ok(())
        }
    }
}

/// Logs every committed turn until the game is dropped.
fn spawn_spectator(handle: &GameHandle) {
    let mut events = handle.subscribe();
    let game_id = handle.id();
    tokio::spawn(async move {
        while events.changed().await.is_ok() {
            let event = *events.borrow_and_update();
            info!(
                %game_id,
                turns = event.turns_played,
                next = %event.next,
                ended = event.end.is_some(),
                "Turn event"
            );
        }
    });
}

/// Run a hot-seat game on stdin/stdout
#[instrument(skip(config))]
async fn run_play(config: CheckersConfig) -> Result<()> {
    let center = GameCenter::new();
    let handle = center.create_game(config.red_name(), config.white_name(), *config.preset())?;
    spawn_spectator(&handle);

    let session = handle.clone();
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        run_repl(&session, stdin.lock(), std::io::stdout())
    })
    .await??;

    center.exit_game(config.red_name())?;
    center.exit_game(config.white_name())?;
    info!(open_games = center.game_count(), "Session closed");
    Ok(())
}

/// Replay a script file
#[instrument(skip(config))]
fn run_replay(config: CheckersConfig, script: PathBuf, json: bool) -> Result<()> {
    let content = std::fs::read_to_string(&script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let turns = parse_script(&content).context("Failed to parse script")?;

    let center = GameCenter::new();
    let handle = center.create_game(config.red_name(), config.white_name(), *config.preset())?;
    let report = replay(&handle, &turns)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.board);
        println!("Turns applied: {}", report.turns_applied);
        match &report.game_over_message {
            Some(message) => println!("{message}"),
            None => println!("Game still in progress."),
        }
    }
    Ok(())
}

//! Command-line interface for strictly_checkers.

use clap::{Parser, Subcommand};
use strictly_checkers::BoardPreset;

/// Strictly Checkers - English draughts for two players
#[derive(Parser, Debug)]
#[command(name = "strictly_checkers")]
#[command(about = "English draughts rules engine with a hot-seat front end", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game at this terminal, taking turns at the keyboard
    Play {
        /// Name of the Red player
        #[arg(long)]
        red: Option<String>,

        /// Name of the White player
        #[arg(long)]
        white: Option<String>,

        /// Starting layout (see `presets`)
        #[arg(short, long)]
        preset: Option<BoardPreset>,
    },

    /// Replay a JSON script of turns and report the result
    Replay {
        /// Path to the script
        script: std::path::PathBuf,

        /// Starting layout (see `presets`)
        #[arg(short, long)]
        preset: Option<BoardPreset>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available starting layouts
    Presets,
}

//! Strictly Checkers Center - coordination around the checkers engine.
//!
//! The engine in [`strictly_checkers`] is single-threaded and knows nothing
//! about who is calling it. This crate adds what a multi-player front end
//! needs:
//!
//! - **Center**: registry of games by id and by seated player
//! - **Handle**: per-game lock and turn notifications
//! - **Replay**: running recorded games from JSON scripts
//! - **REPL**: a hot-seat command loop for two players at one terminal
//! - **Config**: TOML settings for the command-line front end

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod center;
mod config;
mod error;
mod handle;
mod repl;
mod replay;

// Crate-level exports - Center
pub use center::{GameCenter, GameSummary, is_valid_name};

// Crate-level exports - Per-game access
pub use handle::{GameHandle, GameId, TurnEvent};

// Crate-level exports - Errors
pub use error::CenterError;

// Crate-level exports - Configuration
pub use config::{CheckersConfig, ConfigError};

// Crate-level exports - Front ends
pub use repl::{ParseError, ReplCommand, run as run_repl};
pub use replay::{ReplayError, ReplayReport, ReplayScript, parse_script, replay};

//! Replaying recorded games.
//!
//! A script is a JSON array of turns, each turn an array of wire moves in
//! the mover's own coordinates:
//!
//! ```json
//! [[{"start": {"row": 5, "cell": 0}, "end": {"row": 4, "cell": 1}}]]
//! ```

use super::error::CenterError;
use super::handle::GameHandle;
use serde::{Deserialize, Serialize};
use strictly_checkers::{BoardSnapshot, Move};
use tracing::{debug, info, instrument};

/// Turns to replay, in order.
pub type ReplayScript = Vec<Vec<Move>>;

/// Parses a replay script.
pub fn parse_script(json: &str) -> Result<ReplayScript, serde_json::Error> {
    serde_json::from_str(json)
}

/// Where a replay ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Turns committed by the replay.
    pub turns_applied: usize,
    /// How the game ended, if it did.
    pub game_over_message: Option<String>,
    /// The final board from Red's side.
    pub board: BoardSnapshot,
}

/// A replay stopped on a rejected move or turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("turn {turn}: {source}")]
pub struct ReplayError {
    /// One-based index of the failing turn.
    pub turn: usize,
    /// What was rejected.
    pub source: CenterError,
}

/// Plays every turn of `script` on behalf of whoever is to move.
///
/// # Errors
///
/// Stops at the first move or submission the game rejects.
#[instrument(skip(handle, script), fields(game_id = %handle.id(), turns = script.len()))]
pub fn replay(handle: &GameHandle, script: &[Vec<Move>]) -> Result<ReplayReport, ReplayError> {
    for (index, moves) in script.iter().enumerate() {
        let turn = index + 1;
        let fail = |source: CenterError| ReplayError { turn, source };
        let player = handle.current_player();
        for mv in moves {
            handle.test_move(player.name(), *mv).map_err(fail.clone())?;
        }
        handle.submit_turn(player.name()).map_err(fail)?;
        debug!(turn, player = %player, "Turn replayed");
    }

    let report = ReplayReport {
        turns_applied: script.len(),
        game_over_message: handle.game_over_message(),
        board: handle.spectator_snapshot(),
    };
    info!(
        turns = report.turns_applied,
        game_over = report.game_over_message.is_some(),
        "Replay finished"
    );
    Ok(report)
}

//! Turn phases and end-of-game records.

use super::types::Color;
use serde::{Deserialize, Serialize};

/// Where the active player is within their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnPhase {
    /// Nothing has been tried yet this turn. A submitted turn opens the
    /// opponent's turn here.
    NoMovesPending,
    /// At least one move has been accepted and awaits submission.
    MovesPending,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndReason {
    /// The ending color captured every opposing piece.
    Captured,
    /// The ending color gave up.
    Resigned,
    /// The ending color left the opponent without a legal move.
    NoMovesLeft,
}

/// How a finished game ended.
///
/// `ending_color` is the color whose action ended the game: the capturer,
/// the resigner, or the player who left the opponent stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameEnd {
    /// Why the game ended.
    pub reason: EndReason,
    /// The color whose action ended it.
    pub ending_color: Color,
}

impl GameEnd {
    /// Creates a new end-of-game record.
    pub fn new(reason: EndReason, ending_color: Color) -> Self {
        Self {
            reason,
            ending_color,
        }
    }

    /// The winning color.
    pub fn winner(&self) -> Color {
        match self.reason {
            EndReason::Resigned => self.ending_color.opponent(),
            EndReason::Captured | EndReason::NoMovesLeft => self.ending_color,
        }
    }

    /// The losing color.
    pub fn loser(&self) -> Color {
        self.winner().opponent()
    }
}

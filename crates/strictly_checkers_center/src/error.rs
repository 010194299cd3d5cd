//! Errors raised by the game center.

use derive_more::{Display, Error, From};
use strictly_checkers::{Color, Message, MoveError};

/// Why a game center request was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum CenterError {
    /// Player names must start with a letter or digit and contain only
    /// letters, digits and spaces.
    #[display("'{_0}' is not a valid player name")]
    InvalidName(#[error(not(source))] String),
    /// Both seats were given the same player.
    #[display("{_0} cannot play against themselves")]
    SamePlayer(#[error(not(source))] String),
    /// The player is already seated in another game.
    #[display("{_0} is already in a game")]
    PlayerInGame(#[error(not(source))] String),
    /// The player is not seated in any game (or not in this one).
    #[display("{_0} is not in a game")]
    NotInGame(#[error(not(source))] String),
    /// The request came from the player who is waiting.
    #[display("It is {_0}'s turn")]
    NotYourTurn(#[error(not(source))] Color),
    /// The engine rejected the request.
    #[display("{_0}")]
    #[from]
    Move(MoveError),
}

impl From<CenterError> for Message {
    fn from(err: CenterError) -> Self {
        Message::error(err.to_string())
    }
}

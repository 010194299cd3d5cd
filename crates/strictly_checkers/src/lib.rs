//! Strictly Checkers - an English draughts rules engine.
//!
//! The engine is pure and synchronous: it holds no locks and performs no
//! I/O. A [`CheckersGame`] owns the authoritative [`Board`] and assembles
//! each turn from candidate [`Move`]s, validating them on scratch copies of
//! the board before committing the whole turn at once.
//!
//! # Orientation
//!
//! The authoritative board is stored from Red's side. White plays on a
//! board rotated by 180 degrees (see [`Orientation`]), so White's moves are
//! given in White's own coordinates and one movement rule serves both
//! colors.
//!
//! # Example
//!
//! ```
//! use strictly_checkers::{BoardPreset, CheckersGame, Color, Move, Notice, Player};
//!
//! let mut game = CheckersGame::from_preset(
//!     Player::new("alice"),
//!     Player::new("bob"),
//!     BoardPreset::Standard,
//! );
//! assert_eq!(game.test_move(Move::from_coords(5, 0, 4, 1)), Ok(Notice::ValidMove));
//! assert_eq!(game.submit_turn(), Ok(Notice::TurnSubmitted));
//! assert_eq!(game.current_color(), Color::White);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod invariants;
mod message;
mod orientation;
mod phases;
mod piece;
mod position;
mod presets;
mod row;
mod snapshot;
mod space;
mod types;

// Crate-level exports - Geometry
pub use orientation::Orientation;
pub use position::{NUM_COLS, NUM_ROWS, Position};

// Crate-level exports - Actions and results
pub use action::{Move, MoveError, MoveKind, Notice};
pub use message::{Message, MessageType};

// Crate-level exports - Board
pub use board::Board;
pub use piece::Piece;
pub use presets::BoardPreset;
pub use row::Row;
pub use snapshot::{BoardSnapshot, CellView, RowView};
pub use space::Space;

// Crate-level exports - Game
pub use game::CheckersGame;
pub use phases::{EndReason, GameEnd, TurnPhase};
pub use types::{Color, Player};

// Crate-level exports - Invariants
pub use invariants::{
    CellIndexInvariant, CheckersInvariants, Invariant, InvariantSet, InvariantViolation,
    PieceCountInvariant, PlayableSquaresInvariant, assert_invariants,
};

//! Checker pieces and their movement rules.
//!
//! All rules are phrased in the orientation the board is currently being
//! evaluated in: a Single always advances toward row 0. Callers evaluate
//! White on a flipped board (see [`crate::Orientation`]).

use super::action::Move;
use super::board::Board;
use super::position::Position;
use super::space::Space;
use super::types::Color;
use serde::{Deserialize, Serialize};

/// Row steps a Single may take (toward row 0 only).
const SINGLE_ROW_STEPS: [i32; 1] = [-1];

/// Row steps a King may take.
const KING_ROW_STEPS: [i32; 2] = [-1, 1];

/// Cell steps available to every piece.
const CELL_STEPS: [i32; 2] = [-1, 1];

/// A checker. Immutable: promotion replaces a Single with a new King.
///
/// Serializes as `{"type": "SINGLE" | "KING", "color": "RED" | "WHITE"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "color", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Piece {
    /// An uncrowned piece.
    Single(Color),
    /// A crowned piece.
    King(Color),
}

impl Piece {
    /// Returns the color of the piece.
    pub fn color(&self) -> Color {
        match self {
            Piece::Single(color) | Piece::King(color) => *color,
        }
    }

    /// True for uncrowned pieces.
    pub fn is_single(&self) -> bool {
        matches!(self, Piece::Single(_))
    }

    /// The King this piece becomes when crowned.
    pub fn promoted(&self) -> Piece {
        Piece::King(self.color())
    }

    fn row_steps(&self) -> &'static [i32] {
        match self {
            Piece::Single(_) => &SINGLE_ROW_STEPS,
            Piece::King(_) => &KING_ROW_STEPS,
        }
    }

    /// True if `row_delta` goes in a direction this piece may travel.
    fn allows_direction(&self, row_delta: i64) -> bool {
        match self {
            Piece::Single(_) => row_delta < 0,
            Piece::King(_) => row_delta != 0,
        }
    }

    /// Checks a one-step diagonal against this piece's direction rule.
    ///
    /// Occupancy is not considered; the board checks that first.
    pub fn is_move_valid(&self, mv: &Move) -> bool {
        mv.is_simple() && self.allows_direction(mv.row_delta())
    }

    /// Checks a jump: right shape and direction, an opposing piece on the
    /// captured square, and an empty destination.
    pub fn is_jump_valid(&self, mv: &Move, captured: &Space, destination: &Space) -> bool {
        let captures_opponent = captured
            .piece()
            .is_some_and(|jumped| jumped.color() != self.color());
        mv.is_jump()
            && self.allows_direction(mv.row_delta())
            && captures_opponent
            && destination.piece().is_none()
    }

    /// Returns true if this piece, standing on `from`, has any legal jump.
    ///
    /// Probes every jump destination without touching the board.
    pub fn has_jump(&self, board: &Board, from: Position) -> bool {
        self.probe(from, 2).any(|jump| {
            match (board.jumped_square(&jump), board.space(jump.end)) {
                (Some(captured), Some(destination)) => {
                    self.is_jump_valid(&jump, captured, destination)
                }
                _ => false,
            }
        })
    }

    /// Returns true if this piece, standing on `from`, has any legal simple move.
    pub fn has_move(&self, board: &Board, from: Position) -> bool {
        self.probe(from, 1).any(|mv| {
            self.is_move_valid(&mv)
                && board
                    .space(mv.end)
                    .is_some_and(|destination| destination.is_open())
        })
    }

    /// Candidate on-board moves of the given step length (1 or 2).
    fn probe(&self, from: Position, distance: i32) -> impl Iterator<Item = Move> + '_ {
        self.row_steps().iter().flat_map(move |row_step| {
            CELL_STEPS.iter().filter_map(move |cell_step| {
                let end = from.offset(row_step * distance, cell_step * distance);
                end.is_valid().then(|| Move::new(from, end))
            })
        })
    }

    /// Single-character glyph used by the text renderer.
    pub fn glyph(&self) -> char {
        match self {
            Piece::Single(Color::Red) => 'r',
            Piece::King(Color::Red) => 'R',
            Piece::Single(Color::White) => 'w',
            Piece::King(Color::White) => 'W',
        }
    }
}

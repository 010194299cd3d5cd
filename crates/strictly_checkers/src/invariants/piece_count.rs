//! Piece count invariant: no color ever has more than it started with.

use super::super::board::Board;
use super::super::types::Color;
use super::Invariant;
use strum::IntoEnumIterator;

/// Pieces each color starts a standard game with.
pub const MAX_PIECES_PER_COLOR: usize = 12;

/// Invariant: each color has at most 12 pieces.
pub struct PieceCountInvariant;

impl Invariant<Board> for PieceCountInvariant {
    fn holds(board: &Board) -> bool {
        Color::iter().all(|color| board.piece_count(color) <= MAX_PIECES_PER_COLOR)
    }

    fn description() -> &'static str {
        "Each color has at most 12 pieces"
    }
}

//! Named starting layouts.
//!
//! Besides the standard opening these include small demonstration boards
//! that put a game straight into a position exercising one rule.

use super::board::Board;
use super::piece::Piece;
use super::position::Position;
use super::types::Color;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::{instrument, warn};

const RED: Piece = Piece::Single(Color::Red);
const WHITE: Piece = Piece::Single(Color::White);
const RED_KING: Piece = Piece::King(Color::Red);

/// A named starting layout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BoardPreset {
    /// Twelve Singles each on the usual squares.
    #[default]
    Standard,
    /// Red must take the jump on offer instead of any simple move.
    Jump,
    /// Red can chain several jumps in one turn.
    #[strum(serialize = "mjump")]
    #[serde(rename = "mjump")]
    MultiJump,
    /// A Red Single one step from being crowned.
    King,
    /// A lone Red King in the middle of the board.
    #[strum(serialize = "mking")]
    #[serde(rename = "mking")]
    MovingKing,
    /// A Red King surrounded by capturable White pieces.
    #[strum(serialize = "jking")]
    #[serde(rename = "jking")]
    JumpingKing,
    /// Red wins by capturing the last White piece.
    Win,
    /// Red wins by leaving White with no legal move.
    #[strum(serialize = "nomoves")]
    #[serde(rename = "nomoves")]
    NoMoves,
}

impl BoardPreset {
    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            BoardPreset::Standard => "standard opening position",
            BoardPreset::Jump => "a forced jump is available to Red",
            BoardPreset::MultiJump => "Red can capture several pieces in one turn",
            BoardPreset::King => "a Red Single one step from the king row",
            BoardPreset::MovingKing => "a lone Red King in open space",
            BoardPreset::JumpingKing => "a Red King surrounded by White pieces",
            BoardPreset::Win => "Red can capture the last White piece",
            BoardPreset::NoMoves => "Red can leave White without a legal move",
        }
    }

    /// Rows of the standard opening to clear, and the pieces to add afterwards.
    fn layout(self) -> (Range<i32>, &'static [(i32, i32, Piece)]) {
        match self {
            BoardPreset::Standard => (0..0, &[]),
            BoardPreset::Jump => (
                1..7,
                &[(5, 2, RED), (4, 1, RED), (5, 6, RED), (4, 5, WHITE)],
            ),
            BoardPreset::MultiJump => (
                0..8,
                &[
                    (6, 1, RED),
                    (5, 4, RED),
                    (4, 5, WHITE),
                    (3, 4, WHITE),
                    (5, 2, WHITE),
                    (3, 2, WHITE),
                ],
            ),
            BoardPreset::King => (0..3, &[(0, 1, WHITE), (1, 4, RED)]),
            BoardPreset::MovingKing => (1..7, &[(4, 3, RED_KING)]),
            BoardPreset::JumpingKing => (
                0..8,
                &[
                    (4, 3, RED_KING),
                    (3, 4, WHITE),
                    (1, 6, WHITE),
                    (5, 4, WHITE),
                    (5, 6, WHITE),
                    (3, 6, WHITE),
                ],
            ),
            BoardPreset::Win => (0..8, &[(4, 1, WHITE), (5, 0, RED)]),
            BoardPreset::NoMoves => (0..8, &[(7, 0, RED), (7, 6, RED), (6, 7, WHITE)]),
        }
    }

    /// Builds a fresh board in this layout.
    #[instrument]
    pub fn build(self) -> Board {
        let mut board = Board::new();
        let (cleared, pieces) = self.layout();
        for position in Position::all().filter(|p| cleared.contains(&p.row)) {
            board.remove(position);
        }
        for &(row, cell, piece) in pieces {
            let position = Position::new(row, cell);
            if let Err(err) = board.place(position, piece) {
                warn!(%position, error = %err, "Preset piece skipped");
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_standard_matches_opening() {
        assert_eq!(BoardPreset::Standard.build(), Board::new());
    }

    #[test]
    fn test_every_preset_piece_is_playable() {
        for preset in BoardPreset::iter() {
            let (_, pieces) = preset.layout();
            for &(row, cell, _) in pieces {
                assert!(
                    Position::new(row, cell).is_playable(),
                    "{preset} places a piece on ({row}, {cell})"
                );
            }
        }
    }

    #[test]
    fn test_win_layout() {
        let board = BoardPreset::Win.build();
        assert_eq!(board.piece_count(Color::Red), 1);
        assert_eq!(board.piece_count(Color::White), 1);
    }

    #[test]
    fn test_jump_layout_keeps_back_rows() {
        let board = BoardPreset::Jump.build();
        assert_eq!(board.piece_count(Color::White), 5);
        assert_eq!(board.piece_count(Color::Red), 7);
        assert!(board.player_can_jump(Color::Red));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(BoardPreset::from_str("mjump").ok(), Some(BoardPreset::MultiJump));
        assert_eq!(BoardPreset::from_str("NoMoves").ok(), Some(BoardPreset::NoMoves));
        assert_eq!(BoardPreset::from_str("standard").ok(), Some(BoardPreset::Standard));
        assert!(BoardPreset::from_str("chess").is_err());
        assert_eq!(BoardPreset::JumpingKing.to_string(), "jking");
    }
}

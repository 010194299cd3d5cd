//! A single square of the checkerboard.

use super::piece::Piece;
use super::position::NUM_COLS;
use serde::{Deserialize, Serialize};

/// One square: its column index within its row, whether pieces may stand
/// on it, and the piece standing there if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Space {
    cell_idx: usize,
    playable: bool,
    piece: Option<Piece>,
}

impl Space {
    /// Creates a new space.
    pub fn new(cell_idx: usize, playable: bool, piece: Option<Piece>) -> Self {
        Self {
            cell_idx,
            playable,
            piece,
        }
    }

    /// Index of this space within its row, as seen in the board's orientation.
    pub fn cell_idx(&self) -> usize {
        self.cell_idx
    }

    /// True for the dark squares pieces may stand on.
    pub fn is_playable(&self) -> bool {
        self.playable
    }

    /// True if a piece could move here right now.
    pub fn is_open(&self) -> bool {
        self.playable && self.piece.is_none()
    }

    /// The piece on this space, if any.
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// Puts a piece on this space, replacing whatever was there.
    pub(crate) fn set_piece(&mut self, piece: Option<Piece>) {
        self.piece = piece;
    }

    /// Removes and returns the piece on this space.
    pub(crate) fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    /// Copy of this space as seen from the other side of the board.
    pub(crate) fn mirrored(&self) -> Self {
        Self {
            cell_idx: NUM_COLS as usize - self.cell_idx - 1,
            ..*self
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.playable, self.piece) {
            (_, Some(piece)) => write!(f, "{}", piece.glyph()),
            (true, None) => write!(f, "."),
            (false, None) => write!(f, " "),
        }
    }
}

//! Perspective transform between the two colors.
//!
//! The authoritative board is stored in canonical orientation: Red starts
//! near row 7 and its Singles move toward row 0. White's turns are evaluated
//! on a board rotated by 180 degrees, so one movement rule ("Singles move
//! toward row 0") serves both colors. The rotation is the pure map
//! `(r, c) -> (7 - r, 7 - c)`, which is its own inverse.

use super::action::Move;
use super::position::Position;
use serde::{Deserialize, Serialize};

/// Which way up a board is being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Red's point of view; the layout the authoritative board is stored in.
    #[default]
    Canonical,
    /// White's point of view; every square mirrored through the center.
    Flipped,
}

impl Orientation {
    /// Returns the other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Canonical => Orientation::Flipped,
            Orientation::Flipped => Orientation::Canonical,
        }
    }

    /// True if viewing in this orientation requires mirroring the canonical board.
    pub fn is_flipped(self) -> bool {
        matches!(self, Orientation::Flipped)
    }

    /// Maps a canonical position into this orientation (and back: the map is an involution).
    pub fn transform(self, position: Position) -> Position {
        match self {
            Orientation::Canonical => position,
            Orientation::Flipped => position.inverse(),
        }
    }

    /// Maps both endpoints of a move.
    pub fn transform_move(self, mv: Move) -> Move {
        match self {
            Orientation::Canonical => mv,
            Orientation::Flipped => mv.inverse(),
        }
    }
}

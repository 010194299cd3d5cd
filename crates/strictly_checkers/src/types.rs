//! Core domain types for checkers.

use super::orientation::Orientation;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Piece color. Red always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum Color {
    /// Starts on rows 5-7 and travels toward row 0.
    Red,
    /// Starts on rows 0-2 and travels toward row 7.
    White,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Red => Color::White,
            Color::White => Color::Red,
        }
    }

    /// The orientation in which this color's Singles move toward row 0.
    pub fn orientation(self) -> Orientation {
        match self {
            Color::Red => Orientation::Canonical,
            Color::White => Orientation::Flipped,
        }
    }

    /// The absolute row on which this color's Singles are crowned.
    pub fn king_row(self) -> i32 {
        match self {
            Color::Red => 0,
            Color::White => 7,
        }
    }
}

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name, unique within a game center.
    name: String,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

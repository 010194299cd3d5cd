//! Board coordinates.

use serde::{Deserialize, Serialize};

/// Number of rows on the checkerboard.
pub const NUM_ROWS: i32 = 8;

/// Number of cells in each row of the checkerboard.
pub const NUM_COLS: i32 = 8;

/// A square on the board, addressed by row and cell (column).
///
/// Coordinates are signed so that anything the wire can carry is
/// representable; [`Position::is_valid`] decides whether it is on the board.
/// Row 0 is the far edge in canonical orientation, where Red promotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index (0-7).
    pub row: i32,
    /// Cell index within the row (0-7).
    pub cell: i32,
}

impl Position {
    /// Creates a new position.
    pub const fn new(row: i32, cell: i32) -> Self {
        Self { row, cell }
    }

    /// Mirrors the position through the center of the board.
    ///
    /// `(r, c) -> (7 - r, 7 - c)`. Applying it twice yields the original,
    /// for off-board coordinates too.
    pub const fn inverse(self) -> Self {
        Self {
            row: (NUM_ROWS - 1).wrapping_sub(self.row),
            cell: (NUM_COLS - 1).wrapping_sub(self.cell),
        }
    }

    /// Returns true if both coordinates are on the board.
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < NUM_ROWS && self.cell >= 0 && self.cell < NUM_COLS
    }

    /// Returns true for the 32 dark squares pieces may stand on.
    pub const fn is_playable(self) -> bool {
        self.is_valid() && (self.row + self.cell) % 2 == 1
    }

    /// Returns the position shifted by the given deltas (may be off-board).
    ///
    /// Saturates at the ends of the coordinate range, which are off-board.
    pub const fn offset(self, rows: i32, cells: i32) -> Self {
        Self {
            row: self.row.saturating_add(rows),
            cell: self.cell.saturating_add(cells),
        }
    }

    /// Grid indices for an on-board position.
    pub(crate) fn indices(self) -> Option<(usize, usize)> {
        if self.is_valid() {
            Some((self.row as usize, self.cell as usize))
        } else {
            None
        }
    }

    /// Iterates over all 64 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_ROWS).flat_map(|row| (0..NUM_COLS).map(move |cell| Position::new(row, cell)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_involution() {
        for pos in Position::all() {
            assert_eq!(pos.inverse().inverse(), pos);
            assert!(pos.inverse().is_valid());
        }
    }

    #[test]
    fn test_inverse_corners() {
        assert_eq!(Position::new(0, 0).inverse(), Position::new(7, 7));
        assert_eq!(Position::new(5, 0).inverse(), Position::new(2, 7));
    }

    #[test]
    fn test_is_valid_bounds() {
        assert!(Position::new(0, 0).is_valid());
        assert!(Position::new(7, 7).is_valid());
        assert!(!Position::new(-1, 3).is_valid());
        assert!(!Position::new(3, 8).is_valid());
        assert!(!Position::new(12, 12).is_valid());
    }

    #[test]
    fn test_extreme_coordinates_stay_off_board() {
        let low = Position::new(i32::MIN, i32::MAX);
        assert_eq!(low.inverse().inverse(), low);
        assert!(!low.inverse().is_valid());
        assert!(!low.offset(-2, 2).is_valid());
        assert_eq!(Position::new(i32::MAX, 0).offset(2, 0).row, i32::MAX);
        assert!(!low.is_playable());
    }

    #[test]
    fn test_exactly_32_playable() {
        assert_eq!(Position::all().filter(|p| p.is_playable()).count(), 32);
    }

    #[test]
    fn test_inverse_preserves_playability() {
        for pos in Position::all() {
            assert_eq!(pos.is_playable(), pos.inverse().is_playable());
        }
    }
}

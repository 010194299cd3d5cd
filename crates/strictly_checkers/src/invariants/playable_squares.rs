//! Playable squares invariant: the dark-square pattern and where pieces stand.

use super::super::board::Board;
use super::super::position::Position;
use super::Invariant;

/// Number of dark squares on an 8x8 board.
const PLAYABLE_SQUARES: usize = 32;

/// Invariant: exactly the 32 squares where `row + cell` is odd are playable,
/// and no piece stands on any other square.
pub struct PlayableSquaresInvariant;

impl Invariant<Board> for PlayableSquaresInvariant {
    fn holds(board: &Board) -> bool {
        let mut playable = 0;
        for position in Position::all() {
            let Some(space) = board.space(position) else {
                return false;
            };
            if space.is_playable() != position.is_playable() {
                return false;
            }
            if !space.is_playable() && space.piece().is_some() {
                return false;
            }
            if space.is_playable() {
                playable += 1;
            }
        }
        playable == PLAYABLE_SQUARES
    }

    fn description() -> &'static str {
        "Exactly the 32 dark squares are playable and only they hold pieces"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_boards_hold() {
        assert!(PlayableSquaresInvariant::holds(&Board::new()));
        assert!(PlayableSquaresInvariant::holds(&Board::empty()));
        assert!(PlayableSquaresInvariant::holds(&Board::new().copy(true)));
    }
}

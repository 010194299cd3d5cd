//! Cell index invariant: every space knows its own column.

use super::super::board::Board;
use super::Invariant;

/// Invariant: the cell index stored in each space matches its column in the
/// board's current orientation.
pub struct CellIndexInvariant;

impl Invariant<Board> for CellIndexInvariant {
    fn holds(board: &Board) -> bool {
        board.rows().all(|row| {
            row.iter()
                .enumerate()
                .all(|(column, space)| space.cell_idx() == column)
        })
    }

    fn description() -> &'static str {
        "Each space's cell index matches its column"
    }
}

//! Immutable, serializable views of a board for display.

use super::board::Board;
use super::piece::Piece;
use super::row::Row;
use serde::{Deserialize, Serialize};

/// One square as a viewer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Column index within the row, in the view's orientation.
    pub cell: usize,
    /// True for dark squares.
    pub playable: bool,
    /// The piece on the square, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub piece: Option<Piece>,
}

impl CellView {
    /// True if a piece stands here.
    pub fn has_piece(&self) -> bool {
        self.piece.is_some()
    }
}

/// One row of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    /// Row index, 0 at the top of the view.
    pub index: usize,
    /// Cells left to right.
    pub cells: Vec<CellView>,
}

impl From<Row<'_>> for RowView {
    fn from(row: Row<'_>) -> Self {
        Self {
            index: row.index(),
            cells: row
                .iter()
                .map(|space| CellView {
                    cell: space.cell_idx(),
                    playable: space.is_playable(),
                    piece: space.piece(),
                })
                .collect(),
        }
    }
}

/// A whole board, detached from the game it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Rows top to bottom.
    pub rows: Vec<RowView>,
}

impl BoardSnapshot {
    /// The cell at `(row, cell)` of the view, if in range.
    pub fn cell(&self, row: usize, cell: usize) -> Option<&CellView> {
        self.rows.get(row).and_then(|r| r.cells.get(cell))
    }

    /// Number of pieces in the view.
    pub fn piece_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.has_piece())
            .count()
    }
}

impl std::fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for cell in 0..self.rows.first().map_or(0, |row| row.cells.len()) {
            write!(f, "{cell}")?;
        }
        for row in &self.rows {
            write!(f, "\n{} ", row.index)?;
            for cell in &row.cells {
                let glyph = match (cell.piece, cell.playable) {
                    (Some(piece), _) => piece.glyph(),
                    (None, true) => '.',
                    (None, false) => ' ',
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            rows: board.rows().map(RowView::from).collect(),
        }
    }
}

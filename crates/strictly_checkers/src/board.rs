//! The 8x8 checkerboard and per-move legality.
//!
//! The board is the sole authority on piece placement. It knows nothing
//! about whose turn it is beyond the color passed into each call, but it
//! does carry a little transient state about the turn being assembled on
//! it: the kind and landing square of the last move, a cached answer to
//! "can the active color jump anywhere", and whether the last move ended
//! the game.

use super::action::{Move, MoveError, MoveKind};
use super::orientation::Orientation;
use super::piece::Piece;
use super::position::{NUM_COLS, NUM_ROWS, Position};
use super::presets::BoardPreset;
use super::row::Row;
use super::space::Space;
use super::types::Color;
use std::borrow::Cow;
use tracing::{debug, error, instrument, trace};

const ROWS: usize = NUM_ROWS as usize;
const COLS: usize = NUM_COLS as usize;

/// Rows each side fills at the start of a standard game.
const OPENING_ROWS: usize = 3;

/// An 8x8 board of [`Space`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    spaces: [[Space; COLS]; ROWS],
    orientation: Orientation,
    last_move: Option<MoveKind>,
    last_landing: Option<Position>,
    checked_jumps: bool,
    player_has_jump: bool,
    is_game_over: bool,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Creates a board in the standard opening layout.
    ///
    /// White fills the playable squares of rows 0-2, Red rows 5-7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for position in Position::all().filter(|p| p.is_playable()) {
            let row = position.row as usize;
            let piece = if row < OPENING_ROWS {
                Some(Piece::Single(Color::White))
            } else if row >= ROWS - OPENING_ROWS {
                Some(Piece::Single(Color::Red))
            } else {
                None
            };
            board.spaces[row][position.cell as usize].set_piece(piece);
        }
        board
    }

    /// Creates a board with every square empty.
    pub fn empty() -> Self {
        let spaces = std::array::from_fn(|row| {
            std::array::from_fn(|cell| {
                let playable = Position::new(row as i32, cell as i32).is_playable();
                Space::new(cell, playable, None)
            })
        });
        Self {
            spaces,
            orientation: Orientation::Canonical,
            last_move: None,
            last_landing: None,
            checked_jumps: false,
            player_has_jump: false,
            is_game_over: false,
        }
    }

    /// Creates a board from one of the named layouts.
    pub fn from_preset(preset: BoardPreset) -> Self {
        preset.build()
    }

    /// Creates an otherwise empty board holding the given pieces.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidSpace`] if any position is off-board or unplayable.
    pub fn with_pieces(
        pieces: impl IntoIterator<Item = (Position, Piece)>,
    ) -> Result<Self, MoveError> {
        let mut board = Self::empty();
        for (position, piece) in pieces {
            board.place(position, piece)?;
        }
        Ok(board)
    }

    /// Puts a piece on a playable square, replacing any piece already there.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidSpace`] if the square is off-board or unplayable.
    pub fn place(&mut self, position: Position, piece: Piece) -> Result<(), MoveError> {
        let space = self.space_mut(position).ok_or(MoveError::InvalidSpace)?;
        if !space.is_playable() {
            return Err(MoveError::InvalidSpace);
        }
        space.set_piece(Some(piece));
        Ok(())
    }

    /// Removes and returns the piece on a square.
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.space_mut(position).and_then(Space::take_piece)
    }

    /// Produces an independent copy of the board.
    ///
    /// With `flip`, every square moves to its mirror image through the
    /// center and each space's cell index is mirrored with it, so the copy
    /// is the board as seen from the other side. The copy starts a fresh
    /// turn: transient move bookkeeping is not carried over.
    pub fn copy(&self, flip: bool) -> Board {
        let spaces = std::array::from_fn(|row| {
            std::array::from_fn(|cell| {
                if flip {
                    let source = Position::new(row as i32, cell as i32).inverse();
                    self.spaces[source.row as usize][source.cell as usize].mirrored()
                } else {
                    self.spaces[row][cell]
                }
            })
        });
        Board {
            spaces,
            orientation: if flip {
                self.orientation.flipped()
            } else {
                self.orientation
            },
            last_move: None,
            last_landing: None,
            checked_jumps: false,
            player_has_jump: false,
            is_game_over: false,
        }
    }

    /// The copy of this board in which `color`'s Singles move toward row 0.
    fn oriented_for(&self, color: Color) -> Cow<'_, Board> {
        if self.orientation == color.orientation() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(self.copy(true))
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Which way up this board is.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The space at a position, or `None` if the position is off-board.
    pub fn space(&self, position: Position) -> Option<&Space> {
        position
            .indices()
            .map(|(row, cell)| &self.spaces[row][cell])
    }

    fn space_mut(&mut self, position: Position) -> Option<&mut Space> {
        position
            .indices()
            .map(|(row, cell)| &mut self.spaces[row][cell])
    }

    /// The piece at a position, if any.
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.space(position).and_then(Space::piece)
    }

    /// The square captured by a jump-shaped move.
    pub fn jumped_square(&self, mv: &Move) -> Option<&Space> {
        mv.jumped_position().and_then(|mid| self.space(mid))
    }

    /// Iterates over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.spaces
            .iter()
            .enumerate()
            .map(|(index, spaces)| Row::new(index, spaces))
    }

    /// Iterates over every piece of `color` with its position.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| {
            self.piece_at(position)
                .filter(|piece| piece.color() == color)
                .map(|piece| (position, piece))
        })
    }

    /// Kind of the last move made on this board in the open turn.
    pub fn last_move(&self) -> Option<MoveKind> {
        self.last_move
    }

    /// Resets the turn bookkeeping to follow `last` (or to a fresh turn for `None`).
    pub fn set_last_move(&mut self, last: Option<&Move>) {
        self.last_move = last.and_then(Move::kind);
        self.last_landing = last.map(|mv| mv.end);
    }

    /// Forgets the cached jump scan and the game-over flag.
    pub fn reset_jump_data(&mut self) {
        self.player_has_jump = false;
        self.checked_jumps = false;
        self.is_game_over = false;
    }

    /// Cached result of the last jump availability computation.
    pub fn player_has_jump(&self) -> bool {
        self.player_has_jump
    }

    /// True if the last move applied left the opponent unable to continue.
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }
}

// ─────────────────────────────────────────────────────────────
//  Legality
// ─────────────────────────────────────────────────────────────

impl Board {
    /// Decides whether `mv` is legal for `color` given the moves already
    /// made on this board in the open turn.
    ///
    /// Checks run in a fixed order and the first failure wins. The only
    /// state touched is the cached jump scan, computed once per fresh turn.
    #[instrument(skip(self), fields(mv = %mv))]
    pub fn check_move(&mut self, mv: &Move, color: Color) -> Result<MoveKind, MoveError> {
        let result = self.evaluate(mv, color);
        match &result {
            Ok(kind) => debug!(%kind, "Move accepted"),
            Err(err) => debug!(error = %err, "Move rejected"),
        }
        result
    }

    fn evaluate(&mut self, mv: &Move, color: Color) -> Result<MoveKind, MoveError> {
        let (Some(start_space), Some(end_space)) = (self.space(mv.start), self.space(mv.end))
        else {
            return Err(MoveError::InvalidSpace);
        };
        let piece = start_space.piece().ok_or(MoveError::NoPiece)?;
        if piece.color() != color {
            return Err(MoveError::WrongOwner);
        }
        if end_space.piece().is_some() {
            return Err(MoveError::OccupiedDestination);
        }

        if self.last_move.is_none() && !self.checked_jumps {
            self.player_has_jump = self.player_can_jump(color);
            self.checked_jumps = true;
        }

        match mv.kind() {
            Some(MoveKind::Simple) => match self.last_move {
                Some(MoveKind::Simple) => Err(MoveError::DoubleMove),
                Some(MoveKind::Jump) => Err(MoveError::MoveAfterJump),
                None if self.player_has_jump => Err(MoveError::ForcedJump),
                None if piece.is_move_valid(mv) => Ok(MoveKind::Simple),
                None => Err(MoveError::IllegalMove),
            },
            Some(MoveKind::Jump) => self.evaluate_jump(mv, piece, color),
            None => Err(MoveError::InvalidMove),
        }
    }

    fn evaluate_jump(&self, mv: &Move, piece: Piece, color: Color) -> Result<MoveKind, MoveError> {
        match self.last_move {
            Some(MoveKind::Simple) => return Err(MoveError::JumpAfterMove),
            Some(MoveKind::Jump) if self.last_landing != Some(mv.start) => {
                return Err(MoveError::JumpWithDifferentPiece);
            }
            _ => {}
        }
        let (Some(captured), Some(end_space)) = (self.jumped_square(mv), self.space(mv.end)) else {
            return Err(MoveError::InvalidSpace);
        };
        if piece.is_jump_valid(mv, captured, end_space) {
            return Ok(MoveKind::Jump);
        }
        match captured.piece() {
            None => Err(MoveError::JumpOverNothing),
            Some(jumped) if jumped.color() == color => Err(MoveError::JumpOverOwnPiece),
            Some(_) => Err(MoveError::InvalidMove),
        }
    }

    /// Applies a move already known to be legal.
    ///
    /// Moves the piece, removes the captured piece for jumps, records the
    /// move in the turn bookkeeping, and recomputes whether the opponent can
    /// still play. After a jump it also records whether the moved piece can
    /// jump again from where it landed.
    #[instrument(skip(self), fields(mv = %mv))]
    pub fn make_move(&mut self, mv: &Move) {
        if !(mv.start.is_valid() && mv.end.is_valid()) {
            error!("make_move called with an off-board square");
            return;
        }
        let Some(piece) = self.remove(mv.start) else {
            error!("make_move called without a piece on the start square");
            return;
        };
        if let Some(end_space) = self.space_mut(mv.end) {
            end_space.set_piece(Some(piece));
        }

        let opponent = piece.color().opponent();
        if mv.is_jump() {
            if let Some(captured) = mv.jumped_position() {
                self.remove(captured);
            }
            self.last_move = Some(MoveKind::Jump);
            self.is_game_over = !self.pieces_remaining(opponent) || !self.moves_remaining(opponent);
            self.player_has_jump = self.has_jump_from(piece, mv.end);
        } else {
            self.last_move = Some(MoveKind::Simple);
            self.is_game_over = !self.moves_remaining(opponent);
        }
        self.last_landing = Some(mv.end);
        trace!(
            last_move = ?self.last_move,
            player_has_jump = self.player_has_jump,
            is_game_over = self.is_game_over,
            "Move applied"
        );
    }

    /// Replaces a Single on `position` with a King of the same color.
    ///
    /// Returns true if a piece was crowned.
    pub fn promote(&mut self, position: Position) -> bool {
        match self.space_mut(position) {
            Some(space) => match space.piece() {
                Some(piece) if piece.is_single() => {
                    space.set_piece(Some(piece.promoted()));
                    true
                }
                _ => false,
            },
            None => false,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Exhaustive scans
// ─────────────────────────────────────────────────────────────

impl Board {
    /// True if any piece of `color` has a legal jump.
    ///
    /// Evaluated in `color`'s orientation, so it is correct on canonical and
    /// flipped boards alike.
    pub fn player_can_jump(&self, color: Color) -> bool {
        let view = self.oriented_for(color);
        view.pieces_of(color)
            .any(|(position, piece)| piece.has_jump(&view, position))
    }

    /// True if the piece standing on `position` could jump from there.
    pub fn has_jump_from(&self, piece: Piece, position: Position) -> bool {
        let aligned = self.orientation == piece.color().orientation();
        let view = self.oriented_for(piece.color());
        let at = if aligned { position } else { position.inverse() };
        piece.has_jump(&view, at)
    }

    /// True if `color` has at least one piece on the board.
    pub fn pieces_remaining(&self, color: Color) -> bool {
        self.pieces_of(color).next().is_some()
    }

    /// Number of pieces `color` has on the board.
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// True if any piece of `color` has a legal simple move or jump.
    pub fn moves_remaining(&self, color: Color) -> bool {
        let view = self.oriented_for(color);
        view.pieces_of(color).any(|(position, piece)| {
            piece.has_move(&view, position) || piece.has_jump(&view, position)
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for cell in 0..COLS {
            write!(f, "{cell}")?;
        }
        for row in self.rows() {
            write!(f, "\n{} ", row.index())?;
            for space in row {
                write!(f, "{space}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(color: Color) -> Piece {
        Piece::Single(color)
    }

    #[test]
    fn test_opening_layout() {
        let board = Board::new();
        assert_eq!(board.piece_count(Color::Red), 12);
        assert_eq!(board.piece_count(Color::White), 12);
        assert_eq!(board.piece_at(Position::new(5, 0)), Some(single(Color::Red)));
        assert_eq!(board.piece_at(Position::new(2, 1)), Some(single(Color::White)));
        assert_eq!(board.piece_at(Position::new(4, 1)), None);
    }

    #[test]
    fn test_exactly_32_playable_spaces() {
        let board = Board::new();
        let playable = board
            .rows()
            .flat_map(|row| row.iter())
            .filter(|space| space.is_playable())
            .count();
        assert_eq!(playable, 32);
    }

    #[test]
    fn test_flip_mirrors_grid_and_cell_index() {
        let board = Board::new();
        let flipped = board.copy(true);
        for position in Position::all() {
            let mirrored = position.inverse();
            let (Some(expected), Some(actual)) = (board.space(mirrored), flipped.space(position))
            else {
                panic!("position out of range");
            };
            assert_eq!(expected.piece(), actual.piece());
            assert_eq!(expected.is_playable(), actual.is_playable());
            assert_eq!(actual.cell_idx(), position.cell as usize);
        }
        assert_eq!(flipped.orientation(), Orientation::Flipped);
        assert_eq!(flipped.copy(true), board);
    }

    #[test]
    fn test_copy_without_flip_is_independent() {
        let board = Board::new();
        let mut copy = board.copy(false);
        copy.make_move(&Move::from_coords(5, 0, 4, 1));
        assert_eq!(board.piece_at(Position::new(5, 0)), Some(single(Color::Red)));
        assert_eq!(copy.piece_at(Position::new(5, 0)), None);
    }

    #[test]
    fn test_place_rejects_unplayable_square() {
        let mut board = Board::empty();
        assert_eq!(
            board.place(Position::new(0, 0), single(Color::Red)),
            Err(MoveError::InvalidSpace)
        );
        assert_eq!(
            board.place(Position::new(9, 1), single(Color::Red)),
            Err(MoveError::InvalidSpace)
        );
    }

    #[test]
    fn test_make_move_jump_removes_captured_piece() {
        let mut board = Board::new();
        board.place(Position::new(4, 3), single(Color::White)).ok();
        board.make_move(&Move::from_coords(5, 2, 3, 4));
        assert_eq!(board.piece_at(Position::new(4, 3)), None);
        assert_eq!(board.piece_at(Position::new(3, 4)), Some(single(Color::Red)));
        assert_eq!(board.last_move(), Some(MoveKind::Jump));
    }

    #[test]
    fn test_make_move_does_not_promote() {
        let mut board = Board::empty();
        board.place(Position::new(1, 0), single(Color::Red)).ok();
        board.make_move(&Move::from_coords(1, 0, 0, 1));
        assert_eq!(board.piece_at(Position::new(0, 1)), Some(single(Color::Red)));
    }

    #[test]
    fn test_promote_only_crowns_singles() {
        let mut board = Board::empty();
        board.place(Position::new(0, 1), single(Color::Red)).ok();
        assert!(board.promote(Position::new(0, 1)));
        assert_eq!(board.piece_at(Position::new(0, 1)), Some(Piece::King(Color::Red)));
        assert!(!board.promote(Position::new(0, 1)));
        assert!(!board.promote(Position::new(0, 3)));
    }

    #[test]
    fn test_moves_remaining_respects_each_colors_direction() {
        // A lone White Single on row 7 is stuck (it moves toward row 7),
        // while a lone Red Single on row 7 can still advance.
        let board = Board::with_pieces([(Position::new(7, 0), single(Color::White))])
            .expect("valid layout");
        assert!(!board.moves_remaining(Color::White));

        let board = Board::with_pieces([(Position::new(7, 0), single(Color::Red))])
            .expect("valid layout");
        assert!(board.moves_remaining(Color::Red));
    }

    #[test]
    fn test_player_can_jump_is_orientation_independent() {
        // White on (2, 3) can take Red on (3, 2); Red's reply over (2, 3) is
        // blocked by the second White piece on (1, 4).
        let board = Board::with_pieces([
            (Position::new(2, 3), single(Color::White)),
            (Position::new(1, 4), single(Color::White)),
            (Position::new(3, 2), single(Color::Red)),
        ])
        .expect("valid layout");
        assert!(board.player_can_jump(Color::White));
        assert!(board.copy(true).player_can_jump(Color::White));
        assert!(!board.player_can_jump(Color::Red));
    }

    #[test]
    fn test_display_renders_glyphs() {
        let rendered = Board::new().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  01234567");
        assert_eq!(lines[1], "0  w w w w");
        assert_eq!(lines[8], "7 r r r r ");
    }
}

//! First-class action types for checkers.
//!
//! A [`Move`] is a player's intent: relocate the piece on `start` to `end`.
//! It carries no judgement about legality; the board decides that and
//! answers with either a [`Notice`] or a [`MoveError`].

use super::position::Position;
use serde::{Deserialize, Serialize};

/// The two legal shapes a move can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "lowercase")]
pub enum MoveKind {
    /// One-square diagonal relocation.
    Simple,
    /// Two-square diagonal relocation capturing the piece in between.
    Jump,
}

/// A move from one square to another.
///
/// Wire format: `{"start": {"row": r, "cell": c}, "end": {"row": r, "cell": c}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Square the piece leaves.
    pub start: Position,
    /// Square the piece lands on.
    pub end: Position,
}

impl Move {
    /// Creates a new move.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Shorthand for building a move from raw coordinates.
    pub const fn from_coords(start_row: i32, start_cell: i32, end_row: i32, end_cell: i32) -> Self {
        Self::new(
            Position::new(start_row, start_cell),
            Position::new(end_row, end_cell),
        )
    }

    /// Signed row delta (`end - start`); negative means toward row 0.
    ///
    /// Widened so that any pair of wire coordinates has a delta.
    pub fn row_delta(&self) -> i64 {
        i64::from(self.end.row) - i64::from(self.start.row)
    }

    /// Signed cell delta (`end - start`).
    pub fn cell_delta(&self) -> i64 {
        i64::from(self.end.cell) - i64::from(self.start.cell)
    }

    fn spans(&self, steps: u32) -> bool {
        self.start.row.abs_diff(self.end.row) == steps
            && self.start.cell.abs_diff(self.end.cell) == steps
    }

    /// True iff the move is a one-step diagonal.
    pub fn is_simple(&self) -> bool {
        self.spans(1)
    }

    /// True iff the move is a two-step diagonal.
    pub fn is_jump(&self) -> bool {
        self.spans(2)
    }

    /// Classifies the move; `None` for anything that is neither shape.
    pub fn kind(&self) -> Option<MoveKind> {
        if self.is_simple() {
            Some(MoveKind::Simple)
        } else if self.is_jump() {
            Some(MoveKind::Jump)
        } else {
            None
        }
    }

    /// The square being captured, for jump-shaped moves only.
    pub fn jumped_position(&self) -> Option<Position> {
        // Both endpoints lie two steps apart, so one step from the start
        // stays in range.
        self.is_jump().then(|| {
            self.start.offset(
                self.row_delta().signum() as i32,
                self.cell_delta().signum() as i32,
            )
        })
    }

    /// The same move seen from the opposite side of the board.
    pub fn inverse(&self) -> Self {
        Self::new(self.start.inverse(), self.end.inverse())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// A successful outcome reported back to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Notice {
    /// A simple move was accepted into the pending turn.
    #[display("That move is legal.")]
    ValidMove,
    /// A jump was accepted into the pending turn.
    #[display("That jump is legal.")]
    ValidJump,
    /// The last pending move was removed.
    #[display("Move backed up!")]
    MoveBackedUp,
    /// The pending moves were committed to the board.
    #[display("Turn submitted successfully!")]
    TurnSubmitted,
    /// The player resigned.
    #[display("Resigned successfully!")]
    Resigned,
}

impl From<MoveKind> for Notice {
    fn from(kind: MoveKind) -> Self {
        match kind {
            MoveKind::Simple => Notice::ValidMove,
            MoveKind::Jump => Notice::ValidJump,
        }
    }
}

/// A rule violation. Always recoverable and shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// One of the endpoints is off the board.
    #[display("You cannot move to an invalid space!")]
    InvalidSpace,

    /// There is no piece on the start square.
    #[display("You must move a checker!")]
    NoPiece,

    /// The piece on the start square belongs to the opponent.
    #[display("You cannot move your opponents pieces!")]
    WrongOwner,

    /// The destination already holds a piece.
    #[display("You cannot move to an occupied square!")]
    OccupiedDestination,

    /// A simple move the piece is not allowed to make (e.g. a Single moving backwards).
    #[display("That piece cannot move like that!")]
    IllegalMove,

    /// A second simple move in the same turn.
    #[display("You cannot move twice in one turn!")]
    DoubleMove,

    /// A simple move after a jump in the same turn.
    #[display("You cannot move after jumping!")]
    MoveAfterJump,

    /// A jump after a simple move in the same turn.
    #[display("You cannot jump after moving!")]
    JumpAfterMove,

    /// A follow-up jump that does not start where the previous jump landed.
    #[display("You must keep jumping with the same piece!")]
    JumpWithDifferentPiece,

    /// A simple move while a jump is available.
    #[display("When a jump is possible, you must jump!")]
    ForcedJump,

    /// Submitting a turn that ends in a simple move while a jump was available.
    #[display("When a jump is possible, you must jump!!")]
    ForcedJumpAtSubmit,

    /// Submitting a turn whose last jump can still be continued.
    #[display("You must keep jumping while a jump is possible!")]
    IncompleteJumpChain,

    /// The square being jumped is empty.
    #[display("You cannot jump over an empty square!")]
    JumpOverNothing,

    /// The square being jumped holds the mover's own piece.
    #[display("You cannot jump over your own piece!")]
    JumpOverOwnPiece,

    /// Neither a legal simple move nor a legal jump shape for this piece.
    #[display("That piece cannot move there!")]
    InvalidMove,

    /// Backup requested with nothing pending.
    #[display("You have not made any moves yet!")]
    NoMovesToBackup,

    /// Submit requested with nothing pending.
    #[display("You have not made any moves to submit!")]
    NoMovesToSubmit,

    /// The game has ended; it no longer accepts changes.
    #[display("The game has ended!")]
    GameOver,
}

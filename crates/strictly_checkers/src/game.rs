//! The turn controller.
//!
//! [`CheckersGame`] owns the authoritative board, always stored in Red's
//! orientation, and assembles the active player's turn one move at a time.
//! Each candidate is validated on a scratch copy of the board oriented for
//! the active color, with the moves already accepted this turn replayed
//! onto it. Nothing reaches the authoritative board until the turn is
//! submitted.

use super::action::{Move, MoveError, Notice};
use super::board::Board;
#[cfg(debug_assertions)]
use super::invariants::assert_invariants;
use super::phases::{EndReason, GameEnd, TurnPhase};
use super::presets::BoardPreset;
use super::snapshot::BoardSnapshot;
use super::types::{Color, Player};
use tracing::{debug, info, instrument, warn};

/// A game of checkers between two players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckersGame {
    red: Player,
    white: Player,
    board: Board,
    active: Color,
    pending: Vec<Move>,
    end: Option<GameEnd>,
    new_turn: bool,
    turns_played: usize,
}

// ─────────────────────────────────────────────────────────────
//  Construction
// ─────────────────────────────────────────────────────────────

impl CheckersGame {
    /// Starts a game on `board` with Red to move.
    ///
    /// A flipped board is turned back to Red's orientation first.
    #[instrument(skip(board), fields(red = %red, white = %white))]
    pub fn new(red: Player, white: Player, board: Board) -> Self {
        let board = board.copy(board.orientation().is_flipped());
        info!("Starting game");
        Self {
            red,
            white,
            board,
            active: Color::Red,
            pending: Vec::new(),
            end: None,
            new_turn: false,
            turns_played: 0,
        }
    }

    /// Starts a game from a named layout.
    pub fn from_preset(red: Player, white: Player, preset: BoardPreset) -> Self {
        Self::new(red, white, preset.build())
    }
}

// ─────────────────────────────────────────────────────────────
//  Turn assembly
// ─────────────────────────────────────────────────────────────

impl CheckersGame {
    /// Validates `mv` for the active player and, if legal, adds it to the
    /// pending turn.
    ///
    /// Coordinates are in the active player's view: White's moves are given
    /// on the flipped board.
    ///
    /// # Errors
    ///
    /// Returns the first rule the move breaks, or [`MoveError::GameOver`]
    /// once the game has ended. The pending turn is unchanged on error.
    #[instrument(skip(self), fields(color = %self.active, mv = %mv))]
    pub fn test_move(&mut self, mv: Move) -> Result<Notice, MoveError> {
        self.ensure_running()?;
        let mut scratch = self.scratch_board();
        let kind = scratch.check_move(&mv, self.active)?;
        self.pending.push(mv);
        debug!(%kind, pending = self.pending.len(), "Move added to turn");
        Ok(kind.into())
    }

    /// Removes the most recently accepted move from the pending turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoMovesToBackup`] if nothing is pending.
    #[instrument(skip(self), fields(color = %self.active))]
    pub fn backup_move(&mut self) -> Result<Notice, MoveError> {
        self.ensure_running()?;
        let mv = self.pending.pop().ok_or(MoveError::NoMovesToBackup)?;
        debug!(%mv, pending = self.pending.len(), "Move backed up");
        Ok(Notice::MoveBackedUp)
    }

    /// Commits the pending turn to the board and passes play to the opponent.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NoMovesToSubmit`] if nothing is pending
    /// - [`MoveError::ForcedJumpAtSubmit`] if the turn is a simple move while
    ///   a jump is available
    /// - [`MoveError::IncompleteJumpChain`] if the jumping piece can jump again
    #[instrument(skip(self), fields(color = %self.active, pending = self.pending.len()))]
    pub fn submit_turn(&mut self) -> Result<Notice, MoveError> {
        self.ensure_running()?;
        let last = *self.pending.last().ok_or(MoveError::NoMovesToSubmit)?;

        let mut scratch = self.fresh_scratch();
        if last.is_simple() && scratch.player_can_jump(self.active) {
            warn!("Simple move submitted while a jump is available");
            return Err(MoveError::ForcedJumpAtSubmit);
        }
        for mv in &self.pending {
            scratch.make_move(mv);
        }
        if last.is_jump() && scratch.player_has_jump() {
            warn!(landing = %last.end, "Jump chain left incomplete");
            return Err(MoveError::IncompleteJumpChain);
        }

        self.commit();
        Ok(Notice::TurnSubmitted)
    }

    /// Drops every pending move without committing any of them.
    ///
    /// A finished game never has pending moves, so this leaves it unchanged.
    #[instrument(skip(self), fields(pending = self.pending.len()))]
    pub fn clear_turn_moves(&mut self) {
        self.pending.clear();
    }

    fn ensure_running(&self) -> Result<(), MoveError> {
        match self.end {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }

    /// The authoritative board oriented for the active color.
    fn fresh_scratch(&self) -> Board {
        self.board.copy(self.active.orientation().is_flipped())
    }

    /// A fresh scratch board with the pending moves replayed onto it.
    fn scratch_board(&self) -> Board {
        let mut scratch = self.fresh_scratch();
        for mv in &self.pending {
            scratch.make_move(mv);
        }
        scratch
    }

    fn commit(&mut self) {
        let mover = self.active;
        let orientation = mover.orientation();
        let mut landing = None;
        for mv in self.pending.drain(..) {
            let canonical = orientation.transform_move(mv);
            self.board.make_move(&canonical);
            landing = Some(canonical.end);
        }

        let crowned = landing
            .filter(|position| position.row == mover.king_row())
            .filter(|position| self.board.promote(*position));
        if let Some(position) = crowned {
            info!(%position, color = %mover, "Piece crowned");
        }

        self.board.set_last_move(None);
        self.board.reset_jump_data();
        self.active = mover.opponent();
        self.turns_played += 1;

        let opponent = self.active;
        if !self.board.pieces_remaining(opponent) {
            self.finish(GameEnd::new(EndReason::Captured, mover));
        } else if !self.board.moves_remaining(opponent) {
            self.finish(GameEnd::new(EndReason::NoMovesLeft, mover));
        }
        self.new_turn = true;

        #[cfg(debug_assertions)]
        assert_invariants(&self.board);

        info!(
            turns_played = self.turns_played,
            next = %self.active,
            game_over = self.end.is_some(),
            "Turn submitted"
        );
    }
}

// ─────────────────────────────────────────────────────────────
//  End of game
// ─────────────────────────────────────────────────────────────

impl CheckersGame {
    /// Ends the game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has already ended.
    #[instrument(skip(self))]
    pub fn end_game(&mut self, reason: EndReason, ending_color: Color) -> Result<(), MoveError> {
        self.ensure_running()?;
        self.finish(GameEnd::new(reason, ending_color));
        self.new_turn = true;
        Ok(())
    }

    /// `color` gives up the game.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has already ended.
    pub fn resign(&mut self, color: Color) -> Result<Notice, MoveError> {
        self.end_game(EndReason::Resigned, color)?;
        Ok(Notice::Resigned)
    }

    fn finish(&mut self, end: GameEnd) {
        info!(reason = %end.reason, ending_color = %end.ending_color, "Game over");
        self.pending.clear();
        self.end = Some(end);
    }

    /// True once the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.end.is_some()
    }

    /// How the game ended, if it has.
    pub fn end(&self) -> Option<GameEnd> {
        self.end
    }

    /// Describes how the game ended, or `None` while it is running.
    pub fn game_over_message(&self) -> Option<String> {
        let end = self.end?;
        let winner = self.player(end.winner());
        let loser = self.player(end.loser());
        Some(match end.reason {
            EndReason::Captured => format!("{winner} has captured all of {loser}'s pieces."),
            EndReason::Resigned => format!("{} has resigned.", self.player(end.ending_color)),
            EndReason::NoMovesLeft => format!("{loser} has no moves left. {winner} wins."),
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Observation
// ─────────────────────────────────────────────────────────────

impl CheckersGame {
    /// True if a turn was committed (or the game ended) since the flag was
    /// last consumed.
    pub fn is_new_turn(&self) -> bool {
        self.new_turn
    }

    /// Reads and clears the new-turn flag.
    pub fn consume_new_turn(&mut self) -> bool {
        std::mem::take(&mut self.new_turn)
    }

    /// A copy of the authoritative board, flipped to White's view with `flip`.
    pub fn board(&self, flip: bool) -> Board {
        self.board.copy(flip)
    }

    /// A display snapshot of the authoritative board.
    pub fn board_snapshot(&self, flip: bool) -> BoardSnapshot {
        BoardSnapshot::from(&self.board.copy(flip))
    }

    /// A display snapshot as `color` sees the board.
    pub fn view_for(&self, color: Color) -> BoardSnapshot {
        self.board_snapshot(color.orientation().is_flipped())
    }

    /// The color whose turn it is.
    pub fn current_color(&self) -> Color {
        self.active
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.active)
    }

    /// The player holding `color`.
    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Red => &self.red,
            Color::White => &self.white,
        }
    }

    /// The Red player.
    pub fn red_player(&self) -> &Player {
        &self.red
    }

    /// The White player.
    pub fn white_player(&self) -> &Player {
        &self.white
    }

    /// The color `name` plays, if they are in this game.
    pub fn color_of(&self, name: &str) -> Option<Color> {
        if self.red.name() == name {
            Some(Color::Red)
        } else if self.white.name() == name {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Moves accepted so far in the open turn, in the active player's view.
    pub fn turn_moves(&self) -> &[Move] {
        &self.pending
    }

    /// Where the active player is within their turn.
    pub fn turn_phase(&self) -> TurnPhase {
        if self.pending.is_empty() {
            TurnPhase::NoMovesPending
        } else {
            TurnPhase::MovesPending
        }
    }

    /// Number of turns committed so far.
    pub fn turns_played(&self) -> usize {
        self.turns_played
    }
}

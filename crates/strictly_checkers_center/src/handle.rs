//! Shared access to one game.
//!
//! A [`GameHandle`] is a cheap, cloneable reference to a game held by the
//! center. Every operation takes the game's lock for its whole duration, so
//! the two players and any spectators never observe a half-applied turn.
//! Committed turns are announced on a watch channel.

use super::error::CenterError;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use strictly_checkers::{BoardSnapshot, CheckersGame, Color, GameEnd, Move, Notice, Player};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Stable identifier of a game within a center.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{_0}")]
pub struct GameId(pub u64);

/// What spectators learn after each committed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    /// Turns committed so far.
    pub turns_played: usize,
    /// Color to move next.
    pub next: Color,
    /// How the game ended, once it has.
    pub end: Option<GameEnd>,
}

impl TurnEvent {
    fn of(game: &CheckersGame) -> Self {
        Self {
            turns_played: game.turns_played(),
            next: game.current_color(),
            end: game.end(),
        }
    }
}

#[derive(Debug)]
struct Shared {
    game: Mutex<CheckersGame>,
    events: watch::Sender<TurnEvent>,
}

/// A reference to one game in the center.
#[derive(Debug, Clone)]
pub struct GameHandle {
    id: GameId,
    shared: Arc<Shared>,
}

impl GameHandle {
    pub(crate) fn new(id: GameId, game: CheckersGame) -> Self {
        let (events, _) = watch::channel(TurnEvent::of(&game));
        Self {
            id,
            shared: Arc::new(Shared {
                game: Mutex::new(game),
                events,
            }),
        }
    }

    /// The game's id.
    pub fn id(&self) -> GameId {
        self.id
    }

    /// A panic while the lock was held cannot leave a game half-updated:
    /// every engine operation validates before it mutates.
    fn lock(&self) -> MutexGuard<'_, CheckersGame> {
        self.shared.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` against a consistent view of the game.
    pub fn read<R>(&self, f: impl FnOnce(&CheckersGame) -> R) -> R {
        f(&self.lock())
    }

    /// Subscribes to turn notifications.
    pub fn subscribe(&self) -> watch::Receiver<TurnEvent> {
        self.shared.events.subscribe()
    }

    fn publish(&self, game: &CheckersGame) {
        let event = TurnEvent::of(game);
        debug!(game_id = %self.id, ?event, "Publishing turn event");
        self.shared.events.send_replace(event);
    }

    /// Resolves `name` to a color and checks that it is their turn.
    fn seat(game: &CheckersGame, name: &str) -> Result<Color, CenterError> {
        let color = game
            .color_of(name)
            .ok_or_else(|| CenterError::NotInGame(name.to_string()))?;
        if !game.is_game_over() && game.current_color() != color {
            return Err(CenterError::NotYourTurn(game.current_color()));
        }
        Ok(color)
    }

    /// Validates a move for `name` and adds it to their pending turn.
    ///
    /// # Errors
    ///
    /// Fails if `name` is not seated here, is waiting for the opponent, or
    /// the engine rejects the move.
    #[instrument(skip(self), fields(game_id = %self.id, mv = %mv))]
    pub fn test_move(&self, name: &str, mv: Move) -> Result<Notice, CenterError> {
        let mut game = self.lock();
        Self::seat(&game, name)?;
        Ok(game.test_move(mv)?)
    }

    /// Removes `name`'s most recent pending move.
    ///
    /// # Errors
    ///
    /// As [`GameHandle::test_move`].
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn backup_move(&self, name: &str) -> Result<Notice, CenterError> {
        let mut game = self.lock();
        Self::seat(&game, name)?;
        Ok(game.backup_move()?)
    }

    /// Commits `name`'s pending turn and notifies subscribers.
    ///
    /// # Errors
    ///
    /// As [`GameHandle::test_move`].
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn submit_turn(&self, name: &str) -> Result<Notice, CenterError> {
        let mut game = self.lock();
        Self::seat(&game, name)?;
        let notice = game.submit_turn()?;
        self.publish(&game);
        Ok(notice)
    }

    /// `name` resigns, at any point in the game.
    ///
    /// # Errors
    ///
    /// Fails if `name` is not seated here or the game has already ended.
    #[instrument(skip(self), fields(game_id = %self.id))]
    pub fn resign(&self, name: &str) -> Result<Notice, CenterError> {
        let mut game = self.lock();
        let color = game
            .color_of(name)
            .ok_or_else(|| CenterError::NotInGame(name.to_string()))?;
        let notice = game.resign(color)?;
        info!(%color, "Player resigned");
        self.publish(&game);
        Ok(notice)
    }

    /// Drops `name`'s pending moves, as when their session resumes mid-turn.
    pub fn clear_turn_moves(&self, name: &str) {
        let mut game = self.lock();
        if game.color_of(name) == Some(game.current_color()) {
            game.clear_turn_moves();
        } else {
            warn!(game_id = %self.id, name, "Ignoring clear from the waiting player");
        }
    }

    /// The board as `name` sees it.
    ///
    /// # Errors
    ///
    /// Returns [`CenterError::NotInGame`] if `name` is not seated here.
    pub fn snapshot_for(&self, name: &str) -> Result<BoardSnapshot, CenterError> {
        let game = self.lock();
        let color = game
            .color_of(name)
            .ok_or_else(|| CenterError::NotInGame(name.to_string()))?;
        Ok(game.view_for(color))
    }

    /// The board from Red's side, for spectators.
    pub fn spectator_snapshot(&self) -> BoardSnapshot {
        self.lock().board_snapshot(false)
    }

    /// True once the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.lock().is_game_over()
    }

    /// How the game ended, if it has.
    pub fn game_over_message(&self) -> Option<String> {
        self.lock().game_over_message()
    }

    /// Reads and clears the game's new-turn flag.
    pub fn consume_new_turn(&self) -> bool {
        self.lock().consume_new_turn()
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.lock().current_player().clone()
    }

    /// The Red and White players.
    pub fn players(&self) -> (Player, Player) {
        let game = self.lock();
        (game.red_player().clone(), game.white_player().clone())
    }
}

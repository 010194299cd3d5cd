//! The game center: every running game, addressed by id and by player.

use super::error::CenterError;
use super::handle::{GameHandle, GameId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use strictly_checkers::{BoardPreset, CheckersGame, Notice, Player};
use tracing::{debug, info, instrument, warn};

/// One line of the active games listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// The game's id.
    pub id: GameId,
    /// Red player's name.
    pub red: String,
    /// White player's name.
    pub white: String,
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} vs {}", self.id, self.red, self.white)
    }
}

#[derive(Debug, Default)]
struct Arena {
    next_id: u64,
    games: BTreeMap<GameId, GameHandle>,
    seats: HashMap<String, GameId>,
}

/// Registry of games and the players seated in them.
///
/// The registry lock is only ever held for map lookups and updates, never
/// while a game's own lock is taken.
#[derive(Debug, Clone, Default)]
pub struct GameCenter {
    arena: Arc<Mutex<Arena>>,
}

/// True for names that start with a letter or digit and otherwise contain
/// only letters, digits and spaces.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

impl GameCenter {
    /// Creates an empty center.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game center");
        Self::default()
    }

    fn arena(&self) -> MutexGuard<'_, Arena> {
        self.arena.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seats two players at a new game.
    ///
    /// # Errors
    ///
    /// Fails if either name is invalid, both names are the same, or either
    /// player is already seated elsewhere.
    #[instrument(skip(self))]
    pub fn create_game(
        &self,
        red: &str,
        white: &str,
        preset: BoardPreset,
    ) -> Result<GameHandle, CenterError> {
        for name in [red, white] {
            if !is_valid_name(name) {
                warn!(name, "Rejected player name");
                return Err(CenterError::InvalidName(name.to_string()));
            }
        }
        if red == white {
            return Err(CenterError::SamePlayer(red.to_string()));
        }

        let mut arena = self.arena();
        if let Some(busy) = [red, white].into_iter().find(|n| arena.seats.contains_key(*n)) {
            warn!(name = busy, "Player already seated");
            return Err(CenterError::PlayerInGame(busy.to_string()));
        }

        arena.next_id += 1;
        let id = GameId(arena.next_id);
        let game = CheckersGame::from_preset(Player::new(red), Player::new(white), preset);
        let handle = GameHandle::new(id, game);
        arena.games.insert(id, handle.clone());
        arena.seats.insert(red.to_string(), id);
        arena.seats.insert(white.to_string(), id);
        info!(game_id = %id, %preset, "Game created");
        Ok(handle)
    }

    /// The game with this id.
    pub fn game(&self, id: GameId) -> Option<GameHandle> {
        self.arena().games.get(&id).cloned()
    }

    /// The game `name` is seated in.
    pub fn game_for(&self, name: &str) -> Option<GameHandle> {
        let arena = self.arena();
        let id = arena.seats.get(name)?;
        arena.games.get(id).cloned()
    }

    /// True if `name` is seated in a game.
    pub fn in_game(&self, name: &str) -> bool {
        self.arena().seats.contains_key(name)
    }

    /// The player `name` is facing.
    pub fn opponent_of(&self, name: &str) -> Option<Player> {
        let handle = self.game_for(name)?;
        let (red, white) = handle.players();
        if red.name() == name {
            Some(white)
        } else {
            Some(red)
        }
    }

    /// `name` resigns the game they are seated in.
    ///
    /// # Errors
    ///
    /// Fails if `name` is not seated anywhere or the game already ended.
    #[instrument(skip(self))]
    pub fn resign(&self, name: &str) -> Result<Notice, CenterError> {
        let handle = self
            .game_for(name)
            .ok_or_else(|| CenterError::NotInGame(name.to_string()))?;
        handle.resign(name)
    }

    /// Unseats `name`. Leaving a running game resigns it.
    ///
    /// The game itself is dropped from the center once both players left.
    ///
    /// # Errors
    ///
    /// Returns [`CenterError::NotInGame`] if `name` is not seated anywhere.
    #[instrument(skip(self))]
    pub fn exit_game(&self, name: &str) -> Result<(), CenterError> {
        let handle = self
            .game_for(name)
            .ok_or_else(|| CenterError::NotInGame(name.to_string()))?;
        if !handle.is_game_over() {
            // A concurrent resignation by the opponent may win the race.
            if let Err(err) = handle.resign(name) {
                debug!(error = %err, "Game ended before exit");
            }
        }

        let mut arena = self.arena();
        arena.seats.remove(name);
        let id = handle.id();
        if !arena.seats.values().any(|seated| *seated == id) {
            arena.games.remove(&id);
            info!(game_id = %id, "Game closed");
        }
        Ok(())
    }

    /// Games still in play, in creation order.
    pub fn active_games(&self) -> Vec<GameSummary> {
        let handles: Vec<GameHandle> = self.arena().games.values().cloned().collect();
        handles
            .into_iter()
            .filter(|handle| !handle.is_game_over())
            .map(|handle| {
                let (red, white) = handle.players();
                GameSummary {
                    id: handle.id(),
                    red: red.name().clone(),
                    white: white.name().clone(),
                }
            })
            .collect()
    }

    /// Number of games held, finished or not.
    pub fn game_count(&self) -> usize {
        self.arena().games.len()
    }
}

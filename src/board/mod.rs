//! The live-game registry behind the scoreboard display.
//!
//! [`ScoreBoard`] maps each (home, away) pairing to its current [`Game`]
//! snapshot. All four operations (start, update, finish, summary) are safe
//! to call from concurrent threads without caller-side locking: each takes
//! the shared lock exactly once, so a mutation for a given pairing is
//! indivisible and a summary reflects one consistent view of the map.

pub mod ordering;

pub use ordering::{by_score_then_recency, SummaryOrdering};

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{BoardError, Result};
use crate::model::{Game, GameId, Score, Team};

/// Thread-safe, in-memory registry of live games.
///
/// Cloning is cheap and every clone addresses the same board, so a handle
/// can be passed to each thread that reports scores.
#[derive(Clone)]
pub struct ScoreBoard {
    games: Arc<RwLock<HashMap<GameId, Game>>>,
    ordering: SummaryOrdering,
}

impl ScoreBoard {
    /// Empty board with the default summary ordering.
    pub fn new() -> Self {
        Self::with_games([])
    }

    /// Board pre-populated with `games`, default ordering. A later seed with
    /// the same pairing replaces an earlier one.
    pub fn with_games(games: impl IntoIterator<Item = Game>) -> Self {
        Self::with_ordering(by_score_then_recency(), games)
    }

    /// Board with a custom summary ordering and initial games.
    pub fn with_ordering(
        ordering: SummaryOrdering,
        games: impl IntoIterator<Item = Game>,
    ) -> Self {
        let games: HashMap<GameId, Game> =
            games.into_iter().map(|game| (game.id(), game)).collect();
        ScoreBoard {
            games: Arc::new(RwLock::new(games)),
            ordering,
        }
    }

    /// Start a game between `home` and `away` at 0-0, stamped with the
    /// current time, and return it.
    ///
    /// Starting a pairing that is already on the board resets it (score back
    /// to 0-0, start time to now) rather than adding a duplicate.
    pub fn start_game(&self, home: &str, away: &str) -> Result<Game> {
        let game = Game::new(Team::new(home)?, Team::new(away)?);
        let mut games = self.games.write().unwrap();
        games.insert(game.id(), game.clone());
        debug!("Game started: {}", game);
        Ok(game)
    }

    /// Replace the score of a running game and return the updated snapshot.
    /// The game keeps its original start time.
    ///
    /// Fails with [`BoardError::GameNotFound`] if the pairing is not on the
    /// board; the board is left unchanged.
    pub fn update_score(&self, home: &str, away: &str, score: Score) -> Result<Game> {
        let id = GameId::new(home, away);
        let mut games = self.games.write().unwrap();
        let existing = games
            .get(&id)
            .ok_or_else(|| BoardError::GameNotFound(id.clone()))?;
        let updated = existing.with_score(score);
        games.insert(id, updated.clone());
        debug!("Score updated: {}", updated);
        Ok(updated)
    }

    /// Remove a game from the board, returning it if it was running.
    ///
    /// Finishing a pairing that is not on the board is a no-op and returns
    /// `None`, never an error.
    pub fn finish_game(&self, home: &str, away: &str) -> Option<Game> {
        let removed = self
            .games
            .write()
            .unwrap()
            .remove(&GameId::new(home, away));
        if let Some(game) = &removed {
            debug!("Game finished: {}", game);
        }
        removed
    }

    /// Current snapshot of a single pairing, if it is on the board.
    pub fn game(&self, home: &str, away: &str) -> Option<Game> {
        self.games
            .read()
            .unwrap()
            .get(&GameId::new(home, away))
            .cloned()
    }

    /// Point-in-time snapshot of all live games in summary order.
    ///
    /// The returned list is an independent copy: later board mutations never
    /// show through it. The sort is stable, so games tied on every ordering
    /// criterion keep a stable relative order within one call.
    pub fn summary(&self) -> Vec<Game> {
        let mut snapshot: Vec<Game> = {
            let games = self.games.read().unwrap();
            games.values().cloned().collect()
        };
        snapshot.sort_by(|a, b| (self.ordering)(a, b));
        snapshot
    }

    /// Number of live games on the board.
    pub fn len(&self) -> usize {
        self.games.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

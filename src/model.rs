//! Value types for the scoreboard: participants, scorelines, and game records.
//!
//! [`Game`] is an immutable snapshot; a score change produces a new value via
//! [`Game::with_score`] rather than mutating anything in place. Equality and
//! hashing for `Game` cover the identity pair (home name, away name) only:
//! two records for the same pairing are the same game no matter what the
//! score or start time say, which is what lets a score update be expressed
//! as "replace the value under the same key".

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// A participant, identified solely by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    name: String,
}

impl Team {
    /// Create a team. Fails with [`BoardError::EmptyTeamName`] if the name
    /// is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BoardError::EmptyTeamName);
        }
        Ok(Team { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A scoreline as (home, away) goals. Plain value, no validation: the board
/// stores whatever the caller reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: i32,
    pub away: i32,
}

impl Score {
    pub fn new(home: i32, away: i32) -> Self {
        Score { home, away }
    }

    /// Combined goal count, used for summary ranking.
    pub fn total(&self) -> i64 {
        i64::from(self.home) + i64::from(self.away)
    }
}

/// Registry key: the (home name, away name) pair.
///
/// Kept separate from [`Game`] so lookups hash the identity pair and nothing
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId {
    pub home: String,
    pub away: String,
}

impl GameId {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        GameId {
            home: home.into(),
            away: away.into(),
        }
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

/// One tracked live game: two teams, the current score, and the moment the
/// game was started.
///
/// `started_at` is assigned once at creation; [`Game::with_score`] is the
/// only transform and it preserves identity and start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    home: Team,
    away: Team,
    score: Score,
    started_at: DateTime<Utc>,
}

impl Game {
    /// Start a fresh game at 0-0, stamped with the current time.
    pub fn new(home: Team, away: Team) -> Self {
        Self::with_start(home, away, Score::default(), Utc::now())
    }

    /// Full constructor, for seeding a board with already-running games.
    pub fn with_start(home: Team, away: Team, score: Score, started_at: DateTime<Utc>) -> Self {
        Game {
            home,
            away,
            score,
            started_at,
        }
    }

    pub fn home(&self) -> &Team {
        &self.home
    }

    pub fn away(&self) -> &Team {
        &self.away
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The identity pair this game is registered under.
    pub fn id(&self) -> GameId {
        GameId::new(self.home.name(), self.away.name())
    }

    /// Copy of this game with the score replaced. The input is untouched.
    pub fn with_score(&self, score: Score) -> Game {
        Game {
            score,
            ..self.clone()
        }
    }

    pub fn total_score(&self) -> i64 {
        self.score.total()
    }
}

// Identity only: score and start time never participate.
impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.home == other.home && self.away == other.away
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.home.hash(state);
        self.away.hash(state);
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} - {}",
            self.home.name(),
            self.away.name(),
            self.score.home,
            self.score.away
        )
    }
}

//! # scoreboard
//!
//! Concurrent in-memory registry of live games, producing ranked summary
//! snapshots for a scoreboard display.
//!
//! A game is identified by its (home, away) pairing and nothing else; the
//! score and start time are live state, not identity. The [`ScoreBoard`]
//! owns the set of running games and exposes four operations: start a game,
//! update its score, finish it, and take an ordered summary snapshot. All of
//! them are safe to call from concurrent threads through cheap clones of the
//! board handle.
//!
//! The summary ranks games by combined score, highest first, breaking ties
//! in favor of the most recently started game. A different ordering can be
//! injected at construction via [`ScoreBoard::with_ordering`].
//!
//! ```
//! use scoreboard::{Score, ScoreBoard};
//!
//! let board = ScoreBoard::new();
//! board.start_game("Mexico", "Canada")?;
//! board.start_game("Spain", "Brazil")?;
//! board.update_score("Mexico", "Canada", Score::new(0, 5))?;
//! board.update_score("Spain", "Brazil", Score::new(10, 2))?;
//!
//! for game in board.summary() {
//!     println!("{}", game); // "Spain - Brazil: 10 - 2", then "Mexico - Canada: 0 - 5"
//! }
//!
//! let finished = board.finish_game("Spain", "Brazil");
//! assert!(finished.is_some());
//! assert_eq!(board.len(), 1);
//! # Ok::<(), scoreboard::BoardError>(())
//! ```
//!
//! ## Modules
//!
//! - [`model`] - `Team`, `Score`, `GameId`, and the immutable `Game` record
//! - [`board`] - the `ScoreBoard` registry and its summary ordering
//! - [`error`] - the `BoardError` taxonomy

pub mod board;
pub mod error;
pub mod model;

pub use board::{by_score_then_recency, ScoreBoard, SummaryOrdering};
pub use error::{BoardError, Result};
pub use model::{Game, GameId, Score, Team};

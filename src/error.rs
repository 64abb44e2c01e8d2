use thiserror::Error;

use crate::model::GameId;

/// Errors surfaced by the scoreboard registry.
///
/// A failed call never changes board state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A participant name was empty (or whitespace only).
    #[error("Team name cannot be empty")]
    EmptyTeamName,

    /// A score update addressed a pairing that is not on the board.
    #[error("Cannot find game '{0}'")]
    GameNotFound(GameId),
}

pub type Result<T> = std::result::Result<T, BoardError>;

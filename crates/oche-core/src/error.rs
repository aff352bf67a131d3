//! Error types for the scoring engine.

use thiserror::Error;

/// Result type for scoring engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while setting up a game or validating score entry.
///
/// A bust is deliberately absent: it is a silent no-op outcome of
/// [`Game::record_score`](crate::Game::record_score), observable only as
/// unchanged state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Starting score must be positive.
    #[error("invalid starting score: {0}")]
    InvalidStartingScore(u32),

    /// Starting score outside the X01 family (301, 501, 701, 1001, ...).
    #[error("{0} is not an X01 starting score (must end in 01)")]
    NotAnX01Score(u32),

    /// Player name is empty after trimming.
    #[error("player name cannot be empty")]
    EmptyPlayerName,

    /// Player name already present in this game.
    #[error("player name already taken: {0}")]
    DuplicatePlayerName(String),

    /// Visit total above the three-dart maximum.
    #[error("{0} exceeds the maximum visit score of 180")]
    ScoreTooHigh(u32),

    /// Visit total that no combination of three darts produces.
    #[error("{0} is not a possible 3-dart score")]
    ImpossibleScore(u32),
}

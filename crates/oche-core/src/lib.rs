//! Darts scoring engine: players, X01 game sessions, and score-entry
//! validation.
//!
//! The engine is presentation-agnostic and does no I/O. A host collects a
//! numeric visit total for the current player (checked with
//! [`validate_visit_score`]), hands it to [`Game::record_score`], and
//! re-renders from the resulting state. Undo, reset, and cloning round out
//! the session surface; busts and wins are state outcomes, not errors.

/// Game configuration and setup-time validation.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Game session state machine: turns, busts, wins, undo.
pub mod game;
/// Player state: remaining score and visit history.
pub mod player;
/// Visit-total validation for score entry.
pub mod score;

/// Re-export configuration types.
pub use config::{GameConfig, is_x01_score};
/// Re-export error types.
pub use error::{GameError, GameResult};
/// Re-export game session types.
pub use game::{Game, GameVariant, TurnRecord};
/// Re-export the player type.
pub use player::Player;
/// Re-export score-entry validation.
pub use score::{IMPOSSIBLE_VISIT_SCORES, MAX_VISIT_SCORE, validate_visit_score};

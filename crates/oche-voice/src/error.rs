//! Error types for voice score entry.

use thiserror::Error;

/// Result type for voice input operations.
pub type VoiceResult<T> = Result<T, VoiceError>;

/// Errors produced while turning a transcript into a score.
///
/// Parse failures are non-fatal: the session keeps listening and the game
/// state is never touched by a rejected transcript.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoiceError {
    /// Transcript does not match `count <score>`.
    #[error("say 'count' followed by your score, heard: {0}")]
    Malformed(String),

    /// The word after `count` is neither a number nor `zero`.
    #[error("{0} is not a score")]
    NotANumber(String),
}

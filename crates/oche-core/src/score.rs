//! Visit-total validation for manual and voice score entry.
//!
//! A visit is reported as one aggregate total, so validation works on the
//! total: at most 180 (three triple 20s) and not one of the nine values
//! below 180 that no three darts can sum to. Whether the total busts the
//! current player is [`Game::record_score`](crate::Game::record_score)'s
//! business, not validation's.

use crate::error::{GameError, GameResult};

/// Highest total a single visit can score (T20 T20 T20).
pub const MAX_VISIT_SCORE: u32 = 180;

/// Totals below [`MAX_VISIT_SCORE`] that no three darts can produce.
pub const IMPOSSIBLE_VISIT_SCORES: &[u32] = &[179, 178, 176, 175, 173, 172, 169, 166, 163];

/// Check that `points` is a total three darts can actually score.
pub fn validate_visit_score(points: u32) -> GameResult<()> {
    if points > MAX_VISIT_SCORE {
        return Err(GameError::ScoreTooHigh(points));
    }
    if IMPOSSIBLE_VISIT_SCORES.contains(&points) {
        return Err(GameError::ImpossibleScore(points));
    }
    Ok(())
}

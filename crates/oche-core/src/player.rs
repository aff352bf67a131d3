//! Player state: remaining score and visit history.

use serde::{Deserialize, Serialize};

/// A contestant in a darts game.
///
/// Holds the remaining score and the total of every completed visit. All
/// scoring goes through the owning [`Game`](crate::Game): a bust never
/// reaches the player, so the stored score only moves through committed
/// visits, undo, and reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    visit_scores: Vec<u32>,
}

impl Player {
    /// Create a player with a starting score and no recorded visits.
    pub(crate) fn new(name: impl Into<String>, initial_score: u32) -> Self {
        Self {
            name: name.into(),
            score: initial_score,
            visit_scores: Vec::new(),
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points still required to reach zero.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Totals of completed visits, in throw order.
    pub fn visit_scores(&self) -> &[u32] {
        &self.visit_scores
    }

    /// Mean points per visit, rounded to one decimal place.
    ///
    /// Returns 0.0 when no visits have been recorded.
    pub fn three_dart_average(&self) -> f64 {
        if self.visit_scores.is_empty() {
            return 0.0;
        }
        let total: u32 = self.visit_scores.iter().sum();
        let mean = f64::from(total) / self.visit_scores.len() as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Add points to the score. Additive variants count upward; X01 play
    /// never calls this.
    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Deduct points, flooring at zero. The bust check in
    /// [`Game::record_score`](crate::Game::record_score) runs first, so the
    /// floor is never hit during X01 play.
    pub(crate) fn subtract_score(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }

    /// Append one completed visit total.
    pub(crate) fn record_visit(&mut self, points: u32) {
        self.visit_scores.push(points);
    }

    /// Remove the most recent visit total, if any.
    pub(crate) fn pop_visit(&mut self) -> Option<u32> {
        self.visit_scores.pop()
    }

    /// Forget all recorded visits.
    pub(crate) fn clear_visits(&mut self) {
        self.visit_scores.clear();
    }

    /// Put the score back to an earlier value. Undo and reset go through here.
    pub(crate) fn restore_score(&mut self, score: u32) {
        self.score = score;
    }
}

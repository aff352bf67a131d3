//! Game configuration and setup-time validation.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::game::GameVariant;

/// Configuration for a new game session.
///
/// [`Game::new`](crate::Game::new) accepts any positive starting score so
/// practice games can run from arbitrary values; [`validate`](Self::validate)
/// is the stricter check a setup flow applies before a real match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule set to play under.
    pub variant: GameVariant,
    /// Points every player starts from.
    pub starting_score: u32,
    /// Require checkouts to finish on a double.
    pub double_out: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            variant: GameVariant::X01,
            starting_score: 501,
            double_out: false,
        }
    }
}

impl GameConfig {
    /// Set the game variant.
    pub fn with_variant(mut self, variant: GameVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the starting score.
    pub fn with_starting_score(mut self, score: u32) -> Self {
        self.starting_score = score;
        self
    }

    /// Require or drop the double-out finishing rule.
    pub fn with_double_out(mut self, required: bool) -> Self {
        self.double_out = required;
        self
    }

    /// Check the configuration the way a pre-game setup flow must.
    ///
    /// The starting score has to be positive, and an X01 game must start
    /// from a score in the 01 family (301, 501, 701, 1001, ...).
    pub fn validate(&self) -> GameResult<()> {
        if self.starting_score == 0 {
            return Err(GameError::InvalidStartingScore(self.starting_score));
        }
        if self.variant == GameVariant::X01 && !is_x01_score(self.starting_score) {
            return Err(GameError::NotAnX01Score(self.starting_score));
        }
        Ok(())
    }
}

/// True when `score` belongs to the X01 family: any multiple of 100 plus one.
pub fn is_x01_score(score: u32) -> bool {
    score % 100 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.variant, GameVariant::X01);
        assert_eq!(cfg.starting_score, 501);
        assert!(!cfg.double_out);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_variant(GameVariant::Cricket)
            .with_starting_score(301)
            .with_double_out(true);
        assert_eq!(cfg.variant, GameVariant::Cricket);
        assert_eq!(cfg.starting_score, 301);
        assert!(cfg.double_out);
    }

    #[test]
    fn x01_family_members_pass() {
        for score in [101, 301, 501, 701, 901, 1001] {
            let cfg = GameConfig::default().with_starting_score(score);
            assert!(cfg.validate().is_ok(), "{score} should validate");
        }
    }

    #[test]
    fn zero_starting_score_rejected() {
        let cfg = GameConfig::default().with_starting_score(0);
        assert_eq!(cfg.validate(), Err(GameError::InvalidStartingScore(0)));
    }

    #[test]
    fn non_family_x01_score_rejected() {
        for score in [100, 300, 500, 502, 999] {
            let cfg = GameConfig::default().with_starting_score(score);
            assert_eq!(cfg.validate(), Err(GameError::NotAnX01Score(score)));
        }
    }

    #[test]
    fn family_check_skipped_for_other_variants() {
        let cfg = GameConfig::default()
            .with_variant(GameVariant::AroundTheClock)
            .with_starting_score(20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn x01_family_predicate() {
        assert!(is_x01_score(301));
        assert!(is_x01_score(1001));
        assert!(!is_x01_score(300));
        assert!(!is_x01_score(0));
    }

    #[test]
    fn round_trip_serde() {
        let cfg = GameConfig::default().with_double_out(true);
        let json = serde_json::to_string(&cfg).unwrap();
        let cfg2: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg2, cfg);
    }
}

//! X01 game sessions: turn rotation, bust and win detection, undo.
//!
//! [`Game`] is the engine's single mutable resource. Every mutation is a
//! direct, synchronous response to one input event, through one of the
//! named operations ([`record_score`](Game::record_score),
//! [`undo_last_move`](Game::undo_last_move), [`reset`](Game::reset)).
//! Presentation layers read fresh state after each call or take a [`Clone`]
//! snapshot; nothing here blocks or performs I/O.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::player::Player;

/// The rule set a game session plays under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameVariant {
    /// Count down from a fixed starting score to exactly zero.
    X01,
    /// Close 15-20 and bull. Selectable, but scoring rules are not
    /// implemented: visits only rotate the turn.
    Cricket,
    /// Hit 1 through 20 in order. Selectable, scoring not implemented.
    AroundTheClock,
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X01 => write!(f, "X01"),
            Self::Cricket => write!(f, "Cricket"),
            Self::AroundTheClock => write!(f, "Around the Clock"),
        }
    }
}

/// One committed visit, recorded with enough information to reverse it.
///
/// Busts never produce a record, so replaying records backwards walks
/// through exactly the visits that advanced play or ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Index of the player who threw the visit.
    pub player_index: usize,
    /// Total points the visit scored.
    pub points: u32,
    /// The player's remaining score before the visit applied.
    pub previous_score: u32,
}

/// A running darts game.
///
/// Owns the players in turn order, the rule configuration, and a
/// turn-by-turn log for undo. `Clone` yields a fully independent session:
/// players and history are owned values, and the winner is stored as an
/// index that resolves against the session's own player list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    variant: GameVariant,
    starting_score: u32,
    double_out: bool,
    players: Vec<Player>,
    current_player_index: usize,
    winner: Option<usize>,
    turn_history: Vec<TurnRecord>,
}

impl Game {
    /// Create a session from a configuration.
    ///
    /// Only a zero starting score is rejected here; the X01 family check
    /// lives in [`GameConfig::validate`] so that practice games from
    /// arbitrary scores stay possible.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        if config.starting_score == 0 {
            return Err(GameError::InvalidStartingScore(config.starting_score));
        }
        Ok(Self {
            variant: config.variant,
            starting_score: config.starting_score,
            double_out: config.double_out,
            players: Vec::new(),
            current_player_index: 0,
            winner: None,
            turn_history: Vec::new(),
        })
    }

    /// Register a player. Insertion order is turn order.
    ///
    /// The name is trimmed before the empty and duplicate checks.
    pub fn add_player(&mut self, name: &str) -> GameResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyPlayerName);
        }
        if self.players.iter().any(|p| p.name() == name) {
            return Err(GameError::DuplicatePlayerName(name.to_string()));
        }
        self.players.push(Player::new(name, self.starting_score));
        Ok(())
    }

    /// The rule set in play.
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    /// The score every player starts from.
    pub fn starting_score(&self) -> u32 {
        self.starting_score
    }

    /// Whether checkouts must finish on a double.
    pub fn double_out_required(&self) -> bool {
        self.double_out
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Index into [`players`](Self::players) of the player throwing next.
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// The player whose turn it is, once any have been added.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    /// True once a player has checked out.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The player who finished, if the game is over.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|index| self.players.get(index))
    }

    /// Committed visits, oldest first.
    pub fn turn_history(&self) -> &[TurnRecord] {
        &self.turn_history
    }

    /// Record a three-dart visit total for the current player.
    ///
    /// A bust and a finished game are silent no-ops, observable only as
    /// unchanged state. A committed visit deducts the total, logs the visit
    /// and a turn record, and passes the turn to the next player. A winning
    /// visit instead keeps the turn on the winner for display.
    ///
    /// Under double-out a finish only counts when the visit total reads as
    /// a double (even, at most 40), and a visit leaving exactly 1 is always
    /// a bust. Both checks approximate the real rule from the aggregate
    /// total, since individual darts are not reported.
    pub fn record_score(&mut self, points: u32) {
        if self.is_over() {
            return;
        }
        let player_count = self.players.len();
        if player_count == 0 {
            return;
        }
        let index = self.current_player_index;

        if self.variant == GameVariant::X01 {
            let player = &mut self.players[index];
            let previous_score = player.score();
            let Some(remaining) = previous_score.checked_sub(points) else {
                debug!(
                    player = player.name(),
                    points, "bust: visit exceeds remaining score"
                );
                return;
            };
            if self.double_out && (remaining == 1 || (remaining == 0 && !is_double_total(points))) {
                debug!(
                    player = player.name(),
                    points, "bust: no double finish from this total"
                );
                return;
            }

            player.subtract_score(points);
            player.record_visit(points);
            let finished = player.score() == 0;
            self.turn_history.push(TurnRecord {
                player_index: index,
                points,
                previous_score,
            });

            if finished {
                self.winner = Some(index);
                info!(winner = self.players[index].name(), "checkout");
                return;
            }
        }

        self.current_player_index = (index + 1) % player_count;
    }

    /// Take back the most recent committed visit.
    ///
    /// Pops the newest turn record, clears any winner, hands the turn back
    /// to the player who threw the visit, and restores that player's score
    /// and visit history. No-op when nothing has been committed; calling
    /// repeatedly unwinds the game one visit at a time back to its start.
    pub fn undo_last_move(&mut self) {
        let Some(record) = self.turn_history.pop() else {
            return;
        };
        self.winner = None;
        self.current_player_index = record.player_index;
        if let Some(player) = self.players.get_mut(record.player_index) {
            player.pop_visit();
            player.restore_score(record.previous_score);
        }
        debug!(
            player_index = record.player_index,
            points = record.points,
            "visit undone"
        );
    }

    /// Start the same match over.
    ///
    /// Every player returns to the starting score with an empty visit
    /// history, the turn returns to the first player, and the winner and
    /// turn log are cleared.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.restore_score(self.starting_score);
            player.clear_visits();
        }
        self.current_player_index = 0;
        self.winner = None;
        self.turn_history.clear();
        info!("game reset");
    }
}

/// Whether a visit total can be read as finishing on a double.
///
/// Approximated from the aggregate total (individual darts are not
/// reported): even and at most 40, the D20 ceiling. A 50 bull finish does
/// not qualify under this reading.
fn is_double_total(points: u32) -> bool {
    points % 2 == 0 && points <= 40
}

//! Player data structure and rating baseline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a player (monotonically assigned, never reused).
pub type PlayerId = u32;

/// Rating every player starts at, and returns to on a tournament reset.
pub const INITIAL_RATING: f64 = 1000.0;

/// A player in the tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Cumulative score: 1.0 per win or bye, 0.5 per draw.
    pub score: f64,
    /// Performance rating, adjusted after every recorded outcome. Secondary
    /// ranking signal only; score always ranks first.
    pub rating: f64,
    /// Ids of every opponent faced so far. Rematches are forbidden.
    pub opponents: Vec<PlayerId>,
    /// Set when a bye is awarded; no second bye while any player without one
    /// remains in the field.
    pub has_had_bye: bool,
    /// Withdrawn players are skipped when pairing but kept in standings.
    /// Withdrawal is irreversible.
    pub withdrawn: bool,
}

impl Player {
    /// Create a new player with baseline score and rating.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0.0,
            rating: INITIAL_RATING,
            opponents: Vec::new(),
            has_had_bye: false,
            withdrawn: false,
        }
    }

    /// True when the player can be paired into the next round.
    pub fn is_active(&self) -> bool {
        !self.withdrawn
    }

    /// Has this player already faced `opponent`?
    pub fn has_played(&self, opponent: PlayerId) -> bool {
        self.opponents.contains(&opponent)
    }

    /// Clear mutable tournament state back to baseline. Identity and the
    /// withdrawn flag survive a reset.
    pub fn reset(&mut self) {
        self.score = 0.0;
        self.rating = INITIAL_RATING;
        self.opponents.clear();
        self.has_had_bye = false;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player({}, '{}', Score: {}, Rating: {})",
            self.id, self.name, self.score, self.rating as i64
        )
    }
}

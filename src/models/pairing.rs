//! Pairing and outcome types for one round.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Result of a single game, seen from the white side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

/// One board of the current round: two players facing each other.
/// The higher seed is listed as white.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub white: PlayerId,
    pub black: PlayerId,
}

impl Pairing {
    pub fn new(white: PlayerId, black: PlayerId) -> Self {
        Self { white, black }
    }
}

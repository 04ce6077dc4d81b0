//! Tournament state and TournamentError.

use crate::models::pairing::Pairing;
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// No player with this id exists.
    PlayerNotFound(PlayerId),
    /// Tournament is not in a state that allows this action: pairing while a
    /// round is pending, or recording results while none is.
    InvalidState,
    /// The pairing engine could not produce a single pair or bye.
    NoValidPairing,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::PlayerNotFound(id) => write!(f, "Player with ID {} not found", id),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::NoValidPairing => write!(f, "No valid pairings could be made"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Outcome of a withdrawal request. Withdrawing an already-withdrawn player
/// is an informational no-op, not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WithdrawStatus {
    Withdrawn,
    AlreadyWithdrawn,
}

/// Full tournament state: players, round counter, and the pending round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    /// All registered players, in registration order. Registration order is
    /// the final tie-break when seeding a round.
    pub players: Vec<Player>,
    /// Next id to hand out. Ids are never reused, not even after withdrawal.
    pub next_player_id: PlayerId,
    /// Rounds paired so far; 0 before the first round.
    pub current_round: u32,
    /// Boards of the round awaiting results; empty exactly when no round is
    /// pending resolution.
    pub pairings: Vec<Pairing>,
    /// Bye recipient of the pending round, if the field was odd.
    pub bye_player: Option<PlayerId>,
}

impl Tournament {
    /// Create an empty tournament: no players, round 0, nothing pending.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            next_player_id: 1,
            current_round: 0,
            pairings: Vec::new(),
            bye_player: None,
        }
    }

    /// Register a new player with baseline score and rating. Returns the
    /// assigned id. Callers validate names; registration itself never fails.
    pub fn register_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = self.next_player_id;
        self.next_player_id += 1;
        self.players.push(Player::new(id, name));
        id
    }

    /// Withdraw a player from the tournament. Irreversible; withdrawing a
    /// second time reports `AlreadyWithdrawn` and changes nothing.
    pub fn withdraw_player(&mut self, id: PlayerId) -> Result<WithdrawStatus, TournamentError> {
        let player = self
            .player_mut(id)
            .ok_or(TournamentError::PlayerNotFound(id))?;
        if player.withdrawn {
            return Ok(WithdrawStatus::AlreadyWithdrawn);
        }
        player.withdrawn = true;
        Ok(WithdrawStatus::Withdrawn)
    }

    /// All non-withdrawn players, in registration order.
    pub fn active_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_active()).collect()
    }

    /// Reference to a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Mutable reference to a player by id.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// True while a paired round still has unrecorded results.
    pub fn round_pending(&self) -> bool {
        !self.pairings.is_empty()
    }

    /// Reset scores, ratings, opponent histories, bye flags, the round
    /// counter and any pending round. Players stay registered and withdrawn
    /// players stay withdrawn.
    pub fn reset(&mut self) {
        self.current_round = 0;
        self.pairings.clear();
        self.bye_player = None;
        for player in &mut self.players {
            player.reset();
        }
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}

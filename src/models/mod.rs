//! Data structures for the chess tournament: players, pairings, tournament state.

mod pairing;
mod player;
mod tournament;

pub use pairing::{Outcome, Pairing};
pub use player::{Player, PlayerId, INITIAL_RATING};
pub use tournament::{Tournament, TournamentError, WithdrawStatus};

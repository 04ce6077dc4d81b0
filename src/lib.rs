//! Swiss-style chess tournament manager: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    apply_outcome, pair_round, record_round_results, standings, OutcomeSource, StandingRow,
};
pub use models::{
    Outcome, Pairing, Player, PlayerId, Tournament, TournamentError, WithdrawStatus,
    INITIAL_RATING,
};

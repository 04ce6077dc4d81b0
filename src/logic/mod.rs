//! Tournament business logic: pairing, result recording, standings.

mod pairing;
mod results;
mod standings;

pub use pairing::pair_round;
pub use results::{apply_outcome, record_round_results, OutcomeSource};
pub use standings::{standings, StandingRow};

//! Standings: ranked snapshot of all players, active and withdrawn.

use crate::models::{Player, PlayerId, Tournament};
use serde::{Deserialize, Serialize};

/// One row of the standings table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    /// 1-based rank after sorting.
    pub rank: usize,
    pub id: PlayerId,
    pub name: String,
    pub withdrawn: bool,
    pub score: f64,
    /// Stored rating truncated to an integer for display.
    pub rating: i64,
}

/// Rank every player, withdrawn included, by (score, rating, name), all
/// descending. Withdrawn players keep their final score and rating.
pub fn standings(tournament: &Tournament) -> Vec<StandingRow> {
    let mut players: Vec<&Player> = tournament.players.iter().collect();
    players.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.rating.total_cmp(&a.rating))
            .then_with(|| b.name.cmp(&a.name))
    });
    players
        .iter()
        .enumerate()
        .map(|(i, p)| StandingRow {
            rank: i + 1,
            id: p.id,
            name: p.name.clone(),
            withdrawn: p.withdrawn,
            score: p.score,
            rating: p.rating as i64,
        })
        .collect()
}

//! Round pairing: seed by standing, award a bye on odd fields, pair greedily.

use crate::models::{Pairing, Player, PlayerId, Tournament, TournamentError};
use std::collections::HashSet;

/// Pair the next round.
///
/// 1. Refused while the previous round still has unrecorded results.
/// 2. Active players are seeded by (score, rating) descending; the sort is
///    stable, so exact ties keep registration order.
/// 3. Odd field: the lowest-seeded player without a bye receives one. The
///    point and the flag are applied here, not at result entry. When every
///    player has already had a bye, the lowest seed receives a second one.
/// 4. The seeded pool is walked top-down; each unpaired player is matched
///    with the first lower-seeded player it has not faced before, and both
///    histories are extended. No backtracking: a player the forward scan
///    cannot place sits the round out and is eligible again next round.
///
/// Fails with `NoValidPairing`, rolling the round counter back, when neither
/// a pair nor a bye could be produced.
pub fn pair_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.round_pending() {
        return Err(TournamentError::InvalidState);
    }
    tournament.current_round += 1;
    tournament.bye_player = None;

    let mut seeded: Vec<Player> = tournament
        .players
        .iter()
        .filter(|p| p.is_active())
        .cloned()
        .collect();
    seeded.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.rating.total_cmp(&a.rating))
    });

    let mut bye = None;
    if seeded.len() % 2 != 0 {
        let recipient = seeded
            .iter()
            .rev()
            .find(|p| !p.has_had_bye)
            .or_else(|| seeded.last())
            .map(|p| p.id);
        if let Some(id) = recipient {
            let player = tournament
                .player_mut(id)
                .ok_or(TournamentError::PlayerNotFound(id))?;
            player.score += 1.0;
            player.has_had_bye = true;
            bye = Some(id);
        }
    }

    let pool: Vec<PlayerId> = seeded
        .iter()
        .map(|p| p.id)
        .filter(|&id| bye != Some(id))
        .collect();

    let mut paired: HashSet<PlayerId> = HashSet::new();
    let mut boards: Vec<Pairing> = Vec::new();
    for i in 0..pool.len() {
        let white = pool[i];
        if paired.contains(&white) {
            continue;
        }
        for j in (i + 1)..pool.len() {
            let black = pool[j];
            if paired.contains(&black) {
                continue;
            }
            let rematch = tournament
                .player(white)
                .ok_or(TournamentError::PlayerNotFound(white))?
                .has_played(black);
            if rematch {
                continue;
            }
            paired.insert(white);
            paired.insert(black);
            boards.push(Pairing::new(white, black));
            tournament
                .player_mut(white)
                .ok_or(TournamentError::PlayerNotFound(white))?
                .opponents
                .push(black);
            tournament
                .player_mut(black)
                .ok_or(TournamentError::PlayerNotFound(black))?
                .opponents
                .push(white);
            break;
        }
    }

    if boards.is_empty() && bye.is_none() {
        tournament.current_round -= 1;
        return Err(TournamentError::NoValidPairing);
    }

    tournament.pairings = boards;
    tournament.bye_player = bye;
    Ok(())
}

//! Outcome recording: score and rating updates for a resolved round.

use crate::models::{Outcome, Pairing, Player, Tournament, TournamentError};

/// Yields one valid outcome per board. Implementations retry invalid input
/// internally, so the core only ever sees a valid outcome.
pub trait OutcomeSource {
    fn next_outcome(&mut self, white: &Player, black: &Player) -> Outcome;
}

/// Closures work as outcome sources, which keeps tests free of interactive
/// input.
impl<F> OutcomeSource for F
where
    F: FnMut(&Player, &Player) -> Outcome,
{
    fn next_outcome(&mut self, white: &Player, black: &Player) -> Outcome {
        self(white, black)
    }
}

/// Apply one board's outcome to both players' scores and ratings.
///
/// A win is worth 1.0 score and 50 rating plus 10 per point the opponent had
/// before the update; the loser drops 50 rating. A draw is worth 0.5 each,
/// then 25 rating moves from the player standing higher after the draw to
/// the other; on equal post-draw scores white takes the 25 from black.
pub fn apply_outcome(
    tournament: &mut Tournament,
    pairing: Pairing,
    outcome: Outcome,
) -> Result<(), TournamentError> {
    let Pairing { white, black } = pairing;
    let white_score = tournament
        .player(white)
        .ok_or(TournamentError::PlayerNotFound(white))?
        .score;
    let black_score = tournament
        .player(black)
        .ok_or(TournamentError::PlayerNotFound(black))?
        .score;

    match outcome {
        Outcome::WhiteWins => {
            let winner = tournament
                .player_mut(white)
                .ok_or(TournamentError::PlayerNotFound(white))?;
            winner.score += 1.0;
            winner.rating += 50.0 + black_score * 10.0;
            tournament
                .player_mut(black)
                .ok_or(TournamentError::PlayerNotFound(black))?
                .rating -= 50.0;
        }
        Outcome::BlackWins => {
            let winner = tournament
                .player_mut(black)
                .ok_or(TournamentError::PlayerNotFound(black))?;
            winner.score += 1.0;
            winner.rating += 50.0 + white_score * 10.0;
            tournament
                .player_mut(white)
                .ok_or(TournamentError::PlayerNotFound(white))?
                .rating -= 50.0;
        }
        Outcome::Draw => {
            let white_after = white_score + 0.5;
            let black_after = black_score + 0.5;
            let (gains, loses) = if white_after > black_after {
                (black, white)
            } else {
                (white, black)
            };
            tournament
                .player_mut(white)
                .ok_or(TournamentError::PlayerNotFound(white))?
                .score += 0.5;
            tournament
                .player_mut(black)
                .ok_or(TournamentError::PlayerNotFound(black))?
                .score += 0.5;
            tournament
                .player_mut(gains)
                .ok_or(TournamentError::PlayerNotFound(gains))?
                .rating += 25.0;
            tournament
                .player_mut(loses)
                .ok_or(TournamentError::PlayerNotFound(loses))?
                .rating -= 25.0;
        }
    }
    Ok(())
}

/// Record results for every board of the pending round, asking `source` for
/// one outcome per board in pairing order. Clears the pairing list and the
/// bye marker afterwards, which unblocks the next round.
///
/// Fails with `InvalidState`, touching nothing, when no round is pending.
pub fn record_round_results(
    tournament: &mut Tournament,
    source: &mut impl OutcomeSource,
) -> Result<(), TournamentError> {
    if !tournament.round_pending() {
        return Err(TournamentError::InvalidState);
    }

    // Copy the boards so `source` can borrow players while we mutate them.
    let boards = tournament.pairings.clone();
    for pairing in boards {
        let white = tournament
            .player(pairing.white)
            .ok_or(TournamentError::PlayerNotFound(pairing.white))?
            .clone();
        let black = tournament
            .player(pairing.black)
            .ok_or(TournamentError::PlayerNotFound(pairing.black))?
            .clone();
        let outcome = source.next_outcome(&white, &black);
        apply_outcome(tournament, pairing, outcome)?;
    }

    tournament.pairings.clear();
    tournament.bye_player = None;
    Ok(())
}

//! Integration tests for registration, withdrawal, standings, and reset.

use chess_tournament_cli::{
    pair_round, record_round_results, standings, Outcome, Pairing, Player, Tournament,
    TournamentError, WithdrawStatus, INITIAL_RATING,
};

fn tournament_with_players(names: &[&str]) -> Tournament {
    let mut t = Tournament::new();
    for name in names {
        t.register_player(*name);
    }
    t
}

fn record_scripted(t: &mut Tournament, outcomes: &[Outcome]) {
    let mut remaining = outcomes.iter().copied();
    record_round_results(t, &mut |_: &Player, _: &Player| {
        remaining
            .next()
            .expect("more outcomes requested than scripted")
    })
    .unwrap();
}

#[test]
fn registration_assigns_monotone_ids_that_are_never_reused() {
    let mut t = Tournament::new();
    assert_eq!(t.register_player("A"), 1);
    assert_eq!(t.register_player("B"), 2);
    assert_eq!(t.register_player("C"), 3);

    t.withdraw_player(2).unwrap();
    assert_eq!(t.register_player("D"), 4);
    assert_eq!(t.players.len(), 4);
}

#[test]
fn withdrawing_an_unknown_player_fails() {
    let mut t = tournament_with_players(&["A"]);
    assert_eq!(
        t.withdraw_player(42),
        Err(TournamentError::PlayerNotFound(42))
    );
}

#[test]
fn withdrawing_twice_is_an_informational_no_op() {
    let mut t = tournament_with_players(&["A", "B"]);
    assert_eq!(t.withdraw_player(2), Ok(WithdrawStatus::Withdrawn));
    assert_eq!(t.withdraw_player(2), Ok(WithdrawStatus::AlreadyWithdrawn));
    assert!(t.player(2).unwrap().withdrawn);
    assert_eq!(t.active_players().len(), 1);
}

#[test]
fn standings_sort_by_score_rating_then_name_descending() {
    let mut t = tournament_with_players(&["Anna", "Zoe", "Bob", "Dana"]);
    t.player_mut(3).unwrap().score = 1.0; // Bob
    t.player_mut(3).unwrap().rating = 1050.0;
    t.player_mut(4).unwrap().score = 1.0; // Dana
    t.player_mut(4).unwrap().rating = 1000.0;
    // Anna and Zoe tie completely; the name tie-break is descending.

    let rows = standings(&t);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bob", "Dana", "Zoe", "Anna"]);
    let ranks: Vec<usize> = rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[test]
fn standings_keep_withdrawn_players() {
    let mut t = tournament_with_players(&["A", "B", "C"]);
    t.withdraw_player(2).unwrap();

    let rows = standings(&t);
    assert_eq!(rows.len(), 3);
    let b = rows.iter().find(|r| r.id == 2).unwrap();
    assert!(b.withdrawn);
}

#[test]
fn standings_report_truncated_ratings() {
    let mut t = tournament_with_players(&["A", "B"]);
    t.player_mut(1).unwrap().rating = 1049.9;
    t.player_mut(2).unwrap().rating = -12.5;

    let rows = standings(&t);
    assert_eq!(rows.iter().find(|r| r.id == 1).unwrap().rating, 1049);
    assert_eq!(rows.iter().find(|r| r.id == 2).unwrap().rating, -12);
}

#[test]
fn reset_restores_baseline_but_keeps_roster_and_withdrawals() {
    let mut t = tournament_with_players(&["A", "B", "C", "D", "E"]);
    pair_round(&mut t).unwrap();
    record_scripted(&mut t, &[Outcome::WhiteWins, Outcome::Draw]);
    t.withdraw_player(4).unwrap();
    pair_round(&mut t).unwrap();

    t.reset();

    assert_eq!(t.current_round, 0);
    assert!(t.pairings.is_empty());
    assert_eq!(t.bye_player, None);
    assert_eq!(t.players.len(), 5);
    for p in &t.players {
        assert_eq!(p.score, 0.0);
        assert_eq!(p.rating, INITIAL_RATING);
        assert!(p.opponents.is_empty());
        assert!(!p.has_had_bye);
    }
    assert!(t.player(4).unwrap().withdrawn);
    assert_eq!(t.register_player("F"), 6);
}

#[test]
fn full_round_flow_updates_counter_standings_and_histories() {
    let mut t = tournament_with_players(&["A", "B", "C", "D", "E"]);

    pair_round(&mut t).unwrap();
    assert_eq!(t.current_round, 1);
    assert_eq!(t.bye_player, Some(5));
    assert_eq!(t.pairings, vec![Pairing::new(1, 2), Pairing::new(3, 4)]);

    // A beats B; C and D draw (C takes the tie-break as white).
    record_scripted(&mut t, &[Outcome::WhiteWins, Outcome::Draw]);
    let ids: Vec<u32> = standings(&t).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 5, 3, 4, 2]);

    // Round two: B takes the bye, A meets E; C and D would be a rematch, so
    // both sit out and the round is a single board.
    pair_round(&mut t).unwrap();
    assert_eq!(t.current_round, 2);
    assert_eq!(t.bye_player, Some(2));
    assert_eq!(t.pairings, vec![Pairing::new(1, 5)]);

    record_scripted(&mut t, &[Outcome::BlackWins]);
    let rows = standings(&t);
    let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![5, 1, 2, 3, 4]);
    assert_eq!(rows[0].score, 2.0);
    assert_eq!(rows[0].rating, 1060);

    // Histories accumulated across both rounds.
    assert_eq!(t.player(1).unwrap().opponents, vec![2, 5]);
    assert_eq!(t.player(5).unwrap().opponents, vec![1]);
}

#[test]
fn recording_is_rejected_while_idle_and_pairing_while_pending() {
    let mut t = tournament_with_players(&["A", "B"]);

    let idle = record_round_results(&mut t, &mut |_: &Player, _: &Player| Outcome::Draw);
    assert_eq!(idle, Err(TournamentError::InvalidState));

    pair_round(&mut t).unwrap();
    assert_eq!(pair_round(&mut t), Err(TournamentError::InvalidState));
    assert_eq!(t.current_round, 1);

    record_scripted(&mut t, &[Outcome::Draw]);
    assert!(!t.round_pending());
}

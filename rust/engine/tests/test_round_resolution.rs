use sniper_engine::cards::Card;
use sniper_engine::hand::{Combination, HandScore};
use sniper_engine::player::Player;
use sniper_engine::round::{resolve_round, RoundState};
use sniper_engine::sniper::BannedCombo;

fn seat(name: &str, combination: Combination, rank: u8) -> Player {
    let mut p = Player::new(name, 20);
    let c = Card::new(rank).unwrap();
    p.set_hand([c, c], HandScore::new(combination, rank));
    p
}

fn round_with_pot(pot: u32) -> RoundState {
    let c = Card::new(2).unwrap();
    RoundState::new(3, [c; 4], pot)
}

#[test]
fn best_score_wins_the_pot() {
    let mut players = vec![
        seat("a", Combination::Pair, 10),
        seat("b", Combination::Triple, 1),
        seat("c", Combination::TwoPair, 9),
    ];
    let mut round = round_with_pot(30);
    let res = resolve_round(&mut players, &mut round);
    assert_eq!(res.winner.as_deref(), Some("b"));
    assert_eq!(res.awarded, 30);
    assert_eq!(round.pot, 0);
    assert_eq!(players[1].chips(), 50);
    assert_eq!(players[0].chips(), 20);
}

#[test]
fn banned_holder_is_skipped_for_the_next_best() {
    let mut players = vec![
        seat("a", Combination::Pair, 10),
        seat("b", Combination::Triple, 7),
    ];
    let mut round = round_with_pot(12);
    round.banned = Some(BannedCombo {
        combination: Combination::Triple,
        rank: 7,
    });
    let res = resolve_round(&mut players, &mut round);
    assert_eq!(res.winner.as_deref(), Some("a"));
    assert_eq!(res.disqualified, vec!["b".to_string()]);
    assert!(round.banned.is_none());
}

#[test]
fn sole_active_player_holding_banned_combo_means_no_winner() {
    let mut players = vec![
        seat("a", Combination::Triple, 7),
        seat("b", Combination::FourOfAKind, 9),
    ];
    players[1].fold();
    let mut round = round_with_pot(25);
    round.banned = Some(BannedCombo {
        combination: Combination::Triple,
        rank: 7,
    });
    let res = resolve_round(&mut players, &mut round);
    assert_eq!(res.winner, None);
    assert_eq!(res.awarded, 0);
    // pot rolls over: it is neither paid out nor reset
    assert_eq!(res.unclaimed, 25);
    assert_eq!(round.pot, 25);
    assert_eq!(players[0].chips(), 20);
    assert_eq!(players[1].chips(), 20);
    assert!(round.banned.is_none());
    assert!(!players[1].is_folded(), "fold flags reset even without a winner");
}

#[test]
fn everyone_folded_means_no_winner() {
    let mut players = vec![
        seat("a", Combination::Pair, 3),
        seat("b", Combination::Pair, 4),
    ];
    for p in players.iter_mut() {
        p.fold();
    }
    let mut round = round_with_pot(2);
    let res = resolve_round(&mut players, &mut round);
    assert_eq!(res.winner, None);
    assert_eq!(round.pot, 2);
    assert!(players.iter().all(|p| !p.is_folded()));
}

#[test]
fn eliminated_players_never_win() {
    let mut players = vec![
        seat("a", Combination::FourOfAKind, 10),
        seat("b", Combination::HighCard, 5),
    ];
    players[0].eliminate();
    let mut round = round_with_pot(6);
    let res = resolve_round(&mut players, &mut round);
    assert_eq!(res.winner.as_deref(), Some("b"));
}

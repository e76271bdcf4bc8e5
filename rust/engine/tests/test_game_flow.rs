use sniper_engine::errors::GameError;
use sniper_engine::game::{GameConfig, GameState, RoundInput, MAX_PLAYERS};
use sniper_engine::player::Player;
use sniper_engine::round::RoundState;
use sniper_engine::sniper::SniperGuess;

const NAMES: [&str; 4] = ["p1", "p2", "p3", "p4"];

fn new_game(seed: u64) -> GameState {
    GameState::new(NAMES, GameConfig::default(), Some(seed)).unwrap()
}

fn total_chips(game: &GameState) -> u32 {
    game.players().iter().map(|p| p.chips()).sum()
}

/// Everyone shoves; nobody snipes.
struct AllIn;

impl RoundInput for AllIn {
    fn bet(&mut self, player: &Player, _round: &RoundState) -> u32 {
        player.chips()
    }
    fn guess(&mut self, _player: &Player, _round: &RoundState) -> Option<SniperGuess> {
        None
    }
}

/// Bets half the stack (rounded up) and snipes the guesser's own hand every third round.
struct HalfStack;

impl RoundInput for HalfStack {
    fn bet(&mut self, player: &Player, _round: &RoundState) -> u32 {
        player.chips().div_ceil(2)
    }
    fn guess(&mut self, player: &Player, round: &RoundState) -> Option<SniperGuess> {
        if round.number % 3 != 0 {
            return None;
        }
        let score = player.hand_score()?;
        SniperGuess::new(player.name(), score.combination, score.rank).ok()
    }
}

fn play_out(game: &mut GameState, input: &mut dyn RoundInput, max_rounds: u32) -> u32 {
    let mut rounds = 0;
    while !game.is_over() {
        assert!(rounds < max_rounds, "game did not finish in {} rounds", max_rounds);
        game.play_round(input).expect("round should complete");
        rounds += 1;
    }
    rounds
}

#[test]
fn all_in_games_shrink_the_table_every_round() {
    for seed in 0..20 {
        let mut game = new_game(seed);
        let mut alive = game.alive_players().count();
        while !game.is_over() {
            game.play_round(&mut AllIn).unwrap();
            let now = game.alive_players().count();
            assert!(now < alive, "seed {}: alive count must drop", seed);
            alive = now;
        }
        assert!(game.alive_players().count() <= 1);
    }
}

#[test]
fn scripted_games_terminate() {
    for seed in 100..110 {
        let mut game = new_game(seed);
        let rounds = play_out(&mut game, &mut HalfStack, 10_000);
        assert!(rounds >= 1);
        assert!(game.is_over());
        assert_eq!(game.round_number(), rounds);
        assert!(matches!(game.start_round(), Err(GameError::GameOver)));
    }
}

#[test]
fn deal_gives_every_player_an_evaluated_hand() {
    let mut game = new_game(1);
    let round = game.start_round().unwrap();
    assert_eq!(round.number, 1);
    assert_eq!(round.pot, 0);
    for p in game.players() {
        let hand = p.hand().expect("dealt");
        let score = p.hand_score().expect("evaluated");
        let expected = sniper_engine::hand::evaluate_hand(&hand, &round.community);
        assert_eq!(score, expected);
    }
}

#[test]
fn same_seed_same_deal() {
    let mut a = new_game(77);
    let mut b = new_game(77);
    let ra = a.start_round().unwrap();
    let rb = b.start_round().unwrap();
    assert_eq!(ra.community, rb.community);
    for (pa, pb) in a.players().iter().zip(b.players()) {
        assert_eq!(pa.hand(), pb.hand());
    }
}

#[test]
fn chips_are_conserved_through_a_round_without_escapes() {
    let mut game = new_game(5);
    let mut round = game.start_round().unwrap();
    for name in NAMES {
        game.place_bet(&mut round, name, 3).unwrap();
    }
    assert_eq!(total_chips(&game) + round.pot, 240);
    game.snipe(&mut round, &[]).unwrap();
    let summary = game.finish_round(round);
    assert_eq!(summary.result.awarded, 12);
    assert_eq!(total_chips(&game), 240);
}

#[test]
fn minimum_bet_folds_and_folded_players_cannot_snipe() {
    let mut game = new_game(8);
    let mut round = game.start_round().unwrap();
    let bet = game.place_bet(&mut round, "p1", 1).unwrap();
    assert!(bet.is_fold());
    assert!(game.player("p1").unwrap().is_folded());
    assert_eq!(game.player("p1").unwrap().chips(), 59);
    assert_eq!(round.pot, 1);

    let guess = SniperGuess::parse("p1", "5 Pair").unwrap();
    assert_eq!(
        game.snipe(&mut round, &[guess]),
        Err(GameError::PlayerNotActive("p1".into()))
    );
    assert_eq!(
        game.place_bet(&mut round, "p1", 5),
        Err(GameError::PlayerNotActive("p1".into()))
    );
}

#[test]
fn each_player_bets_once_per_round() {
    let mut game = new_game(8);
    let mut round = game.start_round().unwrap();
    game.place_bet(&mut round, "p2", 4).unwrap();
    assert_eq!(
        game.place_bet(&mut round, "p2", 4),
        Err(GameError::AlreadyBet("p2".into()))
    );
    assert_eq!(round.pot, 4);
}

#[test]
fn invalid_bets_do_not_change_state() {
    let mut game = new_game(8);
    let mut round = game.start_round().unwrap();
    assert!(matches!(
        game.place_bet(&mut round, "p3", 61),
        Err(GameError::InvalidBet { amount: 61, chips: 60 })
    ));
    assert!(matches!(
        game.place_bet(&mut round, "zz", 5),
        Err(GameError::UnknownPlayer(_))
    ));
    assert_eq!(round.pot, 0);
    assert!(round.bets.is_empty());
    // a valid retry is still accepted
    game.place_bet(&mut round, "p3", 6).unwrap();
}

#[test]
fn unclaimed_pot_rolls_into_the_next_round() {
    let mut game = new_game(11);
    let mut round = game.start_round().unwrap();
    for name in NAMES {
        game.place_bet(&mut round, name, 1).unwrap();
    }
    let summary = game.finish_round(round);
    assert_eq!(summary.result.winner, None);
    assert_eq!(summary.result.unclaimed, 4);
    assert_eq!(game.carried_pot(), 4);
    assert_eq!(total_chips(&game), 236);

    let next = game.start_round().unwrap();
    assert_eq!(next.pot, 4);
    assert_eq!(game.carried_pot(), 0);
    assert!(game.players().iter().all(|p| !p.is_folded()));
}

#[test]
fn sniping_every_active_hand_leaves_no_winner() {
    let mut game = GameState::new(["a", "b"], GameConfig::default(), Some(3)).unwrap();
    let mut round = game.start_round().unwrap();
    game.place_bet(&mut round, "a", 5).unwrap();
    game.place_bet(&mut round, "b", 1).unwrap();
    let a_score = game.player("a").unwrap().hand_score().unwrap();
    let guess = SniperGuess::new("a", a_score.combination, a_score.rank).unwrap();
    let banned = game.snipe(&mut round, &[guess]).unwrap();
    assert!(banned.is_some());
    let summary = game.finish_round(round);
    assert_eq!(summary.result.winner, None);
    assert_eq!(summary.result.disqualified, vec!["a".to_string()]);
    assert_eq!(game.carried_pot(), 6);
}

#[test]
fn eliminated_players_are_not_dealt_in() {
    let mut game = new_game(21);
    let mut round = game.start_round().unwrap();
    game.place_bet(&mut round, "p1", 60).unwrap();
    for name in ["p2", "p3", "p4"] {
        game.place_bet(&mut round, name, 2).unwrap();
    }
    game.snipe(&mut round, &[]).unwrap();
    let summary = game.finish_round(round);
    if summary.result.winner.as_deref() != Some("p1") {
        assert!(game.player("p1").unwrap().is_eliminated());
        game.start_round().unwrap();
        assert!(game.player("p1").unwrap().hand().is_none());
    }
}

#[test]
fn player_count_is_bounded_by_the_deck() {
    let too_many: Vec<String> = (0..=MAX_PLAYERS).map(|i| format!("p{}", i)).collect();
    assert!(matches!(
        GameState::new(too_many, GameConfig::default(), Some(1)),
        Err(GameError::PlayerCount { count: 19, .. })
    ));
    assert!(matches!(
        GameState::new(["solo"], GameConfig::default(), Some(1)),
        Err(GameError::PlayerCount { count: 1, .. })
    ));
    assert_eq!(
        GameState::new(["x", "x"], GameConfig::default(), Some(1)).unwrap_err(),
        GameError::DuplicatePlayer("x".into())
    );
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::economy::{self, EliminationEvent, ESCAPE_THRESHOLD};
use crate::errors::GameError;
use crate::hand::evaluate_hand;
use crate::player::{Player, STARTING_CHIPS};
use crate::round::{self, BetRecord, RoundResult, RoundState};
use crate::rules::{validate_bet, ValidatedBet};
use crate::sniper::{banned_from_hits, find_snipe_hits, BannedCombo, SniperGuess};

pub const COMMUNITY_CARDS: usize = 4;
pub const HAND_CARDS: usize = 2;
pub const MIN_PLAYERS: usize = 2;
/// Largest table a single 40-card deck can serve.
pub const MAX_PLAYERS: usize = (DECK_SIZE - COMMUNITY_CARDS) / HAND_CARDS;

/// Table rules that stay fixed for a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub starting_chips: u32,
    pub escape_threshold: u32,
    /// A bet of exactly one chip folds the bettor
    pub fold_on_minimum_bet: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_chips: STARTING_CHIPS,
            escape_threshold: ESCAPE_THRESHOLD,
            fold_on_minimum_bet: true,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.starting_chips == 0 {
            return Err(GameError::InvalidConfig(
                "starting_chips must be >0".into(),
            ));
        }
        if self.escape_threshold <= self.starting_chips {
            return Err(GameError::InvalidConfig(format!(
                "escape_threshold ({}) must exceed starting_chips ({})",
                self.escape_threshold, self.starting_chips
            )));
        }
        // A full table's chips must fit in one pot
        if u64::from(self.escape_threshold) * MAX_PLAYERS as u64 > u64::from(u32::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "escape_threshold ({}) too large for {} players",
                self.escape_threshold, MAX_PLAYERS
            )));
        }
        Ok(())
    }
}

/// Supplies bets and sniper guesses for [`GameState::play_round`].
///
/// Amounts are not retried: an invalid bet aborts the round with the validation error.
pub trait RoundInput {
    fn bet(&mut self, player: &Player, round: &RoundState) -> u32;
    fn guess(&mut self, player: &Player, round: &RoundState) -> Option<SniperGuess>;
}

/// What happened in a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: RoundState,
    pub result: RoundResult,
    pub eliminations: Vec<EliminationEvent>,
}

/// Cross-round state of a game: the seats, the deck, the round counter and any pot
/// rolled over from a round nobody won.
///
/// # Examples
///
/// ```
/// use sniper_engine::game::{GameConfig, GameState};
///
/// let mut game = GameState::new(["a", "b", "c", "d"], GameConfig::default(), Some(7)).unwrap();
/// let mut round = game.start_round().unwrap();
/// for name in ["a", "b", "c", "d"] {
///     game.place_bet(&mut round, name, 5).unwrap();
/// }
/// game.snipe(&mut round, &[]).unwrap();
/// let summary = game.finish_round(round);
/// assert_eq!(summary.result.awarded, 20);
/// ```
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    players: Vec<Player>,
    round_number: u32,
    deck: Deck,
    seed: u64,
    carried_pot: u32,
}

impl GameState {
    pub fn new<I, S>(names: I, config: GameConfig, seed: Option<u64>) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::PlayerCount {
                count: names.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        let mut seen = HashSet::new();
        for n in &names {
            if !seen.insert(n.as_str()) {
                return Err(GameError::DuplicatePlayer(n.clone()));
            }
        }
        let seed = seed.unwrap_or_else(rand::random);
        let players = names
            .into_iter()
            .map(|n| Player::new(n, config.starting_chips))
            .collect();
        Ok(Self {
            config,
            players,
            round_number: 0,
            deck: Deck::new_with_seed(seed),
            seed,
            carried_pot: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn round_number(&self) -> u32 {
        self.round_number
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    /// Pot waiting to be added to the next round.
    pub fn carried_pot(&self) -> u32 {
        self.carried_pot
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| !p.is_eliminated())
    }

    /// At most one player is left in the game.
    pub fn is_over(&self) -> bool {
        self.alive_players().nth(1).is_none()
    }

    /// The last player standing, once the game is over.
    pub fn survivor(&self) -> Option<&Player> {
        let mut alive = self.alive_players();
        match (alive.next(), alive.next()) {
            (Some(p), None) => Some(p),
            _ => None,
        }
    }

    /// Shuffles and deals a new round: four community cards, then two private cards to each
    /// player still in the game, each evaluated immediately.
    pub fn start_round(&mut self) -> Result<RoundState, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.deck.shuffle();
        let community: [Card; COMMUNITY_CARDS] = to_array(self.deck.deal(COMMUNITY_CARDS)?)?;
        for p in self.players.iter_mut() {
            p.clear_hand();
            if p.is_eliminated() {
                continue;
            }
            let hand: [Card; HAND_CARDS] = to_array(self.deck.deal(HAND_CARDS)?)?;
            p.set_hand(hand, evaluate_hand(&hand, &community));
        }
        self.round_number += 1;
        let carried = std::mem::take(&mut self.carried_pot);
        info!(
            round = self.round_number,
            community = ?community,
            carried_pot = carried,
            "round dealt"
        );
        Ok(RoundState::new(self.round_number, community, carried))
    }

    fn seat_index(&self, name: &str) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))
    }

    fn active_seat(&self, name: &str) -> Result<usize, GameError> {
        let i = self.seat_index(name)?;
        if !self.players[i].is_active() {
            return Err(GameError::PlayerNotActive(name.to_string()));
        }
        Ok(i)
    }

    /// Takes the single flat bet of an active player for this round.
    ///
    /// On error nothing changes and the caller may ask again.
    pub fn place_bet(
        &mut self,
        round: &mut RoundState,
        name: &str,
        amount: u32,
    ) -> Result<ValidatedBet, GameError> {
        let i = self.active_seat(name)?;
        if round.bets.iter().any(|b| b.player == name) {
            return Err(GameError::AlreadyBet(name.to_string()));
        }
        let bet = validate_bet(
            self.players[i].chips(),
            amount,
            self.config.fold_on_minimum_bet,
        )?;
        let player = &mut self.players[i];
        economy::apply_bet(player, bet.amount(), &mut round.pot)?;
        if bet.is_fold() {
            player.fold();
        }
        debug!(
            round = round.number,
            player = name,
            amount,
            fold = bet.is_fold(),
            chips = player.chips(),
            "bet placed"
        );
        round.bets.push(BetRecord {
            player: name.to_string(),
            bet,
        });
        Ok(bet)
    }

    /// Runs the sniper phase. Every guess must come from an active player; the round's
    /// banned combo becomes the last successful snipe.
    pub fn snipe(
        &self,
        round: &mut RoundState,
        guesses: &[SniperGuess],
    ) -> Result<Option<BannedCombo>, GameError> {
        for g in guesses {
            self.active_seat(&g.sniper)?;
        }
        let hits = find_snipe_hits(guesses, &self.players);
        round.banned = banned_from_hits(&hits);
        if let Some(b) = round.banned {
            info!(round = round.number, banned = %b, hits = hits.len(), "combo sniped");
        } else {
            debug!(round = round.number, guesses = guesses.len(), "all snipes missed");
        }
        round.snipe_hits = hits;
        Ok(round.banned)
    }

    /// Resolves the round, keeping an unclaimed pot for the next one.
    pub fn resolve_round(&mut self, round: &mut RoundState) -> RoundResult {
        let result = round::resolve_round(&mut self.players, round);
        self.carried_pot = std::mem::take(&mut round.pot);
        result
    }

    pub fn check_elimination(&mut self) -> Vec<EliminationEvent> {
        economy::check_elimination(&mut self.players, self.config.escape_threshold)
    }

    /// Resolution followed by the elimination pass.
    pub fn finish_round(&mut self, mut round: RoundState) -> RoundSummary {
        let result = self.resolve_round(&mut round);
        let eliminations = self.check_elimination();
        if let Some(p) = self.survivor() {
            info!(winner = p.name(), rounds = self.round_number, "game over");
        }
        RoundSummary {
            round,
            result,
            eliminations,
        }
    }

    /// Plays one complete round with bets and guesses taken from `input`, in seat order.
    pub fn play_round(&mut self, input: &mut dyn RoundInput) -> Result<RoundSummary, GameError> {
        let mut round = self.start_round()?;
        for i in 0..self.players.len() {
            if !self.players[i].is_active() {
                continue;
            }
            let amount = input.bet(&self.players[i], &round);
            let name = self.players[i].name().to_string();
            self.place_bet(&mut round, &name, amount)?;
        }
        let guesses: Vec<SniperGuess> = self
            .players
            .iter()
            .filter(|p| p.is_active())
            .filter_map(|p| input.guess(p, &round))
            .collect();
        self.snipe(&mut round, &guesses)?;
        Ok(self.finish_round(round))
    }
}

fn to_array<const N: usize>(cards: Vec<Card>) -> Result<[Card; N], GameError> {
    let remaining = cards.len();
    cards.try_into().map_err(|_| GameError::EmptyDeck {
        requested: N,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_players_fits_the_deck() {
        assert_eq!(MAX_PLAYERS, 18);
        assert!(COMMUNITY_CARDS + HAND_CARDS * MAX_PLAYERS <= DECK_SIZE);
    }

    #[test]
    fn config_requires_threshold_above_start() {
        let cfg = GameConfig {
            escape_threshold: 60,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn config_rejects_stacks_that_overflow_the_pot() {
        let cfg = GameConfig {
            starting_chips: 3_000_000_000,
            escape_threshold: u32::MAX,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
        assert!(matches!(
            GameState::new(["a", "b"], cfg, Some(1)),
            Err(GameError::InvalidConfig(_))
        ));

        let largest = GameConfig {
            starting_chips: 1_000,
            escape_threshold: u32::MAX / MAX_PLAYERS as u32,
            ..GameConfig::default()
        };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn eighteen_players_can_be_dealt() {
        let names: Vec<String> = (0..18).map(|i| format!("p{}", i)).collect();
        let mut game = GameState::new(names, GameConfig::default(), Some(3)).unwrap();
        game.start_round().unwrap();
        assert!(game.players().iter().all(|p| p.hand().is_some()));
    }
}

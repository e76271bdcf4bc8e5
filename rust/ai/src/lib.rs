//! # sniper-ai: Bot Players for Sniper Hold'em
//!
//! Provides computer-controlled seats for Sniper Hold'em games.
//! Every bot implements a common interface for betting and sniping decisions.
//!
//! ## Core Components
//!
//! - [`SniperBot`] - Trait defining the interface for bot decision-making
//! - [`PlayerView`] - What a single seat is allowed to see
//! - [`baseline`] - Rule-based bot driven by its own hand strength
//! - [`random`] - Seeded random bot for stress tests and simulations
//! - [`BotSeats`] - Adapter that lets bots drive [`GameState::play_round`]
//! - [`create_bot`] - Factory function for creating bots
//!
//! ## Quick Start
//!
//! ```rust
//! use sniper_ai::{create_bot, BotSeats};
//! use sniper_engine::game::{GameConfig, GameState};
//!
//! let names = ["a", "b", "c"];
//! let config = GameConfig::default();
//! let mut game = GameState::new(names, config.clone(), Some(42)).unwrap();
//!
//! let mut seats = BotSeats::new(config.fold_on_minimum_bet);
//! for (i, name) in names.iter().enumerate() {
//!     seats.add(*name, create_bot("baseline", i as u64).unwrap());
//! }
//!
//! let summary = game.play_round(&mut seats).unwrap();
//! println!("round winner: {:?}", summary.result.winner);
//! ```
//!
//! ## Bot Types
//!
//! - `"baseline"` - Deterministic rule-based bot
//! - `"random"` - Random bets and guesses from a ChaCha20 stream
//!
//! [`GameState::play_round`]: sniper_engine::game::GameState::play_round

use sniper_engine::cards::Card;
use sniper_engine::game::RoundInput;
use sniper_engine::hand::{Combination, HandScore};
use sniper_engine::player::Player;
use sniper_engine::round::RoundState;
use sniper_engine::sniper::SniperGuess;

pub mod baseline;
pub mod random;

/// Bot types understood by [`create_bot`].
pub const BOT_KINDS: [&str; 2] = ["baseline", "random"];

/// The part of the table one seat may look at: its own cards and chips plus public state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub hand: [Card; 2],
    pub score: HandScore,
    pub community: [Card; 4],
    pub chips: u32,
    pub pot: u32,
    /// A one-chip bet folds under the current table rules
    pub fold_on_minimum_bet: bool,
}

impl PlayerView {
    /// Builds the view for `player`, or `None` when the player holds no cards this round.
    pub fn new(player: &Player, round: &RoundState, fold_on_minimum_bet: bool) -> Option<Self> {
        Some(Self {
            hand: player.hand()?,
            score: player.hand_score()?,
            community: round.community,
            chips: player.chips(),
            pot: round.pot,
            fold_on_minimum_bet,
        })
    }
}

/// Trait defining the interface for bot players.
///
/// # Example Implementation
///
/// ```rust
/// use sniper_ai::{PlayerView, SniperBot};
/// use sniper_engine::hand::Combination;
///
/// struct Cautious;
///
/// impl SniperBot for Cautious {
///     fn choose_bet(&mut self, view: &PlayerView) -> u32 {
///         view.chips.min(2)
///     }
///
///     fn choose_guess(&mut self, _view: &PlayerView) -> Option<(Combination, u8)> {
///         None
///     }
///
///     fn name(&self) -> &str {
///         "Cautious"
///     }
/// }
/// ```
pub trait SniperBot: Send {
    /// Flat bet for this round. Must lie in `1..=view.chips`.
    fn choose_bet(&mut self, view: &PlayerView) -> u32;

    /// Combination and rank to snipe, or `None` to pass.
    fn choose_guess(&mut self, view: &PlayerView) -> Option<(Combination, u8)>;

    /// Return the name/identifier of this bot implementation.
    fn name(&self) -> &str;
}

/// Factory function to create bots by type string.
///
/// `seed` feeds bots that use randomness; deterministic bots ignore it.
/// Returns `None` for an unknown type.
///
/// # Example
///
/// ```rust
/// use sniper_ai::create_bot;
///
/// let bot = create_bot("baseline", 0).unwrap();
/// assert_eq!(bot.name(), "BaselineBot");
/// assert!(create_bot("oracle", 0).is_none());
/// ```
pub fn create_bot(kind: &str, seed: u64) -> Option<Box<dyn SniperBot>> {
    match kind {
        "baseline" => Some(Box::new(baseline::BaselineBot::new())),
        "random" => Some(Box::new(random::RandomBot::new(seed))),
        _ => None,
    }
}

/// Seats controlled by bots, keyed by player name.
///
/// Implements [`RoundInput`], so a table made only of bots can be played with
/// [`GameState::play_round`](sniper_engine::game::GameState::play_round).
pub struct BotSeats {
    seats: Vec<(String, Box<dyn SniperBot>)>,
    fold_on_minimum_bet: bool,
}

impl BotSeats {
    pub fn new(fold_on_minimum_bet: bool) -> Self {
        Self {
            seats: Vec::new(),
            fold_on_minimum_bet,
        }
    }

    pub fn add(&mut self, player: impl Into<String>, bot: Box<dyn SniperBot>) {
        self.seats.push((player.into(), bot));
    }

    pub fn contains(&self, player: &str) -> bool {
        self.seats.iter().any(|(n, _)| n == player)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    fn bot_for(&mut self, player: &str) -> Option<&mut Box<dyn SniperBot>> {
        self.seats
            .iter_mut()
            .find(|(n, _)| n == player)
            .map(|(_, b)| b)
    }
}

impl RoundInput for BotSeats {
    /// Seats without a bot, or without cards, bet zero and fail validation.
    fn bet(&mut self, player: &Player, round: &RoundState) -> u32 {
        let fold_rule = self.fold_on_minimum_bet;
        let Some(view) = PlayerView::new(player, round, fold_rule) else {
            return 0;
        };
        match self.bot_for(player.name()) {
            Some(bot) => bot.choose_bet(&view),
            None => 0,
        }
    }

    fn guess(&mut self, player: &Player, round: &RoundState) -> Option<SniperGuess> {
        let view = PlayerView::new(player, round, self.fold_on_minimum_bet)?;
        let (combination, rank) = self.bot_for(player.name())?.choose_guess(&view)?;
        SniperGuess::new(player.name(), combination, rank).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sniper_engine::game::{GameConfig, GameState};

    #[test]
    fn create_bot_knows_every_kind() {
        for kind in BOT_KINDS {
            assert!(create_bot(kind, 1).is_some(), "{}", kind);
        }
        assert!(create_bot("", 1).is_none());
    }

    #[test]
    fn view_requires_a_hand() {
        let p = Player::new("a", 60);
        let round = RoundState::new(1, [Card::new(1).unwrap(); 4], 0);
        assert!(PlayerView::new(&p, &round, true).is_none());
    }

    #[test]
    fn bot_seats_play_a_round() {
        let names = ["a", "b", "c", "d"];
        let config = GameConfig::default();
        let mut game = GameState::new(names, config.clone(), Some(11)).unwrap();
        let mut seats = BotSeats::new(config.fold_on_minimum_bet);
        for name in names {
            seats.add(name, create_bot("baseline", 0).unwrap());
        }
        assert_eq!(seats.len(), 4);
        assert!(seats.contains("c"));

        let summary = game.play_round(&mut seats).unwrap();
        assert_eq!(summary.round.bets.len(), 4);
        // escape remainders are dropped, so chips can only shrink
        let total: u32 = game.players().iter().map(|p| p.chips()).sum();
        assert!(total + game.carried_pot() <= 240);
    }

    #[test]
    fn missing_bot_makes_the_round_fail() {
        let mut game = GameState::new(["a", "b"], GameConfig::default(), Some(1)).unwrap();
        let mut seats = BotSeats::new(true);
        seats.add("a", create_bot("baseline", 0).unwrap());
        assert!(game.play_round(&mut seats).is_err());
    }
}

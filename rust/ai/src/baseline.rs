//! Baseline bot for Sniper Hold'em.
//!
//! Bets in proportion to the strength of its own hand and snipes the combination the
//! community cards make most likely for the other seats.

use crate::{PlayerView, SniperBot};
use sniper_engine::cards::{MAX_RANK, MIN_RANK};
use sniper_engine::hand::{Combination, RankProfile};
use sniper_engine::rules::FOLD_BET;

/// Simple rule-based bot used for simulations and as the default opponent.
///
/// # Strategy
///
/// **Betting:**
/// - HighCard and Pair: minimum bet, which folds when the table folds on one chip
/// - Stronger hands: a share of the stack growing with the combination
///   (TwoPair 1/10 up to FourOfAKind 1/2), never below two chips
///
/// **Sniping:**
/// - Triple or two pairs on the board: FullHouse at the highest repeated rank
/// - One pair on the board: Triple at that rank
/// - No pair on the board: Pair at the highest community rank
/// - Never snipes its own exact combination and rank
///
/// Decisions are fully deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct BaselineBot;

impl BaselineBot {
    pub fn new() -> Self {
        Self
    }

    /// Stack divisor for a committed bet, `None` when the hand is not worth playing.
    fn stack_divisor(combination: Combination) -> Option<u32> {
        match combination {
            Combination::HighCard | Combination::Pair => None,
            Combination::TwoPair => Some(10),
            Combination::Triple => Some(6),
            Combination::Straight => Some(4),
            Combination::FullHouse => Some(3),
            Combination::FourOfAKind => Some(2),
        }
    }

    /// Most likely strong holding among the other seats, read from the community cards.
    fn board_threat(view: &PlayerView) -> Option<(Combination, u8)> {
        let profile = RankProfile::new(&view.community);
        let repeated_max = |n: u8| {
            (MIN_RANK..=MAX_RANK)
                .rev()
                .find(|&r| profile.count_of(r) == n)
        };
        let pairs = (MIN_RANK..=MAX_RANK)
            .filter(|&r| profile.count_of(r) == 2)
            .count();

        if repeated_max(4).is_some() {
            // every seat shares the quads
            None
        } else if let Some(r) = repeated_max(3) {
            Some((Combination::FullHouse, r))
        } else if pairs >= 2 {
            repeated_max(2).map(|r| (Combination::FullHouse, r))
        } else if let Some(r) = repeated_max(2) {
            Some((Combination::Triple, r))
        } else {
            profile.unique().last().map(|&r| (Combination::Pair, r))
        }
    }
}

impl SniperBot for BaselineBot {
    fn choose_bet(&mut self, view: &PlayerView) -> u32 {
        if view.chips == 0 {
            return 0;
        }
        match Self::stack_divisor(view.score.combination) {
            None => FOLD_BET,
            Some(divisor) => (view.chips / divisor).max(FOLD_BET + 1).min(view.chips),
        }
    }

    fn choose_guess(&mut self, view: &PlayerView) -> Option<(Combination, u8)> {
        let (combination, rank) = Self::board_threat(view)?;
        if view.score.matches(combination, rank) {
            return None;
        }
        Some((combination, rank))
    }

    fn name(&self) -> &str {
        "BaselineBot"
    }
}

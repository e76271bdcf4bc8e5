//! Random bot: uniformly random bets and occasional random snipes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{PlayerView, SniperBot};
use sniper_engine::cards::{MAX_RANK, MIN_RANK};
use sniper_engine::hand::Combination;

/// Bets a uniform amount in `1..=chips` and snipes a random combination half of the time.
///
/// Seeded with ChaCha20, so a seed reproduces the same decisions.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: ChaCha20Rng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl SniperBot for RandomBot {
    fn choose_bet(&mut self, view: &PlayerView) -> u32 {
        if view.chips == 0 {
            return 0;
        }
        self.rng.random_range(1..=view.chips)
    }

    fn choose_guess(&mut self, _view: &PlayerView) -> Option<(Combination, u8)> {
        if !self.rng.random_bool(0.5) {
            return None;
        }
        let combination = Combination::ALL[self.rng.random_range(0..Combination::ALL.len())];
        let rank = self.rng.random_range(MIN_RANK..=MAX_RANK);
        Some((combination, rank))
    }

    fn name(&self) -> &str {
        "RandomBot"
    }
}

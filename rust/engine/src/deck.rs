use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The 40-card numbered deck with its own shuffle RNG.
/// Cards are dealt from the end of the sequence.
///
/// # Examples
///
/// ```
/// use sniper_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(42);
/// deck.shuffle();
/// let community = deck.deal(4).expect("fresh deck has 40 cards");
/// assert_eq!(community.len(), 4);
/// assert_eq!(deck.remaining(), 36);
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            rng,
        }
    }

    /// Restores all 40 cards and permutes them uniformly.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes `n` cards from the end of the deck.
    /// Fails without touching the deck when fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::EmptyDeck {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let at = self.cards.len() - n;
        let mut dealt = self.cards.split_off(at);
        dealt.reverse();
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Lowest card value in the deck.
pub const MIN_RANK: u8 = 1;
/// Highest card value in the deck.
pub const MAX_RANK: u8 = 10;
/// Copies of each rank in a fresh deck.
pub const COPIES_PER_RANK: usize = 4;
/// Total number of cards in a fresh deck.
pub const DECK_SIZE: usize = (MAX_RANK - MIN_RANK + 1) as usize * COPIES_PER_RANK;

/// A single numbered card. Cards carry only a rank in `1..=10`; there are no suits.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Builds a card, returning `None` when `rank` is outside `1..=10`.
    pub fn new(rank: u8) -> Option<Card> {
        (MIN_RANK..=MAX_RANK).contains(&rank).then_some(Card(rank))
    }

    pub fn rank(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Card {
    type Error = GameError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Card::new(v).ok_or_else(|| GameError::InvalidCard(format!("rank {} out of range 1..=10", v)))
    }
}

impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v: u8 = s
            .trim()
            .parse()
            .map_err(|_| GameError::InvalidCard(format!("{:?} is not a number", s.trim())))?;
        Card::try_from(v)
    }
}

/// Parses a whitespace or comma separated list of card ranks, e.g. `"7 7"` or `"7,2,2,9"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, GameError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

pub fn all_ranks() -> impl Iterator<Item = Card> {
    (MIN_RANK..=MAX_RANK).map(Card)
}

/// The 40-card multiset in a fixed enumeration: ranks 1 through 10, four times over.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for _ in 0..COPIES_PER_RANK {
        v.extend(all_ranks());
    }
    v
}

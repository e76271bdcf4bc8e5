use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, MAX_RANK};
use crate::errors::GameError;

/// Hand categories, weakest first. The discriminant is the category's base strength.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Combination {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    Triple = 4,
    Straight = 5,
    FullHouse = 6,
    FourOfAKind = 7,
}

impl Combination {
    /// Strongest first.
    pub const ALL: [Combination; 7] = [
        Combination::FourOfAKind,
        Combination::FullHouse,
        Combination::Straight,
        Combination::Triple,
        Combination::TwoPair,
        Combination::Pair,
        Combination::HighCard,
    ];

    pub fn base_strength(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            Combination::FourOfAKind => "Four of a Kind",
            Combination::FullHouse => "Full House",
            Combination::Straight => "Straight",
            Combination::Triple => "Triple",
            Combination::TwoPair => "Two Pair",
            Combination::Pair => "Pair",
            Combination::HighCard => "High Card",
        }
    }

    /// Korean table names, accepted by sniper input.
    pub fn korean_name(self) -> &'static str {
        match self {
            Combination::FourOfAKind => "포카드",
            Combination::FullHouse => "풀하우스",
            Combination::Straight => "스트레이트",
            Combination::Triple => "트리플",
            Combination::TwoPair => "투페어",
            Combination::Pair => "원페어",
            Combination::HighCard => "하이카드",
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Combination {
    type Err = GameError;

    /// Accepts English names in any case with optional spaces, dashes or underscores
    /// (`"Full House"`, `"full-house"`, `"FULLHOUSE"`), a few common aliases, and the Korean names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(c) = Combination::ALL
            .iter()
            .copied()
            .find(|c| c.korean_name() == trimmed)
        {
            return Ok(c);
        }
        let key: String = trimmed
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "fourofakind" | "quads" | "fourcard" => Ok(Combination::FourOfAKind),
            "fullhouse" => Ok(Combination::FullHouse),
            "straight" => Ok(Combination::Straight),
            "triple" | "trips" | "threeofakind" => Ok(Combination::Triple),
            "twopair" => Ok(Combination::TwoPair),
            "pair" | "onepair" => Ok(Combination::Pair),
            "highcard" => Ok(Combination::HighCard),
            _ => Err(GameError::InvalidSniperGuess(format!(
                "unknown combination {:?}",
                trimmed
            ))),
        }
    }
}

/// Evaluated strength of a dealt hand: a combination plus its defining rank.
///
/// Ordering compares combination first and defining rank second, which is exactly the
/// ordering of [`HandScore::numeric_score`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandScore {
    pub combination: Combination,
    pub rank: u8,
}

impl HandScore {
    pub fn new(combination: Combination, rank: u8) -> Self {
        Self { combination, rank }
    }

    /// Exact integer form of the score: `base * 100 + rank`.
    pub fn points(&self) -> u16 {
        self.combination.base_strength() * 100 + u16::from(self.rank)
    }

    /// `base + rank / 100`, e.g. 6.07 for a full house of sevens.
    pub fn numeric_score(&self) -> f64 {
        f64::from(self.points()) / 100.0
    }

    pub fn matches(&self, combination: Combination, rank: u8) -> bool {
        self.combination == combination && self.rank == rank
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({:.2})",
            self.rank,
            self.combination,
            self.numeric_score()
        )
    }
}

/// Rank occurrence profile of a set of cards.
#[derive(Debug, Clone)]
pub struct RankProfile {
    counts: [u8; MAX_RANK as usize + 1],
    unique: Vec<u8>,
}

impl RankProfile {
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = [0u8; MAX_RANK as usize + 1];
        for c in cards {
            counts[c.rank() as usize] += 1;
        }
        let unique = (1..=MAX_RANK).filter(|&r| counts[r as usize] > 0).collect();
        Self { counts, unique }
    }

    pub fn count_of(&self, rank: u8) -> u8 {
        self.counts[rank as usize]
    }

    /// Distinct ranks present, ascending.
    pub fn unique(&self) -> &[u8] {
        &self.unique
    }

    fn ranks_with(&self, n: u8) -> impl Iterator<Item = u8> + '_ {
        self.unique.iter().copied().filter(move |&r| self.count_of(r) == n)
    }

    fn has_count(&self, n: u8) -> bool {
        self.ranks_with(n).next().is_some()
    }

    /// Highest rank occurring exactly `n` times.
    fn max_with(&self, n: u8) -> Option<u8> {
        self.ranks_with(n).max()
    }

    /// High card of the first (lowest) run of five consecutive ranks.
    pub fn straight_high(&self) -> Option<u8> {
        self.unique
            .windows(5)
            .find(|w| w[4] - w[0] == 4 && w[1] - w[0] == 1)
            .map(|w| w[4])
    }
}

type Rule = fn(&RankProfile) -> Option<u8>;

fn four_of_a_kind(p: &RankProfile) -> Option<u8> {
    p.max_with(4)
}

fn full_house(p: &RankProfile) -> Option<u8> {
    if p.has_count(2) {
        p.max_with(3)
    } else {
        None
    }
}

fn straight(p: &RankProfile) -> Option<u8> {
    p.straight_high()
}

fn triple(p: &RankProfile) -> Option<u8> {
    p.max_with(3)
}

fn two_pair(p: &RankProfile) -> Option<u8> {
    if p.ranks_with(2).count() >= 2 {
        p.max_with(2)
    } else {
        None
    }
}

fn pair(p: &RankProfile) -> Option<u8> {
    p.max_with(2)
}

fn high_card(p: &RankProfile) -> Option<u8> {
    p.unique().last().copied()
}

/// Classification rules in priority order; the first rule that yields a rank wins.
pub const RULES: [(Combination, Rule); 7] = [
    (Combination::FourOfAKind, four_of_a_kind),
    (Combination::FullHouse, full_house),
    (Combination::Straight, straight),
    (Combination::Triple, triple),
    (Combination::TwoPair, two_pair),
    (Combination::Pair, pair),
    (Combination::HighCard, high_card),
];

/// Classifies any non-empty set of cards.
///
/// Whenever several ranks share the deciding occurrence count, the highest of them is reported.
/// There is no kicker logic beyond that.
///
/// # Examples
///
/// ```
/// use sniper_engine::cards::parse_cards;
/// use sniper_engine::hand::{evaluate_cards, Combination};
///
/// let cards = parse_cards("7 7 7 2 2 9").unwrap();
/// let score = evaluate_cards(&cards);
/// assert_eq!(score.combination, Combination::FullHouse);
/// assert_eq!(score.rank, 7);
/// assert_eq!(score.points(), 607);
/// ```
pub fn evaluate_cards(cards: &[Card]) -> HandScore {
    let profile = RankProfile::new(cards);
    RULES
        .iter()
        .find_map(|(combination, rule)| rule(&profile).map(|r| HandScore::new(*combination, r)))
        // only reachable for an empty slice
        .unwrap_or(HandScore::new(Combination::HighCard, 0))
}

/// Evaluates a player's two private cards together with the four community cards.
pub fn evaluate_hand(hole: &[Card; 2], community: &[Card; 4]) -> HandScore {
    let mut cards = [hole[0]; 6];
    cards[1] = hole[1];
    cards[2..].copy_from_slice(community);
    evaluate_cards(&cards)
}

pub fn compare_hands(a: &HandScore, b: &HandScore) -> Ordering {
    a.points().cmp(&b.points())
}

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{MAX_RANK, MIN_RANK};
use crate::errors::GameError;
use crate::hand::{Combination, HandScore};
use crate::player::Player;

/// A claim by `sniper` that some player holds exactly `combination` at `rank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SniperGuess {
    pub sniper: String,
    pub combination: Combination,
    pub rank: u8,
}

impl SniperGuess {
    pub fn new(
        sniper: impl Into<String>,
        combination: Combination,
        rank: u8,
    ) -> Result<Self, GameError> {
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(GameError::InvalidSniperGuess(format!(
                "rank {} outside {}..={}",
                rank, MIN_RANK, MAX_RANK
            )));
        }
        Ok(Self {
            sniper: sniper.into(),
            combination,
            rank,
        })
    }

    /// Parses table input of the form `"<rank> <combination>"`, e.g. `"4 Triple"` or `"4 트리플"`.
    ///
    /// The combination may contain spaces (`"9 Full House"`).
    pub fn parse(sniper: impl Into<String>, input: &str) -> Result<Self, GameError> {
        let input = input.trim();
        let (rank, combo) = input.split_once(char::is_whitespace).ok_or_else(|| {
            GameError::InvalidSniperGuess(format!(
                "expected '<rank> <combination>', got {:?}",
                input
            ))
        })?;
        let rank: u8 = rank
            .parse()
            .map_err(|_| GameError::InvalidSniperGuess(format!("rank {:?} is not a number", rank)))?;
        let combination: Combination = combo.parse()?;
        Self::new(sniper, combination, rank)
    }
}

/// The single (combination, rank) pair disqualified for one round's resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BannedCombo {
    pub combination: Combination,
    pub rank: u8,
}

impl BannedCombo {
    pub fn matches(&self, score: &HandScore) -> bool {
        score.matches(self.combination, self.rank)
    }
}

impl fmt::Display for BannedCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.combination)
    }
}

/// A guess that matched a player's evaluated hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnipeHit {
    pub sniper: String,
    pub target: String,
    pub combo: BannedCombo,
}

/// Every successful snipe, in guess order then player order.
///
/// All non-eliminated players are candidate targets, folded players and the sniper included.
pub fn find_snipe_hits(guesses: &[SniperGuess], players: &[Player]) -> Vec<SnipeHit> {
    let mut hits = Vec::new();
    for guess in guesses {
        for p in players.iter().filter(|p| !p.is_eliminated()) {
            let Some(score) = p.hand_score() else {
                continue;
            };
            if score.matches(guess.combination, guess.rank) {
                debug!(
                    sniper = %guess.sniper,
                    target = p.name(),
                    combination = %guess.combination,
                    rank = guess.rank,
                    "snipe hit"
                );
                hits.push(SnipeHit {
                    sniper: guess.sniper.clone(),
                    target: p.name().to_string(),
                    combo: BannedCombo {
                        combination: guess.combination,
                        rank: guess.rank,
                    },
                });
            }
        }
    }
    hits
}

/// The combo banned for this round: the last successful snipe in submission order.
///
/// # Examples
///
/// ```
/// use sniper_engine::hand::Combination;
/// use sniper_engine::sniper::{resolve_snipes, SniperGuess};
///
/// // nobody holds anything yet, so no guess can hit
/// let guesses = vec![SniperGuess::new("a", Combination::Triple, 7).unwrap()];
/// assert_eq!(resolve_snipes(&guesses, &[]), None);
/// ```
pub fn resolve_snipes(guesses: &[SniperGuess], players: &[Player]) -> Option<BannedCombo> {
    banned_from_hits(&find_snipe_hits(guesses, players))
}

pub fn banned_from_hits(hits: &[SnipeHit]) -> Option<BannedCombo> {
    hits.last().map(|h| h.combo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_multi_word_combination() {
        let g = SniperGuess::parse("a", " 9 Full House ").unwrap();
        assert_eq!(g.combination, Combination::FullHouse);
        assert_eq!(g.rank, 9);
        assert_eq!(g.sniper, "a");
    }

    #[test]
    fn parse_accepts_korean_names() {
        let g = SniperGuess::parse("a", "4 트리플").unwrap();
        assert_eq!((g.combination, g.rank), (Combination::Triple, 4));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["", "Triple", "x Triple", "0 Triple", "11 Pair", "4 Flush"] {
            assert!(
                matches!(
                    SniperGuess::parse("a", bad),
                    Err(GameError::InvalidSniperGuess(_))
                ),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn banned_is_last_hit() {
        let combo = |rank| BannedCombo {
            combination: Combination::Pair,
            rank,
        };
        let hits = vec![
            SnipeHit {
                sniper: "a".into(),
                target: "b".into(),
                combo: combo(3),
            },
            SnipeHit {
                sniper: "c".into(),
                target: "d".into(),
                combo: combo(5),
            },
        ];
        assert_eq!(banned_from_hits(&hits), Some(combo(5)));
        assert_eq!(banned_from_hits(&[]), None);
    }
}

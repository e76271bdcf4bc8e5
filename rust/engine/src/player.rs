use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandScore;

/// Default starting chips for each player
pub const STARTING_CHIPS: u32 = 60;

/// A seat in the game: identity, chip stack, round flags and the current private hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player name
    name: String,
    /// Current chip stack
    chips: u32,
    /// Folded for the current round
    folded: bool,
    /// Out of the game, either broke or escaped
    eliminated: bool,
    /// Private cards for the current round
    hand: Option<[Card; 2]>,
    /// Evaluation of `hand` against the community cards
    hand_score: Option<HandScore>,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
            folded: false,
            eliminated: false,
            hand: None,
            hand_score: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }
    pub fn hand(&self) -> Option<[Card; 2]> {
        self.hand
    }
    pub fn hand_score(&self) -> Option<HandScore> {
        self.hand_score
    }

    /// Still in the game and not folded this round.
    pub fn is_active(&self) -> bool {
        !self.folded && !self.eliminated
    }

    pub fn set_hand(&mut self, hand: [Card; 2], score: HandScore) {
        self.hand = Some(hand);
        self.hand_score = Some(score);
    }

    pub fn clear_hand(&mut self) {
        self.hand = None;
        self.hand_score = None;
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn reset_fold(&mut self) {
        self.folded = false;
    }

    pub fn eliminate(&mut self) {
        self.eliminated = true;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Removes `amount` chips, returning `false` (and changing nothing) when the stack is short.
    pub fn take_chips(&mut self, amount: u32) -> bool {
        match self.chips.checked_sub(amount) {
            Some(rest) => {
                self.chips = rest;
                true
            }
            None => false,
        }
    }

    pub fn set_chips(&mut self, chips: u32) {
        self.chips = chips;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Combination;

    #[test]
    fn new_player_is_active_with_no_hand() {
        let p = Player::new("alice", STARTING_CHIPS);
        assert_eq!(p.chips(), 60);
        assert!(p.is_active());
        assert!(p.hand().is_none());
        assert!(p.hand_score().is_none());
    }

    #[test]
    fn take_chips_cannot_overdraw() {
        let mut p = Player::new("bob", 10);
        assert!(!p.take_chips(11));
        assert_eq!(p.chips(), 10);
        assert!(p.take_chips(10));
        assert_eq!(p.chips(), 0);
    }

    #[test]
    fn folded_or_eliminated_players_are_inactive() {
        let mut p = Player::new("carol", 10);
        p.fold();
        assert!(!p.is_active());
        p.reset_fold();
        assert!(p.is_active());
        p.eliminate();
        assert!(!p.is_active());
    }

    #[test]
    fn clear_hand_drops_score() {
        let mut p = Player::new("dave", 10);
        let c = Card::new(3).unwrap();
        p.set_hand([c, c], HandScore::new(Combination::Pair, 3));
        p.clear_hand();
        assert!(p.hand().is_none() && p.hand_score().is_none());
    }
}

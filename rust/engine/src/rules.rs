use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// The bet that folds a player when minimum-bet folding is enabled.
pub const FOLD_BET: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedBet {
    /// Pays [`FOLD_BET`] into the pot and sits out the rest of the round.
    Fold(u32),
    Bet(u32),
}

impl ValidatedBet {
    pub fn amount(&self) -> u32 {
        match *self {
            ValidatedBet::Fold(a) | ValidatedBet::Bet(a) => a,
        }
    }

    pub fn is_fold(&self) -> bool {
        matches!(self, ValidatedBet::Fold(_))
    }
}

/// Validates a flat bet against the player's stack.
///
/// Every bet must lie in `1..=chips`. When `fold_on_minimum` is set, a bet of exactly
/// [`FOLD_BET`] is the fold action: the chip is still paid into the pot.
///
/// # Errors
///
/// [`GameError::InvalidBet`] when the amount is zero or larger than the stack.
///
/// # Examples
///
/// ```
/// use sniper_engine::rules::{validate_bet, ValidatedBet};
/// use sniper_engine::errors::GameError;
///
/// assert_eq!(validate_bet(60, 10, true), Ok(ValidatedBet::Bet(10)));
/// assert_eq!(validate_bet(60, 1, true), Ok(ValidatedBet::Fold(1)));
/// assert_eq!(validate_bet(60, 1, false), Ok(ValidatedBet::Bet(1)));
/// assert!(matches!(validate_bet(5, 6, true), Err(GameError::InvalidBet { .. })));
/// ```
pub fn validate_bet(chips: u32, amount: u32, fold_on_minimum: bool) -> Result<ValidatedBet, GameError> {
    if amount == 0 || amount > chips {
        return Err(GameError::InvalidBet { amount, chips });
    }
    if fold_on_minimum && amount == FOLD_BET {
        Ok(ValidatedBet::Fold(amount))
    } else {
        Ok(ValidatedBet::Bet(amount))
    }
}

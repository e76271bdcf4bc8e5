//! Chip movement: bets into the pot, pot awards, and the end-of-round elimination pass.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::GameError;
use crate::player::Player;

/// Chip count at which a player escapes the game.
pub const ESCAPE_THRESHOLD: u32 = 75;

/// Moves `amount` chips from the player into the pot.
///
/// # Errors
///
/// [`GameError::InvalidBet`] unless `1 <= amount <= chips`, and [`GameError::PotOverflow`]
/// when the pot cannot hold the bet. Nothing changes in either case.
pub fn apply_bet(player: &mut Player, amount: u32, pot: &mut u32) -> Result<(), GameError> {
    let Some(total) = pot.checked_add(amount) else {
        return Err(GameError::PotOverflow { pot: *pot, amount });
    };
    if amount == 0 || !player.take_chips(amount) {
        return Err(GameError::InvalidBet {
            amount,
            chips: player.chips(),
        });
    }
    *pot = total;
    Ok(())
}

/// Pays out the whole pot, leaving it at zero. Returns the amount paid.
pub fn award_pot(winner: &mut Player, pot: &mut u32) -> u32 {
    let amount = std::mem::take(pot);
    winner.add_chips(amount);
    amount
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Outcome {
    /// Ran out of chips.
    Eliminated,
    /// Reached the escape threshold. `share` went to each of `recipients` players.
    Escaped {
        surplus: u32,
        share: u32,
        recipients: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationEvent {
    pub player: String,
    pub outcome: Outcome,
}

/// Runs the elimination pass over players in seat order.
///
/// Broke players (0 chips) are eliminated. Players at or above `escape_threshold` are clamped
/// to it and escape; their surplus is split evenly among the other players still in the game
/// at that moment, remainder dropped. Chips move immediately, so a redistribution can push a
/// later player over the threshold within the same pass.
pub fn check_elimination(players: &mut [Player], escape_threshold: u32) -> Vec<EliminationEvent> {
    let mut events = Vec::new();
    for i in 0..players.len() {
        if players[i].is_eliminated() {
            continue;
        }
        let chips = players[i].chips();
        if chips == 0 {
            players[i].eliminate();
            info!(player = players[i].name(), "player eliminated");
            events.push(EliminationEvent {
                player: players[i].name().to_string(),
                outcome: Outcome::Eliminated,
            });
        } else if chips >= escape_threshold {
            let surplus = chips - escape_threshold;
            players[i].set_chips(escape_threshold);
            players[i].eliminate();

            let recipients: Vec<usize> = (0..players.len())
                .filter(|&j| j != i && !players[j].is_eliminated())
                .collect();
            let share = match recipients.len() {
                0 => 0,
                n => surplus / n as u32,
            };
            for &j in &recipients {
                players[j].add_chips(share);
            }
            info!(
                player = players[i].name(),
                surplus,
                share,
                recipients = recipients.len(),
                "player escaped"
            );
            events.push(EliminationEvent {
                player: players[i].name().to_string(),
                outcome: Outcome::Escaped {
                    surplus,
                    share,
                    recipients: recipients.len(),
                },
            });
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_bet_moves_chips_into_pot() {
        let mut p = Player::new("a", 60);
        let mut pot = 5;
        apply_bet(&mut p, 20, &mut pot).unwrap();
        assert_eq!(p.chips(), 40);
        assert_eq!(pot, 25);
    }

    #[test]
    fn apply_bet_rejects_zero_and_overbet() {
        let mut p = Player::new("a", 10);
        let mut pot = 0;
        assert_eq!(
            apply_bet(&mut p, 0, &mut pot),
            Err(GameError::InvalidBet {
                amount: 0,
                chips: 10
            })
        );
        assert!(apply_bet(&mut p, 11, &mut pot).is_err());
        assert_eq!(p.chips(), 10);
        assert_eq!(pot, 0);
    }

    #[test]
    fn award_pot_empties_it() {
        let mut p = Player::new("a", 10);
        let mut pot = 30;
        assert_eq!(award_pot(&mut p, &mut pot), 30);
        assert_eq!(p.chips(), 40);
        assert_eq!(pot, 0);
    }

    #[test]
    fn already_eliminated_players_are_skipped() {
        let mut players = vec![Player::new("a", 75), Player::new("b", 30)];
        players[0].eliminate();
        let events = check_elimination(&mut players, ESCAPE_THRESHOLD);
        assert!(events.is_empty());
        assert_eq!(players[1].chips(), 30);
    }
}

//! Deal command handler: deals one round and shows every seat.
//!
//! The seat count and table rules come from the resolved configuration. The seed comes
//! from `--seed`, then the configuration, then a random draw, and is always printed so
//! the deal can be reproduced.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_cards;
use sniper_engine::game::GameState;
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut game = GameState::new(cfg.player_names(), cfg.game_config(), Some(seed))?;
    let round = game.start_round()?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Community: {}", format_cards(&round.community))?;
    for p in game.players() {
        let (Some(hand), Some(score)) = (p.hand(), p.hand_score()) else {
            return Err(CliError::Engine(format!("{} was not dealt a hand", p.name())));
        };
        writeln!(out, "{}: {} {}", p.name(), format_cards(&hand), score)?;
    }
    Ok(())
}

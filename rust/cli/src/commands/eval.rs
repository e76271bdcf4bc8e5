//! Eval command handler: classifies two private cards against four community cards.

use crate::error::CliError;
use sniper_engine::cards::{parse_cards, Card, COPIES_PER_RANK};
use sniper_engine::game::{COMMUNITY_CARDS, HAND_CARDS};
use sniper_engine::hand::evaluate_hand;
use std::io::Write;

fn parse_exact<const N: usize>(label: &str, input: &str) -> Result<[Card; N], CliError> {
    let cards = parse_cards(input).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let count = cards.len();
    cards.try_into().map_err(|_| {
        CliError::InvalidInput(format!("{} needs {} cards, got {}", label, N, count))
    })
}

/// Handle the eval command.
///
/// # Errors
///
/// `CliError::InvalidInput` when a card is not a rank 1-10, a side has the wrong number of
/// cards, or a rank appears more often than the deck holds it.
pub fn handle_eval_command(hole: &str, board: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hole: [Card; HAND_CARDS] = parse_exact("--hole", hole)?;
    let board: [Card; COMMUNITY_CARDS] = parse_exact("--board", board)?;

    let mut counts = [0usize; 11];
    for c in hole.iter().chain(board.iter()) {
        counts[c.rank() as usize] += 1;
        if counts[c.rank() as usize] > COPIES_PER_RANK {
            return Err(CliError::InvalidInput(format!(
                "rank {} appears more than {} times",
                c.rank(),
                COPIES_PER_RANK
            )));
        }
    }

    let score = evaluate_hand(&hole, &board);
    writeln!(out, "Combination: {}", score.combination)?;
    writeln!(out, "Rank: {}", score.rank)?;
    writeln!(out, "Score: {:.2}", score.numeric_score())?;
    Ok(())
}

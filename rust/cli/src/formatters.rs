//! Card, bet and round-outcome formatters for terminal display.
//!
//! ## Example
//!
//! ```rust
//! use sniper_engine::cards::parse_cards;
//! use sniper_cli::formatters::format_cards;
//!
//! let board = parse_cards("1 4 6 9").unwrap();
//! assert_eq!(format_cards(&board), "[1 4 6 9]");
//! ```

use sniper_engine::cards::Card;
use sniper_engine::economy::{EliminationEvent, Outcome};
use sniper_engine::round::RoundResult;
use sniper_engine::rules::ValidatedBet;

/// Format cards as a bracketed, space-separated list.
pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
    format!("[{}]", inner.join(" "))
}

/// Format a validated bet as shown after a player acts.
///
/// # Example
///
/// ```rust
/// use sniper_engine::rules::ValidatedBet;
/// # use sniper_cli::formatters::format_bet;
///
/// assert_eq!(format_bet(&ValidatedBet::Bet(12)), "bet 12");
/// assert_eq!(format_bet(&ValidatedBet::Fold(1)), "fold (1 chip)");
/// ```
pub fn format_bet(bet: &ValidatedBet) -> String {
    match bet {
        ValidatedBet::Fold(amount) => format!("fold ({} chip)", amount),
        ValidatedBet::Bet(amount) => format!("bet {}", amount),
    }
}

pub fn format_outcome(event: &EliminationEvent) -> String {
    match event.outcome {
        Outcome::Eliminated => format!("{} is out of chips and eliminated", event.player),
        Outcome::Escaped {
            surplus,
            share,
            recipients,
        } => format!(
            "{} escaped (surplus {}: {} to each of {} players)",
            event.player, surplus, share, recipients
        ),
    }
}

/// One line describing who took the pot.
pub fn format_result(result: &RoundResult) -> String {
    let mut line = match &result.winner {
        Some(w) => format!("Winner: {} takes {}", w, result.awarded),
        None => format!("No winner, pot of {} carries over", result.unclaimed),
    };
    if !result.disqualified.is_empty() {
        line.push_str(&format!(
            " (disqualified: {})",
            result.disqualified.join(", ")
        ));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use sniper_engine::cards::parse_cards;

    #[test]
    fn test_format_cards_empty() {
        assert_eq!(format_cards(&[]), "[]");
    }

    #[test]
    fn test_format_cards() {
        let cards = parse_cards("10 1").unwrap();
        assert_eq!(format_cards(&cards), "[10 1]");
    }

    #[test]
    fn test_format_outcome() {
        let out = EliminationEvent {
            player: "P2".into(),
            outcome: Outcome::Eliminated,
        };
        assert_eq!(format_outcome(&out), "P2 is out of chips and eliminated");
        let esc = EliminationEvent {
            player: "P1".into(),
            outcome: Outcome::Escaped {
                surplus: 9,
                share: 3,
                recipients: 3,
            },
        };
        assert_eq!(
            format_outcome(&esc),
            "P1 escaped (surplus 9: 3 to each of 3 players)"
        );
    }

    #[test]
    fn test_format_result() {
        let won = RoundResult {
            winner: Some("P3".into()),
            awarded: 40,
            unclaimed: 0,
            banned: None,
            disqualified: vec![],
        };
        assert_eq!(format_result(&won), "Winner: P3 takes 40");
        let lost = RoundResult {
            winner: None,
            awarded: 0,
            unclaimed: 12,
            banned: None,
            disqualified: vec!["P1".into()],
        };
        assert_eq!(
            format_result(&lost),
            "No winner, pot of 12 carries over (disqualified: P1)"
        );
    }
}

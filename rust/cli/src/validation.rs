//! Parsing of interactive input for the `play` command.
//!
//! Every prompt accepts `q` or `quit` to leave the game. Range checks on bets are left to
//! the engine so that the player sees the same error a bot would get.

use sniper_engine::sniper::SniperGuess;

/// Outcome of parsing one line typed at a prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult<T> {
    Value(T),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    matches!(input.to_ascii_lowercase().as_str(), "q" | "quit")
}

/// Parse a bet amount.
///
/// # Example
///
/// ```rust
/// # use sniper_cli::validation::{parse_bet, ParseResult};
/// assert_eq!(parse_bet("12"), ParseResult::Value(12));
/// assert_eq!(parse_bet("q"), ParseResult::Quit);
/// assert!(matches!(parse_bet("lots"), ParseResult::Invalid(_)));
/// ```
pub fn parse_bet(input: &str) -> ParseResult<u32> {
    let input = input.trim();
    if is_quit(input) {
        return ParseResult::Quit;
    }
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    match input.parse::<u32>() {
        Ok(n) => ParseResult::Value(n),
        Err(_) => ParseResult::Invalid(format!("Bet must be a whole number, got {:?}", input)),
    }
}

/// Parse a sniper guess `"<rank> <combination>"`; an empty line or `pass` skips the snipe.
///
/// # Example
///
/// ```rust
/// # use sniper_cli::validation::{parse_guess, ParseResult};
/// use sniper_engine::hand::Combination;
///
/// match parse_guess("P1", "4 Triple") {
///     ParseResult::Value(Some(g)) => {
///         assert_eq!(g.combination, Combination::Triple);
///         assert_eq!(g.rank, 4);
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// assert_eq!(parse_guess("P1", ""), ParseResult::Value(None));
/// ```
pub fn parse_guess(sniper: &str, input: &str) -> ParseResult<Option<SniperGuess>> {
    let input = input.trim();
    if is_quit(input) {
        return ParseResult::Quit;
    }
    if input.is_empty() || input.eq_ignore_ascii_case("pass") {
        return ParseResult::Value(None);
    }
    match SniperGuess::parse(sniper, input) {
        Ok(g) => ParseResult::Value(Some(g)),
        Err(e) => ParseResult::Invalid(e.to_string()),
    }
}

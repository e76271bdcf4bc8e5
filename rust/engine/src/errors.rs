use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, must be between 1 and {chips}")]
    InvalidBet { amount: u32, chips: u32 },
    #[error("Pot of {pot} cannot take {amount} more chips")]
    PotOverflow { pot: u32, amount: u32 },
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Invalid sniper guess: {0}")]
    InvalidSniperGuess(String),
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    EmptyDeck { requested: usize, remaining: usize },
    #[error("Unknown player: {0}")]
    UnknownPlayer(String),
    #[error("Player {0} cannot act this round")]
    PlayerNotActive(String),
    #[error("Player {0} has already bet this round")]
    AlreadyBet(String),
    #[error("Player count {count} outside supported range {min}..={max}")]
    PlayerCount { count: usize, min: usize, max: usize },
    #[error("Duplicate player name: {0}")]
    DuplicatePlayer(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Game is already over")]
    GameOver,
}

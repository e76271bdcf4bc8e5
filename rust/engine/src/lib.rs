//! # sniper-engine: Sniper Hold'em Rules Engine
//!
//! Rules engine for Sniper Hold'em, a multi-round elimination game played with a
//! 40-card numbered deck. Each round deals two private and four shared cards, takes one
//! flat bet per player, then runs a sniper phase in which players try to disqualify an
//! exact combination and rank before hands are compared.
//!
//! ## Core Modules
//!
//! - [`cards`] - Numbered cards (1-10) and deck construction
//! - [`deck`] - Seeded ChaCha20 shuffling and dealing
//! - [`hand`] - Hand classification into combinations and scores
//! - [`sniper`] - Sniper guesses and the banned combo
//! - [`round`] - Round state and winner resolution
//! - [`economy`] - Bets, pot payouts, elimination and escape
//! - [`rules`] - Bet validation, including the minimum-bet fold
//! - [`game`] - Cross-round game state and round lifecycle
//! - [`player`] - Player seats
//! - [`logger`] - RoundRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use sniper_engine::cards::parse_cards;
//! use sniper_engine::hand::{evaluate_hand, Combination};
//!
//! let hole = parse_cards("3 4").unwrap();
//! let board = parse_cards("5 6 7 9").unwrap();
//! let score = evaluate_hand(&[hole[0], hole[1]], &[board[0], board[1], board[2], board[3]]);
//! assert_eq!(score.combination, Combination::Straight);
//! assert_eq!(score.rank, 7);
//! ```
//!
//! ## Round Lifecycle
//!
//! ```rust
//! use sniper_engine::game::{GameConfig, GameState};
//! use sniper_engine::sniper::SniperGuess;
//!
//! let mut game = GameState::new(["a", "b", "c"], GameConfig::default(), Some(42)).unwrap();
//! let mut round = game.start_round().unwrap();
//! game.place_bet(&mut round, "a", 10).unwrap();
//! game.place_bet(&mut round, "b", 1).unwrap(); // minimum bet folds
//! game.place_bet(&mut round, "c", 10).unwrap();
//! let guess = SniperGuess::parse("a", "7 Triple").unwrap();
//! game.snipe(&mut round, &[guess]).unwrap();
//! let summary = game.finish_round(round);
//! println!("winner: {:?}", summary.result.winner);
//! ```

pub mod cards;
pub mod deck;
pub mod economy;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod round;
pub mod rules;
pub mod sniper;

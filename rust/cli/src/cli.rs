//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "sniper",
    version,
    about = "Sniper Hold'em: deal, evaluate, play and simulate"
)]
pub struct SniperCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game at the terminal
    Play {
        #[arg(long, value_enum)]
        vs: Vs,
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many rounds even if the game is still running
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_rounds: Option<u32>,
    },
    /// Let bots play whole games
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        games: u64,
        #[arg(long)]
        seed: Option<u64>,
        /// Append every round to this JSONL file
        #[arg(long)]
        output: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        max_rounds: Option<u32>,
    },
    /// Deal a single round and show every hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate two private cards against four community cards
    Eval {
        #[arg(long)]
        hole: String,
        #[arg(long)]
        board: String,
    },
    /// Show the resolved configuration
    Cfg,
}

/// Who sits at the other seats in `play`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Every seat is prompted at this terminal
    Human,
    /// Seat one is prompted, bots take the rest
    Ai,
}

impl Vs {
    /// Returns the string representation of the opponent type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sniper_cli::Vs;
    /// assert_eq!(Vs::Ai.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}

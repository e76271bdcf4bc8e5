//! # Sniper Hold'em CLI Library
//!
//! Command-line interface for the Sniper Hold'em engine: terminal play, bot simulations,
//! single deals, hand evaluation and configuration display.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = sniper_cli::run(["sniper", "eval", "--hole", "3 4", "--board", "5 6 7 9"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Straight"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a game against bots or in hot-seat mode
//! - `sim`: Let bots play whole games and optionally record every round
//! - `deal`: Deal a single round for inspection
//! - `eval`: Evaluate one hand
//! - `cfg`: Display current configuration settings

use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use clap::Parser;
use cli::{Commands, SniperCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use cli::Vs;
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// `play` reads its input from the process stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interrupted simulations
///
/// # Example
///
/// ```
/// use std::io;
/// let code = sniper_cli::run(["sniper", "deal", "--seed", "42"], &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`], reading interactive input from `stdin`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn std::io::BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SniperCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                write_or_exit!(out, "{}", e);
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Sniper Hold'em CLI");
            write_or_exit!(err, "Usage: sniper <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: sniper --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            vs,
            seed,
            max_rounds,
        } => handle_play_command(vs, seed, max_rounds, out, err, stdin),
        Commands::Sim {
            games,
            seed,
            output,
            max_rounds,
        } => handle_sim_command(games, seed, output, max_rounds, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Eval { hole, board } => handle_eval_command(&hole, &board, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_command_parses() {
        let commands = vec![
            vec!["sniper", "cfg"],
            vec!["sniper", "play", "--vs", "ai"],
            vec!["sniper", "sim", "--games", "1"],
            vec!["sniper", "deal"],
            vec!["sniper", "eval", "--hole", "1 2", "--board", "3 4 5 6"],
        ];
        assert_eq!(commands.len(), COMMANDS.len());
        for cmd_args in commands {
            let result = SniperCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_zero_counts_rejected_by_clap() {
        assert!(SniperCli::try_parse_from(["sniper", "sim", "--games", "0"]).is_err());
        assert!(
            SniperCli::try_parse_from(["sniper", "play", "--vs", "ai", "--max-rounds", "0"])
                .is_err()
        );
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["sniper", "shuffle"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let text = String::from_utf8(err).unwrap();
        for c in COMMANDS {
            assert!(text.contains(c));
        }
    }
}

//! # Play Command
//!
//! Terminal play of a full Sniper Hold'em game.
//!
//! - **vs human**: every seat is prompted in turn at this terminal (hot seat)
//! - **vs ai**: seat `P1` is prompted, the other seats are baseline bots
//!
//! Each round shows the community cards, takes one bet per active seat, then one optional
//! sniper guess per seat that did not fold, and finally prints the showdown. Entering `q`
//! at any prompt (or closing stdin) ends the game with "Game aborted".

use crate::cli::Vs;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_bet, format_cards, format_outcome, format_result};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_bet, parse_guess};
use sniper_ai::{BotSeats, create_bot};
use sniper_engine::game::{GameState, RoundInput, RoundSummary};
use sniper_engine::player::Player;
use sniper_engine::round::RoundState;
use sniper_engine::rules::ValidatedBet;
use sniper_engine::sniper::SniperGuess;
use std::io::{BufRead, Write};

/// Handle the play command.
///
/// # Arguments
///
/// * `vs` - Who sits at the other seats
/// * `seed` - RNG seed for reproducibility (default: configuration, then random)
/// * `max_rounds` - Optional cap on the number of rounds
/// * `out` - Output stream for game display
/// * `err` - Error stream for rejected input
/// * `stdin` - Input stream for bets and guesses
///
/// # Returns
///
/// `Ok(())` when the game ends, hits the round cap, or the player quits.
pub fn handle_play_command(
    vs: Vs,
    seed: Option<u64>,
    max_rounds: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let names = cfg.player_names();
    let mut game = GameState::new(names.clone(), cfg.game_config(), Some(seed))?;

    let mut bots = BotSeats::new(cfg.fold_on_minimum_bet);
    if vs == Vs::Ai {
        for (i, name) in names.iter().enumerate().skip(1) {
            let bot = create_bot("baseline", seed.wrapping_add(i as u64))
                .ok_or_else(|| CliError::Engine("baseline bot unavailable".into()))?;
            bots.add(name.as_str(), bot);
        }
    }

    writeln!(
        out,
        "play: vs={} players={} seed={}",
        vs.as_str(),
        names.len(),
        seed
    )?;

    while !game.is_over() {
        if max_rounds.is_some_and(|m| game.round_number() >= m) {
            writeln!(out, "Round limit reached")?;
            break;
        }
        match play_one_round(&mut game, &mut bots, stdin, out, err)? {
            Some(summary) => show_summary(&game, &summary, out)?,
            None => {
                writeln!(out, "Game aborted")?;
                return Ok(());
            }
        }
    }

    if let Some(p) = game.survivor() {
        writeln!(out, "Last player standing: {} ({} chips)", p.name(), p.chips())?;
    } else if game.is_over() {
        writeln!(out, "No players left")?;
    }
    writeln!(out, "Rounds played: {}", game.round_number())?;
    Ok(())
}

/// Runs one round; `None` means the player asked to quit.
fn play_one_round(
    game: &mut GameState,
    bots: &mut BotSeats,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<RoundSummary>, CliError> {
    let mut round = game.start_round()?;
    writeln!(out)?;
    writeln!(out, "=== Round {} ===", round.number)?;
    writeln!(out, "Community: {}", format_cards(&round.community))?;
    if round.pot > 0 {
        writeln!(out, "Carried pot: {}", round.pot)?;
    }

    let seats: Vec<String> = game
        .players()
        .iter()
        .filter(|p| p.is_active())
        .map(|p| p.name().to_string())
        .collect();

    for name in &seats {
        let bet = if bots.contains(name) {
            let player = seat(game, name)?;
            let amount = bots.bet(player, &round);
            game.place_bet(&mut round, name, amount)?
        } else {
            match prompt_bet(game, &mut round, name, stdin, out, err)? {
                Some(bet) => bet,
                None => return Ok(None),
            }
        };
        writeln!(out, "{}: {}", name, format_bet(&bet))?;
    }

    let mut guesses: Vec<SniperGuess> = Vec::new();
    for name in &seats {
        let player = seat(game, name)?;
        if !player.is_active() {
            continue;
        }
        let guess = if bots.contains(name) {
            bots.guess(player, &round)
        } else {
            match prompt_guess(name, stdin, out, err)? {
                Some(g) => g,
                None => return Ok(None),
            }
        };
        if let Some(g) = guess {
            writeln!(out, "{} snipes {} {}", name, g.rank, g.combination)?;
            guesses.push(g);
        }
    }

    match game.snipe(&mut round, &guesses)? {
        Some(banned) => writeln!(out, "Banned this round: {}", banned)?,
        None if guesses.is_empty() => {}
        None => writeln!(out, "Every snipe missed")?,
    }

    Ok(Some(game.finish_round(round)))
}

fn seat<'a>(game: &'a GameState, name: &str) -> Result<&'a Player, CliError> {
    game.player(name)
        .ok_or_else(|| CliError::Engine(format!("unknown seat {}", name)))
}

/// Prompts until the engine accepts a bet. `None` on quit or end of input.
fn prompt_bet(
    game: &mut GameState,
    round: &mut RoundState,
    name: &str,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<ValidatedBet>, CliError> {
    let player = seat(game, name)?;
    let (Some(hand), Some(score)) = (player.hand(), player.hand_score()) else {
        return Err(CliError::Engine(format!("{} holds no cards", name)));
    };
    let chips = player.chips();
    writeln!(
        out,
        "{} holds {} = {} | chips {} | pot {}",
        name,
        format_cards(&hand),
        score,
        chips,
        round.pot
    )?;
    let fold_hint = if game.config().fold_on_minimum_bet {
        ", 1 folds"
    } else {
        ""
    };
    let text = format!("{} bet (1-{}{}, q quits): ", name, chips, fold_hint);

    loop {
        ui::prompt(out, &text)?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_bet(&line) {
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Value(amount) => match game.place_bet(round, name, amount) {
                Ok(bet) => return Ok(Some(bet)),
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
        }
    }
}

/// Prompts until the input is a valid guess or a pass. Outer `None` on quit.
fn prompt_guess(
    name: &str,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Option<Option<SniperGuess>>, CliError> {
    let text = format!(
        "{} snipe '<rank> <combination>' (Enter passes, q quits): ",
        name
    );
    loop {
        ui::prompt(out, &text)?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_guess(name, &line) {
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Value(guess) => return Ok(Some(guess)),
        }
    }
}

fn show_summary(
    game: &GameState,
    summary: &RoundSummary,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(out, "--- Showdown ---")?;
    for p in game.players() {
        let (Some(hand), Some(score)) = (p.hand(), p.hand_score()) else {
            continue;
        };
        let folded = summary
            .round
            .bets
            .iter()
            .any(|b| b.player == p.name() && b.bet.is_fold());
        writeln!(
            out,
            "{}: {} {}{}",
            p.name(),
            format_cards(&hand),
            score,
            if folded { " (folded)" } else { "" }
        )?;
    }
    writeln!(out, "{}", format_result(&summary.result))?;
    for event in &summary.eliminations {
        writeln!(out, "{}", format_outcome(event))?;
    }
    let chips: Vec<String> = game
        .players()
        .iter()
        .map(|p| {
            if p.is_eliminated() {
                format!("{}={} (out)", p.name(), p.chips())
            } else {
                format!("{}={}", p.name(), p.chips())
            }
        })
        .collect();
    writeln!(out, "Chips: {}", chips.join(" "))?;
    Ok(())
}

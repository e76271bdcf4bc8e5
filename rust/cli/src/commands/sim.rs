//! Simulation command handler: bots play whole games.
//!
//! Seats alternate between the baseline bot (odd seats `P1`, `P3`, ...) and the random bot.
//! Game `g` (0-based) is dealt from `seed + g`, so a run is reproducible from its seed.
//! With `--output` every round is appended to a JSONL round history.
//!
//! # Environment Variables
//!
//! - `SNIPER_SIM_BREAK_AFTER`: stop after N games and report the run as interrupted

use crate::config;
use crate::error::CliError;
use crate::ui;
use sniper_ai::{BotSeats, create_bot};
use sniper_engine::game::GameState;
use sniper_engine::logger::{RoundLogger, RoundRecord};
use std::io::Write;
use tracing::info;

/// Round cap per game when `--max-rounds` is not given.
pub const DEFAULT_MAX_ROUNDS: u32 = 1_000;

#[derive(Debug, Default)]
struct Tally {
    games: u64,
    rounds: u64,
    /// Games won per seat, in seat order
    wins: Vec<(String, u64)>,
    no_survivor: u64,
    round_limit: u64,
}

/// Handle the sim command.
///
/// # Arguments
///
/// * `games` - Number of games to play
/// * `seed` - Base seed (default: configuration, then random)
/// * `output` - JSONL file receiving one record per round
/// * `max_rounds` - Round cap per game
/// * `out` - Output stream for the summary
/// * `err` - Output stream for error messages
pub fn handle_sim_command(
    games: u64,
    seed: Option<u64>,
    output: Option<String>,
    max_rounds: Option<u32>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let max_rounds = max_rounds.unwrap_or(DEFAULT_MAX_ROUNDS);
    let names = cfg.player_names();

    let mut logger = output.as_deref().map(RoundLogger::create).transpose()?;
    let break_after = std::env::var("SNIPER_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let mut tally = Tally {
        wins: names.iter().map(|n| (n.clone(), 0)).collect(),
        ..Tally::default()
    };

    for g in 0..games {
        let game_seed = base_seed.wrapping_add(g);
        let mut game = GameState::new(names.clone(), cfg.game_config(), Some(game_seed))?;
        let mut seats = BotSeats::new(cfg.fold_on_minimum_bet);
        for (i, name) in names.iter().enumerate() {
            let kind = if i % 2 == 0 { "baseline" } else { "random" };
            let bot = create_bot(kind, game_seed.wrapping_add(i as u64))
                .ok_or_else(|| CliError::Engine(format!("{} bot unavailable", kind)))?;
            seats.add(name.as_str(), bot);
        }

        while !game.is_over() && game.round_number() < max_rounds {
            let summary = game.play_round(&mut seats)?;
            if let Some(logger) = logger.as_mut() {
                let mut record = RoundRecord::from_summary(
                    logger.next_id(),
                    Some(game_seed),
                    &summary,
                    game.players(),
                );
                record.meta = Some(serde_json::json!({ "game": g + 1 }));
                logger.write(&record)?;
            }
        }

        tally.games += 1;
        tally.rounds += u64::from(game.round_number());
        match game.survivor() {
            Some(p) => {
                if let Some(entry) = tally.wins.iter_mut().find(|(n, _)| n == p.name()) {
                    entry.1 += 1;
                }
            }
            None if game.is_over() => tally.no_survivor += 1,
            None => tally.round_limit += 1,
        }
        info!(
            game = g + 1,
            seed = game_seed,
            rounds = game.round_number(),
            survivor = ?game.survivor().map(|p| p.name()),
            "game finished"
        );

        if break_after.is_some_and(|b| tally.games >= b) && tally.games < games {
            write_tally(&tally, out)?;
            writeln!(out, "Interrupted: completed {}/{}", tally.games, games)?;
            return Err(CliError::Interrupted(format!(
                "completed {}/{} games",
                tally.games, games
            )));
        }
    }

    write_tally(&tally, out)?;
    if let Some(path) = output {
        writeln!(out, "Round history: {}", path)?;
    }
    Ok(())
}

fn write_tally(tally: &Tally, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Games played: {}", tally.games)?;
    let avg = if tally.games == 0 {
        0.0
    } else {
        tally.rounds as f64 / tally.games as f64
    };
    writeln!(out, "Average rounds: {:.2}", avg)?;
    writeln!(out, "Winners:")?;
    for (name, wins) in &tally.wins {
        writeln!(out, "  {}: {}", name, wins)?;
    }
    if tally.no_survivor > 0 {
        writeln!(out, "  no survivor: {}", tally.no_survivor)?;
    }
    if tally.round_limit > 0 {
        writeln!(out, "  round limit: {}", tally.round_limit)?;
    }
    Ok(())
}

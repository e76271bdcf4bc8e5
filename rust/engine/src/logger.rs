use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::economy::EliminationEvent;
use crate::game::RoundSummary;
use crate::hand::HandScore;
use crate::player::Player;
use crate::round::BetRecord;
use crate::sniper::{BannedCombo, SnipeHit};

/// A player's cards and chips as they stood at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub player: String,
    /// Private cards, absent for players already out of the game
    pub hand: Option<[Card; 2]>,
    pub score: Option<HandScore>,
    /// Chips after resolution and the elimination pass
    pub chips: u32,
    pub eliminated: bool,
}

/// Complete record of one round: deal, bets, snipes and outcome.
/// Serialized to JSONL for round history export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Game seed (enables deterministic replay of the deal)
    pub seed: Option<u64>,
    /// Round number within its game
    pub round: u32,
    pub community: [Card; 4],
    pub seats: Vec<SeatRecord>,
    pub bets: Vec<BetRecord>,
    pub snipe_hits: Vec<SnipeHit>,
    pub banned: Option<BannedCombo>,
    pub winner: Option<String>,
    /// Chips paid to the winner
    pub awarded: u32,
    /// Pot rolled over when nobody won
    pub unclaimed: u32,
    pub eliminations: Vec<EliminationEvent>,
    /// Timestamp (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl RoundRecord {
    pub fn from_summary(
        round_id: String,
        seed: Option<u64>,
        summary: &RoundSummary,
        players: &[Player],
    ) -> Self {
        let seats = players
            .iter()
            .map(|p| SeatRecord {
                player: p.name().to_string(),
                hand: p.hand(),
                score: p.hand_score(),
                chips: p.chips(),
                eliminated: p.is_eliminated(),
            })
            .collect();
        Self {
            round_id,
            seed,
            round: summary.round.number,
            community: summary.round.community,
            seats,
            bets: summary.round.bets.clone(),
            snipe_hits: summary.round.snipe_hits.clone(),
            banned: summary.result.banned,
            winner: summary.result.winner.clone(),
            awarded: summary.result.awarded,
            unclaimed: summary.result.unclaimed,
            eliminations: summary.eliminations.clone(),
            ts: None,
            meta: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`RoundRecord`]s to a JSONL file, one record per line.
pub struct RoundLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Opens `path` for appending, creating it and its parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::Card;
use crate::economy::award_pot;
use crate::player::Player;
use crate::rules::ValidatedBet;
use crate::sniper::{BannedCombo, SnipeHit};

/// A bet placed during a round's betting phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetRecord {
    pub player: String,
    pub bet: ValidatedBet,
}

/// Everything scoped to a single round, from the deal to the resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// 1-based round number
    pub number: u32,
    /// The four shared cards
    pub community: [Card; 4],
    /// Chips bet this round plus any pot rolled over from earlier rounds
    pub pot: u32,
    /// Combo disqualified by the sniper phase, cleared on resolution
    pub banned: Option<BannedCombo>,
    pub bets: Vec<BetRecord>,
    pub snipe_hits: Vec<SnipeHit>,
}

impl RoundState {
    pub fn new(number: u32, community: [Card; 4], carried_pot: u32) -> Self {
        Self {
            number,
            community,
            pot: carried_pot,
            banned: None,
            bets: Vec::new(),
            snipe_hits: Vec::new(),
        }
    }
}

/// Result of resolving a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winner: Option<String>,
    /// Chips paid to the winner; zero when nobody won
    pub awarded: u32,
    /// Pot left in the round when nobody won
    pub unclaimed: u32,
    /// The banned combo that applied to this resolution
    pub banned: Option<BannedCombo>,
    /// Active players removed because their hand matched the banned combo
    pub disqualified: Vec<String>,
}

/// Picks the round winner and pays out the pot.
///
/// Candidates are players that have neither folded nor been eliminated, minus any whose hand
/// matches the banned combo. The best score wins; exact ties go to the earlier seat. The banned
/// combo is consumed and every fold flag is reset whether or not anyone won.
///
/// With no candidate left the pot stays in `round` untouched, so the caller can roll it
/// into the next round.
pub fn resolve_round(players: &mut [Player], round: &mut RoundState) -> RoundResult {
    let banned = round.banned.take();
    let mut disqualified = Vec::new();
    let mut best: Option<(usize, u16)> = None;

    for (i, p) in players.iter().enumerate() {
        if !p.is_active() {
            continue;
        }
        let Some(score) = p.hand_score() else {
            continue;
        };
        if banned.is_some_and(|b| b.matches(&score)) {
            disqualified.push(p.name().to_string());
            continue;
        }
        if best.is_none_or(|(_, top)| score.points() > top) {
            best = Some((i, score.points()));
        }
    }

    let result = match best {
        Some((i, _)) => {
            let awarded = award_pot(&mut players[i], &mut round.pot);
            info!(
                round = round.number,
                winner = players[i].name(),
                awarded,
                "round won"
            );
            RoundResult {
                winner: Some(players[i].name().to_string()),
                awarded,
                unclaimed: 0,
                banned,
                disqualified,
            }
        }
        None => {
            info!(round = round.number, pot = round.pot, "no winner, pot rolls over");
            RoundResult {
                winner: None,
                awarded: 0,
                unclaimed: round.pot,
                banned,
                disqualified,
            }
        }
    };

    for p in players.iter_mut() {
        p.reset_fold();
    }
    result
}

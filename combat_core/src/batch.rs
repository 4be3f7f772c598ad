//! Batch simulation - many independent seeds, run in parallel

use crate::combat::{CombatLog, Simulator};
use crate::combatant::Combatant;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Aggregate outcome of a batch of runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub runs: u32,
    pub player_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    /// Sum of turns across all runs
    pub total_turns: u64,
    /// Runs in which the player took turn 1
    pub player_first: u32,
    pub opponent_first: u32,
}

impl BatchSummary {
    fn from_log(log: &CombatLog, player_id: &str) -> Self {
        let mut summary = BatchSummary {
            runs: 1,
            total_turns: u64::from(log.total_turns),
            ..Default::default()
        };

        match log.winner_id.as_deref() {
            Some(id) if id == player_id => summary.player_wins = 1,
            Some(_) => summary.opponent_wins = 1,
            None => summary.draws = 1,
        }

        if log.first_actor_id() == Some(player_id) {
            summary.player_first = 1;
        } else {
            summary.opponent_first = 1;
        }

        summary
    }

    fn merge(self, other: Self) -> Self {
        BatchSummary {
            runs: self.runs + other.runs,
            player_wins: self.player_wins + other.player_wins,
            opponent_wins: self.opponent_wins + other.opponent_wins,
            draws: self.draws + other.draws,
            total_turns: self.total_turns + other.total_turns,
            player_first: self.player_first + other.player_first,
            opponent_first: self.opponent_first + other.opponent_first,
        }
    }

    pub fn average_turns(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_turns as f64 / f64::from(self.runs)
    }

    /// Player wins as a fraction of all runs
    pub fn player_win_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        f64::from(self.player_wins) / f64::from(self.runs)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Runs: {}\nPlayer wins: {} ({:.1}%)\nOpponent wins: {}\nDraws: {}\n\
             Average turns: {:.2}\nPlayer acted first: {}\nOpponent acted first: {}",
            self.runs,
            self.player_wins,
            self.player_win_rate() * 100.0,
            self.opponent_wins,
            self.draws,
            self.average_turns(),
            self.player_first,
            self.opponent_first,
        )
    }
}

/// Run one simulation per seed in parallel and summarize
///
/// Each run owns its own copies and roll stream, so the summary equals the one
/// a sequential loop over the same seeds would produce.
pub fn simulate_batch(
    simulator: &Simulator,
    player: &Combatant,
    opponent: &Combatant,
    seeds: &[u64],
) -> BatchSummary {
    let summary = seeds
        .par_iter()
        .map(|&seed| {
            let log = simulator.run(player, opponent, Some(seed));
            BatchSummary::from_log(&log, &player.id)
        })
        .reduce(BatchSummary::default, BatchSummary::merge);

    tracing::info!(
        runs = summary.runs,
        player_wins = summary.player_wins,
        opponent_wins = summary.opponent_wins,
        draws = summary.draws,
        "batch finished"
    );

    summary
}

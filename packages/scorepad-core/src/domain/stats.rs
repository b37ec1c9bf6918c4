//! Derived per-player statistics. Recomputed on every read; nothing here is stored.

use serde::{Deserialize, Serialize};

use crate::domain::state::{Game, PlayerId};

/// Statistics view of a player, in the game's display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub name: String,
    pub icon: String,
    pub total: i64,
    pub played: usize,
    pub scored: usize,
    /// Ties at the maximum are all leaders; an all-zero game has none.
    pub is_leader: bool,
    /// Points still needed to reach the target; zero or negative once reached.
    pub remaining: i64,
    pub reached_target: bool,
}

impl PlayerStats {
    /// Progress column text: `WINNER!` once the target is reached, otherwise
    /// `scored/played | N LEFT`.
    pub fn progress_label(&self) -> String {
        if self.reached_target {
            "WINNER!".to_string()
        } else {
            format!("{}/{} | {} LEFT", self.scored, self.played, self.remaining)
        }
    }
}

/// Compute `{total, played, scored, is_leader}` for every player.
pub fn compute_stats(game: &Game) -> Vec<PlayerStats> {
    let totals: Vec<i64> = game.players().iter().map(|p| p.total()).collect();
    let max_total = totals.iter().copied().max();

    game.players()
        .iter()
        .zip(totals)
        .map(|(p, total)| {
            let remaining = game.target_score().saturating_sub(total);
            PlayerStats {
                player_id: p.id().clone(),
                name: p.name().to_string(),
                icon: p.icon().to_string(),
                total,
                played: p.played(),
                scored: p.scored(),
                is_leader: max_total.is_some_and(|max| max > 0 && total == max),
                remaining,
                reached_target: remaining <= 0,
            }
        })
        .collect()
}

/// Ids of every current leader, in display order.
pub fn leaders(game: &Game) -> Vec<PlayerId> {
    compute_stats(game)
        .into_iter()
        .filter(|s| s.is_leader)
        .map(|s| s.player_id)
        .collect()
}

/// Renderer-facing snapshot combining game header fields and player stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub round_count: usize,
    pub target_score: i64,
    pub reorder_enabled: bool,
    pub players: Vec<PlayerStats>,
}

impl Standings {
    pub fn from_game(game: &Game) -> Self {
        Self {
            round_count: game.round_count(),
            target_score: game.target_score(),
            reorder_enabled: game.reorder_enabled(),
            players: compute_stats(game),
        }
    }
}

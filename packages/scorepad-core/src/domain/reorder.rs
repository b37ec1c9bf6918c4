use std::cmp::Reverse;

use tracing::debug;

use crate::domain::state::{debug_check, Game, Player};

/// Players sorted by descending total. Stable: ties keep their input order.
pub fn sort_by_total(players: &[Player]) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by_key(|p| Reverse(p.total()));
    sorted
}

/// A round is complete once every player has an entry for it.
/// Out-of-range rounds are never complete.
pub fn is_round_complete(game: &Game, round: usize) -> bool {
    round < game.round_count() && game.players().iter().all(|p| p.score(round).is_some())
}

/// Round boundary check: resort by total if reordering is enabled and the round
/// is fully scored. `None` when the order stays as it is.
pub fn on_round_boundary(game: &Game, round: usize) -> Option<Game> {
    if !game.reorder_enabled() {
        return None;
    }
    if !is_round_complete(game, round) {
        return None;
    }
    reorder_now(game)
}

/// Unconditional sort-by-total, still skipping the replacement when the id
/// order would not change.
pub fn reorder_now(game: &Game) -> Option<Game> {
    let sorted = sort_by_total(game.players());
    let unchanged = sorted
        .iter()
        .map(Player::id)
        .eq(game.players().iter().map(Player::id));
    if unchanged {
        return None;
    }

    let mut next = game.clone();
    *next.players_mut() = sorted;
    debug!(order = ?next.player_ids(), "Players reordered by total");

    debug_check(&next, "reorder_now");
    Some(next)
}

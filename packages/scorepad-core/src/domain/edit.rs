use tracing::debug;

use crate::domain::input::ScoreInput;
use crate::domain::state::{debug_check, Game, PlayerId, Score};

/// Apply raw cell text to one player's round.
///
/// Returns `None` when nothing should be replaced: unknown player, malformed
/// input, a round outside the visible grid, or a write that changes nothing.
pub fn edit_score(game: &Game, player_id: &PlayerId, round: usize, raw: &str) -> Option<Game> {
    match ScoreInput::parse(raw).to_score() {
        Some(score) => set_score(game, player_id, round, score),
        None => {
            debug!(player_id = %player_id, round, raw, "Rejected malformed score input");
            None
        }
    }
}

/// Write a typed score and apply the round-growth rule.
///
/// Filling the last visible round with a value exposes exactly one new round.
/// Clearing a cell never shrinks the grid.
pub fn set_score(game: &Game, player_id: &PlayerId, round: usize, score: Score) -> Option<Game> {
    if round >= game.round_count() {
        debug!(
            player_id = %player_id,
            round,
            round_count = game.round_count(),
            "Score edit outside visible rounds ignored"
        );
        return None;
    }

    let Some(player) = game.player(player_id) else {
        debug!(player_id = %player_id, "Score edit for unknown player ignored");
        return None;
    };

    let grows = score.is_some() && round + 1 == game.round_count();
    if player.score(round) == score && !grows {
        return None;
    }

    let mut next = game.clone();
    next.player_mut(player_id)?.scores_mut()[round] = score;

    if grows {
        next.grow_round();
        debug!(round_count = next.round_count(), "Round grid grew");
    }

    debug_check(&next, "set_score");
    Some(next)
}

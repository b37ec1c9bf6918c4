use tracing::debug;

use crate::domain::reorder::reorder_now;
use crate::domain::state::{debug_check, Game};

/// Save target score and reorder toggle.
///
/// With reordering enabled the sort-by-total policy runs once right away,
/// without the round-completeness check a boundary event would apply.
pub fn apply_settings(game: &Game, target_score: i64, reorder_enabled: bool) -> Game {
    let mut next = game.clone();
    next.set_target_score(target_score);
    next.set_reorder_enabled(reorder_enabled);

    if reorder_enabled {
        if let Some(sorted) = reorder_now(&next) {
            next = sorted;
        }
    }

    debug!(target_score, reorder_enabled, "Settings applied");
    debug_check(&next, "apply_settings");
    next
}

//! Domain layer: the score-state model and its pure transitions.

pub mod edit;
pub mod input;
pub mod lifecycle;
pub mod reorder;
pub mod settings;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests_edit;
#[cfg(test)]
mod tests_lifecycle;
#[cfg(test)]
mod tests_reorder;

// Re-exports for ergonomics
pub use edit::{edit_score, set_score};
pub use input::{ScoreInput, MAX_SCORE_MAGNITUDE};
pub use lifecycle::{
    add_player, remove_player, rename_player, request_removal, reroll_icon, set_icon,
    IdentitySource, RemovalRequest,
};
pub use reorder::{is_round_complete, on_round_boundary, reorder_now, sort_by_total};
pub use settings::apply_settings;
pub use state::{Game, Player, PlayerId, Score};
pub use stats::{compute_stats, leaders, PlayerStats, Standings};

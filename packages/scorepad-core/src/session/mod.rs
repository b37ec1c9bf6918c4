//! Session layer: owns the current game, routes presentation events through the
//! domain transitions and publishes every replacement.

pub mod scheduler;
pub mod store;


use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::config::ScorepadConfig;
use crate::domain::edit;
use crate::domain::lifecycle::{self, IdentitySource, RemovalRequest};
use crate::domain::reorder::is_round_complete;
use crate::domain::settings::apply_settings;
use crate::domain::state::{Game, PlayerId};
use crate::domain::stats::{compute_stats, PlayerStats, Standings};

pub use scheduler::ReorderScheduler;
pub use store::GameStore;

/// Event-level facade for a presentation layer. Must live inside a tokio
/// runtime: cell blur events spawn deferred reorder checks.
pub struct ScoreSession {
    store: Arc<GameStore>,
    scheduler: ReorderScheduler,
    ids: Box<dyn IdentitySource>,
}

impl ScoreSession {
    pub fn new(game: Game, ids: Box<dyn IdentitySource>, reorder_delay: Duration) -> Self {
        let store = Arc::new(GameStore::new(game));
        let scheduler = ReorderScheduler::new(store.clone(), reorder_delay);
        Self {
            store,
            scheduler,
            ids,
        }
    }

    /// Session over `game`, or over a fresh game built from `config`.
    pub fn from_config(
        config: &ScorepadConfig,
        game: Option<Game>,
        ids: Box<dyn IdentitySource>,
    ) -> Self {
        let game = game.unwrap_or_else(|| config.new_game());
        info!(
            players = game.players().len(),
            round_count = game.round_count(),
            "Score session started"
        );
        Self::new(game, ids, config.reorder_delay)
    }

    pub fn snapshot(&self) -> Arc<Game> {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Game>> {
        self.store.subscribe()
    }

    pub fn version(&self) -> u64 {
        self.store.version()
    }

    pub fn stats(&self) -> Vec<PlayerStats> {
        compute_stats(&self.snapshot())
    }

    pub fn standings(&self) -> Standings {
        Standings::from_game(&self.snapshot())
    }

    /// Round of the deferred reorder check waiting to fire, if any.
    pub fn pending_reorder(&self) -> Option<usize> {
        self.scheduler.pending_round()
    }

    /// Cell text changed. Returns whether the game was replaced.
    pub fn edit_score(&self, player_id: &PlayerId, round: usize, raw: &str) -> bool {
        let changed = self
            .store
            .apply(|game| edit::edit_score(game, player_id, round, raw));
        if changed {
            self.scheduler.supersede_from(round);
        }
        changed
    }

    /// Focus left a cell in `round`. Schedules a deferred reorder check when
    /// the round currently looks complete; the check re-reads state when it fires.
    pub fn cell_blur(&self, round: usize) {
        let game = self.snapshot();
        if !game.reorder_enabled() || !is_round_complete(&game, round) {
            return;
        }
        self.scheduler.schedule(round);
    }

    /// Add a player and return its id.
    pub fn add_player(&mut self) -> Option<PlayerId> {
        let ids = self.ids.as_mut();
        let mut added = None;
        self.store.apply(|game| {
            let next = lifecycle::add_player(game, ids);
            added = next.players().last().map(|p| p.id().clone());
            Some(next)
        });
        added
    }

    /// Delete click. Empty players go immediately; players with scores come
    /// back as `NeedsConfirmation` for the caller to prompt, then
    /// [`confirm_removal`](Self::confirm_removal).
    pub fn request_removal(&self, player_id: &PlayerId) -> RemovalRequest {
        let mut request = RemovalRequest::NotFound;
        self.store.apply(|game| {
            request = lifecycle::request_removal(game, player_id);
            match &request {
                RemovalRequest::Removed(next) => Some(next.clone()),
                _ => None,
            }
        });
        request
    }

    pub fn confirm_removal(&self, player_id: &PlayerId) -> bool {
        self.store
            .apply(|game| lifecycle::remove_player(game, player_id))
    }

    pub fn rename_player(&self, player_id: &PlayerId, name: &str) -> bool {
        self.store
            .apply(|game| lifecycle::rename_player(game, player_id, name))
    }

    pub fn set_icon(&self, player_id: &PlayerId, icon: &str) -> bool {
        self.store
            .apply(|game| lifecycle::set_icon(game, player_id, icon))
    }

    pub fn reroll_icon(&mut self, player_id: &PlayerId) -> bool {
        let ids = self.ids.as_mut();
        self.store
            .apply(|game| lifecycle::reroll_icon(game, player_id, ids))
    }

    /// Settings dialog saved.
    pub fn save_settings(&self, target_score: i64, reorder_enabled: bool) {
        if !reorder_enabled {
            self.scheduler.cancel();
        }
        self.store.apply(|game| {
            let next = apply_settings(game, target_score, reorder_enabled);
            (next != *game).then_some(next)
        });
        debug!(target_score, reorder_enabled, "Settings saved");
    }

    /// Cancel pending deferred work.
    pub fn shutdown(&self) {
        self.scheduler.cancel();
    }
}

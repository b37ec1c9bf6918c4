//! Deferred reorder checks.
//!
//! A cell losing focus schedules a reorder check for its round after a short
//! delay, so the entered value settles visually before columns move. At most
//! one check is pending. When it fires it reads the store's current snapshot,
//! never a captured one.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::domain::reorder::on_round_boundary;
use crate::session::store::GameStore;

struct PendingCheck {
    generation: u64,
    round: usize,
    token: CancellationToken,
    _handle: JoinHandle<()>,
}

#[derive(Default)]
struct SchedulerState {
    next_generation: u64,
    pending: Option<PendingCheck>,
}

pub struct ReorderScheduler {
    store: Arc<GameStore>,
    delay: Duration,
    state: Arc<Mutex<SchedulerState>>,
}

impl ReorderScheduler {
    pub fn new(store: Arc<GameStore>, delay: Duration) -> Self {
        Self {
            store,
            delay,
            state: Arc::new(Mutex::new(SchedulerState::default())),
        }
    }

    /// Round of the check currently waiting to fire, if any.
    pub fn pending_round(&self) -> Option<usize> {
        self.state.lock().pending.as_ref().map(|p| p.round)
    }

    /// Replace any pending check with a fresh one for `round`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, round: usize) {
        let mut state = self.state.lock();
        if let Some(old) = state.pending.take() {
            old.token.cancel();
        }

        state.next_generation += 1;
        let generation = state.next_generation;
        let token = CancellationToken::new();
        let handle = tokio::spawn(run_check(
            self.store.clone(),
            self.state.clone(),
            self.delay,
            round,
            generation,
            token.clone(),
        ));

        trace!(round, generation, "Scheduled deferred reorder check");
        state.pending = Some(PendingCheck {
            generation,
            round,
            token,
            _handle: handle,
        });
    }

    /// A newer edit landed on `round`. A pending check for the same or an
    /// earlier round restarts its delay, so it runs after the edit and against
    /// the state that edit produced.
    pub fn supersede_from(&self, round: usize) {
        let pending_round = match self.state.lock().pending.as_ref() {
            Some(p) if p.round <= round => p.round,
            _ => return,
        };
        trace!(pending_round, edited_round = round, "Superseding deferred reorder check");
        self.schedule(pending_round);
    }

    /// Drop any pending check without running it.
    pub fn cancel(&self) {
        if let Some(old) = self.state.lock().pending.take() {
            trace!(round = old.round, "Cancelled deferred reorder check");
            old.token.cancel();
        }
    }
}

impl Drop for ReorderScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_check(
    store: Arc<GameStore>,
    state: Arc<Mutex<SchedulerState>>,
    delay: Duration,
    round: usize,
    generation: u64,
    token: CancellationToken,
) {
    tokio::select! {
        _ = token.cancelled() => {
            trace!(round, generation, "Deferred reorder check superseded");
            return;
        }
        _ = sleep(delay) => {}
    }

    {
        let mut state = state.lock();
        match state.pending.as_ref() {
            Some(p) if p.generation == generation => state.pending = None,
            // A newer check took over between the timer firing and this point.
            _ => return,
        }
    }

    let reordered = store.apply(|game| on_round_boundary(game, round));
    trace!(round, generation, reordered, "Deferred reorder check ran");
}

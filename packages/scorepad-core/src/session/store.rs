//! Single-writer container that publishes each new game snapshot.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::trace;

use crate::domain::state::Game;

pub struct GameStore {
    tx: watch::Sender<Arc<Game>>,
    version: AtomicU64,
}

impl GameStore {
    pub fn new(game: Game) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(game));
        Self {
            tx,
            version: AtomicU64::new(0),
        }
    }

    /// Current snapshot. Cheap: clones the `Arc`, not the game.
    pub fn snapshot(&self) -> Arc<Game> {
        self.tx.borrow().clone()
    }

    /// Receiver notified on every published replacement.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Game>> {
        self.tx.subscribe()
    }

    /// Number of replacements published so far.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Run a transition against the current snapshot and publish its result.
    ///
    /// The read and the write happen under the channel's lock, so a transition
    /// always sees the latest game. Returns `false` (and wakes nobody) when the
    /// transition yields `None`.
    pub fn apply<F>(&self, transition: F) -> bool
    where
        F: FnOnce(&Game) -> Option<Game>,
    {
        let published = self.tx.send_if_modified(|current| match transition(current) {
            Some(next) => {
                *current = Arc::new(next);
                true
            }
            None => false,
        });
        if published {
            let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
            trace!(version, "Published game snapshot");
        }
        published
    }

    /// Replace the game wholesale (e.g. after loading a saved record).
    pub fn replace(&self, game: Game) {
        self.apply(|_| Some(game));
    }
}

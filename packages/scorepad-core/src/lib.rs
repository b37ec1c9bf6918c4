#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod session;

// Re-exports for public API
pub use config::ScorepadConfig;
pub use domain::lifecycle::{IdentitySource, RandomIdentity, RemovalRequest, SequentialIdentity};
pub use domain::state::{Game, Player, PlayerId, Score};
pub use domain::stats::{compute_stats, PlayerStats, Standings};
pub use error::{ConfigError, PersistenceError, StateError};
pub use session::ScoreSession;

// Prelude for test convenience
pub mod prelude {
    pub use super::domain::edit::*;
    pub use super::domain::lifecycle::*;
    pub use super::domain::reorder::*;
    pub use super::domain::settings::*;
    pub use super::domain::state::*;
    pub use super::domain::stats::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}

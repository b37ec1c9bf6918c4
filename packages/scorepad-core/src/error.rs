use thiserror::Error;

/// Structural invariant violations detected when a game is assembled from parts.
///
/// Core operations never produce these; they surface only when external data
/// (a persisted record, a hand-built fixture) describes an impossible game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("player {player_id} has {actual} scores but the game exposes {expected} rounds")]
    ScoreLengthMismatch {
        player_id: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate player id: {player_id}")]
    DuplicatePlayerId { player_id: String },
    #[error("player id must not be empty")]
    EmptyPlayerId,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {var} must be {expected}, got '{value}'")]
    InvalidVar {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed game record: {0}")]
    Json(#[from] serde_json::Error),
}

//! Save and restore game records as JSON.
//!
//! Decoding always goes through `Game::from_parts`, so a record that violates
//! the structural invariants is refused instead of loaded.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::state::Game;
use crate::error::PersistenceError;

pub fn to_json(game: &Game) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(game)?)
}

pub fn from_json(json: &str) -> Result<Game, PersistenceError> {
    Ok(serde_json::from_str(json)?)
}

/// Write the record next to `path` and rename it into place.
pub fn save_to_path(game: &Game, path: &Path) -> Result<(), PersistenceError> {
    let encoded = to_json(game)?;
    let tmp = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(encoded.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), bytes = encoded.len(), "Game saved");
    Ok(())
}

/// Load a saved game; `Ok(None)` when nothing has been saved at `path` yet.
pub fn load_from_path(path: &Path) -> Result<Option<Game>, PersistenceError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let game = from_json(&contents)?;
    info!(
        path = %path.display(),
        players = game.players().len(),
        round_count = game.round_count(),
        "Game loaded"
    );
    Ok(Some(game))
}

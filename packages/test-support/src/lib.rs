//! Helpers shared by scorepad's unit and integration tests.
//!
//! Saved games in tests land in per-test temp directories under ULID-suffixed
//! names, so parallel tests never read each other's files.

pub mod logging;

use std::path::{Path, PathBuf};

use ulid::Ulid;

/// `prefix-<ulid>`, unique per call.
///
/// ```
/// let a = test_support::unique_str("game");
/// let b = test_support::unique_str("game");
/// assert_ne!(a, b);
/// assert!(a.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Path for a fresh saved-game file inside `dir`.
///
/// ```
/// let dir = std::env::temp_dir();
/// let path = test_support::unique_game_path(&dir, "session");
/// assert_eq!(path.parent(), Some(dir.as_path()));
/// assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
/// assert!(!path.exists());
/// ```
pub fn unique_game_path(dir: &Path, prefix: &str) -> PathBuf {
    dir.join(format!("{}.json", unique_str(prefix)))
}

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::domain::state::Game;
use crate::error::ConfigError;

pub const DEFAULT_TARGET_SCORE: i64 = 200;
pub const DEFAULT_REORDER_DELAY_MS: u64 = 50;

/// Session defaults, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorepadConfig {
    /// Target score for newly created games.
    pub default_target_score: i64,
    /// Whether new games reorder players as rounds complete.
    pub reorder_enabled: bool,
    /// Delay between a cell losing focus and the reorder check.
    pub reorder_delay: Duration,
    /// Rounds exposed on a fresh grid.
    pub initial_rounds: usize,
}

impl Default for ScorepadConfig {
    fn default() -> Self {
        Self {
            default_target_score: DEFAULT_TARGET_SCORE,
            reorder_enabled: true,
            reorder_delay: Duration::from_millis(DEFAULT_REORDER_DELAY_MS),
            initial_rounds: 1,
        }
    }
}

impl ScorepadConfig {
    /// Build from `SCOREPAD_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            default_target_score: parse_var(
                &lookup,
                "SCOREPAD_TARGET_SCORE",
                "an integer",
                defaults.default_target_score,
            )?,
            reorder_enabled: parse_bool(&lookup, "SCOREPAD_REORDER", defaults.reorder_enabled)?,
            reorder_delay: Duration::from_millis(parse_var(
                &lookup,
                "SCOREPAD_REORDER_DELAY_MS",
                "a non-negative integer",
                DEFAULT_REORDER_DELAY_MS,
            )?),
            initial_rounds: parse_initial_rounds(&lookup, defaults.initial_rounds)?,
        })
    }

    /// Empty game using these defaults.
    pub fn new_game(&self) -> Game {
        Game::with_round_count(
            self.initial_rounds,
            self.default_target_score,
            self.reorder_enabled,
        )
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidVar {
                var,
                expected,
                value,
            }),
    }
}

/// A grid needs at least one round to accept any score.
fn parse_initial_rounds(
    lookup: &impl Fn(&'static str) -> Option<String>,
    default: usize,
) -> Result<usize, ConfigError> {
    const VAR: &str = "SCOREPAD_INITIAL_ROUNDS";
    const EXPECTED: &str = "a positive integer";
    match parse_var(lookup, VAR, EXPECTED, default)? {
        0 => Err(ConfigError::InvalidVar {
            var: VAR,
            expected: EXPECTED,
            value: "0".to_string(),
        }),
        rounds => Ok(rounds),
    }
}

fn parse_bool(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidVar {
            var,
            expected: "a boolean (true/false, on/off, 1/0)",
            value,
        }),
    }
}

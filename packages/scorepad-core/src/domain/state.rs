use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// A single round's entry for one player; `None` means not yet entered (not zero).
pub type Score = Option<i64>;

/// Opaque, stable player identifier. Unique within a game, never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One column of the score grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    icon: String,
    /// Index `i` holds round `i`'s score.
    scores: Vec<Score>,
}

impl Player {
    /// Build a player with explicit scores. Used for fixtures and decoded records;
    /// `Game::from_parts` validates the score length against the game.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        icon: impl Into<String>,
        scores: Vec<Score>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            scores,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn score(&self, round: usize) -> Score {
        self.scores.get(round).copied().flatten()
    }

    /// Sum of entered scores; absent rounds count as zero.
    pub fn total(&self) -> i64 {
        self.scores
            .iter()
            .flatten()
            .fold(0i64, |acc, &s| acc.saturating_add(s))
    }

    /// Rounds with an entered score (zero included).
    pub fn played(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    /// Rounds with a strictly positive score.
    pub fn scored(&self) -> usize {
        self.scores.iter().flatten().filter(|&&s| s > 0).count()
    }

    /// True once any round has been entered for this player.
    pub fn has_scores(&self) -> bool {
        self.scores.iter().any(Option::is_some)
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_icon(&mut self, icon: String) {
        self.icon = icon;
    }

    pub(crate) fn scores_mut(&mut self) -> &mut Vec<Score> {
        &mut self.scores
    }
}

/// Entire game record. Treated as an immutable value: every operation in
/// `domain` returns a fresh `Game` rather than mutating the caller's copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord", into = "GameRecord")]
pub struct Game {
    /// Display and ranking order.
    players: Vec<Player>,
    /// Number of rounds currently exposed on the grid.
    round_count: usize,
    target_score: i64,
    reorder_enabled: bool,
}

impl Game {
    /// Empty game with a single open round to type into.
    pub fn new(target_score: i64, reorder_enabled: bool) -> Self {
        Self::with_round_count(1, target_score, reorder_enabled)
    }

    /// Empty game exposing `round_count` rounds.
    pub fn with_round_count(round_count: usize, target_score: i64, reorder_enabled: bool) -> Self {
        Self {
            players: Vec::new(),
            round_count,
            target_score,
            reorder_enabled,
        }
    }

    /// Assemble a game from external data, rejecting anything that breaks the
    /// structural invariants.
    pub fn from_parts(
        players: Vec<Player>,
        round_count: usize,
        target_score: i64,
        reorder_enabled: bool,
    ) -> Result<Self, StateError> {
        let game = Self {
            players,
            round_count,
            target_score,
            reorder_enabled,
        };
        game.check_invariants()?;
        Ok(game)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn round_count(&self) -> usize {
        self.round_count
    }

    pub fn target_score(&self) -> i64 {
        self.target_score
    }

    pub fn reorder_enabled(&self) -> bool {
        self.reorder_enabled
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    pub fn contains_player(&self, id: &PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// Verify the invariant set: every score sequence matches `round_count`,
    /// and ids are non-empty and pairwise distinct.
    pub fn check_invariants(&self) -> Result<(), StateError> {
        let mut seen = HashSet::with_capacity(self.players.len());
        for p in &self.players {
            if p.id.as_str().is_empty() {
                return Err(StateError::EmptyPlayerId);
            }
            if !seen.insert(&p.id) {
                return Err(StateError::DuplicatePlayerId {
                    player_id: p.id.to_string(),
                });
            }
            if p.scores.len() != self.round_count {
                return Err(StateError::ScoreLengthMismatch {
                    player_id: p.id.to_string(),
                    expected: self.round_count,
                    actual: p.scores.len(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    pub(crate) fn players_mut(&mut self) -> &mut Vec<Player> {
        &mut self.players
    }

    /// Expose one more round, appending an absent slot for every player.
    pub(crate) fn grow_round(&mut self) {
        self.round_count += 1;
        for p in &mut self.players {
            p.scores.push(None);
        }
    }

    pub(crate) fn set_target_score(&mut self, target_score: i64) {
        self.target_score = target_score;
    }

    pub(crate) fn set_reorder_enabled(&mut self, enabled: bool) {
        self.reorder_enabled = enabled;
    }
}

/// Fail fast in development builds if an operation produced a broken game.
#[inline]
pub(crate) fn debug_check(game: &Game, ctx: &'static str) {
    if cfg!(debug_assertions) {
        if let Err(e) = game.check_invariants() {
            panic!("Invariant violated after {ctx}: {e}");
        }
    }
}

/// On-disk / on-wire shape of a game. Field names follow the record the
/// scorekeeping surface has always stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameRecord {
    players: Vec<Player>,
    round_count: usize,
    target_score: i64,
    #[serde(default = "default_reorder_enabled")]
    reorder_enabled: bool,
}

fn default_reorder_enabled() -> bool {
    true
}

impl TryFrom<GameRecord> for Game {
    type Error = StateError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        Game::from_parts(
            record.players,
            record.round_count,
            record.target_score,
            record.reorder_enabled,
        )
    }
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        Self {
            players: game.players,
            round_count: game.round_count,
            target_score: game.target_score,
            reorder_enabled: game.reorder_enabled,
        }
    }
}

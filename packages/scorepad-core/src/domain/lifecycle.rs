//! Player lifecycle: creation, removal and per-field edits.
//!
//! Identity and icon generation are injected through [`IdentitySource`] so the
//! engine itself never touches process-wide randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;
use ulid::Ulid;

use crate::domain::state::{debug_check, Game, Player, PlayerId};

/// Glyphs handed out to new players.
pub const ICONS: &[&str] = &[
    "🃏", "🎲", "🦊", "🐙", "🦄", "🐸", "🐼", "🦁", "🐯", "🐵", "🦉", "🐢", "🐳", "🦖", "🍀", "🔥",
    "⭐", "🌈", "🍕", "🚀", "👑", "🎯", "🍩", "🌵",
];

/// Supplies fresh player ids and display glyphs.
pub trait IdentitySource: Send {
    fn next_player_id(&mut self) -> PlayerId;
    fn pick_icon(&mut self) -> String;
}

/// Production source: ULID-backed ids and a seedable glyph picker.
pub struct RandomIdentity {
    rng: StdRng,
}

impl RandomIdentity {
    /// `Some(seed)` makes icon choice reproducible; ids stay globally unique.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl IdentitySource for RandomIdentity {
    fn next_player_id(&mut self) -> PlayerId {
        PlayerId::new(format!("p-{}", Ulid::new()))
    }

    fn pick_icon(&mut self) -> String {
        let idx = self.rng.random_range(0..ICONS.len());
        ICONS[idx].to_string()
    }
}

/// Deterministic source: ids `p1, p2, ...` and icons taken from [`ICONS`] in order.
#[derive(Debug, Default)]
pub struct SequentialIdentity {
    next_id: u64,
    next_icon: usize,
}

impl SequentialIdentity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentitySource for SequentialIdentity {
    fn next_player_id(&mut self) -> PlayerId {
        self.next_id += 1;
        PlayerId::new(format!("p{}", self.next_id))
    }

    fn pick_icon(&mut self) -> String {
        let icon = ICONS[self.next_icon % ICONS.len()];
        self.next_icon += 1;
        icon.to_string()
    }
}

/// Append a new player with an all-absent score row.
pub fn add_player(game: &Game, ids: &mut (impl IdentitySource + ?Sized)) -> Game {
    let mut id = ids.next_player_id();
    while id.as_str().is_empty() || game.contains_player(&id) {
        debug!(player_id = %id, "Identity source returned an unusable id, drawing again");
        id = ids.next_player_id();
    }

    let name = format!("P{}", game.players().len() + 1);
    let player = Player::new(id, name, ids.pick_icon(), vec![None; game.round_count()]);
    debug!(player_id = %player.id(), name = player.name(), "Player added");

    let mut next = game.clone();
    next.players_mut().push(player);
    debug_check(&next, "add_player");
    next
}

/// Remove a player outright. Callers route players with data through their
/// confirmation step first (see [`request_removal`]).
pub fn remove_player(game: &Game, player_id: &PlayerId) -> Option<Game> {
    if !game.contains_player(player_id) {
        debug!(player_id = %player_id, "Removal of unknown player ignored");
        return None;
    }

    let mut next = game.clone();
    next.players_mut().retain(|p| p.id() != player_id);
    debug!(player_id = %player_id, "Player removed");
    debug_check(&next, "remove_player");
    Some(next)
}

/// Outcome of a delete click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalRequest {
    /// Player had nothing entered and is already gone.
    Removed(Game),
    /// Player has scores; ask before calling [`remove_player`].
    NeedsConfirmation { id: PlayerId, name: String },
    NotFound,
}

/// Remove empty players immediately; defer players with data to confirmation.
pub fn request_removal(game: &Game, player_id: &PlayerId) -> RemovalRequest {
    let Some(player) = game.player(player_id) else {
        return RemovalRequest::NotFound;
    };
    if player.has_scores() {
        return RemovalRequest::NeedsConfirmation {
            id: player.id().clone(),
            name: player.name().to_string(),
        };
    }
    match remove_player(game, player_id) {
        Some(next) => RemovalRequest::Removed(next),
        None => RemovalRequest::NotFound,
    }
}

pub fn rename_player(game: &Game, player_id: &PlayerId, name: &str) -> Option<Game> {
    if game.player(player_id)?.name() == name {
        return None;
    }
    let mut next = game.clone();
    next.player_mut(player_id)?.set_name(name.to_string());
    Some(next)
}

pub fn set_icon(game: &Game, player_id: &PlayerId, icon: &str) -> Option<Game> {
    if game.player(player_id)?.icon() == icon {
        return None;
    }
    let mut next = game.clone();
    next.player_mut(player_id)?.set_icon(icon.to_string());
    Some(next)
}

/// Draw a fresh glyph for the player. May return `None` if the draw repeats
/// the current icon.
pub fn reroll_icon(
    game: &Game,
    player_id: &PlayerId,
    ids: &mut (impl IdentitySource + ?Sized),
) -> Option<Game> {
    if !game.contains_player(player_id) {
        return None;
    }
    let icon = ids.pick_icon();
    set_icon(game, player_id, &icon)
}

use crate::domain::lifecycle::{
    add_player, remove_player, rename_player, request_removal, reroll_icon, set_icon,
    IdentitySource, RandomIdentity, RemovalRequest, SequentialIdentity, ICONS,
};
use crate::domain::state::{Game, PlayerId};
use crate::domain::test_state_helpers::{id, make_game, order, player};

/// Hands out the same id until it has been refused `repeats` times.
struct StutteringIdentity {
    repeats: usize,
    fallback: SequentialIdentity,
}

impl IdentitySource for StutteringIdentity {
    fn next_player_id(&mut self) -> PlayerId {
        if self.repeats > 0 {
            self.repeats -= 1;
            return PlayerId::new("p1");
        }
        self.fallback.next_player_id()
    }

    fn pick_icon(&mut self) -> String {
        self.fallback.pick_icon()
    }
}

#[test]
fn add_player_prefills_absent_scores() {
    let game = make_game(vec![player("a", &[Some(1), Some(2), None])], 3, true);
    let mut ids = SequentialIdentity::new();

    let next = add_player(&game, &mut ids);

    let added = &next.players()[1];
    assert_eq!(added.id(), &id("p1"));
    assert_eq!(added.name(), "P2");
    assert_eq!(added.icon(), ICONS[0]);
    assert_eq!(added.scores(), &[None, None, None]);
    assert!(next.check_invariants().is_ok());
}

#[test]
fn add_player_names_follow_player_count() {
    let mut ids = SequentialIdentity::new();
    let mut game = Game::new(200, true);
    for _ in 0..3 {
        game = add_player(&game, &mut ids);
    }
    let names: Vec<&str> = game.players().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["P1", "P2", "P3"]);
}

#[test]
fn add_player_never_reuses_an_existing_id() {
    let game = make_game(vec![player("p1", &[None])], 1, true);
    let mut ids = StutteringIdentity {
        repeats: 3,
        fallback: SequentialIdentity::new(),
    };

    let next = add_player(&game, &mut ids);

    // p1 was refused three times; the fallback's first id collides too.
    assert_eq!(order(&next), vec!["p1", "p2"]);
}

#[test]
fn random_identity_ids_are_unique_and_icons_known() {
    let mut ids = RandomIdentity::new(Some(7));
    let a = ids.next_player_id();
    let b = ids.next_player_id();
    assert_ne!(a, b);
    assert!(a.as_str().starts_with("p-"));
    assert!(ICONS.contains(&ids.pick_icon().as_str()));
}

#[test]
fn seeded_random_identity_picks_reproducible_icons() {
    let mut first = RandomIdentity::new(Some(42));
    let mut second = RandomIdentity::new(Some(42));
    let a: Vec<String> = (0..8).map(|_| first.pick_icon()).collect();
    let b: Vec<String> = (0..8).map(|_| second.pick_icon()).collect();
    assert_eq!(a, b);
}

#[test]
fn empty_player_is_removed_without_confirmation() {
    let game = make_game(
        vec![player("a", &[Some(1), None]), player("b", &[None, None])],
        2,
        true,
    );

    match request_removal(&game, &id("b")) {
        RemovalRequest::Removed(next) => assert_eq!(order(&next), vec!["a"]),
        other => panic!("expected instant removal, got {other:?}"),
    }
}

#[test]
fn player_with_data_needs_confirmation() {
    let game = make_game(
        vec![player("a", &[Some(0), None]), player("b", &[None, None])],
        2,
        true,
    );
    assert!(game.player(&id("a")).is_some_and(|p| p.has_scores()));

    let request = request_removal(&game, &id("a"));
    assert_eq!(
        request,
        RemovalRequest::NeedsConfirmation {
            id: id("a"),
            name: "A".to_string(),
        }
    );

    let confirmed = remove_player(&game, &id("a")).expect("confirmed removal applies");
    assert_eq!(order(&confirmed), vec!["b"]);
    assert_eq!(confirmed.round_count(), 2);
}

#[test]
fn removing_unknown_player_is_noop() {
    let game = make_game(vec![player("a", &[None])], 1, true);
    assert_eq!(request_removal(&game, &id("zz")), RemovalRequest::NotFound);
    assert!(remove_player(&game, &id("zz")).is_none());
}

#[test]
fn rename_and_icon_keep_id_and_scores() {
    let game = make_game(vec![player("a", &[Some(4), None])], 2, true);

    let renamed = rename_player(&game, &id("a"), "Alice").expect("rename applies");
    let iconed = set_icon(&renamed, &id("a"), "🦊").expect("icon applies");

    let p = &iconed.players()[0];
    assert_eq!(p.id(), &id("a"));
    assert_eq!(p.name(), "Alice");
    assert_eq!(p.icon(), "🦊");
    assert_eq!(p.scores(), &[Some(4), None]);
}

#[test]
fn unchanged_name_or_icon_is_noop() {
    let game = make_game(vec![player("a", &[None])], 1, true);
    assert!(rename_player(&game, &id("a"), "A").is_none());
    assert!(set_icon(&game, &id("a"), "🃏").is_none());
    assert!(rename_player(&game, &id("nobody"), "X").is_none());
}

#[test]
fn reroll_icon_draws_from_source() {
    let game = make_game(vec![player("a", &[None])], 1, true);
    let mut ids = SequentialIdentity::new();
    // First sequential icon equals the fixture icon; the second differs.
    assert!(reroll_icon(&game, &id("a"), &mut ids).is_none());
    let next = reroll_icon(&game, &id("a"), &mut ids).expect("new icon");
    assert_eq!(next.players()[0].icon(), ICONS[1]);
}

use crate::domain::edit::edit_score;
use crate::domain::reorder::{is_round_complete, on_round_boundary, reorder_now, sort_by_total};
use crate::domain::settings::apply_settings;
use crate::domain::test_state_helpers::{id, make_game, order, player};

#[test]
fn completing_round_reorders_by_total() {
    // A=[10,20], B=[15,_]; entering B's second score completes round 1.
    let game = make_game(
        vec![
            player("a", &[Some(10), Some(20)]),
            player("b", &[Some(15), None]),
        ],
        2,
        true,
    );

    let edited = edit_score(&game, &id("b"), 1, "25").expect("edit should apply");
    assert_eq!(edited.round_count(), 3);

    let reordered = on_round_boundary(&edited, 1).expect("round 1 is complete");
    assert_eq!(order(&reordered), vec!["b", "a"]);
    assert_eq!(reordered.players()[0].total(), 40);
    assert_eq!(reordered.players()[1].total(), 30);
}

#[test]
fn incomplete_round_does_not_reorder() {
    let game = make_game(
        vec![player("a", &[Some(1), None]), player("b", &[Some(50), None])],
        2,
        true,
    );
    assert!(!is_round_complete(&game, 1));
    assert!(on_round_boundary(&game, 1).is_none());
}

#[test]
fn disabled_reorder_never_reorders() {
    let game = make_game(
        vec![player("a", &[Some(1), None]), player("b", &[Some(50), None])],
        2,
        false,
    );
    assert!(is_round_complete(&game, 0));
    assert!(on_round_boundary(&game, 0).is_none());
}

#[test]
fn already_sorted_order_is_not_replaced() {
    let game = make_game(
        vec![player("a", &[Some(50), None]), player("b", &[Some(1), None])],
        2,
        true,
    );
    assert!(on_round_boundary(&game, 0).is_none());
}

#[test]
fn ties_keep_prior_relative_order() {
    let game = make_game(
        vec![
            player("c", &[Some(5), None]),
            player("a", &[Some(10), None]),
            player("b", &[Some(5), None]),
            player("d", &[Some(10), None]),
        ],
        2,
        true,
    );

    let next = on_round_boundary(&game, 0).expect("order changes");
    assert_eq!(order(&next), vec!["a", "d", "c", "b"]);
}

#[test]
fn reorder_is_idempotent() {
    let game = make_game(
        vec![
            player("a", &[Some(1), None]),
            player("b", &[Some(3), None]),
            player("c", &[Some(2), None]),
        ],
        2,
        true,
    );

    let once = on_round_boundary(&game, 0).expect("order changes");
    assert!(on_round_boundary(&once, 0).is_none());
    assert_eq!(sort_by_total(once.players()), once.players().to_vec());
}

#[test]
fn reorder_preserves_scores_and_ids() {
    let game = make_game(
        vec![player("a", &[Some(1), None]), player("b", &[Some(3), None])],
        2,
        true,
    );
    let next = on_round_boundary(&game, 0).expect("order changes");
    for p in game.players() {
        assert_eq!(next.player(p.id()), Some(p));
    }
}

#[test]
fn out_of_range_round_is_never_complete() {
    let game = make_game(vec![player("a", &[Some(1)])], 1, true);
    assert!(!is_round_complete(&game, 1));
}

#[test]
fn reorder_now_skips_completeness_check() {
    let game = make_game(
        vec![player("a", &[Some(1), None]), player("b", &[None, Some(9)])],
        2,
        true,
    );
    let next = reorder_now(&game).expect("order changes");
    assert_eq!(order(&next), vec!["b", "a"]);
}

#[test]
fn enabling_reorder_in_settings_sorts_immediately() {
    let game = make_game(
        vec![player("a", &[Some(1), None]), player("b", &[None, None])],
        2,
        false,
    );
    let game = edit_score(&game, &id("b"), 1, "9").expect("edit should apply");

    let saved = apply_settings(&game, 150, true);

    assert_eq!(saved.target_score(), 150);
    assert!(saved.reorder_enabled());
    assert_eq!(order(&saved), vec!["b", "a"]);
}

#[test]
fn disabling_reorder_in_settings_keeps_order() {
    let game = make_game(
        vec![player("a", &[Some(1)]), player("b", &[Some(9)])],
        1,
        true,
    );
    let saved = apply_settings(&game, 300, false);
    assert_eq!(order(&saved), vec!["a", "b"]);
    assert_eq!(saved.target_score(), 300);
    assert!(!saved.reorder_enabled());
}

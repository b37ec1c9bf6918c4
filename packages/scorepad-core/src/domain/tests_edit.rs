use crate::domain::edit::{edit_score, set_score};
use crate::domain::test_state_helpers::{id, make_game, player};

#[test]
fn editing_last_round_grows_grid_for_every_player() {
    let game = make_game(
        vec![
            player("a", &[Some(1), Some(2), None]),
            player("b", &[Some(3), None, None]),
        ],
        3,
        true,
    );

    let next = edit_score(&game, &id("a"), 2, "5").expect("edit should apply");

    assert_eq!(next.round_count(), 4);
    assert_eq!(next.players()[0].scores(), &[Some(1), Some(2), Some(5), None]);
    assert_eq!(next.players()[1].scores(), &[Some(3), None, None, None]);
}

#[test]
fn editing_earlier_round_never_grows() {
    let game = make_game(vec![player("a", &[None, None, None])], 3, true);

    let next = edit_score(&game, &id("a"), 1, "10").expect("edit should apply");

    assert_eq!(next.round_count(), 3);
    assert_eq!(next.players()[0].scores(), &[None, Some(10), None]);
}

#[test]
fn clearing_last_round_does_not_shrink() {
    let game = make_game(vec![player("a", &[None])], 1, true);
    let grown = edit_score(&game, &id("a"), 0, "7").expect("edit should apply");
    assert_eq!(grown.round_count(), 2);

    // Fill the new last round, then clear it again.
    let grown = edit_score(&grown, &id("a"), 1, "4").expect("edit should apply");
    assert_eq!(grown.round_count(), 3);
    let cleared = edit_score(&grown, &id("a"), 1, "").expect("clear should apply");

    assert_eq!(cleared.round_count(), 3);
    assert_eq!(cleared.players()[0].scores(), &[Some(7), None, None]);
}

#[test]
fn clearing_absent_last_round_is_noop() {
    let game = make_game(vec![player("a", &[Some(1), None])], 2, true);
    assert!(edit_score(&game, &id("a"), 1, "").is_none());
}

#[test]
fn zero_and_negative_scores_are_accepted() {
    let game = make_game(vec![player("a", &[None, None])], 2, true);

    let next = edit_score(&game, &id("a"), 0, "0").expect("zero is a real score");
    let next = edit_score(&next, &id("a"), 1, "-15").expect("negative is a real score");

    assert_eq!(next.players()[0].scores(), &[Some(0), Some(-15), None]);
    assert_eq!(next.round_count(), 3);
}

#[test]
fn unknown_player_is_noop() {
    let game = make_game(vec![player("a", &[None])], 1, true);
    assert!(edit_score(&game, &id("ghost"), 0, "5").is_none());
}

#[test]
fn malformed_input_is_rejected_without_touching_the_game() {
    let game = make_game(vec![player("a", &[Some(3)]), player("b", &[None])], 1, true);
    assert!(edit_score(&game, &id("b"), 0, "twelve").is_none());
    assert!(edit_score(&game, &id("b"), 0, "1.5").is_none());
    assert_eq!(game.round_count(), 1);
}

#[test]
fn out_of_range_round_is_noop() {
    let game = make_game(vec![player("a", &[None, None])], 2, true);
    assert!(edit_score(&game, &id("a"), 2, "5").is_none());
    assert!(edit_score(&game, &id("a"), 99, "5").is_none());
}

#[test]
fn rewriting_same_value_in_earlier_round_is_noop() {
    let game = make_game(vec![player("a", &[Some(4), None])], 2, true);
    assert!(set_score(&game, &id("a"), 0, Some(4)).is_none());
}

#[test]
fn rewriting_same_value_in_last_round_still_grows() {
    // Loaded records can carry a value in the last round; writing it again
    // applies the growth rule like any other non-absent write.
    let game = make_game(vec![player("a", &[Some(4)])], 1, true);
    let next = set_score(&game, &id("a"), 0, Some(4)).expect("growth should apply");
    assert_eq!(next.round_count(), 2);
}

#[test]
fn input_game_is_left_untouched() {
    let game = make_game(vec![player("a", &[None])], 1, true);
    let before = game.clone();
    let _ = edit_score(&game, &id("a"), 0, "9");
    assert_eq!(game, before);
}

#[test]
fn scores_beyond_the_magnitude_bound_are_rejected() {
    let game = make_game(vec![player("a", &[Some(4), None])], 2, true);

    assert!(edit_score(&game, &id("a"), 0, "-9223372036854775808").is_none());
    assert!(edit_score(&game, &id("a"), 1, "9223372036854775807").is_none());
    assert!(edit_score(&game, &id("a"), 0, "1000000000001").is_none());
}

#[test]
fn scores_at_the_magnitude_bound_sum_without_overflow() {
    let game = make_game(vec![player("a", &[None, None])], 2, true);

    let game = edit_score(&game, &id("a"), 0, "1000000000000").expect("bound is accepted");
    let game = edit_score(&game, &id("a"), 1, "1000000000000").expect("bound is accepted");

    assert_eq!(game.round_count(), 3);
    assert_eq!(game.players()[0].total(), 2_000_000_000_000);
}

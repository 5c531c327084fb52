//! History reconstruction tests: filtering, synthesis, direction tagging.
mod common;
use common::*;
use esteira::prelude::*;

#[test]
fn empty_history_synthesizes_one_entry_per_earlier_step() {
    // P6: current step at position 4 of {1,2,3,4,5} yields exactly three
    // synthesized entries, for positions 1-3.
    let steps = sparse_steps();
    let card = make_card("c1", "f1", "s4");

    let timeline = reconstruct(&[], &card, &steps);
    assert_eq!(timeline.entries.len(), 3);
    let ids: Vec<&str> = timeline.entries.iter().map(|e| e.step_id.as_str()).collect();
    assert_eq!(ids, ["s1", "s2", "s3"]);
    for entry in &timeline.entries {
        assert!(entry.synthesized);
        assert!(!entry.backward);
        assert_eq!(entry.moved_at, created_at());
        assert_eq!(entry.actor, None);
    }
    assert_eq!(timeline.last_update, Some(created_at()));
}

#[test]
fn card_on_first_step_synthesizes_nothing() {
    let steps = simple_steps();
    let card = make_card("c1", "f1", "s1");
    let timeline = reconstruct(&[], &card, &steps);
    assert!(timeline.entries.is_empty());
    assert_eq!(timeline.last_update, None);
}

#[test]
fn unlocatable_current_step_synthesizes_nothing() {
    let steps = simple_steps();
    let card = make_card("c1", "f1", "missing");
    let timeline = reconstruct(&[], &card, &steps);
    assert!(timeline.entries.is_empty());
}

#[test]
fn entries_landing_on_the_current_step_are_filtered() {
    let steps = simple_steps();
    let card = make_card("c1", "f1", "s3");
    let records = vec![
        make_record("m1", Some(("s1", 1)), ("s2", 2), 1, Some(ActionKind::Move)),
        // Redundant with the current-step panel: filtered out.
        make_record("m2", Some(("s2", 2)), ("s3", 3), 2, Some(ActionKind::Move)),
    ];

    let timeline = reconstruct(&records, &card, &steps);
    assert_eq!(timeline.entries.len(), 1);
    assert_eq!(timeline.entries[0].step_id, "s2");
    // Real history survived, so nothing is synthesized.
    assert!(!timeline.entries[0].synthesized);
}

#[test]
fn complete_and_cancel_always_show_even_on_the_current_step() {
    // Scenario C.
    let steps = simple_steps();
    let card = make_card("c1", "f1", "s3");
    let records = vec![
        make_record("m1", Some(("s1", 1)), ("s2", 2), 1, Some(ActionKind::Move)),
        make_record(
            "m2",
            Some(("s2", 2)),
            ("s3", 3),
            2,
            Some(ActionKind::Complete),
        ),
    ];

    let timeline = reconstruct(&records, &card, &steps);
    assert_eq!(timeline.entries.len(), 2);
    let last = &timeline.entries[1];
    assert_eq!(last.step_id, "s3");
    assert_eq!(last.action, ActionKind::Complete);
    assert_eq!(timeline.last_update, Some(moved_at(2)));
}

#[test]
fn records_without_a_to_step_are_ignored() {
    let steps = simple_steps();
    let card = make_card("c1", "f1", "s3");
    let mut record = make_record("m1", Some(("s1", 1)), ("s2", 2), 1, None);
    record.to_step_id = None;

    let timeline = reconstruct(&[record], &card, &steps);
    // Filtering left nothing real, so synthesis kicks in instead.
    assert!(timeline.entries.iter().all(|e| e.synthesized));
    assert_eq!(timeline.entries.len(), 2);
}

#[test]
fn backward_moves_are_tagged_from_recorded_positions() {
    let steps = simple_steps();
    let card = make_card("c1", "f1", "s3");
    let records = vec![
        make_record("m1", Some(("s2", 2)), ("s1", 1), 1, Some(ActionKind::Move)),
        make_record("m2", Some(("s1", 1)), ("s2", 2), 2, Some(ActionKind::Move)),
    ];

    let timeline = reconstruct(&records, &card, &steps);
    assert_eq!(timeline.entries.len(), 2);
    assert!(timeline.entries[0].backward);
    assert!(!timeline.entries[1].backward);
}

#[test]
fn recorded_positions_survive_a_reorder() {
    // The steps were reordered after the move: s1 now sits above s2. The
    // recorded snapshot still calls the move forward.
    let mut steps = simple_steps();
    steps[0].position = 9;
    let card = make_card("c1", "f1", "s3");
    let records = vec![make_record(
        "m1",
        Some(("s1", 1)),
        ("s2", 2),
        1,
        Some(ActionKind::Move),
    )];

    let timeline = reconstruct(&records, &card, &steps);
    assert!(!timeline.entries[0].backward);
}

#[test]
fn live_positions_fill_in_for_unrecorded_ones() {
    let steps = simple_steps();
    let card = make_card("c1", "f1", "s1");
    let mut record = make_record("m1", None, ("s2", 0), 1, Some(ActionKind::Move));
    record.from_step_id = Some("s3".to_string());
    record.from_position = None;
    record.to_position = None;

    let timeline = reconstruct(&[record], &card, &steps);
    // s3 -> s2 by live lookup: backward.
    assert!(timeline.entries[0].backward);
}

#[test]
fn explicit_backward_tag_outranks_positions() {
    let steps = simple_steps();
    let card = make_card("c1", "f1", "s3");
    let mut record = make_record("m1", Some(("s1", 1)), ("s2", 2), 1, Some(ActionKind::Move));
    record.backward = Some(true);

    let timeline = reconstruct(&[record], &card, &steps);
    assert!(timeline.entries[0].backward);
}

#[test]
fn recorded_titles_outrank_live_ones() {
    let steps = simple_steps();
    let card = make_card("c1", "f1", "s3");
    let mut record = make_record("m1", Some(("s1", 1)), ("s2", 2), 1, Some(ActionKind::Move));
    record.to_title = Some("Old name".to_string());

    let timeline = reconstruct(&[record], &card, &steps);
    assert_eq!(timeline.entries[0].step_title, "Old name");

    // Without a recorded title the live step supplies it.
    let record = make_record("m2", Some(("s1", 1)), ("s2", 2), 2, Some(ActionKind::Move));
    let timeline = reconstruct(&[record], &card, &steps);
    assert_eq!(timeline.entries[0].step_title, "Step s2");
}

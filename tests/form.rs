//! Form hydration tests: system-field routing and write-back.
mod common;
use common::*;
use esteira::form::{ASSIGNED_TEAM_SLUG, ASSIGNED_TO_SLUG};
use esteira::prelude::*;

#[test]
fn slug_keyed_values_divert_to_the_dedicated_slots() {
    let mut steps = simple_steps();
    steps[1].fields = vec![
        person_field("owner", "Responsável", Some(ASSIGNED_TO_SLUG)),
        person_field("squad", "Time", Some(ASSIGNED_TEAM_SLUG)),
        text_field("notes", "Notes", false),
    ];
    let mut card = make_card("c1", "f1", "s2");
    card.fields.insert(
        ASSIGNED_TO_SLUG.to_string(),
        FieldValue::Text("ana".to_string()),
    );
    card.fields.insert(
        ASSIGNED_TEAM_SLUG.to_string(),
        FieldValue::Text("team-7".to_string()),
    );
    card.fields
        .insert("notes".to_string(), FieldValue::Text("hello".to_string()));

    let form = FormValues::hydrate(&card, &steps);
    assert_eq!(form.assigned_to.as_deref(), Some("ana"));
    assert_eq!(form.assigned_team_id.as_deref(), Some("team-7"));
    // System values never show up as generic entries.
    assert!(!form.fields.contains_key(ASSIGNED_TO_SLUG));
    assert!(!form.fields.contains_key(ASSIGNED_TEAM_SLUG));
    assert_eq!(
        form.fields.get("notes"),
        Some(&FieldValue::Text("hello".to_string()))
    );
}

#[test]
fn values_keyed_by_classified_field_id_divert_too() {
    // No slug on the declaration: the raw map is keyed by the field id of
    // a label-classified assignee field.
    let mut steps = simple_steps();
    steps[1].fields = vec![person_field("owner", "Responsável pela conta", None)];
    let mut card = make_card("c1", "f1", "s2");
    card.fields
        .insert("owner".to_string(), FieldValue::Text("bruno".to_string()));

    let form = FormValues::hydrate(&card, &steps);
    assert_eq!(form.assigned_to.as_deref(), Some("bruno"));
    assert!(!form.fields.contains_key("owner"));
}

#[test]
fn empty_string_team_hydrates_to_none() {
    // Scenario D.
    let mut steps = simple_steps();
    steps[1].fields = vec![person_field("squad", "Time", Some(ASSIGNED_TEAM_SLUG))];
    let mut card = make_card("c1", "f1", "s2");
    card.fields.insert(
        ASSIGNED_TEAM_SLUG.to_string(),
        FieldValue::Text("".to_string()),
    );

    let form = FormValues::hydrate(&card, &steps);
    assert_eq!(form.assigned_team_id, None);
    assert!(!form.fields.contains_key(ASSIGNED_TEAM_SLUG));
}

#[test]
fn assignee_kind_defaults_to_user() {
    let steps = simple_steps();
    let card = make_card("c1", "f1", "s2");
    let form = FormValues::hydrate(&card, &steps);
    assert_eq!(form.assignee_kind, AssigneeKind::User);

    // A resolved team with no user flips the primary slot.
    let mut card = make_card("c2", "f1", "s2");
    card.team_id = Some("team-7".to_string());
    let form = FormValues::hydrate(&card, &steps);
    assert_eq!(form.assignee_kind, AssigneeKind::Team);

    // A user outranks the team as primary.
    let mut card = make_card("c3", "f1", "s2");
    card.assignee_id = Some("ana".to_string());
    card.team_id = Some("team-7".to_string());
    let form = FormValues::hydrate(&card, &steps);
    assert_eq!(form.assignee_kind, AssigneeKind::User);
}

#[test]
fn agents_come_only_from_the_dedicated_set() {
    let mut steps = simple_steps();
    steps[1].fields = vec![person_field("crew", "Agentes", None)];
    let mut card = make_card("c1", "f1", "s2");
    card.agent_ids.insert("agent-1".to_string());
    card.agent_ids.insert("agent-2".to_string());
    // A stray raw entry under the agents field id must not leak anywhere.
    card.fields.insert(
        "crew".to_string(),
        FieldValue::List(vec!["ghost".to_string()]),
    );

    let form = FormValues::hydrate(&card, &steps);
    assert_eq!(form.agents.len(), 2);
    assert!(form.agents.contains("agent-1"));
    assert!(!form.agents.contains("ghost"));
    assert!(!form.fields.contains_key("crew"));
}

#[test]
fn hydrate_then_apply_never_duplicates_system_values() {
    // P5: a full round trip keeps system values out of the generic map.
    let mut steps = simple_steps();
    steps[1].fields = vec![
        person_field("owner", "Responsável", Some(ASSIGNED_TO_SLUG)),
        text_field("notes", "Notes", false),
    ];
    let mut card = make_card("c1", "f1", "s2");
    card.fields.insert(
        ASSIGNED_TO_SLUG.to_string(),
        FieldValue::Text("ana".to_string()),
    );
    card.fields
        .insert("notes".to_string(), FieldValue::Text("hello".to_string()));
    card.agent_ids.insert("agent-1".to_string());

    let form = FormValues::hydrate(&card, &steps);
    form.apply_to(&mut card);

    assert_eq!(card.assignee_id.as_deref(), Some("ana"));
    assert!(!card.fields.contains_key(ASSIGNED_TO_SLUG));
    assert_eq!(card.agent_ids.len(), 1);

    // A second round trip is a fixed point.
    let again = FormValues::hydrate(&card, &steps);
    assert_eq!(again, form);
    form.apply_to(&mut card);
    assert!(!card.fields.contains_key(ASSIGNED_TO_SLUG));
}

#[test]
fn step_defaults_fill_unassigned_cards() {
    let mut steps = simple_steps();
    steps[1].default_assignee = Some("fallback-user".to_string());
    steps[1].default_team = Some("fallback-team".to_string());
    let card = make_card("c1", "f1", "s2");

    let form = FormValues::hydrate(&card, &steps);
    assert_eq!(form.assigned_to.as_deref(), Some("fallback-user"));
    assert_eq!(form.assigned_team_id.as_deref(), Some("fallback-team"));

    // An explicit assignee wins over the step default.
    let mut card = make_card("c2", "f1", "s2");
    card.assignee_id = Some("ana".to_string());
    let form = FormValues::hydrate(&card, &steps);
    assert_eq!(form.assigned_to.as_deref(), Some("ana"));
}

#[test]
fn title_and_value_ride_the_buffer() {
    let steps = simple_steps();
    let mut card = make_card("c1", "f1", "s2");
    card.value = Some(990.0);

    let mut form = FormValues::hydrate(&card, &steps);
    assert_eq!(form.title, "Card c1");
    assert_eq!(form.value, Some(990.0));

    form.title = "Renamed".to_string();
    form.value = Some(1200.0);
    form.apply_to(&mut card);
    assert_eq!(card.title, "Renamed");
    assert_eq!(card.value, Some(1200.0));
}

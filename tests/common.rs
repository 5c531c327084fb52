//! Common test utilities for building flows, steps, cards and history.
use chrono::{DateTime, Duration, TimeZone, Utc};
use esteira::prelude::*;

/// A fixed creation timestamp so synthesized entries are predictable.
#[allow(dead_code)]
pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

#[allow(dead_code)]
pub fn moved_at(hours: i64) -> DateTime<Utc> {
    created_at() + Duration::hours(hours)
}

/// A bare step with no fields.
#[allow(dead_code)]
pub fn make_step(id: &str, flow_id: &str, position: i64, kind: StepKind) -> Step {
    Step {
        id: id.to_string(),
        flow_id: flow_id.to_string(),
        position,
        title: format!("Step {}", id),
        color: None,
        kind,
        fields: vec![],
        default_assignee: None,
        default_team: None,
    }
}

/// Three normal steps s1/s2/s3 at positions 1/2/3 in flow f1.
#[allow(dead_code)]
pub fn simple_steps() -> Vec<Step> {
    vec![
        make_step("s1", "f1", 1, StepKind::Normal),
        make_step("s2", "f1", 2, StepKind::Normal),
        make_step("s3", "f1", 3, StepKind::Normal),
    ]
}

/// Five normal steps at deliberately non-contiguous positions.
#[allow(dead_code)]
pub fn sparse_steps() -> Vec<Step> {
    vec![
        make_step("s1", "f1", 1, StepKind::Normal),
        make_step("s2", "f1", 2, StepKind::Normal),
        make_step("s3", "f1", 3, StepKind::Normal),
        make_step("s4", "f1", 4, StepKind::Normal),
        make_step("s5", "f1", 5, StepKind::Normal),
    ]
}

/// An empty card sitting on `step_id`.
#[allow(dead_code)]
pub fn make_card(id: &str, flow_id: &str, step_id: &str) -> Card {
    Card {
        id: id.to_string(),
        flow_id: flow_id.to_string(),
        step_id: step_id.to_string(),
        title: format!("Card {}", id),
        kind: None,
        fields: AHashMap::new(),
        checklists: AHashMap::new(),
        parent_id: None,
        assignee_id: None,
        team_id: None,
        agent_ids: BTreeSet::new(),
        created_at: created_at(),
        value: None,
        product_id: None,
    }
}

#[allow(dead_code)]
pub fn text_field(id: &str, label: &str, required: bool) -> FieldDecl {
    FieldDecl {
        id: id.to_string(),
        label: label.to_string(),
        slug: None,
        kind: FieldKind::Text(TextVariant::Short),
        required,
    }
}

#[allow(dead_code)]
pub fn number_field(id: &str, label: &str, required: bool) -> FieldDecl {
    FieldDecl {
        id: id.to_string(),
        label: label.to_string(),
        slug: None,
        kind: FieldKind::Number,
        required,
    }
}

#[allow(dead_code)]
pub fn checklist_field(id: &str, label: &str, items: &[&str], required: bool) -> FieldDecl {
    FieldDecl {
        id: id.to_string(),
        label: label.to_string(),
        slug: None,
        kind: FieldKind::Checklist {
            items: items.iter().map(|s| s.to_string()).collect(),
        },
        required,
    }
}

#[allow(dead_code)]
pub fn person_field(id: &str, label: &str, slug: Option<&str>) -> FieldDecl {
    FieldDecl {
        id: id.to_string(),
        label: label.to_string(),
        slug: slug.map(str::to_string),
        kind: FieldKind::UserSelect,
        required: false,
    }
}

/// A movement record with recorded positions and titles, the way the data
/// service snapshots them at move time.
#[allow(dead_code)]
pub fn make_record(
    id: &str,
    from: Option<(&str, i64)>,
    to: (&str, i64),
    hours: i64,
    action: Option<ActionKind>,
) -> MovementRecord {
    MovementRecord {
        id: id.to_string(),
        from_step_id: from.map(|(step, _)| step.to_string()),
        to_step_id: Some(to.0.to_string()),
        moved_at: moved_at(hours),
        actor: Some("ana".to_string()),
        action,
        from_position: from.map(|(_, position)| position),
        to_position: Some(to.1),
        from_title: None,
        to_title: None,
        backward: None,
    }
}

/// Wraps flows and a card into an in-memory service.
#[allow(dead_code)]
pub fn service_with(flows: Vec<Flow>, cards: Vec<Card>) -> InMemoryBoard {
    InMemoryBoard::new(Board {
        flows,
        cards,
        history: Default::default(),
    })
}

#[allow(dead_code)]
pub fn flow_of(id: &str, steps: Vec<Step>) -> Flow {
    Flow {
        id: id.to_string(),
        name: format!("Flow {}", id),
        steps,
    }
}

use super::types::*;
use crate::board::{
    Board, Card, FieldDecl, FieldKind, FieldValue, Flow, IdentifierKind, IntoBoard, Step, StepKind,
    TextVariant,
};
use crate::error::BoardConversionError;
use crate::history::{ActionKind, MovementRecord};
use ahash::{AHashMap, AHashSet};
use std::collections::BTreeSet;

impl IntoBoard for WireBoard {
    fn into_board(self) -> Result<Board, BoardConversionError> {
        let mut flows = Vec::with_capacity(self.flows.len());
        for wire_flow in self.flows {
            flows.push(convert_flow(wire_flow)?);
        }

        let cards = self.cards.into_iter().map(convert_card).collect();

        let mut history: AHashMap<String, Vec<MovementRecord>> = AHashMap::new();
        for entry in self.history {
            let card_id = entry.card_id.clone();
            history.entry(card_id).or_default().push(convert_record(entry));
        }

        Ok(Board {
            flows,
            cards,
            history,
        })
    }
}

fn convert_flow(wire: WireFlow) -> Result<Flow, BoardConversionError> {
    let mut seen_positions = AHashSet::new();
    let mut steps = Vec::with_capacity(wire.steps.len());
    for wire_step in wire.steps {
        if !seen_positions.insert(wire_step.position) {
            return Err(BoardConversionError::DuplicatePosition {
                flow_id: wire.id.clone(),
                position: wire_step.position,
            });
        }
        steps.push(convert_step(wire_step)?);
    }
    Ok(Flow {
        id: wire.id,
        name: wire.name,
        steps,
    })
}

fn convert_step(wire: WireStep) -> Result<Step, BoardConversionError> {
    let kind = match wire.step_type.as_str() {
        "normal" => StepKind::Normal,
        "finisher" => StepKind::Finisher,
        "fail" => StepKind::Fail,
        "freezing" => StepKind::Freezing,
        other => {
            return Err(BoardConversionError::UnknownStepKind {
                step_id: wire.id,
                kind: other.to_string(),
            });
        }
    };

    let mut fields = Vec::with_capacity(wire.fields.len());
    for wire_field in wire.fields {
        fields.push(convert_field(&wire.id, wire_field)?);
    }

    Ok(Step {
        id: wire.id,
        flow_id: wire.flow_id,
        position: wire.position,
        title: wire.title,
        color: wire.color,
        kind,
        fields,
        default_assignee: wire.default_assignee,
        default_team: wire.default_team,
    })
}

fn convert_field(step_id: &str, wire: WireField) -> Result<FieldDecl, BoardConversionError> {
    let kind = match wire.field_type.as_str() {
        "text" => FieldKind::Text(match wire.text_variant.as_deref() {
            Some("long") => TextVariant::Long,
            _ => TextVariant::Short,
        }),
        "long_text" => FieldKind::Text(TextVariant::Long),
        "number" => FieldKind::Number,
        "date" => FieldKind::Date,
        "checklist" => FieldKind::Checklist {
            items: wire.items.unwrap_or_default(),
        },
        "user_select" => FieldKind::UserSelect,
        "identifier" => FieldKind::Identifier(match wire.identifier_kind.as_deref() {
            None | Some("auto") => IdentifierKind::Auto,
            Some("cpf") => IdentifierKind::Cpf,
            Some("cnpj") => IdentifierKind::Cnpj,
            Some(other) => {
                return Err(BoardConversionError::UnknownFieldKind {
                    step_id: step_id.to_string(),
                    field_id: wire.id,
                    kind: format!("identifier/{}", other),
                });
            }
        }),
        other => {
            return Err(BoardConversionError::UnknownFieldKind {
                step_id: step_id.to_string(),
                field_id: wire.id,
                kind: other.to_string(),
            });
        }
    };

    Ok(FieldDecl {
        id: wire.id,
        label: wire.label,
        slug: wire.slug,
        kind,
        required: wire.required,
    })
}

fn convert_card(wire: WireCard) -> Card {
    let mut fields = AHashMap::new();
    for (key, value) in wire.fields {
        match field_value(value) {
            Some(converted) => {
                fields.insert(key, converted);
            }
            None => {
                log::debug!("dropping unconvertible value for field '{}'", key);
            }
        }
    }

    Card {
        id: wire.id,
        flow_id: wire.flow_id,
        step_id: wire.step_id,
        title: wire.title,
        kind: wire.kind,
        fields,
        checklists: wire.checklists,
        parent_id: wire.parent_id,
        assignee_id: wire.assignee_id,
        team_id: wire.team_id,
        agent_ids: BTreeSet::from_iter(wire.agent_ids),
        created_at: wire.created_at,
        value: wire.value,
        product_id: wire.product_id,
    }
}

fn convert_record(wire: WireHistoryEntry) -> MovementRecord {
    let action = match wire.action.as_deref() {
        Some("move") => Some(ActionKind::Move),
        Some("complete") => Some(ActionKind::Complete),
        Some("cancel") => Some(ActionKind::Cancel),
        Some(other) => {
            log::debug!("unknown history action '{}' on record '{}'", other, wire.id);
            None
        }
        None => None,
    };

    MovementRecord {
        id: wire.id,
        from_step_id: wire.from_step_id,
        to_step_id: wire.to_step_id,
        moved_at: wire.moved_at,
        actor: wire.actor,
        action,
        from_position: wire.from_position,
        to_position: wire.to_position,
        from_title: wire.from_title,
        to_title: wire.to_title,
        backward: wire.backward,
    }
}

/// Maps a loosely-typed JSON value onto the canonical tagged union. Nulls
/// and objects that are not checklist progress are dropped.
fn field_value(value: serde_json::Value) -> Option<FieldValue> {
    use serde_json::Value;
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(FieldValue::Text(b.to_string())),
        Value::Number(n) => n.as_f64().map(FieldValue::Number),
        Value::String(s) => {
            if looks_like_iso_date(&s) {
                Some(FieldValue::DateIso(s))
            } else {
                Some(FieldValue::Text(s))
            }
        }
        Value::Array(items) => Some(FieldValue::List(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        )),
        Value::Object(map) => {
            let mut items = AHashMap::new();
            for (key, item) in map {
                match item {
                    Value::Bool(done) => {
                        items.insert(key, done);
                    }
                    _ => return None,
                }
            }
            Some(FieldValue::Checklist(items))
        }
    }
}

/// "YYYY-MM-DD..." is treated as a date value; anything else stays text.
fn looks_like_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 10
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit)
}

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A work item progressing through a pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    /// The flow this card belongs to. May differ from the flow currently
    /// open in the UI; see the step resolver.
    pub flow_id: String,
    pub step_id: String,
    pub title: String,
    /// Free-form tag (e.g. "finance", "onboarding") gating optional UI
    /// sections. Carried through to the read model untouched.
    pub kind: Option<String>,
    /// Generic field-value map, field id (or slug) to value. System values
    /// routed to the dedicated slots below never live here after hydration.
    pub fields: AHashMap<String, FieldValue>,
    /// Checklist progress, field id to item name to done.
    pub checklists: AHashMap<String, AHashMap<String, bool>>,
    /// Back-reference to a parent card, never owning.
    pub parent_id: Option<String>,
    pub assignee_id: Option<String>,
    pub team_id: Option<String>,
    /// Collaborating agents. A set: duplicates are impossible by type.
    pub agent_ids: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub value: Option<f64>,
    pub product_id: Option<String>,
}

/// The runtime value held by a card's generic field map, indexed by the
/// parallel [`FieldKind`](super::FieldKind) tag of the declaration so
/// hydration and validation can pattern-match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Checklist(AHashMap<String, bool>),
    DateIso(String),
    /// Multi-select payloads (e.g. collaborator arrays) that arrive through
    /// the raw map.
    List(Vec<String>),
}

impl FieldValue {
    /// The value as text, when it carries any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(t) => Some(t),
            FieldValue::DateIso(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(t) => write!(f, "{}", t),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            FieldValue::Checklist(items) => {
                let done = items.values().filter(|&&v| v).count();
                write!(f, "{}/{}", done, items.len())
            }
            FieldValue::DateIso(d) => write!(f, "{}", d),
            FieldValue::List(values) => write!(f, "{}", values.join(", ")),
        }
    }
}

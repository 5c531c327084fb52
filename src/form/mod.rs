use crate::board::{Card, FieldValue, Step};
use ahash::{AHashMap, AHashSet};
use std::collections::BTreeSet;

pub mod classify;
pub mod identifier;
pub mod validate;

pub use classify::{AGENTS_SLUG, ASSIGNED_TEAM_SLUG, ASSIGNED_TO_SLUG, FieldRole, classify};
pub use validate::{forward_allowed, unmet_requirements};

/// Which assignment slot is primary for the card right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssigneeKind {
    /// The default whenever nothing else resolves, biasing the UI toward
    /// user assignment.
    #[default]
    User,
    Team,
}

/// The live editing buffer for one card: everything the form renders and
/// writes back. Created fresh whenever the active card changes, discarded
/// on close, applied to the card only after a successful save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub title: String,
    /// Generic field entries only; system values never live here.
    pub fields: AHashMap<String, FieldValue>,
    /// Checklist progress, field id to item name to done.
    pub checklists: AHashMap<String, AHashMap<String, bool>>,
    pub assigned_to: Option<String>,
    pub assigned_team_id: Option<String>,
    pub assignee_kind: AssigneeKind,
    pub agents: BTreeSet<String>,
    pub product_id: Option<String>,
    pub value: Option<f64>,
}

impl FormValues {
    /// Builds the form buffer from a card's raw state.
    ///
    /// Entries of the raw field map keyed by a reserved system slug (or by
    /// the id/slug of a declared field classified as assignee/team/agents)
    /// are diverted into the dedicated slots and excluded from the generic
    /// map. Agents are read only from the card's dedicated agent set.
    /// `steps` is the card's effective step list; it supplies the field
    /// declarations and the current step's auto-assignment defaults.
    pub fn hydrate(card: &Card, steps: &[Step]) -> Self {
        let mut assignee_keys: AHashSet<&str> = AHashSet::from_iter([ASSIGNED_TO_SLUG]);
        let mut team_keys: AHashSet<&str> = AHashSet::from_iter([ASSIGNED_TEAM_SLUG]);
        let mut agent_keys: AHashSet<&str> = AHashSet::from_iter([AGENTS_SLUG]);
        for field in steps.iter().flat_map(|step| &step.fields) {
            let keys = match classify(field) {
                FieldRole::Assignee => &mut assignee_keys,
                FieldRole::Team => &mut team_keys,
                FieldRole::Agents => &mut agent_keys,
                FieldRole::Generic => continue,
            };
            keys.insert(field.id.as_str());
            if let Some(slug) = &field.slug {
                keys.insert(slug.as_str());
            }
        }

        let mut fields = AHashMap::new();
        let mut checklists = card.checklists.clone();
        let mut assigned_to = card.assignee_id.clone();
        let mut assigned_team_id = card.team_id.clone();

        for (key, value) in &card.fields {
            if agent_keys.contains(key.as_str()) {
                continue;
            }
            if assignee_keys.contains(key.as_str()) {
                if let Some(id) = person_id(value) {
                    assigned_to = Some(id);
                }
                continue;
            }
            if team_keys.contains(key.as_str()) {
                // An empty-string team value hydrates to None, not Some("").
                if let Some(id) = person_id(value) {
                    assigned_team_id = Some(id);
                }
                continue;
            }
            if let FieldValue::Checklist(items) = value {
                checklists
                    .entry(key.clone())
                    .or_insert_with(|| items.clone());
            }
            fields.insert(key.clone(), value.clone());
        }

        // Auto-assignment defaults of the step the card is sitting on.
        if let Some(current) = steps.iter().find(|step| step.id == card.step_id) {
            if assigned_to.is_none() {
                assigned_to = current.default_assignee.clone();
            }
            if assigned_team_id.is_none() {
                assigned_team_id = current.default_team.clone();
            }
        }

        let assignee_kind = if assigned_to.is_none() && assigned_team_id.is_some() {
            AssigneeKind::Team
        } else {
            AssigneeKind::User
        };

        Self {
            title: card.title.clone(),
            fields,
            checklists,
            assigned_to,
            assigned_team_id,
            assignee_kind,
            agents: card.agent_ids.clone(),
            product_id: card.product_id.clone(),
            value: card.value,
        }
    }

    /// Writes the buffer back onto the card.
    ///
    /// System values go only to their dedicated attributes; the reserved
    /// slugs are stripped from the generic map even if a caller inserted
    /// them by hand, so a hydrate/apply round trip never duplicates them.
    pub fn apply_to(&self, card: &mut Card) {
        let mut fields = self.fields.clone();
        for slug in [ASSIGNED_TO_SLUG, ASSIGNED_TEAM_SLUG, AGENTS_SLUG] {
            fields.remove(slug);
        }
        card.title = self.title.clone();
        card.fields = fields;
        card.checklists = self.checklists.clone();
        card.assignee_id = self.assigned_to.clone();
        card.team_id = self.assigned_team_id.clone();
        card.agent_ids = self.agents.clone();
        card.product_id = self.product_id.clone();
        card.value = self.value;
    }
}

/// Extracts a person/team id from a raw system-field value. Empty strings
/// and empty lists yield None.
fn person_id(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(t) if !t.trim().is_empty() => Some(t.trim().to_string()),
        FieldValue::List(values) => values
            .iter()
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string),
        _ => None,
    }
}

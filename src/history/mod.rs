use crate::board::{Card, Step};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// What a movement record stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Move,
    Complete,
    Cancel,
}

/// One recorded transition, append-only at the data service. A null
/// from-step means creation. Titles and positions are snapshots taken at
/// the time of the move, so backward detection survives later renames and
/// reorders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementRecord {
    pub id: String,
    pub from_step_id: Option<String>,
    pub to_step_id: Option<String>,
    pub moved_at: DateTime<Utc>,
    pub actor: Option<String>,
    pub action: Option<ActionKind>,
    pub from_position: Option<i64>,
    pub to_position: Option<i64>,
    pub from_title: Option<String>,
    pub to_title: Option<String>,
    /// Explicit direction tag; outranks position comparison when present.
    pub backward: Option<bool>,
}

/// A display-ready timeline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub step_id: String,
    pub step_title: String,
    pub moved_at: DateTime<Utc>,
    pub actor: Option<String>,
    pub action: ActionKind,
    /// Backward entries get the warning treatment in the UI.
    pub backward: bool,
    /// True for fallback entries synthesized when no history was recorded.
    pub synthesized: bool,
}

/// The reconstructed movement timeline of one card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    /// Chronological ascending, as returned by the source.
    pub entries: Vec<TimelineEntry>,
    /// The most recent entry's timestamp, if any.
    pub last_update: Option<DateTime<Utc>>,
}

/// Reconstructs the display timeline from raw movement records.
///
/// A record is included when it has a to-step. A record landing on the
/// card's *current* step is excluded (it would be redundant with the
/// current-step panel) unless its action is `Complete` or `Cancel`, which
/// are always shown.
///
/// When no real history survives filtering (a fresh card, or history not
/// yet populated), one pass-through entry is synthesized per step strictly
/// before the current one, stamped with the card's creation time and no
/// actor. This is a best-effort approximation: a card that skipped steps
/// synthesizes the same entries as one that visited each of them.
pub fn reconstruct(records: &[MovementRecord], card: &Card, steps: &[Step]) -> Timeline {
    let sorted: Vec<&Step> = steps.iter().sorted_by_key(|s| s.position).collect();
    let position_of = |id: &str| sorted.iter().find(|s| s.id == id).map(|s| s.position);
    let title_of = |id: &str| sorted.iter().find(|s| s.id == id).map(|s| s.title.clone());

    let mut entries = Vec::new();
    for record in records {
        let Some(to_id) = record.to_step_id.as_deref() else {
            continue;
        };
        let action = record.action.unwrap_or(ActionKind::Move);
        if to_id == card.step_id && !matches!(action, ActionKind::Complete | ActionKind::Cancel) {
            continue;
        }

        let backward = record.backward.unwrap_or_else(|| {
            let from = record
                .from_position
                .or_else(|| record.from_step_id.as_deref().and_then(position_of));
            let to = record.to_position.or_else(|| position_of(to_id));
            matches!((from, to), (Some(f), Some(t)) if t < f)
        });

        entries.push(TimelineEntry {
            step_id: to_id.to_string(),
            step_title: record
                .to_title
                .clone()
                .or_else(|| title_of(to_id))
                .unwrap_or_else(|| to_id.to_string()),
            moved_at: record.moved_at,
            actor: record.actor.clone(),
            action,
            backward,
            synthesized: false,
        });
    }

    if entries.is_empty() {
        if let Some(current_position) = position_of(&card.step_id) {
            for step in sorted.iter().filter(|s| s.position < current_position) {
                entries.push(TimelineEntry {
                    step_id: step.id.clone(),
                    step_title: step.title.clone(),
                    moved_at: card.created_at,
                    actor: None,
                    action: ActionKind::Move,
                    backward: false,
                    synthesized: true,
                });
            }
        }
    }

    let last_update = entries.last().map(|entry| entry.moved_at);
    Timeline {
        entries,
        last_update,
    }
}

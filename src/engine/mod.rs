use crate::board::{Card, Step};
use crate::form::{FormValues, unmet_requirements};
use crate::history::{TimelineEntry, reconstruct};
use crate::service::BoardReader;
use chrono::{DateTime, Utc};

mod access;
mod position;
mod resolver;

pub use access::AccessState;
pub use position::{StepPointers, locate, progress_percentage, sort_by_position};
pub use resolver::resolve_effective_steps;

/// The complete read model for one card: everything the presentation layer
/// renders, derived in one place so nothing downstream re-derives it.
///
/// A `CardView` is a snapshot over committed state plus the live form
/// buffer; derive a fresh one after every edit or service round trip.
#[derive(Debug, Clone)]
pub struct CardView {
    pub current_step: Option<Step>,
    pub previous_step: Option<Step>,
    pub next_step: Option<Step>,
    /// 0-100, computed over the step list as supplied to the UI.
    pub progress_percentage: f64,
    pub is_frozen: bool,
    pub is_read_only: bool,
    /// `is_frozen || is_read_only`; gates every mutation affordance.
    pub is_disabled: bool,
    pub form: FormValues,
    /// Labels of the current step's unmet required fields, declaration
    /// order. Surfaced as the advisory message when a forward move is
    /// refused.
    pub unmet: Vec<String>,
    /// Live gate on the "advance" control.
    pub is_move_disabled: bool,
    pub timeline: Vec<TimelineEntry>,
    pub last_history_update: Option<DateTime<Utc>>,
    /// The card's free-form kind tag, passed through for section gating.
    pub card_kind: Option<String>,
}

impl CardView {
    /// Derives the read model for `card` against the step list currently on
    /// screen.
    ///
    /// `supplied` is the open board's step list; when the card belongs to a
    /// different flow its own steps are fetched through `reader` (degrading
    /// to `supplied` while unavailable). `open_flow_id` drives the
    /// read-only flag. History is fetched through `reader` as well (for a
    /// child card, the parent's record), and an empty or unavailable history
    /// falls back to synthesized pass-through entries.
    pub fn derive(
        card: &Card,
        supplied: &[Step],
        open_flow_id: Option<&str>,
        reader: &dyn BoardReader,
    ) -> Self {
        Self::derive_with_form(card, supplied, open_flow_id, reader, None)
    }

    /// Same as [`derive`](Self::derive), but re-uses a live form buffer
    /// instead of hydrating a fresh one: the gate must follow unsaved
    /// edits, not the last committed state.
    pub fn derive_with_form(
        card: &Card,
        supplied: &[Step],
        open_flow_id: Option<&str>,
        reader: &dyn BoardReader,
        form: Option<&FormValues>,
    ) -> Self {
        let effective = resolve_effective_steps(card, supplied, reader);
        let sorted = sort_by_position(&effective);
        let pointers = locate(&sorted, &card.step_id);

        let access = AccessState::derive(pointers.current, card, open_flow_id);
        let form = match form {
            Some(live) => live.clone(),
            None => FormValues::hydrate(card, &effective),
        };

        let unmet: Vec<String> = pointers
            .current
            .map(|step| {
                unmet_requirements(step, &form)
                    .into_iter()
                    .map(|field| field.label.clone())
                    .collect()
            })
            .unwrap_or_default();

        let is_move_disabled = access.disabled()
            || pointers.current.is_none()
            || pointers.next.is_none()
            || !unmet.is_empty();

        let records = reader
            .card_history(&card.id, card.parent_id.as_deref())
            .unwrap_or_else(|err| {
                log::debug!("history for '{}' unavailable ({}); synthesizing", card.id, err);
                Vec::new()
            });
        let timeline = reconstruct(&records, card, &effective);

        Self {
            current_step: pointers.current.cloned(),
            previous_step: pointers.previous.cloned(),
            next_step: pointers.next.cloned(),
            progress_percentage: progress_percentage(supplied, &card.step_id),
            is_frozen: access.frozen,
            is_read_only: access.read_only,
            is_disabled: access.disabled(),
            form,
            unmet,
            is_move_disabled,
            last_history_update: timeline.last_update,
            timeline: timeline.entries,
            card_kind: card.kind.clone(),
        }
    }
}

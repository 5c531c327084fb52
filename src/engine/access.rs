use crate::board::{Card, Step, StepKind};

/// The card's derived access flags. `disabled` gates every mutation
/// affordance (field edits, assignment, save, moves, delete) but never
/// the read-only panels such as overview and history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessState {
    /// The current step is of the freezing kind.
    pub frozen: bool,
    /// The card belongs to a different flow than the one currently open.
    pub read_only: bool,
}

impl AccessState {
    /// Derives the flags. `open_flow_id` is the flow currently open in the
    /// UI; when absent, read-only never triggers.
    pub fn derive(current: Option<&Step>, card: &Card, open_flow_id: Option<&str>) -> Self {
        let frozen = current.is_some_and(|step| step.kind == StepKind::Freezing);
        let read_only = open_flow_id.is_some_and(|open| open != card.flow_id);
        Self { frozen, read_only }
    }

    pub fn disabled(&self) -> bool {
        self.frozen || self.read_only
    }
}

use crate::board::{Board, Card, Step, StepKind};
use crate::error::ServiceError;
use crate::form::FormValues;
use crate::history::{ActionKind, MovementRecord};
use chrono::Utc;

/// The read half of the external data service.
///
/// Implementations are out of scope for the engine; anything that can
/// answer these two queries can back it. Failures are expected and
/// non-fatal: the resolver degrades to the supplied step list and the
/// history reconstructor falls back to synthesis.
pub trait BoardReader {
    fn steps_for_flow(&self, flow_id: &str) -> Result<Vec<Step>, ServiceError>;

    /// Movement records for a card, chronological ascending. For a frozen
    /// child card, `parent_card_id` addresses the original record instead.
    fn card_history(
        &self,
        card_id: &str,
        parent_card_id: Option<&str>,
    ) -> Result<Vec<MovementRecord>, ServiceError>;
}

/// The write half of the external data service.
///
/// Contract: `move_card` must append exactly one movement record before or
/// atomically with the card's step-id update, so a reconstructed timeline
/// never observes a step change without a corresponding entry. Last writer
/// wins; no cross-session locking is provided.
pub trait BoardWriter {
    fn save_card(&mut self, card: &Card, form: &FormValues) -> Result<(), ServiceError>;

    fn move_card(&mut self, card: &Card, step_id: &str) -> Result<(), ServiceError>;

    fn delete_card(&mut self, card_id: &str) -> Result<(), ServiceError>;
}

/// An in-memory data service over an owned [`Board`]. The reference
/// implementation used by the CLI tools and the test suite.
#[derive(Debug, Default)]
pub struct InMemoryBoard {
    board: Board,
    move_seq: u64,
}

impl InMemoryBoard {
    pub fn new(board: Board) -> Self {
        Self { board, move_seq: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.board.card(card_id)
    }

    /// Seeds recorded history for a card, oldest first.
    pub fn with_history(mut self, card_id: &str, records: Vec<MovementRecord>) -> Self {
        self.board.history.insert(card_id.to_string(), records);
        self
    }

    fn step(&self, flow_id: &str, step_id: &str) -> Option<&Step> {
        self.board
            .flow(flow_id)
            .and_then(|flow| flow.steps.iter().find(|s| s.id == step_id))
    }
}

impl BoardReader for InMemoryBoard {
    fn steps_for_flow(&self, flow_id: &str) -> Result<Vec<Step>, ServiceError> {
        self.board
            .flow(flow_id)
            .map(|flow| flow.steps.clone())
            .ok_or_else(|| ServiceError::UnknownFlow(flow_id.to_string()))
    }

    fn card_history(
        &self,
        card_id: &str,
        parent_card_id: Option<&str>,
    ) -> Result<Vec<MovementRecord>, ServiceError> {
        let key = parent_card_id.unwrap_or(card_id);
        Ok(self.board.history.get(key).cloned().unwrap_or_default())
    }
}

impl BoardWriter for InMemoryBoard {
    fn save_card(&mut self, card: &Card, form: &FormValues) -> Result<(), ServiceError> {
        let stored = self
            .board
            .cards
            .iter_mut()
            .find(|c| c.id == card.id)
            .ok_or_else(|| ServiceError::UnknownCard(card.id.clone()))?;
        form.apply_to(stored);
        Ok(())
    }

    fn move_card(&mut self, card: &Card, step_id: &str) -> Result<(), ServiceError> {
        let stored_index = self
            .board
            .cards
            .iter()
            .position(|c| c.id == card.id)
            .ok_or_else(|| ServiceError::UnknownCard(card.id.clone()))?;
        let from = self.step(&card.flow_id, &card.step_id).cloned();
        let to = self
            .step(&card.flow_id, step_id)
            .cloned()
            .ok_or_else(|| ServiceError::Rejected(format!("unknown step '{}'", step_id)))?;

        let action = match to.kind {
            StepKind::Finisher => ActionKind::Complete,
            StepKind::Fail => ActionKind::Cancel,
            _ => ActionKind::Move,
        };
        self.move_seq += 1;
        let record = MovementRecord {
            id: format!("mov-{}", self.move_seq),
            from_step_id: from.as_ref().map(|s| s.id.clone()),
            to_step_id: Some(to.id.clone()),
            moved_at: Utc::now(),
            actor: None,
            action: Some(action),
            from_position: from.as_ref().map(|s| s.position),
            to_position: Some(to.position),
            from_title: from.as_ref().map(|s| s.title.clone()),
            to_title: Some(to.title.clone()),
            backward: None,
        };

        // History first, then the step id: a reader must never see the new
        // step without its record.
        self.board
            .history
            .entry(card.id.clone())
            .or_default()
            .push(record);
        self.board.cards[stored_index].step_id = step_id.to_string();
        Ok(())
    }

    fn delete_card(&mut self, card_id: &str) -> Result<(), ServiceError> {
        let before = self.board.cards.len();
        self.board.cards.retain(|c| c.id != card_id);
        if self.board.cards.len() == before {
            return Err(ServiceError::UnknownCard(card_id.to_string()));
        }
        self.board.history.remove(card_id);
        Ok(())
    }
}

/// A reader that always fails, standing in for a data service whose
/// cross-flow fetch has not completed yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableReader;

impl BoardReader for UnavailableReader {
    fn steps_for_flow(&self, _flow_id: &str) -> Result<Vec<Step>, ServiceError> {
        Err(ServiceError::Unavailable("fetch pending".to_string()))
    }

    fn card_history(
        &self,
        _card_id: &str,
        _parent_card_id: Option<&str>,
    ) -> Result<Vec<MovementRecord>, ServiceError> {
        Err(ServiceError::Unavailable("fetch pending".to_string()))
    }
}

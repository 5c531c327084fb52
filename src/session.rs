use crate::board::{Card, Step};
use crate::engine::CardView;
use crate::error::TransitionError;
use crate::form::FormValues;
use crate::service::{BoardReader, BoardWriter};

/// Where a save currently stands. `Saved` is sticky until the next edit or
/// save attempt; a failed save resets to `Idle` so the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
}

/// A single-user editing session over one card.
///
/// Holds the card, its live form buffer, and the busy flags that serialize
/// save/move so a double-click cannot submit the same transition twice.
/// Closing the session simply drops it: the buffer is discarded with no
/// side effects. Optimistic state is applied to the card only after the
/// writer reports success, never before, and never for a failed call.
#[derive(Debug)]
pub struct EditSession {
    card: Card,
    form: FormValues,
    is_moving: bool,
    save_status: SaveStatus,
}

impl EditSession {
    /// Opens a session, hydrating a fresh form buffer from the card.
    /// `steps` is the card's effective step list.
    pub fn open(card: Card, steps: &[Step]) -> Self {
        let form = FormValues::hydrate(&card, steps);
        Self {
            card,
            form,
            is_moving: false,
            save_status: SaveStatus::Idle,
        }
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn form(&self) -> &FormValues {
        &self.form
    }

    /// Mutable access to the form buffer. Any edit invalidates a sticky
    /// `Saved` status.
    pub fn form_mut(&mut self) -> &mut FormValues {
        if self.save_status == SaveStatus::Saved {
            self.save_status = SaveStatus::Idle;
        }
        &mut self.form
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    /// Derives the read model for this session's card and live buffer.
    pub fn view(
        &self,
        supplied: &[Step],
        open_flow_id: Option<&str>,
        reader: &dyn BoardReader,
    ) -> CardView {
        CardView::derive_with_form(&self.card, supplied, open_flow_id, reader, Some(&self.form))
    }

    /// Persists the form buffer through the writer. The buffer is applied
    /// to the local card only on success; a failure resets the busy flag
    /// and commits nothing, leaving retry to the user.
    pub fn save(
        &mut self,
        view: &CardView,
        writer: &mut dyn BoardWriter,
    ) -> Result<(), TransitionError> {
        if self.is_moving || self.save_status == SaveStatus::Saving {
            return Err(TransitionError::AlreadyInFlight);
        }
        if view.is_disabled {
            return Err(TransitionError::Disabled {
                frozen: view.is_frozen,
                read_only: view.is_read_only,
            });
        }

        self.save_status = SaveStatus::Saving;
        match writer.save_card(&self.card, &self.form) {
            Ok(()) => {
                self.form.apply_to(&mut self.card);
                self.save_status = SaveStatus::Saved;
                Ok(())
            }
            Err(err) => {
                log::warn!("save of card '{}' failed: {}", self.card.id, err);
                self.save_status = SaveStatus::Idle;
                Err(err.into())
            }
        }
    }

    /// Moves the card to the next step. Gated by the live completeness
    /// check: every required field of the current step must be satisfied.
    /// Returns the id of the step the card landed on.
    pub fn move_forward(
        &mut self,
        view: &CardView,
        writer: &mut dyn BoardWriter,
    ) -> Result<String, TransitionError> {
        let next = view
            .next_step
            .as_ref()
            .ok_or(TransitionError::NoNextStep)?
            .id
            .clone();
        if !view.unmet.is_empty() {
            return Err(TransitionError::Blocked {
                unmet: view.unmet.clone(),
            });
        }
        self.move_to(&next, view, writer)?;
        Ok(next)
    }

    /// Moves the card to the previous step. Never gated by completeness;
    /// only forward movement requires it.
    pub fn move_backward(
        &mut self,
        view: &CardView,
        writer: &mut dyn BoardWriter,
    ) -> Result<String, TransitionError> {
        let previous = view
            .previous_step
            .as_ref()
            .ok_or(TransitionError::NoPreviousStep)?
            .id
            .clone();
        self.move_to(&previous, view, writer)?;
        Ok(previous)
    }

    /// Deletes the card through the writer and consumes the session.
    pub fn delete(
        self,
        view: &CardView,
        writer: &mut dyn BoardWriter,
    ) -> Result<(), TransitionError> {
        if view.is_disabled {
            return Err(TransitionError::Disabled {
                frozen: view.is_frozen,
                read_only: view.is_read_only,
            });
        }
        writer.delete_card(&self.card.id)?;
        Ok(())
    }

    fn move_to(
        &mut self,
        step_id: &str,
        view: &CardView,
        writer: &mut dyn BoardWriter,
    ) -> Result<(), TransitionError> {
        if self.is_moving || self.save_status == SaveStatus::Saving {
            return Err(TransitionError::AlreadyInFlight);
        }
        if view.is_disabled {
            return Err(TransitionError::Disabled {
                frozen: view.is_frozen,
                read_only: view.is_read_only,
            });
        }

        self.is_moving = true;
        let result = writer.move_card(&self.card, step_id);
        self.is_moving = false;

        match result {
            Ok(()) => {
                // The step id is the only optimistic update; the new step's
                // field state comes back through the next derivation.
                self.card.step_id = step_id.to_string();
                Ok(())
            }
            Err(err) => {
                log::warn!("move of card '{}' failed: {}", self.card.id, err);
                Err(err.into())
            }
        }
    }
}

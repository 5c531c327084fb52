use thiserror::Error;

/// Errors that can occur when converting a custom wire format into the
/// canonical board model.
#[derive(Error, Debug, Clone)]
pub enum BoardConversionError {
    #[error("Failed to parse board JSON: {0}")]
    JsonParseError(String),

    #[error("Step '{step_id}' has an unknown step kind: '{kind}'")]
    UnknownStepKind { step_id: String, kind: String },

    #[error("Field '{field_id}' on step '{step_id}' has an unknown field kind: '{kind}'")]
    UnknownFieldKind {
        step_id: String,
        field_id: String,
        kind: String,
    },

    #[error("Flow '{flow_id}' declares position {position} more than once")]
    DuplicatePosition { flow_id: String, position: i64 },

    #[error("Invalid board data: {0}")]
    ValidationError(String),
}

/// Errors raised when a session-level mutation (save, move, delete) is
/// refused before it ever reaches the data service.
#[derive(Error, Debug, Clone)]
pub enum TransitionError {
    #[error("Forward move blocked; unmet required fields: {}", unmet.join(", "))]
    Blocked { unmet: Vec<String> },

    #[error("Card is already on the last step of its flow")]
    NoNextStep,

    #[error("Card is already on the first step of its flow")]
    NoPreviousStep,

    #[error("Card is disabled (frozen: {frozen}, read-only: {read_only})")]
    Disabled { frozen: bool, read_only: bool },

    #[error("Another save or move for this card is still in flight")]
    AlreadyInFlight,

    #[error("Step '{0}' was not found in the card's effective step list")]
    StepNotFound(String),

    #[error("Data service failure: {0}")]
    Service(#[from] ServiceError),
}

/// Errors surfaced by a data-service implementation at the trait boundary.
///
/// A failed write leaves the local card untouched; the caller resets its
/// busy flag and may simply retry the user action.
#[derive(Error, Debug, Clone)]
pub enum ServiceError {
    #[error("Data service unavailable: {0}")]
    Unavailable(String),

    #[error("Data service rejected the request: {0}")]
    Rejected(String),

    #[error("Unknown flow: '{0}'")]
    UnknownFlow(String),

    #[error("Unknown card: '{0}'")]
    UnknownCard(String),
}

/// Errors that can occur while saving or loading a board snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Snapshot error: {0}")]
    Generic(String),
}

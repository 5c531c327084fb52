//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! esteira crate. Import this module to get access to the core
//! functionality without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use esteira::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a board dump and derive a card's read model.
//! let board = SampleBoard::from_file("path/to/board.json")?.into_board()?;
//! let steps = board.flow("flow-sales").map(|f| f.steps.clone()).unwrap_or_default();
//! let card = board.card("card-1").cloned().expect("card exists");
//!
//! let service = InMemoryBoard::new(board);
//! let view = CardView::derive(&card, &steps, Some("flow-sales"), &service);
//!
//! println!("progress: {:.0}%", view.progress_percentage);
//! # Ok(())
//! # }
//! ```

// Canonical board model
pub use crate::board::{
    Board, BoardSnapshot, Card, FieldDecl, FieldKind, FieldValue, Flow, IdentifierKind, IntoBoard,
    Step, StepKind, TextVariant,
};

// Derivation engine
pub use crate::engine::{AccessState, CardView, progress_percentage, resolve_effective_steps};

// Form buffer and validation
pub use crate::form::{AssigneeKind, FormValues, forward_allowed, unmet_requirements};

// History reconstruction
pub use crate::history::{ActionKind, MovementRecord, Timeline, TimelineEntry, reconstruct};

// Editing session and the data-service boundary
pub use crate::service::{BoardReader, BoardWriter, InMemoryBoard};
pub use crate::session::{EditSession, SaveStatus};

// Wire format and sample data
pub use crate::data::SampleBoard;
pub use crate::wire::WireBoard;

// Error types
pub use crate::error::{BoardConversionError, ServiceError, TransitionError};

// Standard library re-exports commonly used with this crate
pub use ahash::AHashMap;
pub use std::collections::BTreeSet;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

//! # Esteira - Card Pipeline State & Validation Engine
//!
//! **Esteira** is a state and validation engine for pipeline-based work-item
//! trackers: cards ride an ordered sequence of steps, each step declaring
//! data-entry fields and requirement rules. The engine derives everything a
//! card editor renders (position, access flags, the form buffer, the
//! forward-move gate, and the movement timeline) as pure functions over
//! committed state, and brokers writes through a trait-bounded data service.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical
//! model of flows, steps and cards. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse whatever shape your data service speaks
//!     into your own Rust structs (or use the built-in [`wire`] format).
//! 2.  **Convert to the Canonical Model**: Implement the [`board::IntoBoard`]
//!     trait for your structs to translate them into a [`board::Board`].
//! 3.  **Derive**: Build an [`engine::CardView`] for the card on screen. The
//!     view is the complete read model: current/next/previous step, progress,
//!     frozen/read-only/disabled flags, the hydrated form, the live move
//!     gate, and the reconstructed timeline.
//! 4.  **Edit and Write Back**: Open an [`session::EditSession`], mutate its
//!     form buffer, and save or move the card through a
//!     [`service::BoardWriter`]. Local state is only updated after the
//!     service reports success.
//!
//! ## Quick Start
//!
//! ```rust
//! use esteira::prelude::*;
//! use chrono::Utc;
//!
//! // A three-step flow; the middle step requires a budget figure.
//! let steps = vec![
//!     Step {
//!         id: "s1".to_string(),
//!         flow_id: "f1".to_string(),
//!         position: 1,
//!         title: "Triage".to_string(),
//!         color: None,
//!         kind: StepKind::Normal,
//!         fields: vec![],
//!         default_assignee: None,
//!         default_team: None,
//!     },
//!     Step {
//!         id: "s2".to_string(),
//!         flow_id: "f1".to_string(),
//!         position: 2,
//!         title: "Quote".to_string(),
//!         color: None,
//!         kind: StepKind::Normal,
//!         fields: vec![FieldDecl {
//!             id: "budget".to_string(),
//!             label: "Budget".to_string(),
//!             slug: None,
//!             kind: FieldKind::Number,
//!             required: true,
//!         }],
//!         default_assignee: None,
//!         default_team: None,
//!     },
//!     Step {
//!         id: "s3".to_string(),
//!         flow_id: "f1".to_string(),
//!         position: 3,
//!         title: "Done".to_string(),
//!         color: None,
//!         kind: StepKind::Finisher,
//!         fields: vec![],
//!         default_assignee: None,
//!         default_team: None,
//!     },
//! ];
//!
//! let card = Card {
//!     id: "c1".to_string(),
//!     flow_id: "f1".to_string(),
//!     step_id: "s2".to_string(),
//!     title: "New laptop".to_string(),
//!     kind: None,
//!     fields: AHashMap::new(),
//!     checklists: AHashMap::new(),
//!     parent_id: None,
//!     assignee_id: None,
//!     team_id: None,
//!     agent_ids: BTreeSet::new(),
//!     created_at: Utc::now(),
//!     value: None,
//!     product_id: None,
//! };
//!
//! let board = Board {
//!     flows: vec![Flow {
//!         id: "f1".to_string(),
//!         name: "Procurement".to_string(),
//!         steps: steps.clone(),
//!     }],
//!     cards: vec![card.clone()],
//!     history: Default::default(),
//! };
//! let mut service = InMemoryBoard::new(board);
//!
//! // The derived read model: the required budget field blocks the move.
//! let view = CardView::derive(&card, &steps, Some("f1"), &service);
//! assert_eq!(view.current_step.as_ref().unwrap().title, "Quote");
//! assert_eq!(view.progress_percentage, (2.0 / 3.0) * 100.0);
//! assert!(view.is_move_disabled);
//!
//! // Fill the field in an editing session and advance the card.
//! let mut session = EditSession::open(card, &steps);
//! session
//!     .form_mut()
//!     .fields
//!     .insert("budget".to_string(), FieldValue::Number(0.0)); // 0 counts as filled
//! let view = session.view(&steps, Some("f1"), &service);
//! assert!(!view.is_move_disabled);
//!
//! session.move_forward(&view, &mut service).unwrap();
//! assert_eq!(session.card().step_id, "s3");
//! ```

pub mod board;
pub mod data;
pub mod engine;
pub mod error;
pub mod form;
pub mod history;
pub mod prelude;
pub mod service;
pub mod session;
pub mod wire;

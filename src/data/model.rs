use crate::board::{Board, IntoBoard};
use crate::error::BoardConversionError;
use crate::wire::{WireBoard, WireCard, WireField, WireFlow, WireHistoryEntry, WireStep};
use ahash::AHashMap;
use chrono::Utc;
use std::fs;

/// A board dataset in the wire JSON format, as loaded for the CLI tools.
#[derive(Debug)]
pub struct SampleBoard {
    pub board: WireBoard,
}

impl SampleBoard {
    /// Load a sample board from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let board = serde_json::from_str(&content)?;
        Ok(Self { board })
    }

    /// Creates a small built-in mock board when no file is provided: one
    /// sales flow of three steps with a card waiting on a checklist.
    pub fn default() -> Self {
        let steps = vec![
            WireStep {
                id: "step-intake".to_string(),
                flow_id: "flow-sales".to_string(),
                position: 1,
                title: "Intake".to_string(),
                color: Some("#1e90ff".to_string()),
                step_type: "normal".to_string(),
                fields: vec![WireField {
                    id: "field-contact".to_string(),
                    label: "Contact e-mail".to_string(),
                    slug: None,
                    field_type: "text".to_string(),
                    required: true,
                    items: None,
                    text_variant: Some("short".to_string()),
                    identifier_kind: None,
                }],
                default_assignee: None,
                default_team: None,
            },
            WireStep {
                id: "step-proposal".to_string(),
                flow_id: "flow-sales".to_string(),
                position: 2,
                title: "Proposal".to_string(),
                color: Some("#ffa500".to_string()),
                step_type: "normal".to_string(),
                fields: vec![
                    WireField {
                        id: "field-docs".to_string(),
                        label: "Paperwork".to_string(),
                        slug: None,
                        field_type: "checklist".to_string(),
                        required: true,
                        items: Some(vec!["Draft sent".to_string(), "Draft signed".to_string()]),
                        text_variant: None,
                        identifier_kind: None,
                    },
                    WireField {
                        id: "field-owner".to_string(),
                        label: "Responsável".to_string(),
                        slug: Some("assigned_to".to_string()),
                        field_type: "user_select".to_string(),
                        required: false,
                        items: None,
                        text_variant: None,
                        identifier_kind: None,
                    },
                ],
                default_assignee: None,
                default_team: None,
            },
            WireStep {
                id: "step-closed".to_string(),
                flow_id: "flow-sales".to_string(),
                position: 3,
                title: "Closed".to_string(),
                color: Some("#2e8b57".to_string()),
                step_type: "finisher".to_string(),
                fields: vec![],
                default_assignee: None,
                default_team: None,
            },
        ];

        let mut fields = AHashMap::new();
        fields.insert(
            "field-contact".to_string(),
            serde_json::json!("ana@example.com"),
        );
        let mut checklists = AHashMap::new();
        let mut docs = AHashMap::new();
        docs.insert("Draft sent".to_string(), true);
        docs.insert("Draft signed".to_string(), false);
        checklists.insert("field-docs".to_string(), docs);

        let card = WireCard {
            id: "card-1".to_string(),
            flow_id: "flow-sales".to_string(),
            step_id: "step-proposal".to_string(),
            title: "Acme renewal".to_string(),
            kind: None,
            fields,
            checklists,
            parent_id: None,
            assignee_id: None,
            team_id: None,
            agent_ids: vec![],
            created_at: Utc::now(),
            value: Some(1200.0),
            product_id: None,
        };

        let history = vec![WireHistoryEntry {
            id: "mov-1".to_string(),
            card_id: "card-1".to_string(),
            from_step_id: Some("step-intake".to_string()),
            to_step_id: Some("step-proposal".to_string()),
            moved_at: Utc::now(),
            actor: Some("ana".to_string()),
            action: Some("move".to_string()),
            from_position: Some(1),
            to_position: Some(2),
            from_title: Some("Intake".to_string()),
            to_title: Some("Proposal".to_string()),
            backward: None,
        }];

        Self {
            board: WireBoard {
                flows: vec![WireFlow {
                    id: "flow-sales".to_string(),
                    name: "Sales".to_string(),
                    steps,
                }],
                cards: vec![card],
                history,
            },
        }
    }

    /// Converts the wire shapes into the canonical board model.
    pub fn into_board(self) -> Result<Board, BoardConversionError> {
        self.board.into_board()
    }
}

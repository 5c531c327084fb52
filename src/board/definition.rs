use serde::{Deserialize, Serialize};

/// A named pipeline: an ordered collection of steps a card moves through.
///
/// Ordering is defined by [`Step::position`], which is unique within a flow
/// and strictly increasing but not necessarily contiguous.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Flow {
    pub id: String,
    pub name: String,
    pub steps: Vec<Step>,
}

/// A single pipeline stage with its own data-entry field declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub flow_id: String,
    /// Ordinal position within the owning flow. Unique, strictly increasing,
    /// not necessarily contiguous; "next"/"previous" are defined purely by
    /// adjacency in position order.
    pub position: i64,
    pub title: String,
    pub color: Option<String>,
    pub kind: StepKind,
    pub fields: Vec<FieldDecl>,
    /// Auto-assignment default applied when a card enters this step without
    /// a responsible user of its own.
    pub default_assignee: Option<String>,
    pub default_team: Option<String>,
}

/// The behavioral tag of a step. Only `Freezing` affects access derivation;
/// `Finisher`/`Fail` mark the terminal actions recorded in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Normal,
    Finisher,
    Fail,
    Freezing,
}

impl StepKind {
    /// Whether a move into a step of this kind ends the card's run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepKind::Finisher | StepKind::Fail)
    }
}

/// A declared data-entry unit belonging to one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    pub id: String,
    pub label: String,
    /// Optional semantic tag. The reserved slugs `assigned_to`,
    /// `assigned_team_id` and `agents` route a field out of generic
    /// rendering and into the dedicated assignment slots.
    pub slug: Option<String>,
    pub kind: FieldKind,
    pub required: bool,
}

/// Type-specific configuration of a field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldKind {
    Text(TextVariant),
    Number,
    Date,
    Checklist { items: Vec<String> },
    UserSelect,
    Identifier(IdentifierKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    Short,
    Long,
}

/// Which checksum rule an identifier field validates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Cpf,
    Cnpj,
    /// Dispatches on digit count: 11 digits validate as CPF, 14 as CNPJ.
    Auto,
}

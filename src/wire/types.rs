use ahash::AHashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The camelCase JSON shapes the external data service speaks. These only
/// exist at the boundary: everything past conversion works on the
/// canonical model.

/// A complete board dump: flows with their steps, cards, and recorded
/// movement history.
#[derive(Debug, Serialize, Deserialize)]
pub struct WireBoard {
    pub flows: Vec<WireFlow>,
    #[serde(default)]
    pub cards: Vec<WireCard>,
    #[serde(default)]
    pub history: Vec<WireHistoryEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WireFlow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub steps: Vec<WireStep>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WireStep {
    pub id: String,
    #[serde(alias = "flowId")]
    pub flow_id: String,
    pub position: i64,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(alias = "stepType")]
    pub step_type: String,
    #[serde(default)]
    pub fields: Vec<WireField>,
    #[serde(default, alias = "defaultAssignee")]
    pub default_assignee: Option<String>,
    #[serde(default, alias = "defaultTeam")]
    pub default_team: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WireField {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(alias = "fieldType")]
    pub field_type: String,
    #[serde(default, alias = "isRequired")]
    pub required: bool,
    /// Checklist item names; only meaningful for checklist fields.
    #[serde(default)]
    pub items: Option<Vec<String>>,
    /// "short" or "long"; only meaningful for text fields.
    #[serde(default, alias = "textVariant")]
    pub text_variant: Option<String>,
    /// "cpf", "cnpj" or "auto"; only meaningful for identifier fields.
    #[serde(default, alias = "identifierKind")]
    pub identifier_kind: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WireCard {
    pub id: String,
    #[serde(alias = "flowId")]
    pub flow_id: String,
    #[serde(alias = "stepId")]
    pub step_id: String,
    pub title: String,
    #[serde(default, alias = "cardType")]
    pub kind: Option<String>,
    /// Raw field-value map, loosely typed: scalars, arrays and checklist
    /// objects as the service stored them.
    #[serde(default)]
    pub fields: AHashMap<String, serde_json::Value>,
    #[serde(default)]
    pub checklists: AHashMap<String, AHashMap<String, bool>>,
    #[serde(default, alias = "parentId")]
    pub parent_id: Option<String>,
    #[serde(default, alias = "assigneeId")]
    pub assignee_id: Option<String>,
    #[serde(default, alias = "teamId")]
    pub team_id: Option<String>,
    #[serde(default, alias = "agentIds")]
    pub agent_ids: Vec<String>,
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default, alias = "productId")]
    pub product_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WireHistoryEntry {
    pub id: String,
    #[serde(alias = "cardId")]
    pub card_id: String,
    #[serde(default, alias = "fromStepId")]
    pub from_step_id: Option<String>,
    #[serde(default, alias = "toStepId")]
    pub to_step_id: Option<String>,
    #[serde(alias = "movedAt")]
    pub moved_at: DateTime<Utc>,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default, alias = "actionType")]
    pub action: Option<String>,
    #[serde(default, alias = "fromPosition")]
    pub from_position: Option<i64>,
    #[serde(default, alias = "toPosition")]
    pub to_position: Option<i64>,
    #[serde(default, alias = "fromTitle")]
    pub from_title: Option<String>,
    #[serde(default, alias = "toTitle")]
    pub to_title: Option<String>,
    #[serde(default)]
    pub backward: Option<bool>,
}

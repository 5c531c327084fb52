use super::{Card, Flow};
use crate::error::BoardConversionError;
use crate::history::MovementRecord;
use ahash::AHashMap;

/// The complete canonical dataset for one board: every flow the data service
/// knows about, the cards riding them, and the recorded movement history per
/// card. This is the target structure for any custom data model conversion.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub flows: Vec<Flow>,
    pub cards: Vec<Card>,
    /// Card id to append-only movement records, chronological ascending.
    pub history: AHashMap<String, Vec<MovementRecord>>,
}

impl Board {
    pub fn flow(&self, flow_id: &str) -> Option<&Flow> {
        self.flows.iter().find(|f| f.id == flow_id)
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }
}

/// A trait for custom data models that can be converted into a canonical
/// [`Board`].
///
/// This is the primary extension point for making the engine format-agnostic.
/// By implementing this trait on your own structs, you provide a translation
/// layer that lets the derivation engine work with whatever shape your data
/// service speaks. The crate's own [`wire`](crate::wire) module is one such
/// implementation for a camelCase JSON format.
///
/// # Example
///
/// ```rust
/// use esteira::board::{Board, Flow, IntoBoard, Step, StepKind};
/// use esteira::error::BoardConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStage { id: String, order: i64, name: String }
/// struct MyPipeline { id: String, stages: Vec<MyStage> }
///
/// // 2. Implement `IntoBoard` for your top-level struct.
/// impl IntoBoard for MyPipeline {
///     fn into_board(self) -> Result<Board, BoardConversionError> {
///         let steps = self
///             .stages
///             .into_iter()
///             .map(|stage| Step {
///                 id: stage.id,
///                 flow_id: self.id.clone(),
///                 position: stage.order,
///                 title: stage.name,
///                 color: None,
///                 kind: StepKind::Normal,
///                 fields: vec![],
///                 default_assignee: None,
///                 default_team: None,
///             })
///             .collect();
///
///         Ok(Board {
///             flows: vec![Flow { id: self.id, name: String::new(), steps }],
///             ..Board::default()
///         })
///     }
/// }
/// ```
pub trait IntoBoard {
    /// Consumes the object and converts it into a canonical board dataset.
    fn into_board(self) -> Result<Board, BoardConversionError>;
}

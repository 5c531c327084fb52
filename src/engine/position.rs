use crate::board::Step;
use itertools::Itertools;

/// Current/previous/next pointers resolved against a position-sorted list.
/// All three are None when the card's step id cannot be located, which
/// downstream derivation turns into a fully disabled view.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepPointers<'a> {
    pub current: Option<&'a Step>,
    pub previous: Option<&'a Step>,
    pub next: Option<&'a Step>,
}

/// Steps sorted ascending by position. Ordering is by comparison, not by
/// arithmetic offset; positions need not be contiguous.
pub fn sort_by_position(steps: &[Step]) -> Vec<&Step> {
    steps.iter().sorted_by_key(|step| step.position).collect()
}

/// Locates a step id in a sorted list and resolves its neighbors by
/// adjacency, independent of step kind.
pub fn locate<'a>(sorted: &[&'a Step], step_id: &str) -> StepPointers<'a> {
    match sorted.iter().position(|step| step.id == step_id) {
        Some(index) => StepPointers {
            current: Some(sorted[index]),
            previous: index.checked_sub(1).map(|i| sorted[i]),
            next: sorted.get(index + 1).copied(),
        },
        None => StepPointers::default(),
    }
}

/// Progress across the step list as supplied to the UI, deliberately not
/// the effective cross-flow list, so a cross-flow card shows 0 in a board
/// it does not belong to. `((index + 1) / total) * 100`, or 0 when the
/// list is empty or the id is absent.
pub fn progress_percentage(steps: &[Step], step_id: &str) -> f64 {
    let sorted = sort_by_position(steps);
    if sorted.is_empty() {
        return 0.0;
    }
    match sorted.iter().position(|step| step.id == step_id) {
        Some(index) => ((index + 1) as f64 / sorted.len() as f64) * 100.0,
        None => 0.0,
    }
}

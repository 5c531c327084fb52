use crate::board::{Card, Step};
use crate::service::BoardReader;

/// Picks the step list every position/validation decision runs against.
///
/// If the card's current step occurs in the supplied list, the supplied
/// list is used verbatim. Otherwise the card belongs to a different flow
/// than the one on screen (opened through a parent-card link, say): its own
/// flow's steps are fetched from the data service so the card still shows a
/// real pipeline position. While that fetch is unavailable the supplied
/// list is used as a degraded fallback; the UI never blocks on it, and the
/// caller simply re-derives once the fetch lands.
pub fn resolve_effective_steps(
    card: &Card,
    supplied: &[Step],
    reader: &dyn BoardReader,
) -> Vec<Step> {
    if supplied.iter().any(|step| step.id == card.step_id) {
        return supplied.to_vec();
    }

    match reader.steps_for_flow(&card.flow_id) {
        Ok(steps) => steps,
        Err(err) => {
            log::debug!(
                "cross-flow steps for '{}' unavailable ({}); falling back to supplied list",
                card.flow_id,
                err
            );
            supplied.to_vec()
        }
    }
}

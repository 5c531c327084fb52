use super::FormValues;
use super::identifier;
use crate::board::{FieldDecl, FieldKind, FieldValue, Step};

/// Required fields of the current step not yet satisfied by the live form
/// buffer, in declaration order.
///
/// This is a live gate: the caller re-runs it on every edit, not once at
/// submit time. Backward moves are never gated by it.
pub fn unmet_requirements<'a>(step: &'a Step, form: &FormValues) -> Vec<&'a FieldDecl> {
    step.fields
        .iter()
        .filter(|field| field.required && !is_satisfied(field, form))
        .collect()
}

/// Whether a forward transition out of `step` is currently allowed.
pub fn forward_allowed(step: &Step, form: &FormValues) -> bool {
    unmet_requirements(step, form).is_empty()
}

/// Type-dispatched completeness rule for a single required field.
///
/// - checklist: every configured item checked;
/// - number: satisfied once a value is present (0 counts as filled);
/// - text/date: trimmed value is non-empty;
/// - identifier: non-empty and checksum-valid for its kind;
/// - anything absent: unsatisfied.
fn is_satisfied(field: &FieldDecl, form: &FormValues) -> bool {
    match &field.kind {
        FieldKind::Checklist { items } => {
            let progress = form.checklists.get(&field.id);
            !items.is_empty()
                && items.iter().all(|item| {
                    progress
                        .and_then(|p| p.get(item))
                        .copied()
                        .unwrap_or(false)
                })
        }
        FieldKind::Identifier(kind) => match value_of(field, form) {
            Some(value) => value
                .as_text()
                .is_some_and(|text| !text.trim().is_empty() && identifier::is_valid(*kind, text)),
            None => false,
        },
        _ => match value_of(field, form) {
            Some(value) => is_filled(value),
            None => false,
        },
    }
}

/// Looks a field's value up by id first, then by slug (raw maps may be
/// keyed either way depending on the data service).
fn value_of<'a>(field: &FieldDecl, form: &'a FormValues) -> Option<&'a FieldValue> {
    form.fields.get(&field.id).or_else(|| {
        field
            .slug
            .as_ref()
            .and_then(|slug| form.fields.get(slug.as_str()))
    })
}

fn is_filled(value: &FieldValue) -> bool {
    match value {
        FieldValue::Text(t) => !t.trim().is_empty(),
        FieldValue::Number(_) => true,
        FieldValue::DateIso(d) => !d.trim().is_empty(),
        FieldValue::List(values) => !values.is_empty(),
        FieldValue::Checklist(items) => !items.is_empty() && items.values().all(|&done| done),
    }
}

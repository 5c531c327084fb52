use crate::board::{FieldDecl, FieldKind};

/// Reserved slug routing a field to the responsible-user slot.
pub const ASSIGNED_TO_SLUG: &str = "assigned_to";
/// Reserved slug routing a field to the responsible-team slot.
pub const ASSIGNED_TEAM_SLUG: &str = "assigned_team_id";
/// Reserved slug routing a field to the collaborating-agents slot.
pub const AGENTS_SLUG: &str = "agents";

/// Where a declared field's value is routed during hydration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Collaborating agents; read from the card's dedicated agent set.
    Agents,
    /// Responsible user.
    Assignee,
    /// Responsible team.
    Team,
    /// Everything else: rendered and validated by its [`FieldKind`].
    Generic,
}

/// Classifies a declared field as a system field or a generic one.
///
/// Priority order, first match wins (slug match outranks label heuristic):
///
/// 1. slug is `agents`, or the field is a person selector whose label
///    contains "agents"/"agentes" (case- and diacritic-insensitive);
/// 2. person selector, slug not team/agents, and slug is `assigned_to` or
///    the label contains "responsável";
/// 3. person selector, slug not agents/assigned-to, and slug is
///    `assigned_team_id` or the label contains "time" without also
///    containing "responsável";
/// 4. generic.
///
/// The label fallback is locale-bound: renaming or localizing field labels
/// can misclassify a field. That is accepted: no synonyms are added here,
/// and this function is the heuristic's only home.
pub fn classify(field: &FieldDecl) -> FieldRole {
    let slug = field.slug.as_deref();
    let label = fold_label(&field.label);
    let is_person = matches!(field.kind, FieldKind::UserSelect);

    if slug == Some(AGENTS_SLUG)
        || (is_person && (label.contains("agents") || label.contains("agentes")))
    {
        return FieldRole::Agents;
    }

    if is_person
        && slug != Some(ASSIGNED_TEAM_SLUG)
        && slug != Some(AGENTS_SLUG)
        && (slug == Some(ASSIGNED_TO_SLUG) || label.contains("responsavel"))
    {
        return FieldRole::Assignee;
    }

    if is_person
        && slug != Some(AGENTS_SLUG)
        && slug != Some(ASSIGNED_TO_SLUG)
        && (slug == Some(ASSIGNED_TEAM_SLUG)
            || (label.contains("time") && !label.contains("responsavel")))
    {
        return FieldRole::Team;
    }

    FieldRole::Generic
}

/// Lowercases the label and strips the Portuguese diacritics that occur in
/// the labels the heuristic matches on. Not a general-purpose fold.
fn fold_label(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'â' | 'ã' | 'à' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_field(label: &str, slug: Option<&str>) -> FieldDecl {
        FieldDecl {
            id: "f1".to_string(),
            label: label.to_string(),
            slug: slug.map(str::to_string),
            kind: FieldKind::UserSelect,
            required: false,
        }
    }

    #[test]
    fn slug_outranks_label() {
        // Label says team, slug says assignee: slug wins.
        let field = person_field("Time de vendas", Some(ASSIGNED_TO_SLUG));
        assert_eq!(classify(&field), FieldRole::Assignee);
    }

    #[test]
    fn label_heuristic_is_diacritic_insensitive() {
        let field = person_field("Responsável pela entrega", None);
        assert_eq!(classify(&field), FieldRole::Assignee);
        let field = person_field("RESPONSAVEL", None);
        assert_eq!(classify(&field), FieldRole::Assignee);
    }

    #[test]
    fn team_label_must_not_mention_responsavel() {
        let field = person_field("Time", None);
        assert_eq!(classify(&field), FieldRole::Team);
        // "Time responsável" reads as an assignee label, not a team one.
        let field = person_field("Time responsável", None);
        assert_eq!(classify(&field), FieldRole::Assignee);
    }

    #[test]
    fn agents_slug_wins_regardless_of_kind() {
        let field = FieldDecl {
            id: "f2".to_string(),
            label: "Whatever".to_string(),
            slug: Some(AGENTS_SLUG.to_string()),
            kind: FieldKind::Text(crate::board::TextVariant::Short),
            required: false,
        };
        assert_eq!(classify(&field), FieldRole::Agents);
    }

    #[test]
    fn non_person_label_match_stays_generic() {
        let field = FieldDecl {
            id: "f3".to_string(),
            label: "Tempo de resposta".to_string(),
            slug: None,
            kind: FieldKind::Number,
            required: false,
        };
        assert_eq!(classify(&field), FieldRole::Generic);
    }
}

use crate::lexicon::ConnectorCategory;

/// Evaluate the formula denoted by a connector category for a pair of truth values.
///
/// Negation flags apply to the inputs before the connector itself:
/// a missing flag means "not negated".
pub fn evaluate(p: bool, q: bool, category: ConnectorCategory, negations: &[bool]) -> bool {
    let p = p ^ negations.get(0).copied().unwrap_or(false);
    let q = q ^ negations.get(1).copied().unwrap_or(false);

    match category {
        ConnectorCategory::Conditional
        | ConnectorCategory::Causal
        | ConnectorCategory::Consecutive
        | ConnectorCategory::Exemplifying => !p || q,
        ConnectorCategory::Conjunction | ConnectorCategory::Adversative => p && q,
        ConnectorCategory::Disjunction => p || q,
        ConnectorCategory::Explicative => p == q,
    }
}

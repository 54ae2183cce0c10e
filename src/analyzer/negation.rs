use crate::lexicon::Lexicon;

/// Search negation markers in a clause and remove them.
///
/// The clause is lowercased and trimmed, then each marker is tested in turn against the
/// current state of the text: a leading `"<marker> "` is cut off, otherwise all inner
/// `" <marker> "` occurrences are collapsed into a single space.
/// Successive markers can thus strip overlapping parts of the clause
/// (`"ni siquiera"` is never seen as such as `"ni"` fires first).
///
/// Returns the negation flag and the cleaned text.
pub fn detect_and_strip(lexicon: &Lexicon, clause: &str) -> (bool, String) {
    let mut text = clause.to_lowercase().trim().to_owned();
    let mut negated = false;

    for marker in lexicon.negations() {
        let prefix = format!("{} ", marker);
        let infix = format!(" {} ", marker);
        if text.starts_with(&prefix) {
            negated = true;
            text = text[marker.len()..].trim().to_owned();
        } else if text.contains(&infix) {
            negated = true;
            text = text.replace(&infix, " ").trim().to_owned();
        }
    }

    (negated, text)
}

use crate::lexicon::Lexicon;

/// Find the connector phrase used in a sentence.
///
/// Phrases are tested from the longest to the shortest and the first one found anywhere
/// in the lowercased sentence wins: "siempre que" hides "si", "o bien" hides "o".
pub fn find_connector(lexicon: &Lexicon, sentence: &str) -> Option<&'static str> {
    let text = sentence.to_lowercase();
    lexicon
        .connectors_by_length()
        .iter()
        .copied()
        .find(|phrase| text.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LEXICON;

    #[test]
    fn longest_match() {
        assert_eq!(
            find_connector(&LEXICON, "Siempre que llueva, si hace frío"),
            Some("siempre que")
        );
        assert_eq!(find_connector(&LEXICON, "O bien canta o baila"), Some("o bien"));
        assert_eq!(
            find_connector(&LEXICON, "si no llueve, entonces el suelo está seco"),
            Some("entonces")
        );
    }

    #[test]
    fn plain_substrings() {
        // "o" inside "cielo" is a match as well
        assert_eq!(find_connector(&LEXICON, "El cielo es azul"), Some("o"));
        assert_eq!(find_connector(&LEXICON, "la casa es grande"), None);
        assert_eq!(find_connector(&LEXICON, ""), None);
    }

    #[test]
    fn equal_length_keeps_table_order() {
        // "y" and "o" have the same length, "y" comes first in the lexicon
        assert_eq!(find_connector(&LEXICON, "no hace sol y hace frío"), Some("y"));
    }
}

extern crate natlogic;

use natlogic::lexicon::LEXICON;
use natlogic::{Analyzer, ConnectorCategory, TableError};
use proptest::prelude::*;

#[test]
fn negation_round_trip() {
    let analyzer = Analyzer::default();
    assert_eq!(analyzer.detect_and_strip("no llueve"), (true, "llueve".to_owned()));
}

#[test]
fn longest_connector_wins() {
    let analyzer = Analyzer::default();
    assert_eq!(
        analyzer.find_connector("si puedo, iré siempre que me llames"),
        Some("siempre que")
    );
}

#[test]
fn conditional_with_negated_antecedent() {
    let analyzer = Analyzer::default();
    let parsed = analyzer.parse("Si no llueve, entonces el suelo está seco");
    // "entonces" is longer than "si" and wins
    assert_eq!(parsed.connector, Some("entonces"));
    assert_eq!(parsed.category, Some(ConnectorCategory::Conditional));
    assert_eq!(parsed.symbol, Some("→"));
    assert_eq!(parsed.propositions, vec!["si llueve,", "el suelo está seco"]);
    assert_eq!(parsed.negations, vec![true, false]);

    let table = analyzer.build_truth_table(&parsed).unwrap();
    assert_eq!(table.header()[2], "¬p → q");
    let results: Vec<bool> = table.rows().iter().map(|r| r.result).collect();
    assert_eq!(results, vec![true, true, true, false]);
}

#[test]
fn disjunction_with_negated_consequent() {
    let analyzer = Analyzer::default();
    let parsed = analyzer.parse("Estudia o nunca trabaja");
    assert_eq!(parsed.connector, Some("o"));
    assert_eq!(parsed.category, Some(ConnectorCategory::Disjunction));
    assert_eq!(parsed.symbol, Some("∨"));
    assert_eq!(parsed.negations, vec![false, true]);

    let table = analyzer.build_truth_table(&parsed).unwrap();
    assert_eq!(table.header()[2], "p ∨ ¬q");
    assert_eq!(table.rows()[0].cells(), ["V", "V", "V"]);
    assert_eq!(table.rows()[2].cells(), ["F", "V", "F"]);
}

#[test]
fn connector_letters_inside_words() {
    // the "o" of "no" is a second occurrence of the connector
    let analyzer = Analyzer::default();
    let parsed = analyzer.parse("Estudia o no aprueba el examen");
    assert_eq!(parsed.connector, Some("o"));
    assert_eq!(parsed.propositions, vec!["estudia", "n", "aprueba el examen"]);
    assert_eq!(
        analyzer.build_truth_table(&parsed),
        Err(TableError::WrongClauseCount(3))
    );
}

#[test]
fn single_clause_has_no_table() {
    let analyzer = Analyzer::default();
    let parsed = analyzer.parse("La casa es grande");
    assert_eq!(parsed.connector, None);
    assert_eq!(parsed.propositions, vec!["la casa es grande"]);
    assert_eq!(parsed.negations, vec![false]);

    let table = analyzer.build_truth_table(&parsed);
    assert_eq!(table, Err(TableError::NoConnector));
    assert_eq!(analyzer.format(&table), TableError::NoConnector.to_string());
}

#[test]
fn repeated_connector() {
    let analyzer = Analyzer::default();
    let parsed = analyzer.parse("Canta pero baila pero ríe.");
    assert_eq!(parsed.propositions.len(), 3);
    let table = analyzer.build_truth_table(&parsed);
    assert_eq!(table, Err(TableError::WrongClauseCount(3)));
    assert_eq!(
        analyzer.format(&table),
        "Cannot generate the truth table: expected 2 propositions, found 3"
    );
}

#[test]
fn explicative_table() {
    let analyzer = Analyzer::default();
    let parsed = analyzer.parse("No es inteligente, es decir, no aprende rápido");
    assert_eq!(parsed.category, Some(ConnectorCategory::Explicative));
    assert_eq!(parsed.propositions, vec!["es inteligente,", ", aprende rápido"]);
    let formatted = analyzer.format(&analyzer.build_truth_table(&parsed));
    let expected = "\
=====================
| ¬p | ¬q | ¬p ↔ ¬q |
=====================
| V  | V  |    V    |
| V  | F  |    F    |
| F  | V  |    F    |
| F  | F  |    V    |
=====================";
    assert_eq!(formatted, expected);
}

proptest! {
    #[test]
    fn no_connector_single_clause(sentence in "[bcdfghjklmnpqrstvwxz ]{0,40}") {
        let parsed = Analyzer::default().parse(&sentence);
        prop_assert_eq!(parsed.connector, None);
        prop_assert_eq!(parsed.category, None);
        prop_assert_eq!(parsed.symbol, None);
        prop_assert_eq!(parsed.propositions, vec![sentence.trim().to_owned()]);
        prop_assert_eq!(parsed.negations, vec![false]);
    }

    #[test]
    fn two_clauses_four_rows(
        idx in 0usize..26,
        left in "[bcdfghjklmnpqrstvwxz]{1,10}",
        right in "[bcdfghjklmnpqrstvwxz]{1,10}",
        negated in any::<bool>(),
    ) {
        let analyzer = Analyzer::default();
        let (phrase, category) = LEXICON.entries().nth(idx).unwrap();
        let right = if negated { format!("nunca {}", right) } else { right };
        let parsed = analyzer.parse(&format!("{} {} {}", left, phrase, right));

        prop_assert_eq!(parsed.connector, Some(phrase));
        prop_assert_eq!(parsed.category, Some(category));
        prop_assert_eq!(&parsed.negations, &vec![false, negated]);

        let table = analyzer.build_truth_table(&parsed).unwrap();
        let inputs: Vec<(bool, bool)> = table.rows().iter().map(|r| (r.p, r.q)).collect();
        prop_assert_eq!(inputs, vec![(true, true), (true, false), (false, true), (false, false)]);
        prop_assert_eq!(table.cells().len(), 5);
    }

    #[test]
    fn formatting_errors_is_identity(n in 0usize..10) {
        let err = Err(TableError::WrongClauseCount(n));
        prop_assert_eq!(Analyzer::default().format(&err), TableError::WrongClauseCount(n).to_string());
    }
}

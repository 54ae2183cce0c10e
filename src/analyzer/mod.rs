//! Analyse natural-language sentences into structured propositions.
//!
//! The [`Analyzer`] matches connector phrases and negation markers of the [`Lexicon`]
//! as plain substrings: it does not parse the sentence. A sentence with one recognized
//! connector joining two clauses yields a two-variable formula, for which the
//! truth table can be built and formatted.

mod connector;
mod eval;
mod negation;

use log::{debug, trace};

use crate::helper::error::{NatlogicResult, TableError};
use crate::lexicon::{ConnectorCategory, Lexicon, LEXICON};
use crate::table::TruthTable;

pub use self::connector::find_connector;
pub use self::eval::evaluate;
pub use self::negation::detect_and_strip;

/// Components extracted from a sentence.
///
/// Without connector, the sentence is kept as a single proposition. Otherwise, the list
/// of propositions contains all segments obtained by splitting the sentence on the
/// connector phrase. Each proposition comes with its negation flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedProposition {
    pub connector: Option<&'static str>,
    pub category: Option<ConnectorCategory>,
    pub symbol: Option<&'static str>,
    pub propositions: Vec<String>,
    pub negations: Vec<bool>,
}

impl ParsedProposition {
    /// Iterate over the propositions along with their negation flag
    pub fn clauses(&self) -> impl Iterator<Item = (&str, bool)> {
        self.propositions
            .iter()
            .map(String::as_str)
            .zip(self.negations.iter().copied())
    }
}

/// Stateless analysis service relying on the shared lexicon
#[derive(Copy, Clone)]
pub struct Analyzer {
    lexicon: &'static Lexicon,
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer { lexicon: &LEXICON }
    }
}

impl Analyzer {
    pub fn lexicon(&self) -> &'static Lexicon {
        self.lexicon
    }

    pub fn detect_and_strip(&self, clause: &str) -> (bool, String) {
        detect_and_strip(self.lexicon, clause)
    }

    pub fn find_connector(&self, sentence: &str) -> Option<&'static str> {
        find_connector(self.lexicon, sentence)
    }

    pub fn parse(&self, sentence: &str) -> ParsedProposition {
        let lower = sentence.to_lowercase();
        let text = lower.strip_suffix('.').unwrap_or(&lower);

        let connector = match self.find_connector(text) {
            None => {
                debug!("No connector in \"{}\"", text);
                let (negated, clean) = self.detect_and_strip(text);
                return ParsedProposition {
                    connector: None,
                    category: None,
                    symbol: None,
                    propositions: vec![clean],
                    negations: vec![negated],
                };
            }
            Some(c) => c,
        };

        let category = self.lexicon.category(connector);
        let symbol = category.map(|c| self.lexicon.symbol(c));
        debug!("Connector \"{}\" ({:?}) in \"{}\"", connector, category, text);

        let (negations, propositions): (Vec<bool>, Vec<String>) = text
            .split(connector)
            .map(|part| self.detect_and_strip(part.trim()))
            .unzip();

        let parsed = ParsedProposition {
            connector: Some(connector),
            category,
            symbol,
            propositions,
            negations,
        };
        trace!("{:?}", parsed);
        parsed
    }

    pub fn evaluate(
        &self,
        p: bool,
        q: bool,
        category: ConnectorCategory,
        negations: &[bool],
    ) -> bool {
        evaluate(p, q, category, negations)
    }

    /// Evaluate a connector category given by its label.
    ///
    /// Fails if the label does not denote a known category.
    pub fn evaluate_label(
        &self,
        p: bool,
        q: bool,
        category: &str,
        negations: &[bool],
    ) -> NatlogicResult<bool> {
        let category: ConnectorCategory = category.parse()?;
        Ok(self.evaluate(p, q, category, negations))
    }

    pub fn build_truth_table(&self, parsed: &ParsedProposition) -> Result<TruthTable, TableError> {
        TruthTable::build(parsed)
    }

    /// Render a truth table, or the reason why it could not be built
    pub fn format(&self, table: &Result<TruthTable, TableError>) -> String {
        crate::table::format(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_connector() {
        let parsed = Analyzer::default().parse("La casa es grande.");
        assert_eq!(parsed.connector, None);
        assert_eq!(parsed.category, None);
        assert_eq!(parsed.symbol, None);
        assert_eq!(parsed.propositions, vec!["la casa es grande"]);
        assert_eq!(parsed.negations, vec![false]);
    }

    #[test]
    fn negated_single_clause_is_cleaned() {
        let parsed = Analyzer::default().parse("Nadie canta");
        assert_eq!(parsed.connector, None);
        assert_eq!(parsed.propositions, vec!["canta"]);
        assert_eq!(parsed.negations, vec![true]);
    }

    #[test]
    fn conjunction() {
        let parsed = Analyzer::default().parse("No hace sol y hace frío");
        assert_eq!(parsed.connector, Some("y"));
        assert_eq!(parsed.category, Some(ConnectorCategory::Conjunction));
        assert_eq!(parsed.symbol, Some("∧"));
        assert_eq!(parsed.propositions, vec!["hace sol", "hace frío"]);
        assert_eq!(parsed.negations, vec![true, false]);
    }

    #[test]
    fn only_one_trailing_period() {
        let parsed = Analyzer::default().parse("Canta pero baila..");
        assert_eq!(parsed.propositions, vec!["canta", "baila."]);
    }

    #[test]
    fn split_on_every_occurrence() {
        let parsed = Analyzer::default().parse("Canta pero baila pero ríe");
        assert_eq!(parsed.connector, Some("pero"));
        assert_eq!(parsed.propositions, vec!["canta", "baila", "ríe"]);
        assert_eq!(parsed.negations.len(), parsed.propositions.len());
    }

    #[test]
    fn empty_segments() {
        let parsed = Analyzer::default().parse("Aunque no hace frío, no iremos al parque");
        assert_eq!(parsed.category, Some(ConnectorCategory::Adversative));
        assert_eq!(parsed.propositions, vec!["", "hace frío, no iremos al parque"]);
        assert_eq!(parsed.negations, vec![false, true]);
    }

    #[test]
    fn unknown_label() {
        let analyzer = Analyzer::default();
        assert_eq!(analyzer.evaluate_label(true, false, "disyunción", &[]).unwrap(), true);
        assert!(analyzer.evaluate_label(true, false, "nand", &[]).is_err());
    }
}

//! Static tables of connector phrases, their logical categories and negation markers.
//!
//! The lexicon is built once per process and never changes afterwards: all lookups
//! go through the shared [`LEXICON`] instance.

use once_cell::sync::Lazy;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::helper::error::NatlogicError;

/// Logical relationship denoted by a connector phrase
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConnectorCategory {
    Conditional,
    Conjunction,
    Disjunction,
    Adversative,
    Causal,
    Consecutive,
    Explicative,
    Exemplifying,
}

pub const CATEGORIES: [ConnectorCategory; 8] = [
    ConnectorCategory::Conditional,
    ConnectorCategory::Conjunction,
    ConnectorCategory::Disjunction,
    ConnectorCategory::Adversative,
    ConnectorCategory::Causal,
    ConnectorCategory::Consecutive,
    ConnectorCategory::Explicative,
    ConnectorCategory::Exemplifying,
];

static CONNECTORS: &[(&str, ConnectorCategory)] = &[
    ("si", ConnectorCategory::Conditional),
    ("entonces", ConnectorCategory::Conditional),
    ("siempre que", ConnectorCategory::Conditional),
    ("a condición de que", ConnectorCategory::Conditional),
    ("y", ConnectorCategory::Conjunction),
    ("además", ConnectorCategory::Conjunction),
    ("también", ConnectorCategory::Conjunction),
    ("ni", ConnectorCategory::Conjunction),
    ("o", ConnectorCategory::Disjunction),
    ("o bien", ConnectorCategory::Disjunction),
    ("ya sea", ConnectorCategory::Disjunction),
    ("pero", ConnectorCategory::Adversative),
    ("sin embargo", ConnectorCategory::Adversative),
    ("no obstante", ConnectorCategory::Adversative),
    ("aunque", ConnectorCategory::Adversative),
    ("porque", ConnectorCategory::Causal),
    ("puesto que", ConnectorCategory::Causal),
    ("ya que", ConnectorCategory::Causal),
    ("dado que", ConnectorCategory::Causal),
    ("por lo tanto", ConnectorCategory::Consecutive),
    ("en consecuencia", ConnectorCategory::Consecutive),
    ("por consiguiente", ConnectorCategory::Consecutive),
    ("así que", ConnectorCategory::Consecutive),
    ("es decir", ConnectorCategory::Explicative),
    ("o sea", ConnectorCategory::Explicative),
    ("por ejemplo", ConnectorCategory::Exemplifying),
];

static NEGATIONS: &[&str] = &[
    "no",
    "nunca",
    "jamás",
    "tampoco",
    "ni",
    "ningún",
    "ninguno",
    "nadie",
    "nada",
    "sin",
    "ni siquiera",
];

/// Single-instance lexicon created on first use
pub static LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::new);

pub struct Lexicon {
    entries: &'static [(&'static str, ConnectorCategory)],
    negations: &'static [&'static str],
    by_length: Vec<&'static str>,
}

impl Lexicon {
    fn new() -> Self {
        let mut by_length: Vec<&'static str> = CONNECTORS.iter().map(|(p, _)| *p).collect();
        // Stable sort: phrases of equal length keep the table order
        by_length.sort_by_key(|p| Reverse(p.chars().count()));

        Lexicon {
            entries: CONNECTORS,
            negations: NEGATIONS,
            by_length,
        }
    }

    pub fn category(&self, phrase: &str) -> Option<ConnectorCategory> {
        self.entries
            .iter()
            .find(|(p, _)| *p == phrase)
            .map(|(_, c)| *c)
    }

    pub fn symbol(&self, category: ConnectorCategory) -> &'static str {
        category.symbol()
    }

    pub fn negations(&self) -> &[&'static str] {
        self.negations
    }

    /// Connector phrases, longest first
    pub fn connectors_by_length(&self) -> &[&'static str] {
        &self.by_length
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, ConnectorCategory)> + '_ {
        self.entries.iter().copied()
    }

    pub fn phrases_of(&self, category: ConnectorCategory) -> Vec<&'static str> {
        self.entries()
            .filter(|(_, c)| *c == category)
            .map(|(p, _)| p)
            .collect()
    }
}

impl ConnectorCategory {
    pub fn symbol(self) -> &'static str {
        match self {
            ConnectorCategory::Conditional => "→",
            ConnectorCategory::Conjunction => "∧",
            ConnectorCategory::Disjunction => "∨",
            ConnectorCategory::Adversative => "∧",
            ConnectorCategory::Causal => "→",
            ConnectorCategory::Consecutive => "→",
            ConnectorCategory::Explicative => "↔",
            ConnectorCategory::Exemplifying => "→",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectorCategory::Conditional => "CONDICIONAL",
            ConnectorCategory::Conjunction => "CONJUNCIÓN",
            ConnectorCategory::Disjunction => "DISYUNCIÓN",
            ConnectorCategory::Adversative => "ADVERSATIVO",
            ConnectorCategory::Causal => "CAUSAL",
            ConnectorCategory::Consecutive => "CONSECUTIVO",
            ConnectorCategory::Explicative => "EXPLICATIVO",
            ConnectorCategory::Exemplifying => "EJEMPLIFICATIVO",
        }
    }

    fn english(self) -> &'static str {
        match self {
            ConnectorCategory::Conditional => "conditional",
            ConnectorCategory::Conjunction => "conjunction",
            ConnectorCategory::Disjunction => "disjunction",
            ConnectorCategory::Adversative => "adversative",
            ConnectorCategory::Causal => "causal",
            ConnectorCategory::Consecutive => "consecutive",
            ConnectorCategory::Explicative => "explicative",
            ConnectorCategory::Exemplifying => "exemplifying",
        }
    }
}

fn strip_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            _ => c,
        })
        .collect()
}

impl FromStr for ConnectorCategory {
    type Err = NatlogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = strip_accents(&s.trim().to_lowercase());
        CATEGORIES
            .iter()
            .copied()
            .find(|c| strip_accents(&c.label().to_lowercase()) == key || c.english() == key)
            .ok_or_else(|| NatlogicError::UnknownCategory(s.to_owned()))
    }
}

impl fmt::Display for ConnectorCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

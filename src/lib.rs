//! The `natlogic` crate turns natural-language (Spanish) sentences expressing a logical
//! relationship into structured propositions, and builds the truth table of the
//! corresponding two-variable formula.
//!
//! Recognition relies on plain substring matching of connector phrases and negation
//! markers: see [`analyzer::Analyzer`].

extern crate thiserror;

pub mod analyzer;
pub mod command;
pub mod helper;
pub mod lexicon;
pub mod table;

pub use analyzer::{Analyzer, ParsedProposition};
pub use helper::error::{NatlogicError, NatlogicResult, TableError};
pub use lexicon::ConnectorCategory;
pub use table::TruthTable;

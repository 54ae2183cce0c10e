//! Simple error types and helpers for consistent error handling.
//!
//! It uses the thiserror crate to reduce boilerplate.
use std::io;
use thiserror::Error;

use crate::table::io::FormatError;

#[derive(Error, Debug)]
pub enum NatlogicError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Unknown connector category \"{0}\"")]
    UnknownCategory(String),

    #[error("Invalid truth value \"{0}\" (expected V or F)")]
    TruthValue(String),

    #[error("No proposition was provided")]
    MissingProposition(),

    #[error("Unknown command \"{0}\"")]
    UnknownCommand(String),
}

/// Reasons preventing the construction of a truth table.
///
/// These are regular outcomes of the analysis, which are displayed instead of the table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Cannot generate the truth table: no logical connector was identified")]
    NoConnector,

    #[error("Cannot generate the truth table: expected 2 propositions, found {0}")]
    WrongClauseCount(usize),
}

pub type NatlogicResult<T> = Result<T, NatlogicError>;

pub type EmptyNatlogicResult = NatlogicResult<()>;

//! Truth tables of two-variable formulae and their text rendering

pub mod io;

use itertools::{iproduct, Itertools};
use std::fmt;

use crate::analyzer::{evaluate, ParsedProposition};
use crate::helper::error::TableError;
use crate::lexicon::ConnectorCategory;

/// One combination of input values with the value of the formula
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TruthRow {
    pub p: bool,
    pub q: bool,
    pub result: bool,
}

/// Truth table for a formula `p <op> q`, where each operand may be negated.
#[derive(Clone, Debug, PartialEq)]
pub struct TruthTable {
    category: ConnectorCategory,
    header: [String; 3],
    rows: Vec<TruthRow>,
}

pub fn truth_symbol(b: bool) -> &'static str {
    if b {
        "V"
    } else {
        "F"
    }
}

impl TruthRow {
    pub fn cells(&self) -> [&'static str; 3] {
        [truth_symbol(self.p), truth_symbol(self.q), truth_symbol(self.result)]
    }
}

impl TruthTable {
    /// Build the table of a proposition made of exactly two clauses joined by a known connector.
    pub fn build(parsed: &ParsedProposition) -> Result<TruthTable, TableError> {
        let (category, symbol) = match (parsed.category, parsed.symbol) {
            (Some(c), Some(s)) => (c, s),
            _ => return Err(TableError::NoConnector),
        };
        if parsed.propositions.len() != 2 {
            return Err(TableError::WrongClauseCount(parsed.propositions.len()));
        }

        let negated = |idx: usize| parsed.negations.get(idx).copied().unwrap_or(false);
        let p_label = if negated(0) { "¬p" } else { "p" };
        let q_label = if negated(1) { "¬q" } else { "q" };
        let header = [
            p_label.to_owned(),
            q_label.to_owned(),
            format!("{} {} {}", p_label, symbol, q_label),
        ];

        let rows = iproduct!(vec![true, false], vec![true, false])
            .map(|(p, q)| TruthRow {
                p,
                q,
                result: evaluate(p, q, category, &parsed.negations),
            })
            .collect();

        Ok(TruthTable {
            category,
            header,
            rows,
        })
    }

    pub fn category(&self) -> ConnectorCategory {
        self.category
    }

    pub fn header(&self) -> &[String; 3] {
        &self.header
    }

    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    /// All cells as text, starting with the header row
    pub fn cells(&self) -> Vec<Vec<String>> {
        let mut cells = vec![self.header.to_vec()];
        for row in &self.rows {
            cells.push(row.cells().iter().map(|c| c.to_string()).collect());
        }
        cells
    }
}

/// Render a truth table, or the message explaining why it is missing.
pub fn format(table: &Result<TruthTable, TableError>) -> String {
    match table {
        Ok(t) => t.to_string(),
        Err(e) => e.to_string(),
    }
}

// Fixed-width layout: centered cells, with a border line around the header and at the end
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells = self.cells();
        let widths: Vec<usize> = (0..self.header.len())
            .map(|i| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let lines: Vec<String> = cells
            .iter()
            .map(|row| {
                let content = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, w)| format!("{:^w$}", cell, w = *w))
                    .join(" | ");
                format!("| {} |", content)
            })
            .collect();
        let border = "=".repeat(lines[0].chars().count());

        writeln!(f, "{}", border)?;
        writeln!(f, "{}", lines[0])?;
        writeln!(f, "{}", border)?;
        for line in &lines[1..] {
            writeln!(f, "{}", line)?;
        }
        write!(f, "{}", border)
    }
}

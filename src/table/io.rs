//! Export filters for truth tables.
//!
//! A format is selected by name, or guessed from the extension of the output file.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use thiserror::Error;
use xmlwriter::{Indent, Options, XmlWriter};

use crate::analyzer::ParsedProposition;
use crate::helper::error::{EmptyNatlogicResult, NatlogicResult};
use crate::table::{truth_symbol, TruthTable};

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("No matching format for \"{0}\"")]
    UnknownFormat(String),

    #[error("Could not guess the format of \"{0}\"")]
    NoExtension(String),
}

/// Trait providing the export filter for a format.
pub trait SavingFormat: Sync {
    fn description(&self) -> &str;

    fn save_file(
        &self,
        parsed: &ParsedProposition,
        table: &TruthTable,
        filename: &str,
    ) -> EmptyNatlogicResult {
        let f = File::create(filename)?;
        let mut out = BufWriter::new(f);
        self.write_table(parsed, table, &mut out)?;
        out.flush()?;
        Ok(())
    }

    fn write_table(
        &self,
        parsed: &ParsedProposition,
        table: &TruthTable,
        out: &mut dyn Write,
    ) -> EmptyNatlogicResult;
}

pub struct TextFormat;
pub struct CSVFormat;
pub struct XMLFormat;

pub static FORMATS: &[(&str, &dyn SavingFormat)] = &[
    ("txt", &TextFormat),
    ("csv", &CSVFormat),
    ("xml", &XMLFormat),
];

impl SavingFormat for TextFormat {
    fn description(&self) -> &str {
        "Fixed-width text table"
    }

    fn write_table(
        &self,
        _parsed: &ParsedProposition,
        table: &TruthTable,
        out: &mut dyn Write,
    ) -> EmptyNatlogicResult {
        writeln!(out, "{}", table)?;
        Ok(())
    }
}

impl SavingFormat for CSVFormat {
    fn description(&self) -> &str {
        "Comma-separated values, starting with the header"
    }

    fn write_table(
        &self,
        _parsed: &ParsedProposition,
        table: &TruthTable,
        out: &mut dyn Write,
    ) -> EmptyNatlogicResult {
        for row in table.cells() {
            writeln!(out, "{}", row.iter().join(","))?;
        }
        Ok(())
    }
}

impl SavingFormat for XMLFormat {
    fn description(&self) -> &str {
        "XML document with the propositions and the table"
    }

    fn write_table(
        &self,
        parsed: &ParsedProposition,
        table: &TruthTable,
        out: &mut dyn Write,
    ) -> EmptyNatlogicResult {
        // Text nodes must stay inline to keep clauses and labels unchanged
        let opt = Options {
            indent: Indent::None,
            ..Options::default()
        };
        let mut w = XmlWriter::new(opt);
        w.start_element("truthtable");
        if let Some(connector) = parsed.connector {
            w.write_attribute("connector", connector);
        }
        w.write_attribute("category", table.category().label());
        w.write_attribute("symbol", table.category().symbol());

        for (idx, (text, negated)) in parsed.clauses().enumerate() {
            w.start_element("clause");
            w.write_attribute("index", &(idx + 1));
            w.write_attribute("negated", &negated);
            w.write_text(text);
            w.end_element();
        }

        w.start_element("header");
        for label in table.header() {
            w.start_element("column");
            w.write_text(label);
            w.end_element();
        }
        w.end_element();

        for row in table.rows() {
            w.start_element("row");
            w.write_attribute("p", truth_symbol(row.p));
            w.write_attribute("q", truth_symbol(row.q));
            w.write_attribute("result", truth_symbol(row.result));
            w.end_element();
        }

        writeln!(out, "{}", w.end_document())?;
        Ok(())
    }
}

pub fn get_format(fmt: &str) -> NatlogicResult<&'static dyn SavingFormat> {
    let name = fmt.to_lowercase();
    let name = name.trim();
    FORMATS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, f)| *f)
        .ok_or_else(|| FormatError::UnknownFormat(fmt.to_owned()).into())
}

fn guess_format(filename: &str) -> NatlogicResult<&'static dyn SavingFormat> {
    let ext = Path::new(filename)
        .extension()
        .and_then(OsStr::to_str)
        .ok_or_else(|| FormatError::NoExtension(filename.to_owned()))?;
    get_format(ext)
}

pub fn save_table(
    parsed: &ParsedProposition,
    table: &TruthTable,
    filename: &str,
    fmt: Option<&str>,
) -> EmptyNatlogicResult {
    let format = match fmt {
        None => guess_format(filename)?,
        Some(s) => get_format(s)?,
    };
    format.save_file(parsed, table, filename)
}

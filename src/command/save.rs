use log::info;
use std::ffi::OsString;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyNatlogicResult;
use crate::table::io;

static NAME: &str = "save";
static ABOUT: &str = "Save the truth table of the last analysed sentence";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Set the output file
    output: String,

    /// Enforce the output format (txt, csv, xml)
    #[structopt(short = "F", long)]
    format: Option<String>,
}

pub struct CLI;
impl CLICommand for CLI {
    fn name(&self) -> &'static str {
        NAME
    }

    fn about(&self) -> &'static str {
        ABOUT
    }

    fn aliases(&self) -> &[&'static str] {
        &["export"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyNatlogicResult {
        let config: Config = Config::from_iter(args);

        let analysis = context.last()?;
        let table = analysis.table.as_ref().map_err(Clone::clone)?;
        io::save_table(
            &analysis.parsed,
            table,
            &config.output,
            config.format.as_deref(),
        )?;
        info!("Saved the table of \"{}\" into {}", analysis.sentence, config.output);

        Ok(())
    }
}

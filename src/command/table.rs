use std::ffi::OsString;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyNatlogicResult;

static NAME: &str = "table";
static ABOUT: &str = "Show the truth table of the analysed sentences";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Only show the table of the last sentence
    #[structopt(short, long)]
    last: bool,
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
        &["truth"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyNatlogicResult {
        let config: Config = Config::from_iter(args);

        let analyzer = context.analyzer();
        let analyses = if config.last {
            std::slice::from_ref(context.last()?)
        } else {
            context.analyses()?
        };

        for analysis in analyses {
            if analyses.len() > 1 {
                println!("{}", analysis.sentence);
            }
            println!("{}", analyzer.format(&analysis.table));
            println!();
        }

        Ok(())
    }
}

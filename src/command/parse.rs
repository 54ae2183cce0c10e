use std::ffi::OsString;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyNatlogicResult;

static NAME: &str = "parse";
static ABOUT: &str = "Identify the connector and propositions of a sentence";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// The sentence to analyse, quoted or as separate words.
    /// Unquoted words matching a command name start the next command.
    #[structopt(required = true)]
    words: Vec<String>,
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
        &["analyze", "analyse"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyNatlogicResult {
        let config: Config = Config::from_iter(args);

        let sentence = config.words.join(" ");
        context.analyse(&sentence).print_report();
        println!();

        Ok(())
    }
}

use itertools::Itertools;
use std::ffi::OsString;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyNatlogicResult;
use crate::lexicon::CATEGORIES;

static NAME: &str = "connectors";
static ABOUT: &str = "List the known connectors and negation markers";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {}

pub struct CLI;
impl CLICommand for CLI {
    fn name(&self) -> &'static str {
        NAME
    }
    fn about(&self) -> &'static str {
        ABOUT
    }

    fn aliases(&self) -> &[&'static str] {
        &["lexicon"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyNatlogicResult {
        let _config: Config = Config::from_iter(args);

        let lexicon = context.analyzer().lexicon();
        println!("Connectors");
        println!("==========");
        for category in CATEGORIES.iter() {
            println!(
                "  {:16} {}  {}",
                category.label(),
                category.symbol(),
                lexicon.phrases_of(*category).iter().join(", ")
            );
        }
        println!();
        println!("Negations: {}", lexicon.negations().join(", "));

        Ok(())
    }
}

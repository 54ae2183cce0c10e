use std::ffi::OsString;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyNatlogicResult;

static NAME: &str = "demo";
static ABOUT: &str = "Analyse a set of sample sentences";

/// Sample sentences covering the main connectors, with negations
pub static SAMPLES: &[&str] = &[
    "Si no llueve, entonces el suelo está seco",
    "No hace sol y hace frío",
    "Estudia o no aprueba el examen",
    "No está cansado porque durmió mucho",
    "No fue a clase, por lo tanto no aprobó",
    "No es inteligente, es decir, no aprende rápido",
    "Aunque no hace frío, no iremos al parque",
    "Ya sea no comes o no duermes",
];

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
        &["examples"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyNatlogicResult {
        let _config: Config = Config::from_iter(args);

        for sentence in SAMPLES {
            println!("{}", "=".repeat(50));
            let analyzer = *context.analyzer();
            let analysis = context.analyse(sentence);
            analysis.print_report();
            println!();
            println!("{}", analyzer.format(&analysis.table));
        }

        Ok(())
    }
}

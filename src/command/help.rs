use clap::{crate_name, crate_version};
use std::ffi::OsString;
use structopt::StructOpt;

use crate::command::{self, CLICommand, CommandContext};
use crate::helper::error::EmptyNatlogicResult;
use crate::table::io::FORMATS;

static NAME: &str = "help";
static ABOUT: &str = "List available commands";

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

    fn run(&self, _context: &mut CommandContext, args: &[OsString]) -> EmptyNatlogicResult {
        let _config: Config = Config::from_iter(args);

        println!("{} {}", crate_name!(), crate_version!());
        println!("Usage: {} [COMMAND [ARGS]]... | {} SENTENCE", crate_name!(), crate_name!());
        println!();
        command::COMMANDS.print_commands();
        println!();
        println!("Export formats");
        println!("==============");
        for (name, format) in FORMATS {
            println!("  {:12} {}", name, format.description());
        }
        Ok(())
    }
}

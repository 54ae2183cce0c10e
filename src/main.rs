use log::Level;
use std::env;
use std::process;
use std::str::FromStr;

use natlogic::command::{self, CommandContext};

/// Log level used when NATLOGIC_LOG is not set (or not valid)
const DEFAULT_LEVEL: Level = Level::Warn;

fn main() {
    let level = env::var("NATLOGIC_LOG")
        .ok()
        .and_then(|l| Level::from_str(&l).ok())
        .unwrap_or(DEFAULT_LEVEL);
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("Could not set up logging: {}", e);
    }

    let mut context = CommandContext::default();
    if let Err(e) = command::run(&mut context) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

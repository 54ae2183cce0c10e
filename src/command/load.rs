use log::debug;
use std::ffi::OsString;
use std::fs;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::EmptyNatlogicResult;

static NAME: &str = "load";
static ABOUT: &str = "Analyse all sentences of a text file (one per line)";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Also show the truth table of each sentence
    #[structopt(short, long)]
    table: bool,

    filename: String,
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
        &["batch"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyNatlogicResult {
        // Start by parsing arguments to handle help without any context
        let config: Config = Config::from_iter(args);

        let content = fs::read_to_string(&config.filename)?;
        let sentences = read_sentences(&content);
        debug!("Loaded {} sentences from {}", sentences.len(), &config.filename);

        for sentence in sentences {
            let analyzer = *context.analyzer();
            let analysis = context.analyse(sentence);
            analysis.print_report();
            if config.table {
                println!("{}", analyzer.format(&analysis.table));
            }
            println!();
        }

        Ok(())
    }
}

/// Extract sentences from a text: one per line, skipping empty lines and comments (starting with '#')
pub fn read_sentences(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_lines() {
        let content = "# sample\nSi llueve, entonces hace frío\n\n   \n  Canta y baila  \n#Estudia o trabaja\n";
        assert_eq!(
            read_sentences(content),
            vec!["Si llueve, entonces hace frío", "Canta y baila"]
        );
    }
}

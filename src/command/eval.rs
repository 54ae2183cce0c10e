use std::ffi::OsString;
use structopt::StructOpt;

use crate::command::{CLICommand, CommandContext};
use crate::helper::error::{EmptyNatlogicResult, NatlogicError, NatlogicResult};
use crate::table::truth_symbol;

static NAME: &str = "eval";
static ABOUT: &str = "Evaluate a connector category for given truth values";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Category of the connector (CONDICIONAL, CONJUNCIÓN, disjunction...)
    category: String,

    /// Truth value of the first proposition (V or F)
    p: String,

    /// Truth value of the second proposition (V or F)
    q: String,

    /// Negate the first proposition
    #[structopt(long)]
    neg_p: bool,

    /// Negate the second proposition
    #[structopt(long)]
    neg_q: bool,
}

pub struct CLI;
impl CLICommand for CLI {
    fn name(&self) -> &'static str {
        NAME
    }
    fn about(&self) -> &'static str {
        ABOUT
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyNatlogicResult {
        let config: Config = Config::from_iter(args);

        let p = parse_truth(&config.p)?;
        let q = parse_truth(&config.q)?;
        let result = context.analyzer().evaluate_label(
            p,
            q,
            &config.category,
            &[config.neg_p, config.neg_q],
        )?;

        println!(
            "{}({}, {}) = {}",
            config.category.to_uppercase(),
            truth_symbol(p),
            truth_symbol(q),
            truth_symbol(result)
        );
        Ok(())
    }
}

/// Read a truth value: V/F as in the truth tables, or the usual true/false spellings
fn parse_truth(value: &str) -> NatlogicResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "v" | "verdadero" | "t" | "true" | "1" => Ok(true),
        "f" | "falso" | "false" | "0" => Ok(false),
        _ => Err(NatlogicError::TruthValue(value.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truth_values() {
        assert!(parse_truth("V").unwrap());
        assert!(!parse_truth(" falso ").unwrap());
        assert!(parse_truth("maybe").is_err());
    }

    #[test]
    fn run_eval() {
        let mut context = CommandContext::default();
        let args: Vec<OsString> = ["eval", "condicional", "V", "F", "--neg-q"]
            .iter()
            .map(OsString::from)
            .collect();
        assert!(CLI.run(&mut context, &args).is_ok());

        let args: Vec<OsString> = ["eval", "xor", "V", "F"].iter().map(OsString::from).collect();
        assert!(CLI.run(&mut context, &args).is_err());
    }
}

//! Define commands for the Command Line Interface
//!
//! This module provides facilities to register a collection of commands, where each command,
//! defined in a private submodule, is a thin wrapper over core API features.
//!
//! The CLI enables to chain several commands, each can use and modify a global context, which
//! holds the sentences analysed so far. The global CLI will thus start by searching command names
//! in the full list of arguments. The arguments between two successive commands define the
//! arguments of the first command.
//!
//! # Example
//!
//! The following command:
//!
//! ```natlogic parse "Si llueve, entonces hace frío" table save -F csv table.csv```
//!
//! defines the following subcommands:
//! * **parse** ```"Si llueve, entonces hace frío"```
//! * **table**
//! * **save** ```-F csv table.csv```
//!
//! When the first argument is not a command, all arguments are taken as a sentence to analyse.
//! In chained mode, a word matching a command name ends the sentence: quote such sentences.

use itertools::Itertools;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::sync::Arc;

use crate::analyzer::{Analyzer, ParsedProposition};
use crate::helper::error::{EmptyNatlogicResult, NatlogicError, NatlogicResult, TableError};
use crate::table::TruthTable;

// Use a macro to load all command modules and add them to the list of available commands
macro_rules! cmdmods {
    ( $( $x:ident ),* ) => {
        $( mod $x; )*
        /// Single-instance CommandManager created and filled at runtime
        static COMMANDS: Lazy<CommandManager> = Lazy::new(|| {
            CommandManager::default()
            $(  .register( Arc::new( $x::CLI{}))  )*
        });
    };
}

// Define all available commands
cmdmods!(help, parse, load, demo, table, save, eval, connectors);

/// Split the list of CLI parameters into separate slices for each successive command.
///
/// Scan the list of parameters to search for known commands and will consider that
/// they denote the start of the next command.
pub struct SelectedArgs {
    all_args: Vec<OsString>,
    next_slice: usize,
}

/// Register and retrieve commands
#[derive(Default)]
pub struct CommandManager {
    services: HashMap<&'static str, Arc<dyn CLICommand>>,
    aliases: HashMap<&'static str, &'static str>,
}

impl CommandManager {
    pub fn register(mut self, action: Arc<dyn CLICommand>) -> Self {
        let name = action.name();
        for &alias in action.aliases() {
            self.aliases.insert(alias, name);
        }
        self.services.insert(name, action);
        self
    }

    fn unroll_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).copied().unwrap_or(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(self.unroll_alias(name))
    }

    pub fn get_command(&self, name: &str) -> Option<Arc<dyn CLICommand>> {
        self.services
            .get(self.unroll_alias(name))
            .map(|c| Arc::clone(c))
    }

    pub fn print_commands(&self) {
        println!("Available commands");
        println!("==================");
        for (name, cmd) in self.services.iter().sorted_by_key(|(name, _)| **name) {
            let aliases = cmd.aliases();
            if aliases.is_empty() {
                println!("  {:12} {}", name, cmd.about());
            } else {
                println!("  {:12} {} (alias: {})", name, cmd.about(), aliases.join(", "));
            }
        }
    }
}

/// A sentence with the result of its analysis
pub struct Analysis {
    pub sentence: String,
    pub parsed: ParsedProposition,
    pub table: Result<TruthTable, TableError>,
}

impl Analysis {
    pub fn new(analyzer: &Analyzer, sentence: &str) -> Self {
        let parsed = analyzer.parse(sentence);
        let table = analyzer.build_truth_table(&parsed);
        Analysis {
            sentence: sentence.to_owned(),
            parsed,
            table,
        }
    }

    /// Print the components identified in the sentence
    pub fn print_report(&self) {
        println!("Sentence: {}", self.sentence);
        let parsed = &self.parsed;
        match (parsed.connector, parsed.category, parsed.symbol) {
            (Some(connector), Some(category), Some(symbol)) => {
                println!("Connector: '{}'", connector);
                println!("Category:  {}", category);
                println!("Symbol:    {}", symbol);
            }
            _ => println!("No logical connector found in the sentence"),
        }
        println!("Propositions:");
        for (idx, (text, negated)) in parsed.clauses().enumerate() {
            let status = if negated { "negated" } else { "not negated" };
            println!("  P{}: {} ({})", idx + 1, text, status);
        }
    }
}

/// The execution context to allow successive commands to share the analysed sentences
#[derive(Default)]
pub struct CommandContext {
    analyzer: Analyzer,
    analyses: Vec<Analysis>,
}

impl CommandContext {
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Analyse a new sentence and keep the result
    pub fn analyse(&mut self, sentence: &str) -> &Analysis {
        debug!("Analysing \"{}\"", sentence);
        let analysis = Analysis::new(&self.analyzer, sentence);
        self.analyses.push(analysis);
        &self.analyses[self.analyses.len() - 1]
    }

    pub fn analyses(&self) -> NatlogicResult<&[Analysis]> {
        if self.analyses.is_empty() {
            return Err(NatlogicError::MissingProposition());
        }
        Ok(&self.analyses)
    }

    pub fn last(&self) -> NatlogicResult<&Analysis> {
        self.analyses
            .last()
            .ok_or(NatlogicError::MissingProposition())
    }
}

/// API for individual commands
pub trait CLICommand: Sync + Send {
    fn name(&self) -> &'static str;

    fn about(&self) -> &'static str;

    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyNatlogicResult;
}

pub fn help_cmd(context: &mut CommandContext) -> EmptyNatlogicResult {
    run_named(context, "help", &[])
}

fn run_named(context: &mut CommandContext, name: &str, args: &[OsString]) -> EmptyNatlogicResult {
    let cmd = COMMANDS
        .get_command(name)
        .ok_or_else(|| NatlogicError::UnknownCommand(name.to_owned()))?;
    let mut full_args = vec![OsString::from(name)];
    full_args.extend_from_slice(args);
    cmd.run(context, &full_args)
}

/// Run all commands given on the command line
pub fn run(context: &mut CommandContext) -> EmptyNatlogicResult {
    run_selected(context, SelectedArgs::new())
}

/// Run a list of commands, or analyse a bare sentence
pub fn run_args(context: &mut CommandContext, all_args: Vec<OsString>) -> EmptyNatlogicResult {
    run_selected(context, SelectedArgs::from_args(all_args))
}

fn run_selected(context: &mut CommandContext, mut args: SelectedArgs) -> EmptyNatlogicResult {
    if !args.has_next() {
        return help_cmd(context);
    }

    if !args.next_is_command() {
        // A bare sentence: analyse it and show its truth table
        let sentence = args.all_args.clone();
        run_named(context, "parse", &sentence)?;
        return run_named(context, "table", &[]);
    }

    while args.has_next() {
        args.parse_next(context)?;
    }
    Ok(())
}

impl SelectedArgs {
    pub fn new() -> Self {
        Self::from_args(env::args_os().skip(1).collect())
    }

    pub fn from_args(all_args: Vec<OsString>) -> Self {
        SelectedArgs {
            all_args,
            next_slice: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.next_slice < self.all_args.len()
    }

    pub fn next_is_command(&self) -> bool {
        self.has_next() && COMMANDS.contains(&self.all_args[self.next_slice].to_string_lossy())
    }

    pub fn parse_next(&mut self, context: &mut CommandContext) -> EmptyNatlogicResult {
        self.run_next_command(context, &COMMANDS)
    }

    fn run_next_command(
        &mut self,
        context: &mut CommandContext,
        manager: &CommandManager,
    ) -> EmptyNatlogicResult {
        let next_command = self.all_args[self.next_slice].to_string_lossy().into_owned();
        let cmd = match manager.get_command(&next_command) {
            None => return Err(NatlogicError::UnknownCommand(next_command)),
            Some(c) => c,
        };

        let next_args = self.scan();

        cmd.run(context, next_args)
    }

    pub fn scan(&mut self) -> &[OsString] {
        let start = self.next_slice;

        // Find the end of the next slice!
        let mut end = self.all_args.len();
        for i in start + 1..end {
            if COMMANDS.contains(&self.all_args[i].to_string_lossy()) {
                end = i;
                break;
            }
        }

        self.next_slice = end;
        &self.all_args[start..end]
    }
}

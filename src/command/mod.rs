//! Define commands for the Command Line Interface
//!
//! This module provides facilities to register a collection of commands, where each command,
//! defined in a private submodule, is a thin wrapper over core API features.
//!
//! The CLI enables to chain several commands, each can use and modify a global context holding
//! the selected expression. The global CLI will thus start by searching command names in the full
//! list of arguments. The arguments between two successive commands define the arguments of the
//! first command.
//!
//! # Example
//!
//! The following command:
//!
//! ```truthtab select majority table --plain show --debug```
//!
//! defines the following subcommands:
//! * **select** ```majority```
//! * **table** ```--plain```
//! * **show** ```--debug```

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::ffi::OsString;
use std::sync::Arc;

use log::debug;
use structopt::StructOpt;

use crate::func::expr::Expr;
use crate::func::table::{Glyphs, TruthTable};
use crate::helper::error::{EmptyTruthResult, TruthError, TruthResult};

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
cmdmods!(help, select, show, table, eval, ops);

/// Run the demonstration: truth table of the demo expression followed by its structure
pub fn demo_cmd(context: &mut CommandContext) -> EmptyTruthResult {
    run_command(context, &[OsString::from("select"), OsString::from("demo")])?;
    print!("{}", demo_output(context.get_selection()?)?);
    Ok(())
}

/// Truth table of a selected expression with the default glyphs, then its debug form
pub fn demo_output(selection: &Selection) -> TruthResult<String> {
    let table = TruthTable::build(&selection.expr, selection.variables.as_slice())?;
    Ok(format!(
        "{}{:?}\n",
        table.render(&Glyphs::default()),
        selection.expr
    ))
}

pub fn help_cmd(context: &mut CommandContext) -> EmptyTruthResult {
    run_command(context, &[OsString::from("help")])
}

/// Run a single command: the first argument is the name of the command
pub fn run_command(context: &mut CommandContext, args: &[OsString]) -> EmptyTruthResult {
    let name = args.first().and_then(|a| a.to_str()).unwrap_or("");
    match COMMANDS.get_command(name) {
        None => Err(TruthError::UnknownCommand(name.to_owned())),
        Some(cmd) => {
            debug!("Running command {:?}", args);
            cmd.run(context, args)
        }
    }
}

/// Parse the arguments of a command.
///
/// Help and version requests are printed and reported as None.
pub fn parse_config<T: StructOpt>(args: &[OsString]) -> TruthResult<Option<T>> {
    match T::from_iter_safe(args) {
        Ok(config) => Ok(Some(config)),
        Err(e) => match e.kind {
            clap::ErrorKind::HelpDisplayed | clap::ErrorKind::VersionDisplayed => {
                println!("{}", e.message);
                Ok(None)
            }
            _ => Err(e.into()),
        },
    }
}

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
        for alias in action.aliases().iter() {
            self.aliases.insert(alias, name);
        }
        self.services.insert(name, action);
        self
    }

    fn unroll_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).unwrap_or(&name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(self.unroll_alias(name))
    }

    pub fn get_command(&self, name: &str) -> Option<Arc<dyn CLICommand>> {
        self.services.get(self.unroll_alias(name)).map(Arc::clone)
    }

    pub fn print_commands(&self) {
        println!("Available commands");
        println!("==================");
        let mut names: Vec<_> = self.services.keys().collect();
        names.sort();
        for name in names {
            println!("  {:20} {}", name, self.services[name].about());
        }
    }
}

/// The execution context to allow successive commands to share the selected expression
#[derive(Default)]
pub struct CommandContext {
    selected: Option<Selection>,
}

/// An expression and the ordered list of its variables
#[derive(Clone)]
pub struct Selection {
    pub name: String,
    pub expr: Expr,
    pub variables: Vec<String>,
}

impl CommandContext {
    pub fn get_selection(&self) -> TruthResult<&Selection> {
        self.selected.as_ref().ok_or(TruthError::MissingExpression())
    }

    pub fn select(&mut self, selection: Selection) {
        self.selected = Some(selection);
    }
}

/// API for individual commands
pub trait CLICommand: Sync + Send {
    fn name(&self) -> &'static str;

    fn about(&self) -> &'static str;

    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyTruthResult;
}

impl SelectedArgs {
    /// Use the arguments of the current process, skipping the program name
    pub fn new() -> Self {
        Self::from_args(std::env::args_os().skip(1))
    }

    pub fn from_args<I: IntoIterator<Item = OsString>>(args: I) -> Self {
        SelectedArgs {
            all_args: args.into_iter().collect(),
            next_slice: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all_args.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.next_slice < self.all_args.len()
    }

    pub fn parse_next(&mut self, context: &mut CommandContext) -> EmptyTruthResult {
        let cur = self.all_args[self.next_slice].to_string_lossy().into_owned();
        if !COMMANDS.contains(&cur) {
            self.next_slice += 1;
            return Err(TruthError::UnknownCommand(cur));
        }
        let next_args = self.scan();
        run_command(context, next_args)
    }

    pub fn scan(&mut self) -> &[OsString] {
        let start = self.next_slice;

        // Find the end of the next slice!
        let mut end = self.all_args.len();
        for i in start + 1..end {
            if let Some(cur) = self.all_args[i].to_str() {
                if COMMANDS.contains(cur) {
                    end = i;
                    break;
                }
            }
        }

        self.next_slice = end;
        &self.all_args[start..end]
    }
}

impl Default for SelectedArgs {
    fn default() -> Self {
        Self::new()
    }
}

use std::ffi::OsString;

use log::debug;
use structopt::StructOpt;

use crate::command::{parse_config, CLICommand, CommandContext, Selection};
use crate::func::catalog;
use crate::helper::error::{EmptyTruthResult, TruthError};

static NAME: &str = "select";
static ABOUT: &str = "Select a named expression from the catalog";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// List the available expressions
    #[structopt(short, long)]
    list: bool,

    /// Name of the expression
    #[structopt(required_unless = "list")]
    name: Option<String>,
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
        &["load"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyTruthResult {
        let config: Config = match parse_config(args)? {
            None => return Ok(()),
            Some(c) => c,
        };

        if config.list {
            for sample in catalog::CATALOG.iter() {
                println!("  {:10} {:10} {}", sample.name, sample.variables, sample.about);
            }
            return Ok(());
        }

        let name = config
            .name
            .ok_or_else(|| TruthError::UnknownExpression(String::new()))?;
        let sample = catalog::get(&name)?;
        let selection = Selection {
            expr: sample.build()?,
            variables: sample.names()?,
            name,
        };
        debug!("Selected {}: {}", selection.name, selection.expr);
        context.select(selection);
        Ok(())
    }
}

use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{parse_config, CLICommand, CommandContext};
use crate::helper::error::EmptyTruthResult;

static NAME: &str = "show";
static ABOUT: &str = "Display the selected expression";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Show the structure of the expression instead of its readable form
    #[structopt(short, long)]
    debug: bool,
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
        &["display", "print"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyTruthResult {
        let config: Config = match parse_config(args)? {
            None => return Ok(()),
            Some(c) => c,
        };
        let selection = context.get_selection()?;

        if config.debug {
            println!("{:?}", selection.expr);
        } else {
            println!("{}", selection.expr);
        }
        Ok(())
    }
}

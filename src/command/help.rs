use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{parse_config, CLICommand, CommandContext, COMMANDS};
use crate::helper::error::EmptyTruthResult;

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

    fn run(&self, _context: &mut CommandContext, args: &[OsString]) -> EmptyTruthResult {
        if parse_config::<Config>(args)?.is_some() {
            COMMANDS.print_commands();
        }
        Ok(())
    }
}

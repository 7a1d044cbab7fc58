use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{parse_config, CLICommand, CommandContext};
use crate::func::operation::Operation;
use crate::helper::error::EmptyTruthResult;

static NAME: &str = "ops";
static ABOUT: &str = "List the supported operations";

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
        &["operations"]
    }

    fn run(&self, _context: &mut CommandContext, args: &[OsString]) -> EmptyTruthResult {
        if parse_config::<Config>(args)?.is_none() {
            return Ok(());
        }
        for op in Operation::ALL.iter() {
            println!("  {:6} {:8} \"{}\"", op.name(), op.arity().to_string(), op.symbol());
        }
        Ok(())
    }
}

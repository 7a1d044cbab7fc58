use std::collections::HashMap;
use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{parse_config, CLICommand, CommandContext};
use crate::helper::error::{EmptyTruthResult, TruthError, TruthResult};

static NAME: &str = "eval";
static ABOUT: &str = "Evaluate the selected expression for a given assignment";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Values of the variables, as NAME=VALUE with 0/1 or true/false
    values: Vec<String>,
}

pub struct CLI;
impl CLICommand for CLI {
    fn name(&self) -> &'static str {
        NAME
    }

    fn about(&self) -> &'static str {
        ABOUT
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyTruthResult {
        let config: Config = match parse_config(args)? {
            None => return Ok(()),
            Some(c) => c,
        };
        let selection = context.get_selection()?;
        let state = parse_assignment(&config.values)?;

        let result = selection.expr.eval(&state)?;
        println!("{} = {}", selection.expr, result as u8);
        Ok(())
    }
}

fn parse_assignment(values: &[String]) -> TruthResult<HashMap<String, bool>> {
    let mut state = HashMap::new();
    for item in values {
        let invalid = || TruthError::InvalidAssignment(item.clone());
        let (name, value) = match item.split_once('=') {
            None => return Err(invalid()),
            Some((n, v)) => (n.trim(), v.trim()),
        };
        let value = match value.to_ascii_lowercase().as_str() {
            "1" | "true" => true,
            "0" | "false" => false,
            _ => return Err(invalid()),
        };
        if name.is_empty() {
            return Err(invalid());
        }
        state.insert(name.to_owned(), value);
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn assignment_items() {
        let state = parse_assignment(&items(&["A=1", "B = false", "C=TRUE"])).unwrap();
        assert_eq!(state.get("A"), Some(&true));
        assert_eq!(state.get("B"), Some(&false));
        assert_eq!(state.get("C"), Some(&true));
    }

    #[test]
    fn invalid_items() {
        for bad in &["A", "A=2", "=1", "A=yes"] {
            assert!(matches!(
                parse_assignment(&items(&[bad])),
                Err(TruthError::InvalidAssignment(_))
            ));
        }
    }
}

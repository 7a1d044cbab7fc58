use std::ffi::OsString;

use structopt::StructOpt;

use crate::command::{parse_config, CLICommand, CommandContext, Selection};
use crate::func::table::{Glyphs, TruthTable};
use crate::func::variables::split_names;
use crate::helper::error::{EmptyTruthResult, TruthError, TruthResult};

static NAME: &str = "table";
static ABOUT: &str = "Print the truth table of the selected expression";

#[derive(Debug, StructOpt)]
#[structopt(name=NAME, about=ABOUT)]
struct Config {
    /// Use 0 and 1 to display bits
    #[structopt(short, long)]
    plain: bool,

    /// Glyph used for false bits
    #[structopt(long)]
    zero: Option<char>,

    /// Glyph used for true bits
    #[structopt(long)]
    one: Option<char>,

    /// Space or comma separated order of the columns
    #[structopt(short, long)]
    order: Option<String>,
}

impl Config {
    fn glyphs(&self) -> Glyphs {
        let base = if self.plain {
            Glyphs::plain()
        } else {
            Glyphs::default()
        };
        Glyphs {
            zero: self.zero.unwrap_or(base.zero),
            one: self.one.unwrap_or(base.one),
        }
    }

    /// Columns of the table: the variables of the selection, optionally reordered
    fn columns(&self, selection: &Selection) -> TruthResult<Vec<String>> {
        let order = match &self.order {
            None => return Ok(selection.variables.clone()),
            Some(o) => split_names(o)?,
        };
        if let Some(extra) = order.iter().find(|n| !selection.variables.contains(n)) {
            return Err(TruthError::InvalidOrder(extra.clone()));
        }
        if let Some(missing) = selection.variables.iter().find(|v| !order.contains(v)) {
            return Err(TruthError::InvalidOrder(missing.clone()));
        }
        Ok(order)
    }
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
        &["tt"]
    }

    fn run(&self, context: &mut CommandContext, args: &[OsString]) -> EmptyTruthResult {
        let config: Config = match parse_config(args)? {
            None => return Ok(()),
            Some(c) => c,
        };
        let selection = context.get_selection()?;

        let order = config.columns(selection)?;
        let table = TruthTable::build(&selection.expr, order.as_slice())?;
        print!("{}", table.render(&config.glyphs()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::catalog;

    fn config(args: &[&str]) -> Config {
        Config::from_iter(std::iter::once(NAME).chain(args.iter().copied()))
    }

    fn selection(name: &str) -> Selection {
        let sample = catalog::get(name).unwrap();
        Selection {
            name: name.to_owned(),
            expr: sample.build().unwrap(),
            variables: sample.names().unwrap(),
        }
    }

    #[test]
    fn glyph_options() {
        assert_eq!(config(&[]).glyphs(), Glyphs::default());
        assert_eq!(config(&["--plain"]).glyphs(), Glyphs::plain());
        assert_eq!(
            config(&["--plain", "--one", "T"]).glyphs(),
            Glyphs { zero: '0', one: 'T' }
        );
        assert_eq!(
            config(&["--zero", ".", "--one", "x"]).glyphs(),
            Glyphs { zero: '.', one: 'x' }
        );
    }

    #[test]
    fn column_order() {
        let xor = selection("xor");
        assert_eq!(config(&[]).columns(&xor).unwrap(), vec!["A", "B"]);
        assert_eq!(
            config(&["--order", "B, A"]).columns(&xor).unwrap(),
            vec!["B", "A"]
        );
    }

    #[test]
    fn order_with_unknown_variable() {
        let xor = selection("xor");
        match config(&["--order", "A B Z"]).columns(&xor) {
            Err(TruthError::InvalidOrder(n)) => assert_eq!(n, "Z"),
            _ => panic!("Z is not a variable of the expression"),
        }
    }

    #[test]
    fn order_with_missing_variable() {
        let xor = selection("xor");
        match config(&["-o", "B"]).columns(&xor) {
            Err(TruthError::InvalidOrder(n)) => assert_eq!(n, "A"),
            _ => panic!("A is missing from the order"),
        }
    }

    #[test]
    fn reordered_table() {
        let mut context = CommandContext::default();
        context.select(selection("implies"));
        let args: Vec<OsString> = ["table", "--order", "B A", "--plain"]
            .iter()
            .map(OsString::from)
            .collect();
        CLI.run(&mut context, &args).unwrap();

        let order = config(&["--order", "Z A B"]);
        let sel = context.get_selection().unwrap();
        assert!(matches!(
            order.columns(sel),
            Err(TruthError::InvalidOrder(_))
        ));
    }
}

//! Exhaustive enumeration of the assignments of an ordered list of variables.

use std::fmt;

use bit_set::BitSet;
use itertools::Itertools;
use log::debug;

use crate::func::expr::Expr;
use crate::func::variables::State;
use crate::helper::error::{TruthError, TruthResult};

/// Largest number of variables accepted in a truth table
pub static MAX_VARIABLES: usize = 20;

/// Display transform for the bits of a truth table
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glyphs {
    pub zero: char,
    pub one: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs { zero: '-', one: '#' }
    }
}

impl Glyphs {
    pub fn plain() -> Self {
        Glyphs { zero: '0', one: '1' }
    }

    pub fn glyph(&self, bit: u8) -> char {
        if bit == 0 {
            self.zero
        } else {
            self.one
        }
    }
}

/// One assignment and the corresponding value of the expression
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub index: usize,
    pub bits: Vec<u8>,
    pub result: u8,
}

pub struct TruthTable {
    expr: Expr,
    variables: Vec<String>,
    rows: Vec<Row>,
    on_set: BitSet,
}

impl TruthTable {
    /// Enumerate all assignments of the given variables, the first one being the most
    /// significant bit of the row index.
    pub fn build<S: AsRef<str>>(expr: &Expr, names: &[S]) -> TruthResult<Self> {
        let variables: Vec<String> = names.iter().map(|n| n.as_ref().to_owned()).collect();
        if let Some(dup) = variables.iter().duplicates().next() {
            return Err(TruthError::DuplicateVariable(dup.clone()));
        }
        if variables.len() > MAX_VARIABLES {
            return Err(TruthError::TooManyVariables(variables.len()));
        }
        debug!("Building truth table of {} over {} variables", expr, variables.len());

        let count = 1usize << variables.len();
        let mut rows = Vec::with_capacity(count);
        let mut on_set = BitSet::with_capacity(count);
        for index in 0..count {
            let state = State::from_index(&variables, index);
            let result = expr.eval(&state)?;
            if result {
                on_set.insert(index);
            }
            rows.push(Row {
                index,
                bits: state.into_bits(),
                result: result as u8,
            });
        }

        Ok(TruthTable {
            expr: expr.clone(),
            variables,
            rows,
            on_set,
        })
    }

    /// Build the table using the variables of the expression in order of appearance
    pub fn for_expr(expr: &Expr) -> TruthResult<Self> {
        let names = expr.variables();
        Self::build(expr, names.as_slice())
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of the rows for which the expression is true
    pub fn on_set(&self) -> &BitSet {
        &self.on_set
    }

    pub fn count_true(&self) -> usize {
        self.on_set.len()
    }

    pub fn render(&self, glyphs: &Glyphs) -> String {
        format!("{}", DisplayTable { table: self, glyphs })
    }
}

struct DisplayTable<'a> {
    table: &'a TruthTable,
    glyphs: &'a Glyphs,
}

impl<'a> fmt::Display for DisplayTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in &self.table.variables {
            write!(f, "{} ", v)?;
        }
        writeln!(f, "   {}", self.table.expr)?;
        for row in &self.table.rows {
            for bit in &row.bits {
                write!(f, "{} ", self.glyphs.glyph(*bit))?;
            }
            writeln!(f, "   {}", self.glyphs.glyph(row.result))?;
        }
        Ok(())
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            DisplayTable {
                table: self,
                glyphs: &Glyphs::default()
            }
        )
    }
}

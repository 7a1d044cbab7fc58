//! Simple error types and helpers for consistent error handling.
//!
//! It uses the thiserror crate to reduce boilerplate.
use thiserror::Error;

use crate::func::operation::Operation;

#[derive(Error, Debug)]
pub enum TruthError {
    #[error("Variable \"{0}\" is missing from the assignment")]
    UnknownVariable(String),

    #[error("Unsupported operand for {op}: expected an expression, found {kind}")]
    UnsupportedOperand { op: Operation, kind: &'static str },

    #[error("Invalid variable name: \"{0}\"")]
    InvalidName(String),

    #[error("Duplicate variable: \"{0}\"")]
    DuplicateVariable(String),

    #[error("Too many variables for a truth table: {0}")]
    TooManyVariables(usize),

    #[error("No expression named \"{0}\"")]
    UnknownExpression(String),

    #[error("Column order must list the variables of the expression, invalid: \"{0}\"")]
    InvalidOrder(String),

    #[error("Unknown command \"{0}\"")]
    UnknownCommand(String),

    #[error("Invalid assignment \"{0}\", expected NAME=VALUE")]
    InvalidAssignment(String),

    #[error("No expression was selected")]
    MissingExpression(),

    #[error("Command line error: {0}")]
    Cli(#[from] clap::Error),
}

/// Operand slots that do not match the arity of an operation
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ArityError {
    #[error("{0} is unary: the right operand must be absent")]
    UnexpectedRight(Operation),

    #[error("{0} requires a left operand")]
    MissingLeft(Operation),

    #[error("{0} is binary: the right operand is missing")]
    MissingRight(Operation),
}

pub type TruthResult<T> = Result<T, TruthError>;

pub type EmptyTruthResult = TruthResult<()>;

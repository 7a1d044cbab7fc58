//! The `truthtab` crate provides a small Boolean expression tree over named variables:
//! expressions are composed with the usual operators, evaluated under an assignment of
//! their variables and tabulated exhaustively.

extern crate thiserror;

pub mod command;
pub mod func;
pub mod helper;

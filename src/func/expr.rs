use std::fmt;
use std::rc::Rc;

use core::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not};

use log::trace;

use crate::func::operation::Operation;
use crate::func::variables::Assignment;
use crate::helper::error::{TruthError, TruthResult};

/* ************************************************************************************* */
/* ************************ Data structures and basic operations *********************** */
/* ************************************************************************************* */

/// Immutable node of a Boolean expression tree.
///
/// Expressions do not convert to `bool`: they have to be evaluated under an assignment first.
///
/// ```compile_fail
/// use truthtab::func::expr::Expr;
///
/// let e = Expr::var("A") & Expr::var("B");
/// if e {
///     println!("always true?");
/// }
/// ```
#[derive(Clone, PartialEq)]
pub struct Expr {
    left: Operand,
    op: Operation,
    right: Option<Operand>,
}

/// Operand of an expression node
#[derive(Clone, PartialEq)]
pub enum Operand {
    Node(Rc<Expr>),
    Var(String),
    Const(bool),
}

impl Operand {
    /// Short name of the kind of operand, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Node(_) => "expression",
            Operand::Var(_) => "variable identifier",
            Operand::Const(_) => "constant",
        }
    }

    fn depth(&self) -> usize {
        match self {
            Operand::Node(e) => e.depth(),
            _ => 0,
        }
    }

    fn eval(&self, state: &dyn Assignment) -> TruthResult<bool> {
        match self {
            Operand::Node(e) => e._eval(state),
            Operand::Var(name) => state
                .value(name)
                .ok_or_else(|| TruthError::UnknownVariable(name.clone())),
            Operand::Const(b) => Ok(*b),
        }
    }
}

impl From<Expr> for Operand {
    fn from(e: Expr) -> Self {
        Operand::Node(Rc::new(e))
    }
}

impl From<&Expr> for Operand {
    fn from(e: &Expr) -> Self {
        Operand::Node(Rc::new(e.clone()))
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Const(b)
    }
}

impl From<&str> for Operand {
    fn from(name: &str) -> Self {
        Operand::Var(name.to_owned())
    }
}

impl Expr {
    /// Build a node without checking the arity: mismatches are reported when evaluating
    pub fn new(left: Operand, op: Operation, right: Option<Operand>) -> Self {
        Expr { left, op, right }
    }

    /// A variable: an identifier without operation
    pub fn var<S: Into<String>>(name: S) -> Self {
        Self::new(Operand::Var(name.into()), Operation::NOOP, None)
    }

    pub fn constant(b: bool) -> Self {
        Self::new(Operand::Const(b), Operation::NOOP, None)
    }

    pub fn left(&self) -> &Operand {
        &self.left
    }

    pub fn op(&self) -> Operation {
        self.op
    }

    pub fn right(&self) -> Option<&Operand> {
        self.right.as_ref()
    }

    fn unary(&self, op: Operation) -> Self {
        Self::new(self.into(), op, None)
    }

    fn binary(&self, op: Operation, e: &Expr) -> Self {
        Self::new(self.into(), op, Some(e.into()))
    }

    pub fn not(&self) -> Self {
        self.unary(Operation::NOT)
    }

    pub fn and(&self, e: &Expr) -> Self {
        self.binary(Operation::AND, e)
    }

    pub fn or(&self, e: &Expr) -> Self {
        self.binary(Operation::OR, e)
    }

    pub fn xor(&self, e: &Expr) -> Self {
        self.binary(Operation::XOR, e)
    }

    /// Combine with an arbitrary operand using a binary operation.
    ///
    /// Only nested expressions are accepted: raw identifiers and constants must be wrapped
    /// into an expression first.
    pub fn compose(&self, op: Operation, other: Operand) -> TruthResult<Self> {
        match other {
            Operand::Node(_) if !op.is_unary() => Ok(Self::new(self.into(), op, Some(other))),
            _ => Err(TruthError::UnsupportedOperand {
                op,
                kind: other.kind(),
            }),
        }
    }

    /// Number of operation levels: leaf operands do not count
    pub fn depth(&self) -> usize {
        let r = self.right.as_ref().map(Operand::depth).unwrap_or(0);
        1 + self.left.depth().max(r)
    }

    /// List the variable identifiers in order of first appearance
    pub fn variables(&self) -> Vec<String> {
        let mut names = vec![];
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<String>) {
        for operand in std::iter::once(&self.left).chain(self.right.iter()) {
            match operand {
                Operand::Node(e) => e.collect_variables(names),
                Operand::Var(name) => {
                    if !names.contains(name) {
                        names.push(name.clone());
                    }
                }
                Operand::Const(_) => (),
            }
        }
    }
}

/* ************************************************************************************* */
/* ************************************* Evaluation ************************************ */
/* ************************************************************************************* */

impl Expr {
    /// Evaluate this expression for the given assignment of its variables.
    ///
    /// Fails if a variable is not assigned.
    ///
    /// # Panics
    ///
    /// If a node was built with operands that do not match the arity of its operation.
    pub fn eval<A: Assignment>(&self, state: &A) -> TruthResult<bool> {
        self._eval(state)
    }

    fn _eval(&self, state: &dyn Assignment) -> TruthResult<bool> {
        let left = self.left.eval(state)?;
        let right = match &self.right {
            None => None,
            Some(r) => Some(r.eval(state)?),
        };
        let result = self.op.apply(Some(left), right);
        trace!("{} -> {}", self, result);
        Ok(result)
    }
}

/* ************************************************************************************* */
/* ************************************* Formatting ************************************ */
/* ************************************************************************************* */

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Node(e) => write!(f, "{}", e),
            Operand::Var(name) => write!(f, "{}", name),
            Operand::Const(true) => write!(f, "1"),
            Operand::Const(false) => write!(f, "0"),
        }
    }
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Node(e) => write!(f, "{:?}", e),
            Operand::Var(name) => write!(f, "'{}'", name),
            Operand::Const(true) => write!(f, "True"),
            Operand::Const(false) => write!(f, "False"),
        }
    }
}

// Binary nodes are always parenthesized
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.right {
            None => write!(f, "{}{}", self.op.symbol(), self.left),
            Some(r) => write!(f, "({}{}{})", self.left, self.op.symbol(), r),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Expr({:?}, {:?}, ", self.left, self.op)?;
        match &self.right {
            None => write!(f, "None)"),
            Some(r) => write!(f, "{:?})", r),
        }
    }
}

/*
 * Overload operators to write readable expressions:
 * `*` and `&` for AND, `+` and `|` for OR, `^` for XOR and `!` for NOT
 */

impl Not for Expr {
    type Output = Self;
    fn not(self) -> Self {
        Expr::not(&self)
    }
}
impl<'a> Not for &'a Expr {
    type Output = Expr;
    fn not(self) -> Expr {
        Expr::not(self)
    }
}

macro_rules! binary_operator {
    ( $( $trait:ident :: $func:ident => $method:ident ),* ) => {
        $(
            impl $trait for Expr {
                type Output = Self;
                fn $func(self, rhs: Self) -> Self {
                    self.$method(&rhs)
                }
            }

            impl<'a> $trait<&'a Expr> for Expr {
                type Output = Self;
                fn $func(self, rhs: &Self) -> Self {
                    self.$method(rhs)
                }
            }

            impl<'a> $trait<Expr> for &'a Expr {
                type Output = Expr;
                fn $func(self, rhs: Expr) -> Expr {
                    self.$method(&rhs)
                }
            }

            impl<'a> $trait<&'a Expr> for &'a Expr {
                type Output = Expr;
                fn $func(self, rhs: Self) -> Expr {
                    self.$method(rhs)
                }
            }
        )*
    };
}

binary_operator!(
    BitAnd::bitand => and,
    Mul::mul => and,
    BitOr::bitor => or,
    Add::add => or,
    BitXor::bitxor => xor
);

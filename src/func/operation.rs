//! Closed set of logical operations used in expression nodes.
//!
//! Each operation carries an evaluation rule, an arity and a display symbol.

use std::fmt;

use crate::helper::error::ArityError;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    NOOP,
    NOT,
    AND,
    OR,
    XOR,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl Default for Operation {
    fn default() -> Self {
        Operation::NOOP
    }
}

impl Operation {
    /// All operations, in registry order
    pub const ALL: [Operation; 5] = [
        Operation::NOOP,
        Operation::NOT,
        Operation::AND,
        Operation::OR,
        Operation::XOR,
    ];

    pub fn from_name(name: &str) -> Option<Operation> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::NOOP => "NOOP",
            Operation::NOT => "NOT",
            Operation::AND => "AND",
            Operation::OR => "OR",
            Operation::XOR => "XOR",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operation::NOOP | Operation::NOT => Arity::Unary,
            Operation::AND | Operation::OR | Operation::XOR => Arity::Binary,
        }
    }

    pub fn is_unary(self) -> bool {
        self.arity() == Arity::Unary
    }

    /// Symbol inserted before (unary) or between (binary) the operands
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::NOOP => "",
            Operation::NOT => "~",
            Operation::AND => " & ",
            Operation::OR => " | ",
            Operation::XOR => " ^ ",
        }
    }

    /// Check that the presence of operands matches the arity of this operation
    pub fn check(self, left: bool, right: bool) -> Result<(), ArityError> {
        if !left {
            return Err(ArityError::MissingLeft(self));
        }
        match (self.arity(), right) {
            (Arity::Unary, true) => Err(ArityError::UnexpectedRight(self)),
            (Arity::Binary, false) => Err(ArityError::MissingRight(self)),
            _ => Ok(()),
        }
    }

    /// Apply the rule of this operation to resolved operand values.
    ///
    /// # Panics
    ///
    /// Operand slots that do not match the arity are a programming error:
    /// a unary operation with a right operand, or a binary operation with a missing operand.
    pub fn apply(self, left: Option<bool>, right: Option<bool>) -> bool {
        if let Err(e) = self.check(left.is_some(), right.is_some()) {
            panic!("contract violation: {}", e);
        }
        let l = left.unwrap_or_default();
        let r = right.unwrap_or_default();
        match self {
            Operation::NOOP => l,
            Operation::NOT => !l,
            Operation::AND => l && r,
            Operation::OR => l || r,
            Operation::XOR => l ^ r,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Arity::Unary => write!(f, "unary"),
            Arity::Binary => write!(f, "binary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOLS: [bool; 2] = [false, true];

    #[test]
    fn unary_rules() {
        for &x in &BOOLS {
            assert_eq!(Operation::NOOP.apply(Some(x), None), x);
            assert_eq!(Operation::NOT.apply(Some(x), None), !x);
        }
    }

    #[test]
    fn binary_rules() {
        for &x in &BOOLS {
            for &y in &BOOLS {
                assert_eq!(Operation::AND.apply(Some(x), Some(y)), x && y);
                assert_eq!(Operation::OR.apply(Some(x), Some(y)), x || y);
                assert_eq!(Operation::XOR.apply(Some(x), Some(y)), x != y);
            }
        }
    }

    #[test]
    fn arity_check() {
        for op in Operation::ALL.iter().copied() {
            assert_eq!(op.check(false, false), Err(ArityError::MissingLeft(op)));
            if op.is_unary() {
                assert_eq!(op.check(true, false), Ok(()));
                assert_eq!(op.check(true, true), Err(ArityError::UnexpectedRight(op)));
            } else {
                assert_eq!(op.check(true, true), Ok(()));
                assert_eq!(op.check(true, false), Err(ArityError::MissingRight(op)));
            }
        }
    }

    #[test]
    #[should_panic(expected = "NOT is unary")]
    fn not_with_right_operand() {
        Operation::NOT.apply(Some(true), Some(false));
    }

    #[test]
    #[should_panic(expected = "NOOP is unary")]
    fn noop_with_right_operand() {
        Operation::NOOP.apply(Some(true), Some(true));
    }

    #[test]
    #[should_panic(expected = "AND is binary")]
    fn and_without_right_operand() {
        Operation::AND.apply(Some(true), None);
    }

    #[test]
    #[should_panic(expected = "XOR requires a left operand")]
    fn xor_without_left_operand() {
        Operation::XOR.apply(None, Some(true));
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(Operation::from_name("xor"), Some(Operation::XOR));
        assert_eq!(Operation::from_name("Noop"), Some(Operation::NOOP));
        assert_eq!(Operation::from_name("nand"), None);
        assert_eq!(Operation::default(), Operation::NOOP);
        assert_eq!(Operation::AND.symbol(), " & ");
        assert_eq!(Operation::NOT.symbol(), "~");
        assert_eq!(format!("{}", Operation::OR.arity()), "binary");
    }
}

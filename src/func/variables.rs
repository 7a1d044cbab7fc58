//! Named variables and the assignments used to evaluate expressions.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::func::expr::Expr;
use crate::helper::error::{TruthError, TruthResult};

static RE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap());

/// Values that can be read as a Boolean: integers are true when non-zero
pub trait Truth {
    fn truth(&self) -> bool;
}

impl Truth for bool {
    fn truth(&self) -> bool {
        *self
    }
}

macro_rules! int_truth {
    ( $( $t:ty ),* ) => {
        $( impl Truth for $t {
            fn truth(&self) -> bool {
                *self != 0
            }
        } )*
    };
}

int_truth!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Provide the value of variables during evaluation
pub trait Assignment {
    /// Value of a variable, or None if it is not assigned
    fn value(&self, name: &str) -> Option<bool>;
}

impl<K, V> Assignment for HashMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
    V: Truth,
{
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).map(Truth::truth)
    }
}

impl<K, V> Assignment for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Truth,
{
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).map(Truth::truth)
    }
}

impl<A: Assignment + ?Sized> Assignment for &A {
    fn value(&self, name: &str) -> Option<bool> {
        (**self).value(name)
    }
}

/// Split a list of names separated by spaces and/or commas
pub fn split_names(names: &str) -> TruthResult<Vec<String>> {
    let mut result: Vec<String> = vec![];
    for name in names.split(|c: char| c == ',' || c.is_whitespace()) {
        if name.is_empty() {
            continue;
        }
        if !RE_NAME.is_match(name) {
            return Err(TruthError::InvalidName(name.to_owned()));
        }
        if result.iter().any(|n| n == name) {
            return Err(TruthError::DuplicateVariable(name.to_owned()));
        }
        result.push(name.to_owned());
    }
    Ok(result)
}

/// Create a list of variables from a space or comma separated list of names
///
/// ```
/// use truthtab::func::variables::variables;
///
/// let vars = variables("A, B C").unwrap();
/// assert_eq!(vars.len(), 3);
/// assert_eq!(vars[1].to_string(), "B");
/// ```
pub fn variables(names: &str) -> TruthResult<Vec<Expr>> {
    Ok(split_names(names)?.into_iter().map(Expr::var).collect())
}

/// Assignment of an ordered list of variables, as enumerated in a truth table
#[derive(Clone, Debug, PartialEq)]
pub struct State<'a> {
    names: &'a [String],
    bits: Vec<u8>,
}

impl<'a> State<'a> {
    /// Decode the permutation index of a row: the first name is the most significant bit
    pub fn from_index(names: &'a [String], index: usize) -> Self {
        let n = names.len();
        let bits = (0..n).map(|i| ((index >> (n - 1 - i)) & 1) as u8).collect();
        State { names, bits }
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<u8> {
        self.bits
    }
}

impl<'a> Assignment for State<'a> {
    fn value(&self, name: &str) -> Option<bool> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.bits[idx].truth())
    }
}

impl<'a> fmt::Display for State<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, bit) in self.names.iter().zip(self.bits.iter()) {
            write!(f, "{}={} ", name, bit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_and_strip() {
        assert_eq!(split_names("A B C D").unwrap(), vec!["A", "B", "C", "D"]);
        assert_eq!(split_names("x1, y_2,z  ").unwrap(), vec!["x1", "y_2", "z"]);
        assert!(split_names("").unwrap().is_empty());
    }

    #[test]
    fn invalid_names() {
        match split_names("A 2B") {
            Err(TruthError::InvalidName(n)) => assert_eq!(n, "2B"),
            _ => panic!("expected an invalid name"),
        }
        match split_names("A B A") {
            Err(TruthError::DuplicateVariable(n)) => assert_eq!(n, "A"),
            _ => panic!("expected a duplicate"),
        }
    }

    #[test]
    fn map_assignments() {
        let mut ints: HashMap<&str, i32> = HashMap::new();
        ints.insert("A", 1);
        ints.insert("B", 0);
        ints.insert("C", 7);
        assert_eq!(ints.value("A"), Some(true));
        assert_eq!(ints.value("B"), Some(false));
        assert_eq!(ints.value("C"), Some(true));
        assert_eq!(ints.value("D"), None);

        let mut bools: BTreeMap<String, bool> = BTreeMap::new();
        bools.insert("A".to_owned(), true);
        assert_eq!(bools.value("A"), Some(true));
    }

    #[test]
    fn state_bits() {
        let names = split_names("A B C").unwrap();
        let state = State::from_index(&names, 0b110);
        assert_eq!(state.bits(), &[1, 1, 0]);
        assert_eq!(state.value("A"), Some(true));
        assert_eq!(state.value("C"), Some(false));
        assert_eq!(state.value("Z"), None);
        assert_eq!(state.to_string(), "A=1 B=1 C=0 ");
    }
}

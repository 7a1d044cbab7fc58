//! Named expressions available without writing code

use crate::func::expr::Expr;
use crate::func::variables::{split_names, variables};
use crate::helper::error::{TruthError, TruthResult};

/// A named expression over a fixed list of variables
pub struct Sample {
    pub name: &'static str,
    pub about: &'static str,
    pub variables: &'static str,
    build: fn(&[Expr]) -> Expr,
}

pub static CATALOG: [Sample; 6] = [
    Sample {
        name: "demo",
        about: "~A*B*(~D + ~C*D) + B*(A + ~A*C*D)",
        variables: "A B C D",
        build: demo,
    },
    Sample {
        name: "xor",
        about: "Exclusive or of two variables",
        variables: "A B",
        build: xor,
    },
    Sample {
        name: "implies",
        about: "A implies B",
        variables: "A B",
        build: implies,
    },
    Sample {
        name: "majority",
        about: "At least two of three variables are true",
        variables: "A B C",
        build: majority,
    },
    Sample {
        name: "mux",
        about: "Select A when S is false and B otherwise",
        variables: "S A B",
        build: mux,
    },
    Sample {
        name: "parity",
        about: "Odd number of true variables among four",
        variables: "A B C D",
        build: parity,
    },
];

fn demo(v: &[Expr]) -> Expr {
    let (a, b, c, d) = (&v[0], &v[1], &v[2], &v[3]);
    !a * b * (!d + !c * d) + b * (a + !a * c * d)
}

fn xor(v: &[Expr]) -> Expr {
    &v[0] ^ &v[1]
}

fn implies(v: &[Expr]) -> Expr {
    !&v[0] + &v[1]
}

fn majority(v: &[Expr]) -> Expr {
    let (a, b, c) = (&v[0], &v[1], &v[2]);
    a * b + a * c + b * c
}

fn mux(v: &[Expr]) -> Expr {
    let (s, a, b) = (&v[0], &v[1], &v[2]);
    !s * a + s * b
}

fn parity(v: &[Expr]) -> Expr {
    &v[0] ^ &v[1] ^ &v[2] ^ &v[3]
}

impl Sample {
    pub fn names(&self) -> TruthResult<Vec<String>> {
        split_names(self.variables)
    }

    pub fn build(&self) -> TruthResult<Expr> {
        let vars = variables(self.variables)?;
        Ok((self.build)(&vars))
    }
}

pub fn get(name: &str) -> TruthResult<&'static Sample> {
    CATALOG
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| TruthError::UnknownExpression(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::table::TruthTable;

    #[test]
    fn all_samples_build() {
        for sample in CATALOG.iter() {
            let expr = sample.build().unwrap();
            let names = sample.names().unwrap();
            let table = TruthTable::build(&expr, names.as_slice()).unwrap();
            assert_eq!(table.len(), 1 << names.len());
        }
    }

    #[test]
    fn known_tables() {
        let on_set = |name: &str| {
            let sample = get(name).unwrap();
            let names = sample.names().unwrap();
            let table = TruthTable::build(&sample.build().unwrap(), names.as_slice()).unwrap();
            table.on_set().iter().collect::<Vec<_>>()
        };
        assert_eq!(on_set("xor"), vec![1, 2]);
        assert_eq!(on_set("implies"), vec![0, 1, 3]);
        assert_eq!(on_set("majority"), vec![3, 5, 6, 7]);
        assert_eq!(on_set("mux"), vec![2, 3, 5, 7]);
        assert_eq!(on_set("parity").len(), 8);
    }

    #[test]
    fn demo_expression() {
        let expr = get("demo").unwrap().build().unwrap();
        assert_eq!(
            expr.to_string(),
            "(((~A & B) & (~D | (~C & D))) | (B & (A | ((~A & C) & D))))"
        );
    }

    #[test]
    fn unknown_sample() {
        assert!(matches!(get("nand"), Err(TruthError::UnknownExpression(_))));
    }
}

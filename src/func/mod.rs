//! Represent, evaluate and tabulate Boolean expressions
//!
//! ```
//! use truthtab::func::table::{Glyphs, TruthTable};
//! use truthtab::func::variables::variables;
//!
//! let v = variables("A B").unwrap();
//! let expr = &v[0] ^ &v[1];
//! let table = TruthTable::build(&expr, &["A", "B"]).unwrap();
//! assert_eq!(table.render(&Glyphs::plain()), "A B    (A ^ B)\n0 0    0\n0 1    1\n1 0    1\n1 1    0\n");
//! ```

pub mod catalog;
pub mod expr;
pub mod operation;
pub mod table;
pub mod variables;

//! Library entrypoint for `formula-syntax`.
//!
//! Turns infix arithmetic text into a validated [`Formula`]: a token
//! sequence, a canonical string, and the set of referenced variables.
//! Nothing is evaluated.
//!
//! ```
//! use formula_syntax::Formula;
//!
//! let formula = Formula::new("x1 + 5.0000").unwrap();
//! assert_eq!(formula.canonical_string(), "X1+5");
//! ```

pub mod formula;
pub mod lexer;
pub mod validator;

pub use formula::{Formula, FormulaLimits, FormulaOptions};
pub use lexer::tokenize;
pub use validator::{FormulaErrorKind, FormulaFormatError, SyntaxRule};

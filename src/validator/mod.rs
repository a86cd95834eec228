//! Formula syntax validation.
//!
//! Consumes the lexer's token sequence once, left to right, and rejects it on
//! the first violated [`SyntaxRule`].

pub mod classifier;
pub mod error;
pub mod validator;

pub use classifier::TokenClass;
pub use error::{FormulaErrorKind, FormulaFormatError, SyntaxRule};
pub use validator::{Validator, validate};

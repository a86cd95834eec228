//! Validator-side token classification.

use crate::lexer::{Token, TokenKind};

/// Grammar class of one token as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Finite numeric literal.
    Number,
    /// Variable name.
    Variable,
    /// Binary operator.
    Operator,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Unrecognized text, or a numeric literal with no finite value.
    Invalid,
}

impl TokenClass {
    /// Classifies a scanned token.
    pub fn of(token: &Token) -> Self {
        match token.kind {
            TokenKind::Number => match token.lexeme.parse::<f64>() {
                Ok(value) if value.is_finite() => Self::Number,
                _ => Self::Invalid,
            },
            TokenKind::Variable => Self::Variable,
            TokenKind::Operator(_) => Self::Operator,
            TokenKind::LeftParen => Self::OpenParen,
            TokenKind::RightParen => Self::CloseParen,
            TokenKind::Unrecognized => Self::Invalid,
        }
    }

    pub fn is_number(self) -> bool {
        self == Self::Number
    }

    pub fn is_variable(self) -> bool {
        self == Self::Variable
    }

    /// Returns `true` for numbers and variables.
    pub fn is_operand(self) -> bool {
        self.is_number() || self.is_variable()
    }

    pub fn is_operator(self) -> bool {
        self == Self::Operator
    }

    pub fn is_open_paren(self) -> bool {
        self == Self::OpenParen
    }

    pub fn is_close_paren(self) -> bool {
        self == Self::CloseParen
    }

    pub fn is_valid(self) -> bool {
        self != Self::Invalid
    }

    /// Classes allowed to start a formula or follow `(` or an operator.
    pub fn opens_operand(self) -> bool {
        self.is_operand() || self.is_open_paren()
    }

    /// Classes allowed to end a formula or precede an operator.
    pub fn closes_operand(self) -> bool {
        self.is_operand() || self.is_close_paren()
    }
}

//! Formula syntax error contracts.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::lexer::{Span, Token};

/// Syntax rules enforced during validation, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxRule {
    /// The formula must contain at least one token.
    OneToken,
    /// Every token must be a number, variable, operator or parenthesis.
    ValidToken,
    /// The first token must be a number, variable or `(`.
    FirstToken,
    /// The last token must be a number, variable or `)`.
    LastToken,
    /// A token following `(` or an operator must be a number, variable or `(`.
    ParenthesisOperatorFollowing,
    /// A token following a number, variable or `)` must be an operator or `)`.
    ExtraFollowing,
    /// No prefix may close more parentheses than it opens.
    ClosingParenthesis,
    /// Opening and closing parentheses must balance.
    BalancedParentheses,
}

impl SyntaxRule {
    /// All rules in table order.
    pub const ALL: [Self; 8] = [
        Self::OneToken,
        Self::ValidToken,
        Self::FirstToken,
        Self::LastToken,
        Self::ParenthesisOperatorFollowing,
        Self::ExtraFollowing,
        Self::ClosingParenthesis,
        Self::BalancedParentheses,
    ];

    /// Human-readable rule name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::OneToken => "One Token",
            Self::ValidToken => "Valid Tokens",
            Self::FirstToken => "First Token",
            Self::LastToken => "Last Token",
            Self::ParenthesisOperatorFollowing => "Parenthesis/Operator Following",
            Self::ExtraFollowing => "Extra Following",
            Self::ClosingParenthesis => "Closing Parentheses",
            Self::BalancedParentheses => "Balanced Parentheses",
        }
    }
}

impl fmt::Display for SyntaxRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable formula error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FormulaErrorKind {
    /// A syntax rule was violated.
    #[error("expression violates the {0} rule")]
    Rule(SyntaxRule),
    /// Formula text is longer than the configured byte limit.
    #[error("formula text exceeds the configured limit of {limit} bytes")]
    InputTooLarge { limit: usize },
    /// Formula has more tokens than the configured limit.
    #[error("formula exceeds the configured limit of {limit} tokens")]
    TooManyTokens { limit: usize },
}

/// Error returned when formula text cannot be turned into a formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}", render_location(.index, .found))]
pub struct FormulaFormatError {
    /// Error category.
    pub kind: FormulaErrorKind,
    /// Index of the offending token, when one is identifiable.
    pub index: Option<usize>,
    /// Source span of the offending token.
    pub span: Option<Span>,
    /// Offending token text.
    pub found: Option<String>,
}

fn render_location(index: &Option<usize>, found: &Option<String>) -> String {
    match (index, found) {
        (Some(index), Some(found)) => format!(" at token {index} (`{found}`)"),
        (Some(index), None) => format!(" at token {index}"),
        _ => String::new(),
    }
}

impl FormulaFormatError {
    /// Creates a formula error.
    pub fn new(
        kind: FormulaErrorKind,
        index: Option<usize>,
        span: Option<Span>,
        found: Option<String>,
    ) -> Self {
        Self {
            kind,
            index,
            span,
            found,
        }
    }

    /// Creates a rule violation pointing at a concrete token.
    pub fn at_token(rule: SyntaxRule, index: usize, token: &Token) -> Self {
        Self::new(
            FormulaErrorKind::Rule(rule),
            Some(index),
            Some(token.span),
            Some(token.lexeme.clone()),
        )
    }

    /// Creates a rule violation with no associated token.
    pub fn without_token(rule: SyntaxRule) -> Self {
        Self::new(FormulaErrorKind::Rule(rule), None, None, None)
    }

    /// Creates an `InputTooLarge` error.
    pub fn input_too_large(limit: usize) -> Self {
        Self::new(FormulaErrorKind::InputTooLarge { limit }, None, None, None)
    }

    /// Creates a `TooManyTokens` error.
    pub fn too_many_tokens(limit: usize) -> Self {
        Self::new(FormulaErrorKind::TooManyTokens { limit }, None, None, None)
    }

    /// Returns the error category.
    pub fn kind(&self) -> FormulaErrorKind {
        self.kind
    }

    /// Returns the violated syntax rule, if this is a rule violation.
    pub fn rule(&self) -> Option<SyntaxRule> {
        match self.kind {
            FormulaErrorKind::Rule(rule) => Some(rule),
            FormulaErrorKind::InputTooLarge { .. } | FormulaErrorKind::TooManyTokens { .. } => {
                None
            }
        }
    }

    /// Returns the offending token index.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the offending token span.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Returns the offending token text.
    pub fn found(&self) -> Option<&str> {
        self.found.as_deref()
    }
}

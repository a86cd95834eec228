//! Token contracts for the lexer.

use serde::Serialize;

use crate::lexer::span::Span;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperatorKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
}

impl OperatorKind {
    /// Parses a single operator symbol.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            _ => None,
        }
    }

    /// Returns the operator symbol.
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
        }
    }
}

/// Token categories produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Floating-point literal such as `3`, `.5` or `1.2e-3`.
    Number,
    /// Letters followed by digits, such as `x1` or `AB12`.
    Variable,
    /// One of `+ - * /`.
    Operator(OperatorKind),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Text that matched no other pattern.
    Unrecognized,
}

/// A lexical token with raw text and source span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// Token category.
    pub kind: TokenKind,
    /// Token text preserved as scanned.
    pub lexeme: String,
    /// Byte-oriented source span.
    pub span: Span,
}

impl Token {
    /// Creates a token value.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }
}

/// One step produced by [`crate::lexer::Lexer::next_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexStep {
    /// A concrete token was produced.
    Token(Token),
    /// End of input was reached.
    EndOfInput,
}

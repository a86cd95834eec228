//! Canonical rendering of validated token sequences.
//!
//! Runs only after validation has accepted the whole sequence. Numbers are
//! re-rendered from their `f64` value with the shortest round-trip
//! formatting, variable letters are uppercased, and everything else is
//! copied unchanged. Tokens are joined with no separators.

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::lexer::{Token, TokenKind};

/// Renders a numeric literal in canonical form.
///
/// Returns `None` when the literal does not parse to a finite value.
pub fn canonical_number(lexeme: &str) -> Option<String> {
    let value = lexeme.parse::<f64>().ok()?;
    value.is_finite().then(|| value.to_string())
}

/// Renders a variable name in canonical form.
pub fn canonical_variable(lexeme: &str) -> String {
    lexeme.to_ascii_uppercase()
}

/// Renders one token in canonical form.
pub fn canonical_token(token: &Token) -> Cow<'_, str> {
    match token.kind {
        TokenKind::Number => match canonical_number(&token.lexeme) {
            Some(number) => Cow::Owned(number),
            None => Cow::Borrowed(token.lexeme.as_str()),
        },
        TokenKind::Variable => Cow::Owned(canonical_variable(&token.lexeme)),
        TokenKind::Operator(_)
        | TokenKind::LeftParen
        | TokenKind::RightParen
        | TokenKind::Unrecognized => Cow::Borrowed(token.lexeme.as_str()),
    }
}

/// Concatenates canonical token renderings.
pub fn canonicalize(tokens: &[Token]) -> String {
    tokens.iter().map(canonical_token).collect()
}

/// Collects the distinct canonical variable names referenced by `tokens`.
pub fn variables(tokens: &[Token]) -> BTreeSet<String> {
    tokens
        .iter()
        .filter(|token| token.kind == TokenKind::Variable)
        .map(|token| canonical_variable(&token.lexeme))
        .collect()
}

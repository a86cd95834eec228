//! Formula lexer.
//!
//! Splits formula text into parentheses, operators, variables, numbers and
//! unrecognized runs. Whitespace separates tokens and is otherwise dropped.
//! The lexer never fails: text it cannot classify is surfaced as
//! [`TokenKind::Unrecognized`] so that validation reports it.

pub mod span;
pub mod token;

mod cursor;
mod operator;
mod scanner;

use crate::lexer::cursor::Cursor;

pub use span::{ByteOffset, Span};
pub use token::{LexStep, OperatorKind, Token, TokenKind};

/// Cursor-driven scanner over one formula string.
///
/// Offsets are stored as `u32`, so input must be shorter than 4 GiB.
///
/// At each position the patterns are tried in priority order: parenthesis,
/// operator, variable, number. Consecutive characters where none of them
/// start (and which are not whitespace) are grouped into a single
/// unrecognized token.
pub struct Lexer<'a> {
    input: &'a str,
    cursor: Cursor,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for the provided input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: Cursor::new(),
        }
    }

    /// Returns the current byte offset into the input.
    pub fn offset(&self) -> ByteOffset {
        self.cursor.offset()
    }

    /// Scans and returns the next lexical step.
    pub fn next_token(&mut self) -> LexStep {
        self.skip_whitespace();

        if self.cursor.is_eof(self.input) {
            return LexStep::EndOfInput;
        }

        if let Some(token) = self.scan_recognized() {
            return LexStep::Token(token);
        }

        let start = self.cursor.offset();
        while let Some(ch) = self.cursor.peek_char(self.input) {
            if ch.is_whitespace() || self.recognized_len().is_some() {
                break;
            }
            // A letter run with no digits after it cannot start a variable
            // at any of its suffixes either, so take it whole.
            let letters = scanner::letter_run_len(self.cursor.rest(self.input));
            self.cursor.advance_by(letters.max(ch.len_utf8()), self.input);
        }
        LexStep::Token(self.token_from(TokenKind::Unrecognized, start))
    }

    fn scan_recognized(&mut self) -> Option<Token> {
        let start = self.cursor.offset();
        let (kind, len) = self.recognized_len()?;
        self.cursor.advance_by(len, self.input);
        Some(self.token_from(kind, start))
    }

    /// Returns the kind and byte length of the pattern starting at the cursor.
    fn recognized_len(&self) -> Option<(TokenKind, usize)> {
        if let Some(kind) = operator::match_symbol_at(&self.cursor, self.input) {
            return Some((kind, 1));
        }

        let rest = self.cursor.rest(self.input);
        if let Some(len) = scanner::variable_len(rest) {
            return Some((TokenKind::Variable, len));
        }
        scanner::number_len(rest).map(|len| (TokenKind::Number, len))
    }

    fn token_from(&self, kind: TokenKind, start: ByteOffset) -> Token {
        let end = self.cursor.offset();
        let lexeme = &self.input[start.as_usize()..end.as_usize()];
        Token::new(kind, lexeme, Span::new(start, end))
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.cursor.peek_char(self.input) {
            if !ch.is_whitespace() {
                break;
            }
            self.cursor.advance_char(self.input);
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            LexStep::Token(token) => Some(token),
            LexStep::EndOfInput => None,
        }
    }
}

/// Tokenizes the whole input.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

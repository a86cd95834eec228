//! Single-character structural and operator token matching.

use crate::lexer::cursor::Cursor;
use crate::lexer::token::{OperatorKind, TokenKind};

/// Returns the token kind for a parenthesis or operator at cursor position.
pub(crate) fn match_symbol_at(cursor: &Cursor, input: &str) -> Option<TokenKind> {
    match cursor.peek_char(input)? {
        '(' => Some(TokenKind::LeftParen),
        ')' => Some(TokenKind::RightParen),
        ch => OperatorKind::from_char(ch).map(TokenKind::Operator),
    }
}

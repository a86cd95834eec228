//! Left-to-right syntax validation state machine.

use crate::lexer::Token;
use crate::validator::classifier::TokenClass;
use crate::validator::error::{FormulaFormatError, SyntaxRule};

/// Incremental rule checker fed one token at a time.
///
/// Tracks the previous token class and running parenthesis counts. The first
/// violated rule is returned; callers must stop feeding tokens after an error.
#[derive(Debug, Clone, Default)]
pub struct Validator<'t> {
    previous: Option<TokenClass>,
    last: Option<&'t Token>,
    open_parens: usize,
    close_parens: usize,
    seen: usize,
}

impl<'t> Validator<'t> {
    /// Creates a validator with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tokens accepted so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Returns the current `(open, close)` parenthesis counts.
    pub fn paren_counts(&self) -> (usize, usize) {
        (self.open_parens, self.close_parens)
    }

    /// Checks one token against every rule that applies at its position.
    pub fn observe(&mut self, token: &'t Token) -> Result<TokenClass, FormulaFormatError> {
        let index = self.seen;
        let class = TokenClass::of(token);

        if !class.is_valid() {
            return Err(FormulaFormatError::at_token(
                SyntaxRule::ValidToken,
                index,
                token,
            ));
        }

        match self.previous {
            None if !class.opens_operand() => {
                return Err(FormulaFormatError::at_token(
                    SyntaxRule::FirstToken,
                    index,
                    token,
                ));
            }
            Some(previous)
                if (previous.is_open_paren() || previous.is_operator())
                    && !class.opens_operand() =>
            {
                return Err(FormulaFormatError::at_token(
                    SyntaxRule::ParenthesisOperatorFollowing,
                    index,
                    token,
                ));
            }
            Some(previous)
                if previous.closes_operand()
                    && !(class.is_operator() || class.is_close_paren()) =>
            {
                return Err(FormulaFormatError::at_token(
                    SyntaxRule::ExtraFollowing,
                    index,
                    token,
                ));
            }
            _ => {}
        }

        if class.is_open_paren() {
            self.open_parens += 1;
        } else if class.is_close_paren() {
            self.close_parens += 1;
            if self.close_parens > self.open_parens {
                return Err(FormulaFormatError::at_token(
                    SyntaxRule::ClosingParenthesis,
                    index,
                    token,
                ));
            }
        }

        self.previous = Some(class);
        self.last = Some(token);
        self.seen += 1;
        Ok(class)
    }

    /// Applies the end-of-input rules.
    pub fn finish(self) -> Result<(), FormulaFormatError> {
        let index = self.seen.saturating_sub(1);
        let Some(last) = self.last else {
            return Err(FormulaFormatError::without_token(SyntaxRule::OneToken));
        };

        if !self.previous.is_some_and(TokenClass::closes_operand) {
            return Err(FormulaFormatError::at_token(
                SyntaxRule::LastToken,
                index,
                last,
            ));
        }

        if self.open_parens != self.close_parens {
            return Err(FormulaFormatError::at_token(
                SyntaxRule::BalancedParentheses,
                index,
                last,
            ));
        }

        Ok(())
    }
}

/// Validates a complete token sequence, failing on the first violated rule.
pub fn validate(tokens: &[Token]) -> Result<(), FormulaFormatError> {
    let mut validator = Validator::new();
    for token in tokens {
        validator.observe(token)?;
    }
    validator.finish()
}

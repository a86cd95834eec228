//! Validated formula values.
//!
//! [`Formula`] is the only way to obtain a checked expression: it lexes the
//! input, validates the full token sequence, and only then renders the
//! canonical string and collects the referenced variables. A failed check
//! yields a [`FormulaFormatError`] and no value.

pub mod canonical;

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::lexer::{Lexer, Token};
use crate::validator::{FormulaFormatError, validate};

/// Size guardrails applied around validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormulaLimits {
    /// Maximum length in bytes of both the formula text and its canonical
    /// string. Values above [`FormulaLimits::MAX_INPUT_BYTES`] are capped.
    pub max_input_bytes: usize,
    /// Maximum number of tokens.
    pub max_tokens: usize,
}

impl FormulaLimits {
    /// Largest supported text length; token spans use `u32` offsets.
    pub const MAX_INPUT_BYTES: usize = u32::MAX as usize;

    /// Returns the byte limit after applying the `u32` offset cap.
    pub fn effective_max_input_bytes(&self) -> usize {
        self.max_input_bytes.min(Self::MAX_INPUT_BYTES)
    }
}

impl Default for FormulaLimits {
    fn default() -> Self {
        Self {
            max_input_bytes: 1024 * 1024,
            max_tokens: 65_536,
        }
    }
}

/// Formula construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormulaOptions {
    /// Size guardrails.
    pub limits: FormulaLimits,
}

/// An immutable, syntactically valid infix formula.
///
/// Equality and hashing use the canonical string, so `x1 + 2.0` and `X1+2`
/// are the same formula.
#[derive(Debug, Clone)]
pub struct Formula {
    tokens: Vec<Token>,
    canonical: String,
    variables: BTreeSet<String>,
}

impl Formula {
    /// Parses and validates `input` with default options.
    pub fn new(input: &str) -> Result<Self, FormulaFormatError> {
        Self::with_options(input, FormulaOptions::default())
    }

    /// Parses and validates `input` with explicit options.
    pub fn with_options(input: &str, options: FormulaOptions) -> Result<Self, FormulaFormatError> {
        let limits = options.limits;
        let max_bytes = limits.effective_max_input_bytes();
        if input.len() > max_bytes {
            debug!(
                bytes = input.len(),
                limit = max_bytes,
                "rejected formula: input too large"
            );
            return Err(FormulaFormatError::input_too_large(max_bytes));
        }

        let mut tokens = Vec::new();
        for token in Lexer::new(input) {
            if tokens.len() == limits.max_tokens {
                debug!(limit = limits.max_tokens, "rejected formula: too many tokens");
                return Err(FormulaFormatError::too_many_tokens(limits.max_tokens));
            }
            tokens.push(token);
        }
        trace!(token_count = tokens.len(), "tokenized formula");

        if let Err(error) = validate(&tokens) {
            debug!(
                rule = ?error.rule(),
                index = ?error.index(),
                found = ?error.found(),
                "rejected formula"
            );
            return Err(error);
        }

        // Canonical numbers never use exponents and can outgrow the input;
        // the canonical string must itself construct under the same limits.
        let canonical = canonical::canonicalize(&tokens);
        if canonical.len() > max_bytes {
            debug!(
                bytes = canonical.len(),
                limit = max_bytes,
                "rejected formula: canonical form too large"
            );
            return Err(FormulaFormatError::input_too_large(max_bytes));
        }
        let variables = canonical::variables(&tokens);
        Ok(Self {
            tokens,
            canonical,
            variables,
        })
    }

    /// Returns the validated tokens in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the canonical string form.
    pub fn canonical_string(&self) -> &str {
        &self.canonical
    }

    /// Returns the distinct uppercase variable names.
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    /// Consumes the formula and returns its canonical string.
    pub fn into_canonical_string(self) -> String {
        self.canonical
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl FromStr for Formula {
    type Err = FormulaFormatError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::new(input)
    }
}

impl TryFrom<&str> for Formula {
    type Error = FormulaFormatError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

impl Serialize for Formula {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical)
    }
}

impl<'de> Deserialize<'de> for Formula {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}

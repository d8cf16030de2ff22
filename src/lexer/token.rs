// src/lexer/token.rs

//! Token data model: the closed set of lexical categories and the
//! immutable (category, lexeme) pair built from one input fragment.

use std::fmt;

use super::classifier::classify;
use crate::error::LexError;

/// Syntactic category of a lexeme.
///
/// Closed set: there is no fallback or extension variant. Anything the
/// classifier does not recognise is an `Identifier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Identifier,
    NumericLiteral,
    Operator,
    Delimiter,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Keyword,
        Category::Identifier,
        Category::NumericLiteral,
        Category::Operator,
        Category::Delimiter,
    ];
}

/// One classified lexeme.
///
/// The category is always derived from the lexeme by [`classify`]; there is
/// no way to build a `Token` with a category supplied from outside.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    category: Category,
    lexeme: String,
}

impl Token {
    /// Classifies `lexeme` and wraps it in a token.
    ///
    /// Fails if the lexeme is empty or contains whitespace, since neither can
    /// come out of a whitespace split.
    pub fn new(lexeme: impl Into<String>) -> Result<Self, LexError> {
        let lexeme = lexeme.into();
        if lexeme.is_empty() {
            return Err(LexError::EmptyLexeme);
        }
        if let Some(offset) = lexeme.find(char::is_whitespace) {
            return Err(LexError::ContainsWhitespace { lexeme, offset });
        }
        Ok(Self::from_fragment(lexeme))
    }

    /// Builds a token from a fragment already known to be non-empty and
    /// whitespace-free (i.e. produced by `split_whitespace`).
    pub(crate) fn from_fragment(lexeme: impl Into<String>) -> Self {
        let lexeme = lexeme.into();
        debug_assert!(!lexeme.is_empty() && !lexeme.contains(char::is_whitespace));
        Token {
            category: classify(&lexeme),
            lexeme,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.category, self.lexeme)
    }
}

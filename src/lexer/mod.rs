// src/lexer/mod.rs

//! Splits a line of input into whitespace-separated fragments and classifies
//! each one into a [`Token`].

mod classifier;
mod token;

pub use classifier::{classify, is_numeric_literal, DELIMITERS, KEYWORDS, OPERATORS};
pub use token::{Category, Token};

use log::debug;

use crate::error::LexError;

/// Splits `line` on any run of whitespace. Never yields an empty fragment.
pub fn split_fragments(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Tokenizes one line of input, preserving the order of appearance.
pub fn tokenize(line: &str) -> Vec<Token> {
    let tokens: Vec<Token> = split_fragments(line).map(Token::from_fragment).collect();
    debug!("tokenized {} fragments from {:?}", tokens.len(), line);
    tokens
}

/// Tokenizes fragments that were split by the caller.
///
/// Empty and all-whitespace fragments are skipped. A fragment with whitespace
/// inside it is rejected, since it would break the token invariants.
pub fn tokenize_fragments<'a, I>(fragments: I) -> Result<Vec<Token>, LexError>
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .filter(|fragment| !fragment.trim().is_empty())
        .map(Token::new)
        .collect()
}

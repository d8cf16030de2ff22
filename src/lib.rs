//! Minimal lexical classifier.
//!
//! Splits a line on whitespace and assigns each fragment one of five
//! categories: keyword, identifier, numeric literal, operator or delimiter.

pub mod config;
pub mod error;
pub mod i18n;
pub mod lexer;
pub mod report;
pub mod session;

pub use error::LexError;
pub use lexer::{classify, tokenize, Category, Token};

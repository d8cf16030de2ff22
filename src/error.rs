//! Error types for token construction.

/// Error returned when a fragment cannot become a [`Token`](crate::lexer::Token).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The fragment was the empty string.
    EmptyLexeme,
    /// The fragment contains a whitespace character at byte `offset`.
    ContainsWhitespace { lexeme: String, offset: usize },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::EmptyLexeme => write!(f, "lexeme is empty"),
            LexError::ContainsWhitespace { lexeme, offset } => {
                write!(f, "lexeme {:?} contains whitespace at byte {}", lexeme, offset)
            }
        }
    }
}

impl std::error::Error for LexError {}

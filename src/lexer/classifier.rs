// src/lexer/classifier.rs

//! Maps a single whitespace-free fragment to its [`Category`].
//!
//! Rules are tried in a fixed priority order and the first match wins:
//! keywords, delimiters, operators, numeric literals, then identifiers as the
//! catch-all. New vocabulary must be added to the matching set without
//! reordering the rules.

use log::trace;

use super::token::Category;

/// Reserved words.
pub const KEYWORDS: &[&str] = &["if", "int"];

/// Punctuation that separates statements and groups expressions.
pub const DELIMITERS: &[&str] = &[";", "(", ")"];

/// Assignment, equality and addition.
pub const OPERATORS: &[&str] = &["=", "==", "+"];

/// Returns the category of `lexeme`.
///
/// Total over non-empty strings. Callers must drop empty fragments before
/// calling; an empty string is a contract violation.
pub fn classify(lexeme: &str) -> Category {
    debug_assert!(!lexeme.is_empty(), "classify called with an empty lexeme");

    let category = if KEYWORDS.contains(&lexeme) {
        Category::Keyword
    } else if DELIMITERS.contains(&lexeme) {
        Category::Delimiter
    } else if OPERATORS.contains(&lexeme) {
        Category::Operator
    } else if is_numeric_literal(lexeme) {
        Category::NumericLiteral
    } else {
        Category::Identifier
    };

    trace!("classified {:?} as {:?}", lexeme, category);
    category
}

/// True when `lexeme` is one or more ASCII decimal digits and nothing else.
#[inline]
pub fn is_numeric_literal(lexeme: &str) -> bool {
    !lexeme.is_empty() && lexeme.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_sets_are_disjoint() {
        for set_a in [KEYWORDS, DELIMITERS, OPERATORS] {
            for set_b in [KEYWORDS, DELIMITERS, OPERATORS] {
                if std::ptr::eq(set_a, set_b) {
                    continue;
                }
                for word in set_a {
                    assert!(!set_b.contains(word), "{:?} appears in two sets", word);
                }
            }
        }
    }

    #[test]
    fn numeric_predicate_requires_whole_string() {
        assert!(is_numeric_literal("0"));
        assert!(is_numeric_literal("007"));
        assert!(!is_numeric_literal(""));
        assert!(!is_numeric_literal("3a"));
        assert!(!is_numeric_literal("a3"));
        assert!(!is_numeric_literal("-1"));
        assert!(!is_numeric_literal("1.5"));
    }

    #[test]
    fn non_ascii_digits_are_not_numeric() {
        // Arabic-Indic digit three
        assert!(!is_numeric_literal("\u{0663}"));
        assert_eq!(classify("\u{0663}"), Category::Identifier);
    }
}

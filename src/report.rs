// src/report.rs

//! Renders tokens as output lines of the form `Token: <LABEL, "lexeme">`.

use std::fmt;

use crate::i18n::{category_label, Locale};
use crate::lexer::Token;

/// Formats one token. The lexeme is written verbatim, without escaping.
pub fn render_token(token: &Token, locale: Locale) -> String {
    LocalizedToken::new(token, locale).to_string()
}

/// Display adapter pairing a token with the locale its label is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedToken<'a> {
    token: &'a Token,
    locale: Locale,
}

impl<'a> LocalizedToken<'a> {
    pub fn new(token: &'a Token, locale: Locale) -> Self {
        LocalizedToken { token, locale }
    }
}

impl fmt::Display for LocalizedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token: <{}, \"{}\">",
            category_label(self.token.category(), self.locale),
            self.token.lexeme()
        )
    }
}

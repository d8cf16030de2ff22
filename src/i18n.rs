// src/i18n.rs

//! Human-readable labels and messages.
//!
//! Category identity lives in [`Category`]; the names shown to users live
//! here, one table per locale. Names are stored in their underscore form
//! (`PALABRA_CLAVE`) and rendered with spaces (`PALABRA CLAVE`).

use serde::{Deserialize, Serialize};

use crate::lexer::Category;

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish (default)
    #[default]
    Es,
    /// English
    En,
}

/// User-facing messages printed by the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Title,
    Instructions,
    /// Takes the example line as its single `{}` argument.
    Example,
    Prompt,
    FallbackNotice,
    ResultsHeader,
}

/// Category name in its underscore form.
pub fn category_name(category: Category, locale: Locale) -> &'static str {
    match locale {
        Locale::Es => match category {
            Category::Keyword => "PALABRA_CLAVE",
            Category::Identifier => "IDENTIFICADOR",
            Category::NumericLiteral => "LITERAL_NUMERICO",
            Category::Operator => "OPERADOR",
            Category::Delimiter => "DELIMITADOR",
        },
        Locale::En => match category {
            Category::Keyword => "KEYWORD",
            Category::Identifier => "IDENTIFIER",
            Category::NumericLiteral => "NUMERIC_LITERAL",
            Category::Operator => "OPERATOR",
            Category::Delimiter => "DELIMITER",
        },
    }
}

/// Category name as displayed, with underscores rendered as spaces.
pub fn category_label(category: Category, locale: Locale) -> String {
    category_name(category, locale).replace('_', " ")
}

pub fn get_message(message: Message, locale: Locale) -> &'static str {
    match locale {
        Locale::Es => match message {
            Message::Title => "Mini Analizador Léxico (Nivel Léxico Simplificado)",
            Message::Instructions => {
                "Introduce las instrucciones (separando todos los tokens con espacios)."
            }
            Message::Example => "Ejemplo: {}",
            Message::Prompt => "> ",
            Message::FallbackNotice => "Usando ejemplo por defecto:",
            Message::ResultsHeader => "--- Resultado del Análisis Léxico ---",
        },
        Locale::En => match message {
            Message::Title => "Mini Lexical Analyzer (Simplified Lexical Level)",
            Message::Instructions => "Enter the instructions (separate every token with spaces).",
            Message::Example => "Example: {}",
            Message::Prompt => "> ",
            Message::FallbackNotice => "Using default example:",
            Message::ResultsHeader => "--- Lexical Analysis Result ---",
        },
    }
}

/// Fills `{}` placeholders in order.
pub fn format_message(message: Message, locale: Locale, args: &[&str]) -> String {
    let mut msg = get_message(message, locale).to_string();
    let mut search_from = 0;
    for arg in args {
        match msg[search_from..].find("{}") {
            Some(rel) => {
                let pos = search_from + rel;
                msg.replace_range(pos..pos + 2, arg);
                search_from = pos + arg.len();
            }
            None => break,
        }
    }
    msg
}

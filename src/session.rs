// src/session.rs

//! One interactive round: prompt, read a line, tokenize it, print the tokens.

use std::io::{BufRead, Write};

use anyhow::Context;
use log::info;

use crate::config::Config;
use crate::i18n::{format_message, get_message, Message};
use crate::lexer::{tokenize, Token};
use crate::report::LocalizedToken;

pub struct Session<'a> {
    config: &'a Config,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a Config) -> Self {
        Session { config }
    }

    /// Runs the session against `input` and `output`.
    ///
    /// End of input is treated like a blank line, so the configured default
    /// example is tokenized instead. Returns the tokens in input order.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> anyhow::Result<Vec<Token>> {
        let locale = self.config.locale;

        if self.config.show_banner {
            writeln!(output, "{}", get_message(Message::Title, locale))?;
            writeln!(output, "{}", get_message(Message::Instructions, locale))?;
            writeln!(
                output,
                "{}",
                format_message(Message::Example, locale, &[self.config.default_input.as_str()])
            )?;
        }
        write!(output, "{}", get_message(Message::Prompt, locale))?;
        output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        input
            .read_line(&mut line)
            .context("Failed to read input line")?;

        let source = if line.trim().is_empty() {
            info!("Blank input, using default example");
            writeln!(output, "{}", get_message(Message::FallbackNotice, locale))?;
            self.config.default_input.as_str()
        } else {
            line.as_str()
        };

        let tokens = tokenize(source);

        writeln!(output)?;
        writeln!(output, "{}", get_message(Message::ResultsHeader, locale))?;
        writeln!(output)?;
        for token in &tokens {
            writeln!(output, "{}", LocalizedToken::new(token, locale))?;
        }
        output.flush().context("Failed to flush results")?;

        Ok(tokens)
    }
}

// src/config.rs

//! Runtime configuration for the `minilexer` binary.
//!
//! Settings are deserialized from a JSON file whose path is taken from the
//! `MINILEXER_CONFIG` environment variable. Every field has a default, so a
//! partial file (or no file at all) is valid.

use std::path::Path;

use anyhow::Context;
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV_VAR: &str = "MINILEXER_CONFIG";

/// Line tokenized when the user enters nothing.
pub const DEFAULT_INPUT: &str = "int valor = 3 ; if ( valor == 5 ) valor = 0 ;";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // Missing fields fall back to `Config::default()`.
pub struct Config {
    /// Language of labels and messages.
    pub locale: Locale,
    /// Example line substituted for blank input.
    pub default_input: String,
    /// Print title, instructions and example before the prompt.
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::default(),
            default_input: DEFAULT_INPUT.to_string(),
            show_banner: true,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse config JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Loads from `$MINILEXER_CONFIG` if set, otherwise uses defaults.
    /// A file that cannot be read or parsed is logged and ignored.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Config::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(e) => {
                warn!("{:#}; using default config", e);
                Config::default()
            }
        }
    }
}

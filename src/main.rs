// src/main.rs

use anyhow::Context;
use log::info;

use minilexer::config::CONFIG;
use minilexer::session::Session;

/// Main entry point for the `minilexer` binary.
fn main() -> anyhow::Result<()> {
    // Default filter is "warn" if RUST_LOG is not set; logs go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    info!("Starting minilexer with config: {:?}", *CONFIG);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let tokens = Session::new(&CONFIG)
        .run(stdin.lock(), stdout.lock())
        .context("Lexer session failed")?;

    info!("Classified {} tokens", tokens.len());
    Ok(())
}

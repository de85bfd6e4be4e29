//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod export;
pub mod list;
pub mod select;
pub mod trim;

use std::io::{self, Read};

use anyhow::{Context, Result};

use abitrim::cli::InputArgs;
use abitrim::render::wrap::soft_wrap;
use abitrim::{AbiSession, Config, FormatOptions};

/// Read the ABI text from the input file or stdin.
pub fn read_input(input: &InputArgs) -> Result<String> {
    match input.path() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read ABI from stdin")?;
            Ok(text)
        }
    }
}

/// Read and parse the input into a fresh session with everything selected.
pub fn load_session(input: &InputArgs) -> Result<AbiSession> {
    let text = read_input(input)?;
    let session = AbiSession::from_text(&text)?;
    tracing::debug!(entries = session.entries().len(), "loaded ABI");
    Ok(session)
}

pub fn load_config() -> Result<Config> {
    Config::load().context("Failed to load config")
}

/// Print rendered output, soft-wrapped to the terminal width when enabled.
///
/// Wrapping only happens on a terminal so piped output stays byte-exact.
pub fn print_rendered(text: &str, options: &FormatOptions) {
    if options.word_wrap && atty::is(atty::Stream::Stdout) {
        if let Some((terminal_size::Width(width), _)) = terminal_size::terminal_size() {
            println!("{}", soft_wrap(text, width as usize));
            return;
        }
    }
    println!("{}", text);
}

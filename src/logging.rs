//! Diagnostic logging to stderr.
//!
//! `ABITRIM_LOG` takes an `EnvFilter` directive (e.g. `abitrim=debug`). Without
//! it, batch commands log warnings and the interactive app logs nothing so
//! the alternate screen stays clean.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "ABITRIM_LOG";

/// Default directive for a run.
///
/// `verbosity` counts `-v` flags: 1 is `info`, 2 or more is `debug`.
pub fn default_directive(interactive: bool, verbosity: u8) -> &'static str {
    match (interactive, verbosity) {
        (_, v) if v >= 2 => "debug",
        (_, 1) => "info",
        (true, _) => "off",
        (false, _) => "warn",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(interactive: bool, verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(interactive, verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

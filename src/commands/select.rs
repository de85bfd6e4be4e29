//! Select command handler

use anyhow::{bail, Context, Result};

use abitrim::cli::SelectArgs;
use abitrim::render::summary;
use abitrim::theme::current_theme;
use abitrim::tui::{select_app, SelectState};
use abitrim::AbiSession;

use super::load_config;

/// Open the interactive selection screen on the input file.
///
/// A parse failure does not abort: the screen opens empty with the error
/// shown, so the file can be fixed and reloaded with `r`.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &SelectArgs) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("The select command needs an interactive terminal; use `abitrim export` instead");
    }

    let config = load_config()?;
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let mut session = AbiSession::new();
    if let Err(e) = session.load(&text) {
        tracing::debug!(error = %e, "opening selection screen with parse error");
    }

    let options = args.format_args.apply(config.format);
    let state = SelectState::new(session, args.format, options, config.trim.exclusions());
    let session = select_app::run(state, &args.file, config.export_dir())?;

    let theme = current_theme();
    eprintln!(
        "{}",
        theme.secondary_text(&summary(session.selected_entries()))
    );
    Ok(())
}

//! Trim command handler

use anyhow::Result;

use abitrim::abi::trim_reason;
use abitrim::cli::TrimArgs;
use abitrim::render::render;
use abitrim::theme::current_theme;

use super::{load_config, load_session, print_rendered};

/// Select everything, trim boilerplate and print what is left.
pub fn handle(args: &TrimArgs) -> Result<()> {
    let config = load_config()?;
    let exclusions = config.trim.exclusions();
    let mut session = load_session(&args.input)?;

    if args.explain {
        let theme = current_theme();
        for entry in session.selected_entries() {
            if let Some(reason) = trim_reason(entry, &exclusions) {
                eprintln!(
                    "{} {} ({})",
                    theme.secondary_text("removed"),
                    entry.key(),
                    reason
                );
            }
        }
    }

    let dropped = session.trim_selection(&exclusions);
    tracing::info!(dropped, kept = session.selected_count(), "trimmed ABI");

    let options = args.format_args.apply(config.format);
    let text = render(&session.selected_entries(), args.format, &options);
    print_rendered(&text, &options);
    Ok(())
}

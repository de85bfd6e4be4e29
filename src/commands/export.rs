//! Export command handler

use anyhow::{bail, Result};

use abitrim::abi::EntryKey;
use abitrim::cli::ExportArgs;
use abitrim::clipboard::copy_text;
use abitrim::files::{export_path, write_export};
use abitrim::render::render;
use abitrim::theme::current_theme;

use super::{load_config, load_session, print_rendered};

/// Build the selection from the flags and send it to its destinations.
///
/// Order: `--select`, `--exclude`, `--type/--search`, `--trim`. Without
/// `--copy`, `--save` or `--output` the result goes to stdout.
pub fn handle(args: &ExportArgs) -> Result<()> {
    let config = load_config()?;
    let mut session = load_session(&args.input)?;

    if !args.select.is_empty() {
        let unknown = session.select_only(to_keys(&args.select));
        reject_unknown(&unknown)?;
    }
    if !args.exclude.is_empty() {
        let unknown = session.deselect(to_keys(&args.exclude));
        reject_unknown(&unknown)?;
    }
    let criteria = args.filter.criteria();
    if !criteria.is_empty() {
        session.narrow_to(&criteria);
    }
    if args.trim {
        session.trim_selection(&config.trim.exclusions());
    }

    let options = args.format_args.apply(config.format);
    let text = render(&session.selected_entries(), args.format, &options);
    let theme = current_theme();

    if args.copy {
        match copy_text(&text) {
            Ok(result) => eprintln!(
                "{}",
                theme.success_text(&result.message(args.format.label()))
            ),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                return Err(e.into());
            }
        }
    }

    if args.save || args.output.is_some() {
        let path = export_path(&config.export_dir(), args.output.as_deref(), args.format);
        let result = write_export(&path, &text)?;
        eprintln!("{}", theme.success_text(&result.message()));
    }

    if !args.copy && !args.save && args.output.is_none() {
        print_rendered(&text, &options);
    }
    Ok(())
}

fn to_keys(raw: &[String]) -> Vec<EntryKey> {
    raw.iter().map(|k| EntryKey::from(k.as_str())).collect()
}

fn reject_unknown(unknown: &[EntryKey]) -> Result<()> {
    if unknown.is_empty() {
        return Ok(());
    }
    let keys: Vec<&str> = unknown.iter().map(EntryKey::as_str).collect();
    bail!(
        "Unknown entry key(s): {} (see `abitrim list` for valid keys)",
        keys.join(", ")
    )
}

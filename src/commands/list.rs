//! List command handler

use anyhow::Result;

use abitrim::cli::ListArgs;
use abitrim::render::{summary, EntryDetails};
use abitrim::theme::current_theme;

use super::load_session;

/// Print the key of every matching entry, then a summary on stderr.
pub fn handle(args: &ListArgs) -> Result<()> {
    let session = load_session(&args.input)?;
    let theme = current_theme();
    let visible = session.visible(&args.filter.criteria());

    for &idx in &visible {
        let (Some(entry), Some(key)) = (session.entries().get(idx), session.key_at(idx)) else {
            continue;
        };
        println!("{}", key);
        if args.long {
            for line in EntryDetails::from_entry(entry).lines() {
                println!("    {}", theme.secondary_text(&line));
            }
        }
    }

    let listed = visible.iter().filter_map(|&idx| session.entries().get(idx));
    eprintln!("{}", theme.secondary_text(&summary(listed)));
    Ok(())
}

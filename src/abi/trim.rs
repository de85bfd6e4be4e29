//! Heuristic removal of boilerplate entries.
//!
//! Rules, checked in order:
//! 1. constructor, fallback and receive are always removed;
//! 2. events are removed when their name is a known boilerplate event;
//! 3. functions and errors are removed when their name is a known boilerplate
//!    function or ends with `_ROLE`.
//!
//! Trimming filters a sequence and keeps the relative order of survivors.

use std::fmt;

use super::entry::{AbiEntry, EntryKind};
use super::exclusions::{ExclusionCategory, ExclusionSet};

const ROLE_SUFFIX: &str = "_ROLE";

/// Why an entry was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimReason {
    /// Constructor, fallback or receive handler.
    SpecialHandler(EntryKind),
    /// Event name found in the catalogue. `None` means a configured extra.
    BoilerplateEvent(Option<ExclusionCategory>),
    /// Function or error name found in the catalogue. `None` means a configured extra.
    BoilerplateFunction(Option<ExclusionCategory>),
    /// Name ends with `_ROLE` (role identifier getter).
    RoleConstant,
}

impl fmt::Display for TrimReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpecialHandler(kind) => write!(f, "{} handler", kind),
            Self::BoilerplateEvent(Some(category)) | Self::BoilerplateFunction(Some(category)) => {
                write!(f, "{} boilerplate", category)
            }
            Self::BoilerplateEvent(None) | Self::BoilerplateFunction(None) => {
                f.write_str("configured exclusion")
            }
            Self::RoleConstant => write!(f, "role constant (*{})", ROLE_SUFFIX),
        }
    }
}

/// The rule that removes `entry`, or `None` if it survives trimming.
pub fn trim_reason(entry: &AbiEntry, exclusions: &ExclusionSet) -> Option<TrimReason> {
    match entry {
        AbiEntry::Constructor(_) | AbiEntry::Fallback(_) | AbiEntry::Receive(_) => {
            Some(TrimReason::SpecialHandler(entry.kind()))
        }
        AbiEntry::Event(event) => exclusions
            .excludes_event(event.name())
            .then(|| TrimReason::BoilerplateEvent(ExclusionCategory::of_event(event.name()))),
        AbiEntry::Function(_) | AbiEntry::Error(_) => {
            let name = entry.name().unwrap_or_default();
            if exclusions.excludes_function(name) {
                Some(TrimReason::BoilerplateFunction(
                    ExclusionCategory::of_function(name),
                ))
            } else if name.ends_with(ROLE_SUFFIX) {
                Some(TrimReason::RoleConstant)
            } else {
                None
            }
        }
    }
}

/// Trim with the built-in catalogue only.
pub fn trim_entries<'a, I>(entries: I) -> Vec<&'a AbiEntry>
where
    I: IntoIterator<Item = &'a AbiEntry>,
{
    trim_entries_with(entries, &ExclusionSet::builtin())
}

/// Trim with a caller supplied exclusion set.
pub fn trim_entries_with<'a, I>(entries: I, exclusions: &ExclusionSet) -> Vec<&'a AbiEntry>
where
    I: IntoIterator<Item = &'a AbiEntry>,
{
    entries
        .into_iter()
        .filter(|entry| trim_reason(entry, exclusions).is_none())
        .collect()
}

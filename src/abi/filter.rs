//! Display filtering of ABI entries.
//!
//! Filtering only narrows what is shown. It never changes the selection.

use super::entry::{AbiEntry, EntryKind};
use super::identity::derive_key;

/// Which entries to display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Exact kind match, or any kind when `None`.
    pub kind: Option<EntryKind>,
    /// Case-insensitive substring of the name or key. Empty matches all.
    pub search: String,
}

impl FilterCriteria {
    pub fn new(kind: Option<EntryKind>, search: impl Into<String>) -> Self {
        Self {
            kind,
            search: search.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.search.is_empty()
    }

    pub fn clear(&mut self) {
        self.kind = None;
        self.search.clear();
    }

    /// Advance the kind filter: all -> function -> ... -> receive -> all.
    pub fn cycle_kind(&mut self) {
        self.kind = match self.kind {
            None => Some(EntryKind::ALL[0]),
            Some(current) => EntryKind::ALL
                .iter()
                .position(|k| *k == current)
                .and_then(|idx| EntryKind::ALL.get(idx + 1))
                .copied(),
        };
    }
}

/// Whether an entry passes the kind and search criteria.
pub fn matches(entry: &AbiEntry, criteria: &FilterCriteria) -> bool {
    let kind_matches = criteria.kind.map_or(true, |kind| entry.kind() == kind);
    if !kind_matches {
        return false;
    }
    if criteria.search.is_empty() {
        return true;
    }

    let needle = criteria.search.to_lowercase();
    let name_matches = entry
        .name()
        .is_some_and(|name| name.to_lowercase().contains(&needle));
    name_matches || derive_key(entry).as_str().to_lowercase().contains(&needle)
}

/// Entries passing the criteria, in their original order.
pub fn filter_entries<'a>(entries: &'a [AbiEntry], criteria: &FilterCriteria) -> Vec<&'a AbiEntry> {
    entries.iter().filter(|e| matches(e, criteria)).collect()
}

//! Selection state over one parsed ABI.
//!
//! A session owns the parsed entries, their keys (derived once per parse) and
//! the set of selected keys. Parsing replaces everything wholesale: success
//! selects every entry, failure empties the session and records the error.

use std::collections::HashSet;

use crate::abi::{
    filter, parse_abi, trim_entries_with, AbiEntry, EntryKey, ExclusionSet, FilterCriteria,
    ParseError,
};

#[derive(Debug, Clone, Default)]
pub struct AbiSession {
    entries: Vec<AbiEntry>,
    keys: Vec<EntryKey>,
    selected: HashSet<EntryKey>,
    error: Option<ParseError>,
}

impl AbiSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session loaded from `text`, or the parse error.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut session = Self::new();
        session.load(text)?;
        Ok(session)
    }

    /// Parse `text` and replace the session contents.
    ///
    /// Returns the number of parsed entries. On failure the session is left
    /// empty with the error recorded.
    pub fn load(&mut self, text: &str) -> Result<usize, ParseError> {
        match parse_abi(text) {
            Ok(entries) => {
                self.keys = entries.iter().map(AbiEntry::key).collect();
                self.entries = entries;
                self.error = None;
                self.select_all();
                Ok(self.entries.len())
            }
            Err(err) => {
                tracing::debug!(error = %err, "discarding session after parse failure");
                self.entries.clear();
                self.keys.clear();
                self.selected.clear();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Drop entries, selection and any recorded error.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn entries(&self) -> &[AbiEntry] {
        &self.entries
    }

    pub fn keys(&self) -> &[EntryKey] {
        &self.keys
    }

    pub fn key_at(&self, index: usize) -> Option<&EntryKey> {
        self.keys.get(index)
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_selected(&self, key: &EntryKey) -> bool {
        self.selected.contains(key)
    }

    pub fn is_index_selected(&self, index: usize) -> bool {
        self.keys.get(index).is_some_and(|k| self.selected.contains(k))
    }

    /// Number of selected entries (duplicates counted individually).
    pub fn selected_count(&self) -> usize {
        self.keys.iter().filter(|k| self.selected.contains(*k)).count()
    }

    pub fn selected_keys(&self) -> &HashSet<EntryKey> {
        &self.selected
    }

    fn knows(&self, key: &EntryKey) -> bool {
        self.keys.contains(key)
    }

    /// Flip membership of `key`. Returns the new state; unknown keys stay unselected.
    pub fn toggle(&mut self, key: &EntryKey) -> bool {
        if !self.knows(key) {
            return false;
        }
        if self.selected.remove(key) {
            false
        } else {
            self.selected.insert(key.clone());
            true
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.keys.iter().cloned().collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Replace the selection with `keys`. Unknown keys are returned, not inserted.
    pub fn select_only<I>(&mut self, keys: I) -> Vec<EntryKey>
    where
        I: IntoIterator<Item = EntryKey>,
    {
        let (known, unknown): (Vec<_>, Vec<_>) = keys.into_iter().partition(|k| self.knows(k));
        self.selected = known.into_iter().collect();
        unknown
    }

    /// Remove `keys` from the selection. Unknown keys are returned.
    pub fn deselect<I>(&mut self, keys: I) -> Vec<EntryKey>
    where
        I: IntoIterator<Item = EntryKey>,
    {
        let mut unknown = Vec::new();
        for key in keys {
            if self.knows(&key) {
                self.selected.remove(&key);
            } else {
                unknown.push(key);
            }
        }
        unknown
    }

    /// Keep only selected entries that also match `criteria`.
    pub fn narrow_to(&mut self, criteria: &FilterCriteria) {
        let matching: HashSet<&EntryKey> = self
            .entries
            .iter()
            .zip(&self.keys)
            .filter(|(entry, _)| filter::matches(entry, criteria))
            .map(|(_, key)| key)
            .collect();
        self.selected.retain(|key| matching.contains(key));
    }

    /// Trim the current selection and make the survivors the new selection.
    ///
    /// Returns how many keys were dropped.
    pub fn trim_selection(&mut self, exclusions: &ExclusionSet) -> usize {
        let before = self.selected.len();
        let kept: HashSet<EntryKey> = trim_entries_with(self.selected_entries(), exclusions)
            .into_iter()
            .map(AbiEntry::key)
            .collect();
        self.selected = kept;
        let dropped = before - self.selected.len();
        tracing::debug!(dropped, remaining = self.selected.len(), "trimmed selection");
        dropped
    }

    /// Selected entries in parsed order.
    pub fn selected_entries(&self) -> Vec<&AbiEntry> {
        self.entries
            .iter()
            .zip(&self.keys)
            .filter(|(_, key)| self.selected.contains(*key))
            .map(|(entry, _)| entry)
            .collect()
    }

    /// Indices of entries matching `criteria`. Never changes the selection.
    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| filter::matches(entry, criteria))
            .map(|(idx, _)| idx)
            .collect()
    }
}

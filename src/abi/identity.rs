//! Stable identity for ABI entries.
//!
//! The key is `{kind}-{name}({input types joined by ','})`. Entries without a
//! name use the empty string, so a fallback is keyed `fallback-()`.

use std::fmt;

use super::entry::AbiEntry;

/// Deterministic identity of an ABI entry.
///
/// Two entries with the same kind, name and ordered input types share a key;
/// overloads (same name, different input types) never do.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey(String);

impl EntryKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntryKey {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for EntryKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl AsRef<str> for EntryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive the identity key of an entry.
pub fn derive_key(entry: &AbiEntry) -> EntryKey {
    let signature = entry.input_types().join(",");
    EntryKey(format!(
        "{}-{}({})",
        entry.kind(),
        entry.name().unwrap_or_default(),
        signature
    ))
}

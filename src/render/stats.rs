//! Selection and output statistics.

use std::fmt;

use crate::abi::{AbiEntry, EntryKind};

/// Number of selected entries of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindCount {
    pub kind: EntryKind,
    pub count: usize,
}

impl fmt::Display for KindCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count > 1 { "s" } else { "" };
        write!(f, "{} {}{}", self.count, self.kind, plural)
    }
}

/// Per-kind counts, most frequent first. Ties keep first-seen order.
pub fn kind_counts<'a, I>(entries: I) -> Vec<KindCount>
where
    I: IntoIterator<Item = &'a AbiEntry>,
{
    let mut counts: Vec<KindCount> = Vec::new();
    for entry in entries {
        let kind = entry.kind();
        match counts.iter_mut().find(|c| c.kind == kind) {
            Some(existing) => existing.count += 1,
            None => counts.push(KindCount { kind, count: 1 }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// One-line description such as `3 functions, 1 event`.
pub fn summary<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a AbiEntry>,
{
    let counts = kind_counts(entries);
    if counts.is_empty() {
        return "No selected ABI items".to_string();
    }
    counts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Figures shown next to a rendered preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStats {
    pub functions: usize,
    pub events: usize,
    pub bytes: usize,
    /// UTF-16 code units, so an emoji counts as two.
    pub chars: usize,
}

impl OutputStats {
    pub fn compute(entries: &[&AbiEntry], rendered: &str) -> Self {
        Self {
            functions: entries.iter().filter(|e| e.kind() == EntryKind::Function).count(),
            events: entries.iter().filter(|e| e.kind() == EntryKind::Event).count(),
            bytes: rendered.len(),
            chars: rendered.encode_utf16().count(),
        }
    }

    /// Size in KiB with two decimals.
    pub fn size_kb(&self) -> String {
        format!("{:.2}", self.bytes as f64 / 1024.0)
    }

    pub fn selected_line(&self) -> String {
        format!("Selected: {} functions, {} events", self.functions, self.events)
    }

    pub fn size_line(&self) -> String {
        format!("Size: {}KB • Characters: {}", self.size_kb(), self.chars)
    }
}

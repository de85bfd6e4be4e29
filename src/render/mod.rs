//! Rendering selected entries as text.
//!
//! Two formats share the same indentation rules: the structural JSON array of
//! entries, and a JSON array of human-readable signatures. Rendering never
//! touches the selection; wrapping and highlighting are presentation only.

pub mod details;
pub mod highlight;
pub mod human;
pub mod json;
pub mod stats;
pub mod wrap;

use serde::{Deserialize, Serialize};

use crate::abi::AbiEntry;

pub use details::EntryDetails;
pub use stats::{kind_counts, summary, KindCount, OutputStats};

/// Export representation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full JSON entries
    #[default]
    Json,
    /// Signature strings, e.g. `function transfer(address to, uint256 amount) returns (bool)`
    Human,
}

impl OutputFormat {
    /// Default download file name.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "selected-abi.json",
            Self::Human => "selected-abi.txt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Human => "Human Readable",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Json => Self::Human,
            Self::Human => Self::Json,
        }
    }
}

/// Cosmetic output options. Never affect which entries are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Spaces per nesting level.
    pub indentation: usize,
    /// Compact output; overrides `indentation`.
    pub minified: bool,
    /// Soft-wrap long lines when displaying.
    pub word_wrap: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indentation: 2,
            minified: false,
            word_wrap: true,
        }
    }
}

impl FormatOptions {
    /// Indent width to serialize with, `None` for compact output.
    pub fn effective_indent(&self) -> Option<usize> {
        if self.minified || self.indentation == 0 {
            None
        } else {
            Some(self.indentation)
        }
    }

    /// Switch between 2 and 4 spaces.
    pub fn cycle_indentation(&mut self) {
        self.indentation = if self.indentation == 2 { 4 } else { 2 };
    }
}

/// Render entries in the requested format.
pub fn render(entries: &[&AbiEntry], format: OutputFormat, options: &FormatOptions) -> String {
    match format {
        OutputFormat::Json => json::to_json(entries, options),
        OutputFormat::Human => json::to_json(&human::format_abi(entries.iter().copied()), options),
    }
}

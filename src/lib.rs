//! abitrim: select, trim and export contract ABI entries.
//!
//! The core is pure: [`abi`] parses entries and derives their keys, filters
//! and trims them; [`render`] turns a selection into text. [`session`] holds
//! the selection state shared by the batch commands and the [`tui`].

pub mod abi;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod files;
pub mod logging;
pub mod render;
pub mod session;
pub mod tui;

pub use tui::theme;

pub use abi::{AbiEntry, EntryKey, EntryKind, ParseError};
pub use config::Config;
pub use render::{FormatOptions, OutputFormat};
pub use session::AbiSession;

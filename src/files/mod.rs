//! Writing rendered ABI text to disk.

pub mod export;

pub use export::{export_path, write_export, ExportError, ExportResult};

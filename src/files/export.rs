//! Saving a rendered selection as `selected-abi.json` / `selected-abi.txt`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::render::OutputFormat;

/// Errors that can occur while saving an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Export directory does not exist: {path}")]
    MissingDirectory { path: PathBuf },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where an export ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub path: PathBuf,
    pub bytes: usize,
}

impl ExportResult {
    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        format!(
            "Saved {} ({})",
            self.path.display(),
            humansize::format_size(self.bytes, humansize::BINARY)
        )
    }
}

/// Target path of an export.
///
/// An explicit `output` wins; an existing directory given as `output` gets
/// the default file name appended. Otherwise the default file name goes in `dir`.
pub fn export_path(dir: &Path, output: Option<&Path>, format: OutputFormat) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(format.file_name()),
        Some(path) => path.to_path_buf(),
        None => dir.join(format.file_name()),
    }
}

/// Write `content` to `path`, which must be in an existing directory.
pub fn write_export(path: &Path, content: &str) -> Result<ExportResult, ExportError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(ExportError::MissingDirectory {
            path: parent.to_path_buf(),
        });
    }

    fs::write(path, content).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "saved export");
    Ok(ExportResult {
        path: path.to_path_buf(),
        bytes: content.len(),
    })
}

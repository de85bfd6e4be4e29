//! Clipboard support for copying rendered ABI text.
//!
//! Shells out to the platform clipboard tool (pbcopy on macOS; xclip, xsel
//! or wl-copy on Linux). Failures are reported, never retried.

mod copy;
mod error;
mod result;
mod tool;
pub mod tools;

pub use copy::Copy;
pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};
pub use tool::{CopyTool, CopyToolError};

/// Copy `text` using the platform tool chain.
pub fn copy_text(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}

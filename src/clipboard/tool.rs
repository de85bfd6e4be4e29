//! CopyTool trait and related error types.

use super::result::CopyMethod;

/// A tool that can put text on the system clipboard.
///
/// Each implementation wraps a specific OS tool (pbcopy, xclip, ...) and
/// knows how to invoke it.
pub trait CopyTool: Send + Sync {
    /// The method identifier for this tool.
    fn method(&self) -> CopyMethod;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Try to copy text content to the clipboard.
    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}

/// Error from a specific tool operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// Tool execution failed
    Failed(String),
    /// Tool not found on system
    NotFound,
}

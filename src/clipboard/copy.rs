//! Copy orchestrator for clipboard operations.

use super::error::ClipboardError;
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;

/// Orchestrates clipboard copy operations using available tools.
///
/// Tools are tried in priority order; the first one that succeeds wins.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn CopyTool>] {
        &self.tools
    }

    /// Copy text to the clipboard.
    ///
    /// When every available tool fails, the last failure is reported.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if self.tools.is_empty() {
            return Err(ClipboardError::UnsupportedPlatform);
        }

        let mut last_failure = None;
        for tool in &self.tools {
            if !tool.is_available() {
                tracing::debug!(tool = tool.name(), "clipboard tool not available");
                continue;
            }
            match tool.try_copy_text(text) {
                Ok(()) => return Ok(CopyResult::new(tool.method(), text.len())),
                Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(message)) => {
                    tracing::debug!(tool = tool.name(), %message, "clipboard tool failed");
                    last_failure = Some(ClipboardError::ToolFailed {
                        tool: tool.name(),
                        message,
                    });
                }
            }
        }

        Err(last_failure.unwrap_or(ClipboardError::NoToolAvailable))
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::result::CopyMethod;
    use std::sync::{Arc, Mutex};

    struct FakeTool {
        method: CopyMethod,
        available: bool,
        outcome: Result<(), CopyToolError>,
        received: Arc<Mutex<Vec<String>>>,
    }

    impl FakeTool {
        fn boxed(
            method: CopyMethod,
            available: bool,
            outcome: Result<(), CopyToolError>,
        ) -> (Box<dyn CopyTool>, Arc<Mutex<Vec<String>>>) {
            let received = Arc::new(Mutex::new(Vec::new()));
            let tool = Self {
                method,
                available,
                outcome,
                received: Arc::clone(&received),
            };
            (Box::new(tool), received)
        }
    }

    impl CopyTool for FakeTool {
        fn method(&self) -> CopyMethod {
            self.method
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
            self.received.lock().unwrap().push(text.to_string());
            self.outcome.clone()
        }
    }

    #[test]
    fn first_working_tool_wins() {
        let (a, a_seen) = FakeTool::boxed(CopyMethod::Xclip, true, Ok(()));
        let (b, b_seen) = FakeTool::boxed(CopyMethod::Xsel, true, Ok(()));
        let copy = Copy::with_tools(vec![a, b]);

        let result = copy.text("[]").unwrap();
        assert_eq!(result.tool, CopyMethod::Xclip);
        assert_eq!(result.size_bytes, 2);
        assert_eq!(*a_seen.lock().unwrap(), vec!["[]".to_string()]);
        assert!(b_seen.lock().unwrap().is_empty());
    }

    #[test]
    fn unavailable_tools_are_skipped() {
        let (a, a_seen) = FakeTool::boxed(CopyMethod::Xclip, false, Ok(()));
        let (b, _) = FakeTool::boxed(CopyMethod::WlCopy, true, Ok(()));
        let copy = Copy::with_tools(vec![a, b]);

        assert_eq!(copy.text("x").unwrap().tool, CopyMethod::WlCopy);
        assert!(a_seen.lock().unwrap().is_empty());
    }

    #[test]
    fn failure_falls_through_to_next_tool() {
        let (a, _) = FakeTool::boxed(
            CopyMethod::Xclip,
            true,
            Err(CopyToolError::Failed("no display".to_string())),
        );
        let (b, _) = FakeTool::boxed(CopyMethod::Xsel, true, Ok(()));
        let copy = Copy::with_tools(vec![a, b]);

        assert_eq!(copy.text("x").unwrap().tool, CopyMethod::Xsel);
    }

    #[test]
    fn reports_last_failure() {
        let (a, _) = FakeTool::boxed(
            CopyMethod::Xclip,
            true,
            Err(CopyToolError::Failed("no display".to_string())),
        );
        let copy = Copy::with_tools(vec![a]);

        let err = copy.text("x").unwrap_err();
        assert_eq!(err.to_string(), "Clipboard tool 'xclip' failed: no display");
    }

    #[test]
    fn nothing_available() {
        let (a, _) = FakeTool::boxed(CopyMethod::Xclip, false, Ok(()));
        let copy = Copy::with_tools(vec![a]);
        assert!(matches!(copy.text("x"), Err(ClipboardError::NoToolAvailable)));
    }

    #[test]
    fn no_tools_means_unsupported_platform() {
        let copy = Copy::with_tools(vec![]);
        assert!(matches!(copy.text("x"), Err(ClipboardError::UnsupportedPlatform)));
    }
}

//! ABI parse errors.

/// Errors raised while turning input text into ABI entries.
///
/// Cloneable so a session can keep the last failure around for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid ABI format: {message} (line {line}, column {column})")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Invalid ABI format: expected a JSON array of entries, found {found}")]
    NotAList { found: &'static str },

    #[error("Invalid ABI format: entry {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

impl ParseError {
    /// Short message for status lines.
    pub fn summary(&self) -> &'static str {
        "Invalid ABI format. Please check your input."
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        // serde_json appends " at line X column Y"; keep only the cause
        let message = match message.rfind(" at line ") {
            Some(pos) => message[..pos].to_string(),
            None => message,
        };
        Self::Syntax {
            message,
            line: err.line(),
            column: err.column(),
        }
    }
}

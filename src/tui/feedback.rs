//! Transient "Copied!" indicator.

use std::time::{Duration, Instant};

/// How long the indicator stays visible.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Remembers when the last successful copy happened.
#[derive(Debug, Clone, Copy)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK_DURATION)
    }
}

impl CopyFeedback {
    pub fn new(duration: Duration) -> Self {
        Self {
            copied_at: None,
            duration,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.duration)
    }

    /// Forget an expired copy. Returns true if the indicator just turned off.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.copied_at.is_some() && !self.is_active(now) {
            self.copied_at = None;
            return true;
        }
        false
    }

    /// Button label for the preview header.
    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_active(now) {
            "Copied!"
        } else {
            "Copy"
        }
    }
}

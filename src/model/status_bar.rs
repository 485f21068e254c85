//! Status message model - transient and sticky message-bar content

use std::time::{Duration, Instant};

/// Default lifetime for informational messages
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// A status message shown in the message bar.
///
/// A zero duration makes the message sticky: it stays visible until a
/// command explicitly replaces or clears it. Any other duration expires the
/// message that long after creation.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    text: String,
    created_at: Instant,
    duration: Duration,
}

impl StatusMessage {
    /// Create a message expiring after `duration` (zero = sticky)
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    /// Create a message with the default timeout
    pub fn transient(text: impl Into<String>) -> Self {
        Self::new(text, MESSAGE_TIMEOUT)
    }

    /// Create a sticky message (visible until explicitly cleared)
    pub fn sticky(text: impl Into<String>) -> Self {
        Self::new(text, Duration::ZERO)
    }

    /// The message text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check whether this message has expired
    pub fn is_expired(&self) -> bool {
        !self.duration.is_zero() && self.created_at.elapsed() >= self.duration
    }
}

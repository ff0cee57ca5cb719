//! Suppression of repeated failure notifications.

/// Remembers the last failure text that was actually delivered.
///
/// A failure is worth one alert, not one alert per cycle: the marker holds
/// the text of the most recent failure notification that reached the chat,
/// and identical texts are suppressed until a different failure shows up or
/// a cycle completes cleanly.
#[derive(Debug, Default)]
pub struct FailureTracker {
    last_sent: Option<String>,
}

impl FailureTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `text` differs from the last delivered failure text.
    pub fn should_send(&self, text: &str) -> bool {
        self.last_sent.as_deref() != Some(text)
    }

    /// Record a failure text that was successfully delivered.
    pub fn mark_sent(&mut self, text: impl Into<String>) {
        self.last_sent = Some(text.into());
    }

    /// Forget the marker after a clean cycle.
    pub fn clear(&mut self) {
        self.last_sent = None;
    }
}

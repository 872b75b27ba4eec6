//! The unit of scanner output.

use std::fmt;
use std::time::Duration;

/// One dispatched Server-Sent Event.
///
/// Every field starts empty for each event; nothing carries over from the
/// previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ServerSentEvent {
    /// Last `id: ` value seen in the event.
    pub id: Option<String>,
    /// Every `data: ` payload, in order, joined with `\n`.
    pub data: String,
    /// Event type from the last `event: ` line.
    pub event: Option<String>,
    /// Reconnection delay in milliseconds from the last valid `retry: ` line.
    pub retry: i64,
    /// Last comment payload, only when comments are captured.
    pub comment: Option<String>,
}

impl ServerSentEvent {
    /// Whether this is an unnamed event (dispatched as `message` by browsers).
    #[inline]
    pub fn is_message(&self) -> bool {
        self.event.is_none()
    }

    /// Event type, defaulting to `"message"`.
    pub fn event_type(&self) -> &str {
        self.event.as_deref().unwrap_or("message")
    }

    /// The `retry` value as a duration, if the server sent a positive one.
    pub fn retry_duration(&self) -> Option<Duration> {
        u64::try_from(self.retry)
            .ok()
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
    }
}

/// Renders the event back to wire form, terminated by a blank line.
impl fmt::Display for ServerSentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            writeln!(f, ": {comment}")?;
        }
        if let Some(id) = &self.id {
            writeln!(f, "id: {id}")?;
        }
        if let Some(event) = &self.event {
            writeln!(f, "event: {event}")?;
        }
        if self.retry != 0 {
            writeln!(f, "retry: {}", self.retry)?;
        }
        if !self.data.is_empty() {
            for line in self.data.split('\n') {
                writeln!(f, "data: {line}")?;
            }
        }
        writeln!(f)
    }
}

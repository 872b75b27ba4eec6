//! Construction-time scanner options.

/// Default initial read buffer size.
pub const DEFAULT_BUFFER_CAPACITY: usize = 4096;

/// Default limit on a single buffered line (64 KiB).
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

/// What the scanner does with comment lines (lines starting with `:`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentPolicy {
    /// Store the comment payload in [`ServerSentEvent::comment`](crate::ServerSentEvent::comment).
    Capture,
    /// Drop comment lines as if they were never sent.
    #[default]
    Discard,
}

/// Configuration for a [`Scanner`](crate::Scanner).
///
/// Chainable setters on top of sensible defaults:
///
/// ```
/// use sse_core::{CommentPolicy, ScanConfig};
///
/// let config = ScanConfig::new()
///     .comments(CommentPolicy::Capture)
///     .max_line_len(1 << 20);
/// assert!(config.captures_comments());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Comment handling.
    pub comments: CommentPolicy,
    /// Initial size of the read buffer.
    pub buffer_capacity: usize,
    /// Largest line the scanner will buffer before giving up.
    ///
    /// The limit covers the line terminator too. A trailing `\r` is held
    /// until the next byte shows whether it starts a `\r\n` pair, so a line
    /// ending in a lone CR needs one byte of room beyond its content.
    pub max_line_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            comments: CommentPolicy::Discard,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl ScanConfig {
    /// Default configuration: comments discarded, 64 KiB line limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment policy.
    #[must_use]
    pub fn comments(mut self, comments: CommentPolicy) -> Self {
        self.comments = comments;
        self
    }

    /// Set the initial read buffer size (at least one byte).
    #[must_use]
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = capacity.max(1);
        self
    }

    /// Set the largest line the scanner will buffer, terminator included.
    #[must_use]
    pub fn max_line_len(mut self, limit: usize) -> Self {
        self.max_line_len = limit.max(1);
        self
    }

    /// Whether comment lines are captured.
    #[inline]
    pub fn captures_comments(&self) -> bool {
        self.comments == CommentPolicy::Capture
    }
}

impl From<CommentPolicy> for ScanConfig {
    fn from(comments: CommentPolicy) -> Self {
        Self::default().comments(comments)
    }
}

//! Event assembler: folds line tokens into [`ServerSentEvent`]s.
//!
//! Pull-based: every [`Scanner::advance`] call reads lines until an event is
//! complete, blocking in the source's `read` as needed.
//!
//! # Event boundaries
//!
//! ```text
//! Idle ──non-blank line──▶ InEvent ──blank line──▶ dispatch
//!  ▲  └─blank line (noise)     │
//!  └───────────────────────────┴──end of input──▶ dispatch if InEvent
//! ```
//!
//! Comment lines only count toward an event when comments are captured.
//! Otherwise a keep-alive such as `:\n\n` produces nothing.

use std::io::{self, Read, Write};
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::error::{ScanError, ScanResult};
use crate::event::ServerSentEvent;
use crate::field::Line;
use crate::lines::LineReader;
use crate::source::{Close, NoClose};
use crate::tee::Tee;

/// Assembly phase within a single `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// No contributing line yet; blank lines are noise.
    Idle,
    /// At least one contributing line; a blank line dispatches.
    InEvent,
}

/// Streaming SSE scanner over a blocking byte source.
///
/// ```
/// use sse_core::{ScanConfig, Scanner};
///
/// let body = "event: greet\ndata: hello\ndata: world\n\n".as_bytes();
/// let mut scanner = Scanner::from_reader(body, ScanConfig::default());
///
/// assert!(scanner.advance());
/// assert_eq!(scanner.event().event.as_deref(), Some("greet"));
/// assert_eq!(scanner.event().data, "hello\nworld");
/// assert!(!scanner.advance());
/// assert!(scanner.err().is_none());
/// ```
#[derive(Debug)]
pub struct Scanner<R> {
    lines: LineReader<R>,
    config: ScanConfig,
    event: ServerSentEvent,
    err: Option<ScanError>,
    /// End of input or terminal error reached
    done: bool,
    closed: bool,
}

impl<R> Scanner<R> {
    /// Create a scanner over `source`.
    ///
    /// [`close`](Self::close) is available when `R` also implements [`Close`].
    pub fn new(source: R, config: impl Into<ScanConfig>) -> Self {
        let config = config.into();
        Self {
            lines: LineReader::new(source, config.buffer_capacity, config.max_line_len),
            config,
            event: ServerSentEvent::default(),
            err: None,
            done: false,
            closed: false,
        }
    }

    /// The most recently produced event.
    ///
    /// Empty before the first successful [`advance`](Self::advance) and
    /// after one that returned `false`.
    #[inline]
    pub fn event(&self) -> &ServerSentEvent {
        &self.event
    }

    /// The error that stopped iteration, if any.
    ///
    /// `None` after a clean end of input.
    #[inline]
    pub fn err(&self) -> Option<&ScanError> {
        self.err.as_ref()
    }

    /// Take ownership of the terminal error.
    pub fn take_err(&mut self) -> Option<ScanError> {
        self.err.take()
    }

    /// Options the scanner was built with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// The underlying byte source.
    pub fn get_ref(&self) -> &R {
        self.lines.get_ref()
    }

    /// Mutable access to the byte source. Reading from it directly skips
    /// bytes the scanner would otherwise see.
    pub fn get_mut(&mut self) -> &mut R {
        self.lines.get_mut()
    }

    /// Bytes already read from the source but not yet scanned.
    pub fn buffered(&self) -> &[u8] {
        self.lines.buffered()
    }

    /// Unwrap the source. Buffered but unscanned bytes are lost.
    pub fn into_inner(self) -> R {
        self.lines.into_inner()
    }

    /// Duplicate every byte read from now on into `sink`.
    ///
    /// Bytes already buffered by the scanner are kept but not copied, so
    /// attach the tee before the first [`advance`](Self::advance).
    pub fn tee<W: Write>(self, sink: W) -> Scanner<Tee<R, W>> {
        Scanner {
            lines: self.lines.map_source(|source| Tee::new(source, sink)),
            config: self.config,
            event: self.event,
            err: self.err,
            done: self.done,
            closed: self.closed,
        }
    }
}

impl<R: Read> Scanner<NoClose<R>> {
    /// Create a scanner over a reader that has no close capability.
    pub fn from_reader(reader: R, config: impl Into<ScanConfig>) -> Self {
        Scanner::new(NoClose::new(reader), config)
    }
}

impl<R: Read> Scanner<R> {
    /// Scan the next event.
    ///
    /// Returns `false` once the source is exhausted or has failed; check
    /// [`err`](Self::err) to tell the two apart. A failure discards the
    /// partially assembled event, and every later call returns `false`.
    pub fn advance(&mut self) -> bool {
        self.event = ServerSentEvent::default();
        if self.done {
            return false;
        }

        match self.scan_event() {
            Ok(Some(event)) => {
                debug!(
                    id = ?event.id,
                    event = ?event.event,
                    data_len = event.data.len(),
                    "dispatching event"
                );
                self.event = event;
                true
            }
            Ok(None) => {
                debug!("event stream exhausted");
                self.done = true;
                false
            }
            Err(e) => {
                debug!(error = %e, "event stream failed");
                self.err = Some(e);
                self.done = true;
                false
            }
        }
    }

    fn scan_event(&mut self) -> ScanResult<Option<ServerSentEvent>> {
        let capture_comments = self.config.captures_comments();
        let mut event = ServerSentEvent::default();
        let mut data_lines: Vec<String> = Vec::new();
        let mut phase = Phase::Idle;

        while let Some(token) = self.lines.next_line()? {
            let text = String::from_utf8_lossy(token);
            let line = text.trim();

            if line.is_empty() {
                match phase {
                    Phase::InEvent => break,
                    Phase::Idle => continue,
                }
            }

            let parsed = Line::classify(line);
            trace!(?parsed, "line");
            match parsed {
                Line::Id(value) => event.id = Some(value.to_owned()),
                Line::Data(value) => data_lines.push(value.to_owned()),
                Line::Event(value) => event.event = Some(value.to_owned()),
                Line::Retry(value) => match value.parse::<i64>() {
                    Ok(ms) => event.retry = ms,
                    Err(_) => debug!(value, "ignoring invalid retry"),
                },
                Line::Comment(value) if capture_comments => event.comment = Some(value.to_owned()),
                Line::Comment(_) => continue,
                Line::Unknown => {}
            }
            phase = Phase::InEvent;
        }

        if phase == Phase::Idle {
            return Ok(None);
        }

        event.data = data_lines.join("\n");
        Ok(Some(event))
    }
}

impl<R: Close> Scanner<R> {
    /// Release the underlying source.
    ///
    /// The source's close runs at most once; later calls return `Ok(())`.
    pub fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        debug!("closing event source");
        self.lines.get_mut().close()
    }
}

/// Yields owned events, then the terminal error once, then `None`.
impl<R: Read> Iterator for Scanner<R> {
    type Item = ScanResult<ServerSentEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            return Some(Ok(std::mem::take(&mut self.event)));
        }
        self.err.take().map(Err)
    }
}

impl<R: Read> FusedIterator for Scanner<R> {}

//! Buffered driver turning a byte source into line tokens.
//!
//! Bytes are read into a growable buffer and handed to the
//! [`EolSplitter`]. When the splitter needs more input the driver compacts
//! the buffer, grows it up to the line limit, and reads again.
//!
//! ```text
//! buf: [ consumed | start .. end unconsumed | free ]
//!                   ▲ splitter looks here     ▲ read() fills here
//! ```

use std::io::{self, Read};

use tracing::trace;

use crate::error::{ScanError, ScanResult};
use crate::splitter::{EolSplitter, Split};

#[derive(Debug)]
pub(crate) struct LineReader<R> {
    source: R,
    buf: Vec<u8>,
    /// First unconsumed byte
    start: usize,
    /// End of valid data
    end: usize,
    /// Source returned a zero-length read
    eof: bool,
    splitter: EolSplitter,
    max_line_len: usize,
}

impl<R> LineReader<R> {
    pub(crate) fn new(source: R, capacity: usize, max_line_len: usize) -> Self {
        let max_line_len = max_line_len.max(1);
        let capacity = capacity.clamp(1, max_line_len);
        Self {
            source,
            buf: vec![0; capacity],
            start: 0,
            end: 0,
            eof: false,
            splitter: EolSplitter::new(),
            max_line_len,
        }
    }

    /// Swap the source, keeping buffered bytes and splitter state.
    pub(crate) fn map_source<S>(self, f: impl FnOnce(R) -> S) -> LineReader<S> {
        LineReader {
            source: f(self.source),
            buf: self.buf,
            start: self.start,
            end: self.end,
            eof: self.eof,
            splitter: self.splitter,
            max_line_len: self.max_line_len,
        }
    }

    pub(crate) fn get_ref(&self) -> &R {
        &self.source
    }

    pub(crate) fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    pub(crate) fn into_inner(self) -> R {
        self.source
    }

    /// Bytes read from the source but not yet returned as lines.
    pub(crate) fn buffered(&self) -> &[u8] {
        &self.buf[self.start..self.end]
    }
}

impl<R: Read> LineReader<R> {
    /// Next line token without its terminator, or `None` at end of input.
    pub(crate) fn next_line(&mut self) -> ScanResult<Option<&[u8]>> {
        loop {
            if self.end > self.start || self.eof {
                match self.splitter.split(&self.buf[self.start..self.end], self.eof) {
                    Split::Skip => {
                        self.start += 1;
                        continue;
                    }
                    Split::Token { advance, token } => {
                        let from = self.start;
                        let to = from + token.len();
                        self.start += advance;
                        return Ok(Some(&self.buf[from..to]));
                    }
                    Split::NeedMore => {}
                }
            }

            if self.eof {
                return Ok(None);
            }
            self.fill()?;
        }
    }

    /// Make room and read at least once from the source.
    fn fill(&mut self) -> ScanResult<()> {
        if self.start == self.end {
            self.start = 0;
            self.end = 0;
        } else if self.start > 0 && (self.end == self.buf.len() || self.start > self.buf.len() / 2) {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }

        if self.end == self.buf.len() {
            if self.buf.len() >= self.max_line_len {
                return Err(ScanError::LineTooLong { limit: self.max_line_len });
            }
            let new_len = (self.buf.len() * 2).min(self.max_line_len);
            trace!(from = self.buf.len(), to = new_len, "growing line buffer");
            self.buf.resize(new_len, 0);
        }

        loop {
            match self.source.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    trace!("source reached end of input");
                    self.eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    self.end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

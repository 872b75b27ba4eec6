//! End-of-line splitter for SSE streams.
//!
//! The SSE grammar accepts `\r\n`, bare `\r` and bare `\n` as line endings.
//! Input arrives in chunks, so a `\r\n` pair can be split across two reads.
//! The splitter remembers that case with a single flag and never reads the
//! halves as two separate line endings.
//!
//! ```text
//! chunk 1: "data: a\r"     -> NeedMore (CR pending)
//! chunk 2: "data: a\r\n"   -> Token("data: a"), advance 9
//! ```

/// Carriage return byte
pub(crate) const CR: u8 = b'\r';
/// Line feed byte
pub(crate) const LF: u8 = b'\n';

/// Outcome of a single [`EolSplitter::split`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split<'a> {
    /// Advance by one byte, emit nothing.
    ///
    /// Swallows the LF of a `\r\n` pair whose CR was already resolved.
    Skip,
    /// Advance by `advance` bytes and emit `token`.
    ///
    /// The token excludes the terminator; `advance` includes it.
    Token { advance: usize, token: &'a [u8] },
    /// Advance by zero; more input is required before calling again.
    NeedMore,
}

impl Split<'_> {
    /// Number of bytes the caller should consume.
    #[inline]
    pub fn advance(&self) -> usize {
        match self {
            Split::Skip => 1,
            Split::Token { advance, .. } => *advance,
            Split::NeedMore => 0,
        }
    }
}

/// Line tokenizer handling CR LF, CR and LF as end-of-line.
///
/// The only state surviving between calls is whether the previous call
/// stopped on an unresolved carriage return.
#[derive(Debug, Clone, Default)]
pub struct EolSplitter {
    pending_cr: bool,
}

impl EolSplitter {
    /// Create a splitter with no pending state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last call stopped on a trailing CR.
    #[inline]
    pub fn is_pending_cr(&self) -> bool {
        self.pending_cr
    }

    /// Find the next line in `data`.
    ///
    /// `data` holds the unconsumed bytes seen so far and `at_eof` signals
    /// that no more bytes will ever arrive.
    pub fn split<'a>(&mut self, data: &'a [u8], at_eof: bool) -> Split<'a> {
        if self.pending_cr {
            self.pending_cr = false;
            if data.first() == Some(&LF) {
                return Split::Skip;
            }
        }

        if let Some(i) = memchr::memchr2(CR, LF, data) {
            if data[i] == LF {
                return Split::Token { advance: i + 1, token: &data[..i] };
            }

            // CR: look one byte ahead for the LF of a CR LF pair.
            match data.get(i + 1) {
                Some(&LF) => return Split::Token { advance: i + 2, token: &data[..i] },
                Some(_) => return Split::Token { advance: i + 1, token: &data[..i] },
                None if !at_eof => {
                    self.pending_cr = true;
                    return Split::NeedMore;
                }
                None => return Split::Token { advance: i + 1, token: &data[..i] },
            }
        }

        if at_eof && !data.is_empty() {
            return Split::Token { advance: data.len(), token: data };
        }

        Split::NeedMore
    }
}

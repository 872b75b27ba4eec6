//! Terminal errors raised while scanning an event stream.

use std::io;

use thiserror::Error;

/// Result type used by the line driver and the scanner.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that stop a [`Scanner`](crate::Scanner).
///
/// Malformed input is never an error: unknown fields, unparsable `retry`
/// values and invalid UTF-8 are tolerated line by line. Only the byte source
/// can fail, and a single line can outgrow the configured buffer limit.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The underlying byte source failed to read.
    #[error("read error: {0}")]
    Io(#[from] io::Error),

    /// A single line, counting its terminator, did not fit in the read
    /// buffer.
    #[error("line does not fit in {limit}-byte buffer")]
    LineTooLong { limit: usize },
}

impl ScanError {
    /// The source error, if this is a read failure.
    pub fn as_io(&self) -> Option<&io::Error> {
        match self {
            Self::Io(e) => Some(e),
            Self::LineTooLong { .. } => None,
        }
    }
}

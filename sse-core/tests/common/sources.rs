//! Byte sources with controlled read boundaries and failures

use std::collections::VecDeque;
use std::io::{self, Read};

use sse_core::Close;

/// Reader returning exactly one chunk per `read` call (or less, if the
/// caller's buffer is smaller). Empty chunks are skipped, never reported as
/// end of input.
pub struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
    pub reads: usize,
}

impl ChunkedReader {
    pub fn new(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            chunks: chunks.into_iter().filter(|c| !c.is_empty()).collect(),
            reads: 0,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        let Some(chunk) = self.chunks.front_mut() else {
            return Ok(0);
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        chunk.drain(..n);
        if chunk.is_empty() {
            self.chunks.pop_front();
        }
        Ok(n)
    }
}

/// Reader serving `data`, then failing with `kind` forever.
pub struct FailingReader {
    data: io::Cursor<Vec<u8>>,
    kind: io::ErrorKind,
}

impl FailingReader {
    pub fn new(data: &[u8], kind: io::ErrorKind) -> Self {
        Self { data: io::Cursor::new(data.to_vec()), kind }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(self.kind, "source failed")),
            n => Ok(n),
        }
    }
}

/// Source counting how often it was closed.
pub struct CountingClose<R> {
    pub inner: R,
    pub closes: usize,
}

impl<R> CountingClose<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, closes: 0 }
    }
}

impl<R: Read> Read for CountingClose<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R> Close for CountingClose<R> {
    fn close(&mut self) -> io::Result<()> {
        self.closes += 1;
        Ok(())
    }
}

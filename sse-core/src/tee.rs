//! Raw-traffic duplication for debugging.

use std::io::{self, Read, Write};

use crate::source::Close;

/// Reader that copies every byte it returns into a sink.
///
/// Bytes are written to the sink before the read returns them, so the sink
/// always holds exactly what the consumer has seen. A failed sink write is
/// reported as the read failure. Closing closes the wrapped source only.
#[derive(Debug)]
pub struct Tee<R, W> {
    source: R,
    sink: W,
}

impl<R, W> Tee<R, W> {
    /// Duplicate everything read from `source` into `sink`.
    pub fn new(source: R, sink: W) -> Self {
        Self { source, sink }
    }

    /// The wrapped source.
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// The sink receiving copied bytes.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Mutable access to the sink.
    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Unwrap into the source and the sink.
    pub fn into_parts(self) -> (R, W) {
        (self.source, self.sink)
    }
}

impl<R: Read, W: Write> Read for Tee<R, W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.source.read(buf)?;
        if n > 0 {
            self.sink.write_all(&buf[..n])?;
        }
        Ok(n)
    }
}

impl<R: Close, W> Close for Tee<R, W> {
    fn close(&mut self) -> io::Result<()> {
        self.source.close()
    }
}

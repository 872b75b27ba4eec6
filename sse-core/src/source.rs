//! Byte source capabilities.
//!
//! A scanner reads from anything implementing [`Read`]. Closing is a second,
//! optional capability: sources that can release their resource implement
//! [`Close`], plain readers are wrapped in [`NoClose`].

use std::io::{self, Read};
use std::net::{Shutdown, TcpStream};

/// A byte source that can release its underlying resource.
pub trait Close {
    /// Release the resource. Any read blocked on it should return promptly.
    fn close(&mut self) -> io::Result<()>;
}

impl<T: Close + ?Sized> Close for Box<T> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl<T: Close + ?Sized> Close for &mut T {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Shuts down both halves; a socket that is already disconnected counts as closed.
impl Close for TcpStream {
    fn close(&mut self) -> io::Result<()> {
        match self.shutdown(Shutdown::Both) {
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}

/// Adapter giving a plain reader a no-op [`Close`].
#[derive(Debug, Clone, Default)]
pub struct NoClose<R>(pub R);

impl<R> NoClose<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self(reader)
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Read> Read for NoClose<R> {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl<R> Close for NoClose<R> {
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//! Connection Handler
//!
//! Owns one bidirectional byte stream to the daemon and provides the two
//! primitives the protocol layer needs: full-buffer sends and blocking
//! line-delimited receives.

use std::io::{BufRead, BufReader, Read, Write};

use crate::error::{Result, SpeechdError};

/// A single exclusively-owned transport handle to the daemon
///
/// Reads are buffered; writes go straight through to the underlying stream
/// and are flushed per send. [`Connection::close`] drops the stream, after
/// which every operation fails with [`SpeechdError::ClosedConnection`].
pub struct Connection<S: Read + Write> {
    /// Buffered stream; None once the connection has been closed
    stream: Option<BufReader<S>>,
}

impl<S: Read + Write> Connection<S> {
    /// Wrap an established stream
    pub fn new(stream: S) -> Self {
        Self {
            stream: Some(BufReader::new(stream)),
        }
    }

    /// Whether the connection is still open
    pub fn is_open(&self) -> bool {
        self.stream.is_some()
    }

    /// Write the full buffer to the daemon and flush
    pub fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(SpeechdError::ClosedConnection)?;

        // Writes bypass the read buffer and hit the stream directly.
        let writer = stream.get_mut();
        writer.write_all(bytes)?;
        writer.flush()?;

        tracing::trace!("Sent {} bytes", bytes.len());
        Ok(())
    }

    /// Read one reply line, blocking until the `\n` delimiter arrives
    ///
    /// The trailing `\n` is stripped, along with the `\r` the daemon puts
    /// before it; a bare `\n` is tolerated. Stream closure before a
    /// delimiter is an error, never a short line.
    pub fn read_line(&mut self) -> Result<String> {
        let stream = self.stream.as_mut().ok_or(SpeechdError::ClosedConnection)?;

        let mut buf = Vec::new();
        let n = stream.read_until(b'\n', &mut buf)?;

        if n == 0 || buf.last() != Some(&b'\n') {
            return Err(SpeechdError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "stream closed before end of reply line",
            )));
        }

        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        let line = String::from_utf8(buf)?;
        tracing::trace!("Received line: {:?}", line);
        Ok(line)
    }

    /// Release the underlying stream
    ///
    /// Idempotent: closing an already-closed connection does nothing.
    pub fn close(&mut self) {
        if self.stream.take().is_some() {
            tracing::debug!("Connection closed");
        }
    }
}

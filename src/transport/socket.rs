//! Socket establishment
//!
//! Resolves a filesystem path to a connected Unix domain socket stream.
//! Unix domain sockets only exist on POSIX targets, so on other platforms
//! [`connect`] reports the missing capability up front instead of failing
//! somewhere inside a syscall.

use std::path::Path;

use crate::error::{Result, SpeechdError};

#[cfg(unix)]
pub use std::os::unix::net::UnixStream as SocketStream;

#[cfg(not(unix))]
pub use unsupported::SocketStream;

/// Connect to the daemon socket at the given path
///
/// Fails with [`SpeechdError::Connection`] when the path does not exist, is
/// not a socket, or nothing is listening.
#[cfg(unix)]
pub fn connect(path: &Path) -> Result<SocketStream> {
    tracing::debug!("Connecting to daemon socket at {}", path.display());

    SocketStream::connect(path).map_err(|source| SpeechdError::Connection {
        path: path.to_path_buf(),
        source,
    })
}

/// Connect to the daemon socket at the given path
///
/// This platform has no Unix domain socket support; the call fails with
/// [`SpeechdError::UnsupportedPlatform`] before any network syscall.
#[cfg(not(unix))]
pub fn connect(_path: &Path) -> Result<SocketStream> {
    Err(unsupported_platform())
}

#[cfg(not(unix))]
fn unsupported_platform() -> SpeechdError {
    SpeechdError::UnsupportedPlatform(std::env::consts::OS.to_string())
}

#[cfg(not(unix))]
mod unsupported {
    use std::io::{Read, Write};

    /// Placeholder stream type for targets without Unix domain sockets.
    ///
    /// Never constructed: [`super::connect`] is the only producer and it
    /// always fails on these targets. The Read/Write impls exist purely to
    /// satisfy trait bounds.
    #[derive(Debug)]
    pub struct SocketStream {
        _private: (),
    }

    impl Read for SocketStream {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
        }
    }

    impl Write for SocketStream {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::from(std::io::ErrorKind::Unsupported))
        }
    }
}

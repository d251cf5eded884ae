//! Error types for the speechd client
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using SpeechdError
pub type Result<T> = std::result::Result<T, SpeechdError>;

/// Unified error type for speechd client operations
#[derive(Debug, Error)]
pub enum SpeechdError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Platform Errors
    // -------------------------------------------------------------------------
    #[error("Unix domain sockets are not supported on this platform ({0})")]
    UnsupportedPlatform(String),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Failed to connect to {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Connection is closed")]
    ClosedConnection,

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Encoding error: reply is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

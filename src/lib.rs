//! # speechd-client
//!
//! A synchronous client for the speech-dispatcher daemon, with:
//! - Connection establishment over a Unix domain socket
//! - CRLF command framing with fixed-count reply reads
//! - High-level speak / stop / set-client-name / shutdown operations
//! - RAII connection release (QUIT on drop)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Client                                │
//! │        (speak / stop / set_client_name / close)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Protocol                                │
//! │        (Command framing / fixed-count Reply parsing)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Transport                               │
//! │         (Connection: send bytes / read lines)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!            {runtime_dir}/speech-dispatcher/speechd.sock
//! ```
//!
//! The protocol is half-duplex request/reply with no pipelining: one
//! command is in flight at a time, and replies are correlated purely by
//! send order.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod env;
pub mod transport;
pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SpeechdError};
pub use config::Config;
pub use env::{Environment, SystemEnvironment};
pub use client::Client;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the client crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

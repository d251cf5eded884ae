//! Transport Module
//!
//! Byte delivery over a connected Unix domain socket stream.
//!
//! ## Architecture
//! - One exclusively-owned stream per connection
//! - Buffered line-delimited reads, flushed writes
//! - Platform gating: connecting fails fast on non-Unix targets

mod connection;
mod socket;

pub use connection::Connection;
pub use socket::{connect, SocketStream};

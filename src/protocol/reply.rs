//! Reply definitions
//!
//! Represents daemon replies as fixed-length line sequences.

use std::io::{Read, Write};

use crate::error::{Result, SpeechdError};
use crate::transport::Connection;

/// An ordered sequence of exactly the declared number of reply lines
///
/// Constructed only by [`Reply::read_from`], which knows the count in
/// advance; a stream that closes early yields an error, never a shorter
/// reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    lines: Vec<String>,
}

impl Reply {
    /// Read the declared number of lines from a connection
    pub fn read_from<S: Read + Write>(conn: &mut Connection<S>, count: usize) -> Result<Self> {
        let mut lines = Vec::with_capacity(count);
        for _ in 0..count {
            lines.push(conn.read_line()?);
        }
        Ok(Self { lines })
    }

    /// All reply lines, in arrival order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// A single reply line by index
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines in the reply
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the reply carries no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Parse the message id from the first reply line
    ///
    /// The line has the shape `<code>-<id> <message>`; the id is the
    /// integer token after the first `-`.
    pub fn message_id(&self) -> Result<u32> {
        let line = self.line(0).ok_or_else(|| {
            SpeechdError::Protocol("empty reply where a message id was expected".to_string())
        })?;

        let (_, rest) = line.split_once('-').ok_or_else(|| {
            SpeechdError::Protocol(format!(
                "reply line has no '-' separated message id: {:?}",
                line
            ))
        })?;

        let token = rest.split_whitespace().next().unwrap_or("");
        token.parse::<u32>().map_err(|_| {
            SpeechdError::Protocol(format!("message id is not a number: {:?}", line))
        })
    }
}

//! Protocol client
//!
//! High-level operations over one daemon connection: speak, stop, set the
//! client name, and shut down. Each operation sends one or more framed
//! commands and blocks reading exactly the declared number of reply lines.

use std::io::{Read, Write};

use crate::config::Config;
use crate::env::{Environment, SystemEnvironment};
use crate::error::Result;
use crate::protocol::{Command, Reply};
use crate::transport::{self, Connection, SocketStream};

/// A client for the speech-synthesis daemon
///
/// The protocol is half-duplex with no reply correlation, so command/reply
/// cycles must be strictly sequential. Every operation takes `&mut self`
/// for its full send+receive duration, which rules out interleaving at
/// compile time; sharing a client across threads requires external mutual
/// exclusion around whole operations.
///
/// Dropping the client sends `QUIT` and releases the socket, so the daemon
/// is notified on every exit path, including error unwinding.
pub struct Client<S: Read + Write> {
    /// Transport to the daemon
    conn: Connection<S>,

    /// Host account name, part of the identity triple for SET CLIENT_NAME
    user: String,
}

impl Client<SocketStream> {
    /// Connect to the daemon at the address the config resolves to
    ///
    /// Uses the real process environment for the default socket path and
    /// the account name.
    pub fn connect(config: &Config) -> Result<Self> {
        Self::connect_with(config, &SystemEnvironment)
    }

    /// Connect using an injected environment provider
    pub fn connect_with(config: &Config, env: &dyn Environment) -> Result<Self> {
        let path = config.resolve_socket_path(env)?;
        let stream = transport::connect(&path)?;
        tracing::debug!("Connected to daemon at {}", path.display());
        Ok(Self::from_stream(stream, env.user_name()))
    }
}

impl<S: Read + Write> Client<S> {
    /// Wrap an already-established stream
    ///
    /// `user` becomes the first component of the identity triple sent by
    /// [`Client::set_client_name`].
    pub fn from_stream(stream: S, user: impl Into<String>) -> Self {
        Self {
            conn: Connection::new(stream),
            user: user.into(),
        }
    }

    /// Whether the connection is still open
    pub fn is_open(&self) -> bool {
        self.conn.is_open()
    }

    /// Queue `text` for synthesis and return the daemon's message id
    ///
    /// With `interrupt` set, anything this client already queued is
    /// cancelled first. The text is sent verbatim; a line consisting
    /// solely of `.` inside it is taken by the daemon as the end-of-body
    /// terminator.
    pub fn speak(&mut self, text: &str, interrupt: bool) -> Result<u32> {
        if interrupt {
            self.execute(&Command::CancelSelf)?;
        }

        let reply = self.execute(&Command::Speak {
            text: text.to_string(),
        })?;

        // The second line is the queue-acceptance status. It has to be read
        // to keep the stream in sync, but its content is not validated.
        if let Some(status) = reply.line(1) {
            tracing::trace!("Queue status: {:?}", status);
        }

        let id = reply.message_id()?;
        tracing::debug!("Message {} queued", id);
        Ok(id)
    }

    /// Cancel everything this client has queued
    ///
    /// Fire-and-forget: the daemon sends no reply for a standalone CANCEL.
    pub fn stop(&mut self) -> Result<()> {
        self.execute(&Command::CancelSelf)?;
        Ok(())
    }

    /// Announce the client identity triple `<user>:<name>:default`
    pub fn set_client_name(&mut self, name: &str) -> Result<()> {
        self.execute(&Command::SetClientName {
            user: self.user.clone(),
            name: name.to_string(),
        })?;
        Ok(())
    }

    /// Notify the daemon with `QUIT` and release the socket
    ///
    /// Idempotent: later calls do nothing, and `QUIT` is sent at most
    /// once. A failure to deliver `QUIT` still closes the connection.
    pub fn close(&mut self) {
        if !self.conn.is_open() {
            return;
        }

        if let Err(e) = self.conn.send(&Command::Quit.encode()) {
            tracing::debug!("QUIT not delivered during close: {}", e);
        }
        self.conn.close();
    }

    /// Send a command and read its declared number of reply lines
    fn execute(&mut self, command: &Command) -> Result<Reply> {
        self.conn.send(&command.encode())?;
        Reply::read_from(&mut self.conn, command.reply_lines())
    }
}

impl<S: Read + Write> Drop for Client<S> {
    fn drop(&mut self) {
        self.close();
    }
}

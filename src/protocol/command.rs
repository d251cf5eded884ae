//! Command definitions
//!
//! Represents commands sent to the daemon.

/// Component field of the client identity triple, fixed by the protocol
pub const CLIENT_COMPONENT: &str = "default";

/// A command to send to the daemon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Cancel all messages queued by this client
    CancelSelf,

    /// Queue a message for synthesis
    Speak { text: String },

    /// Announce the client identity triple (user:name:component)
    SetClientName { user: String, name: String },

    /// Tell the daemon this client is going away
    Quit,
}

impl Command {
    /// Number of reply lines the daemon sends for this command
    ///
    /// Fire-and-forget commands declare zero lines and must not trigger a
    /// blocking read.
    pub fn reply_lines(&self) -> usize {
        match self {
            Command::Speak { .. } => 2,
            Command::CancelSelf | Command::SetClientName { .. } | Command::Quit => 0,
        }
    }

    /// Encode the command to wire bytes
    ///
    /// Single-line commands are CRLF-terminated. SPEAK carries its text
    /// verbatim followed by the `\r\n.\r\n` terminator; a line consisting
    /// solely of `.` inside the text is not escaped and will be taken by
    /// the daemon as the terminator.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Command::CancelSelf => b"CANCEL SELF\r\n".to_vec(),
            Command::Speak { text } => {
                let mut message = Vec::with_capacity(text.len() + 12);
                message.extend_from_slice(b"SPEAK\r\n");
                message.extend_from_slice(text.as_bytes());
                message.extend_from_slice(b"\r\n.\r\n");
                message
            }
            Command::SetClientName { user, name } => {
                format!("SET self CLIENT_NAME {}:{}:{}\r\n", user, name, CLIENT_COMPONENT)
                    .into_bytes()
            }
            Command::Quit => b"QUIT\r\n".to_vec(),
        }
    }
}

//! Protocol Module
//!
//! Defines the daemon's command language: a half-duplex, text-line
//! request/reply protocol. Commands are CRLF-terminated; multi-line bodies
//! end with a bare `.` line. Every command declares a fixed reply-line
//! count up front — replies carry no correlation ids, so the count is the
//! only way to keep the stream in sync.
//!
//! ## Wire Format
//!
//! | Command sent                                      | Reply lines |
//! |---------------------------------------------------|-------------|
//! | `CANCEL SELF\r\n`                                 | 0           |
//! | `SPEAK\r\n<text>\r\n.\r\n`                        | 2           |
//! | `SET self CLIENT_NAME <user>:<name>:default\r\n`  | 0           |
//! | `QUIT\r\n`                                        | 0           |
//!
//! The first SPEAK reply line has the shape `<code>-<id> <message>`; the
//! second is the queue-acceptance status.

mod command;
mod reply;

pub use command::{Command, CLIENT_COMPONENT};
pub use reply::Reply;

//! Environment providers
//!
//! The client never reads process environment state directly. Everything it
//! needs from the host (the XDG runtime directory for the default socket
//! path, the account name for the client identity) comes through the
//! [`Environment`] trait, so tests can substitute a fixed environment.

use std::path::PathBuf;

/// Host environment lookup used for default addressing and client identity
pub trait Environment {
    /// The user runtime directory (XDG_RUNTIME_DIR), if available
    fn runtime_dir(&self) -> Option<PathBuf>;

    /// The invoking account name, used in the client identity triple
    fn user_name(&self) -> String;
}

/// Environment provider backed by the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn runtime_dir(&self) -> Option<PathBuf> {
        dirs::runtime_dir()
    }

    fn user_name(&self) -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("LOGNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }
}

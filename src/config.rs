//! Configuration for the speechd client
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::env::Environment;
use crate::error::{Result, SpeechdError};

/// Socket path of the daemon relative to the runtime directory
pub const DEFAULT_SOCKET_SUFFIX: &str = "speech-dispatcher/speechd.sock";

/// Main configuration for a speechd client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Addressing Configuration
    // -------------------------------------------------------------------------
    /// Explicit daemon socket path, used verbatim when set.
    /// When unset, the path is derived from the runtime directory:
    ///   {runtime_dir}/speech-dispatcher/speechd.sock
    pub socket_path: Option<PathBuf>,

    // -------------------------------------------------------------------------
    // Identity Configuration
    // -------------------------------------------------------------------------
    /// Client name announced to the daemon via SET CLIENT_NAME
    pub client_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            socket_path: None,
            client_name: "speechd-client".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Resolve the daemon socket path against the given environment
    ///
    /// An explicit path wins. The default mode requires the runtime
    /// directory to be known.
    pub fn resolve_socket_path(&self, env: &dyn Environment) -> Result<PathBuf> {
        if let Some(path) = &self.socket_path {
            return Ok(path.clone());
        }

        env.runtime_dir()
            .map(|dir| dir.join(DEFAULT_SOCKET_SUFFIX))
            .ok_or_else(|| {
                SpeechdError::Config(
                    "runtime directory (XDG_RUNTIME_DIR) is not set; \
                     supply an explicit socket path"
                        .to_string(),
                )
            })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set an explicit daemon socket path
    pub fn socket_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.socket_path = Some(path.into());
        self
    }

    /// Set the client name announced to the daemon
    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.config.client_name = name.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

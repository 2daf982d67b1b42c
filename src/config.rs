//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The ticket TTL is read once at startup and fixed for the life of the
/// process; the ordering the cache relies on does not survive a TTL change.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ticket time-to-live in seconds
    pub token_expire: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TOKEN_EXPIRE` - Ticket TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            token_expire: env::var("TOKEN_EXPIRE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Ticket time-to-live as a Duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.token_expire)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_expire: 300,
            server_port: 3000,
        }
    }
}

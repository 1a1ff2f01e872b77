//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_cors() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl HttpConfig {
    /// Create an HTTP config bound to `host:port`.
    pub fn new(port: u16, host: impl Into<String>) -> Self {
        Self {
            port,
            host: host.into(),
            ..Default::default()
        }
    }

    /// Load HTTP config from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("VUTTR_HTTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let host = std::env::var("VUTTR_HTTP_HOST").unwrap_or_else(|_| default_host());
        let enable_cors = std::env::var("VUTTR_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or_else(|_| default_cors());

        Self {
            port,
            host,
            enable_cors,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        let cors = if self.enable_cors { "enabled" } else { "disabled" };
        format!("HTTP on {} (CORS {})", self.address(), cors)
    }
}

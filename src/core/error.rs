//! Error types for starting and running the VUTTR API.
//!
//! Request-level failures never reach this type: they are rendered as HTTP
//! responses by [`crate::core::transport::ApiError`].

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum Error {
    /// An environment setting holds a value the server cannot use.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tool store could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] crate::domains::tools::StoreError),

    /// The HTTP transport failed to bind or serve.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

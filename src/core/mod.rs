//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the API
//! server: error handling, configuration, server wiring and the HTTP
//! transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::ApiServer;
pub use transport::{HttpConfig, HttpTransport};

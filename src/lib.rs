//! VUTTR API Library
//!
//! A REST API for cataloguing developer tools ("Very Useful Tools to
//! Remember"): create, read, update, delete and filter-by-tag a collection
//! of tool records kept in a document store.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, server wiring and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The tool catalogue (model, store adapter, service, handlers)
//!
//! # Example
//!
//! ```rust,no_run
//! use vuttr_api::core::{ApiServer, Config, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = HttpTransport::new(config.http.clone());
//!     let server = ApiServer::from_config(config).await?;
//!     transport.run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{ApiServer, Config, Error, Result};

//! HTTP transport for the VUTTR API.
//!
//! This module owns everything between the socket and the domain handlers:
//! - **config**: bind address and CORS switch
//! - **http**: router assembly, middleware and the serve loop
//! - **response**: structured JSON error bodies
//! - **validated**: the validating JSON body extractor

mod config;
mod error;
pub mod http;
mod response;
mod validated;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
pub use response::{
    ApiError, ApiErrorKind, FieldMessage, StandardError, ValidationErrorBody,
};
pub use validated::{FieldOrder, ValidatedJson};

//! Tools domain module.
//!
//! The catalogue of developer tools: the persisted [`Tool`] record, the
//! validated [`ToolInput`] payload, the document-store adapter, the service
//! orchestrating it and the HTTP surface on top.
//!
//! ## Architecture
//!
//! - `model.rs` - Tool entity, id and input payload
//! - `repository/` - Store adapter trait with in-memory and JSON file backends
//! - `service.rs` - ToolService (existence checks, field copy)
//! - `handlers.rs` - axum handlers for the five endpoints
//! - `router.rs` - Mounts the handlers under `/tools`
//! - `error.rs` - Tool-specific error types

mod error;
mod handlers;
pub mod model;
pub mod repository;
pub mod router;
mod service;

pub use error::{ToolError, ToolResult};
pub use handlers::ToolQuery;
pub use model::{Tool, ToolId, ToolInput};
pub use repository::{
    JsonFileToolRepository, MemoryToolRepository, StoreError, StoreResult, ToolRepository,
    open_repository,
};
pub use router::build_tool_router;
pub use service::ToolService;

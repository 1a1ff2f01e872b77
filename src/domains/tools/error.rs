//! Tool-specific error types.

use thiserror::Error;

use super::repository::StoreError;

/// Result type for tool service operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur during tool catalogue operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No tool exists with the requested id.
    #[error("{message}")]
    NotFound { id: String, message: String },

    /// The underlying store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ToolError {
    /// Create a new "not found" error for `id`.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            id: id.into(),
            message: "Tool does not exist".to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

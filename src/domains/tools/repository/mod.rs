//! Document-store adapter for the tool collection.
//!
//! The service layer only talks to [`ToolRepository`]; which backend sits
//! behind it is chosen from [`StorageConfig`] at startup.

mod file;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use super::model::{Tool, ToolId};
use crate::core::config::{StorageBackend, StorageConfig};

pub use file::JsonFileToolRepository;
pub use memory::MemoryToolRepository;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure while reading or writing the collection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored collection could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other backend failure.
    #[error("Internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Access to the `tools` document collection.
#[async_trait]
pub trait ToolRepository: Send + Sync {
    /// Every stored tool, in store-native order.
    async fn find_all(&self) -> StoreResult<Vec<Tool>>;

    async fn find_by_id(&self, id: &ToolId) -> StoreResult<Option<Tool>>;

    /// Every tool whose tags contain `tag` (exact match).
    async fn find_by_tag(&self, tag: &str) -> StoreResult<Vec<Tool>>;

    /// Insert or replace a tool.
    ///
    /// A tool without an id is inserted under a freshly generated one; a
    /// tool with an id replaces the stored document with that id, or is
    /// inserted if none exists. Returns the stored form.
    async fn save(&self, tool: Tool) -> StoreResult<Tool>;

    /// Remove the document with the tool's id. Removing an absent document
    /// is a no-op.
    async fn delete(&self, tool: &Tool) -> StoreResult<()>;
}

/// Open the repository backend selected by `config`.
pub async fn open_repository(config: &StorageConfig) -> StoreResult<Arc<dyn ToolRepository>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("Using in-memory tool store");
            Ok(Arc::new(MemoryToolRepository::new()))
        }
        StorageBackend::File => {
            info!("Using JSON file tool store at {:?}", config.data_path);
            let repository = JsonFileToolRepository::open(&config.data_path).await?;
            Ok(Arc::new(repository))
        }
    }
}

/// Insert-or-replace on an ordered collection, shared by the backends.
fn upsert(documents: &mut Vec<Tool>, mut tool: Tool) -> Tool {
    let id = tool.id.get_or_insert_with(ToolId::generate).clone();

    match documents.iter_mut().find(|d| d.id.as_ref() == Some(&id)) {
        Some(existing) => *existing = tool.clone(),
        None => documents.push(tool.clone()),
    }

    tool
}

/// Remove the document matching `tool`'s id; returns whether one was removed.
fn remove(documents: &mut Vec<Tool>, tool: &Tool) -> bool {
    let Some(id) = tool.id.as_ref() else {
        return false;
    };
    let before = documents.len();
    documents.retain(|d| d.id.as_ref() != Some(id));
    documents.len() != before
}

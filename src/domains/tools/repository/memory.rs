//! In-memory tool store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{StoreResult, ToolRepository, remove, upsert};
use crate::domains::tools::model::{Tool, ToolId};

/// Tool collection kept in process memory, in insertion order.
///
/// Contents are lost on restart; used by default and in tests.
#[derive(Debug, Default)]
pub struct MemoryToolRepository {
    documents: RwLock<Vec<Tool>>,
}

impl MemoryToolRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `tools` (ids are kept as given).
    pub fn with_tools(tools: Vec<Tool>) -> Self {
        let mut documents = Vec::with_capacity(tools.len());
        for tool in tools {
            upsert(&mut documents, tool);
        }
        Self {
            documents: RwLock::new(documents),
        }
    }
}

#[async_trait]
impl ToolRepository for MemoryToolRepository {
    async fn find_all(&self) -> StoreResult<Vec<Tool>> {
        Ok(self.documents.read().await.clone())
    }

    async fn find_by_id(&self, id: &ToolId) -> StoreResult<Option<Tool>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|t| t.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_tag(&self, tag: &str) -> StoreResult<Vec<Tool>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().filter(|t| t.has_tag(tag)).cloned().collect())
    }

    async fn save(&self, tool: Tool) -> StoreResult<Tool> {
        let mut documents = self.documents.write().await;
        let saved = upsert(&mut documents, tool);
        debug!(id = ?saved.id, "Saved tool document");
        Ok(saved)
    }

    async fn delete(&self, tool: &Tool) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        if remove(&mut documents, tool) {
            debug!(id = ?tool.id, "Deleted tool document");
        }
        Ok(())
    }
}

//! Tool service implementation.
//!
//! The ToolService mediates between the HTTP handlers and the repository
//! adapter. It holds no state of its own between calls: everything lives in
//! the store it was constructed with.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::error::{ToolError, ToolResult};
use super::model::{Tool, ToolId, ToolInput};
use super::repository::ToolRepository;

/// Service for listing, creating, updating and deleting tools.
#[derive(Clone)]
pub struct ToolService {
    repository: Arc<dyn ToolRepository>,
}

impl ToolService {
    /// Create a new ToolService backed by `repository`.
    pub fn new(repository: Arc<dyn ToolRepository>) -> Self {
        info!("Initializing ToolService");
        Self { repository }
    }

    /// List every stored tool, in store order.
    pub async fn list_all(&self) -> ToolResult<Vec<Tool>> {
        let tools = self.repository.find_all().await?;
        debug!("Listed {} tool(s)", tools.len());
        Ok(tools)
    }

    /// List the tools labelled with `tag`. No match is an empty list.
    #[instrument(skip(self))]
    pub async fn list_by_tag(&self, tag: &str) -> ToolResult<Vec<Tool>> {
        let tools = self.repository.find_by_tag(tag).await?;
        debug!("Found {} tool(s) tagged '{}'", tools.len(), tag);
        Ok(tools)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> ToolResult<Tool> {
        self.find_existing(id).await
    }

    /// Persist a new tool built from `input` and return it with its id.
    #[instrument(skip_all, fields(title = %input.title))]
    pub async fn create(&self, input: ToolInput) -> ToolResult<Tool> {
        let tool = self.repository.save(input.into_tool()).await?;
        info!(id = ?tool.id, "Created tool");
        Ok(tool)
    }

    /// Replace every field of the tool `id` with `input`'s values.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: ToolInput) -> ToolResult<Tool> {
        let mut tool = self.find_existing(id).await?;
        input.apply_to(&mut tool);
        let tool = self.repository.save(tool).await?;
        info!("Updated tool");
        Ok(tool)
    }

    /// Permanently remove the tool `id`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ToolResult<()> {
        let tool = self.find_existing(id).await?;
        self.repository.delete(&tool).await?;
        info!("Deleted tool");
        Ok(())
    }

    async fn find_existing(&self, id: &str) -> ToolResult<Tool> {
        self.repository
            .find_by_id(&ToolId::from(id))
            .await?
            .ok_or_else(|| ToolError::not_found(id))
    }
}

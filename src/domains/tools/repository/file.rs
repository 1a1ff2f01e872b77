//! JSON file backed tool store.
//!
//! The whole collection lives in one JSON array on disk. It is loaded once
//! when the store is opened and rewritten after every mutation, through a
//! temporary sibling file that is renamed over the original.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{StoreResult, ToolRepository, remove, upsert};
use crate::domains::tools::model::{Tool, ToolId};

/// Tool collection persisted as a JSON document file.
#[derive(Debug)]
pub struct JsonFileToolRepository {
    path: PathBuf,
    documents: RwLock<Vec<Tool>>,
}

impl JsonFileToolRepository {
    /// Open the collection at `path`. A missing file is an empty collection.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let documents = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!("Loaded {} tool(s) from {:?}", documents.len(), path);

        Ok(Self {
            path,
            documents: RwLock::new(documents),
        })
    }

    async fn persist(&self, documents: &[Tool]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(documents)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!("Persisted {} tool(s) to {:?}", documents.len(), self.path);
        Ok(())
    }
}

#[async_trait]
impl ToolRepository for JsonFileToolRepository {
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
        let mut next = documents.clone();
        let saved = upsert(&mut next, tool);

        // Memory only changes once the file write succeeded.
        self.persist(&next).await?;
        *documents = next;

        Ok(saved)
    }

    async fn delete(&self, tool: &Tool) -> StoreResult<()> {
        let mut documents = self.documents.write().await;
        let mut next = documents.clone();
        if !remove(&mut next, tool) {
            return Ok(());
        }

        self.persist(&next).await?;
        *documents = next;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::repository::StoreError;

    fn unsaved(title: &str, tags: &[&str]) -> Tool {
        Tool {
            id: None,
            title: title.to_string(),
            link: format!("https://{title}.example"),
            description: format!("{title} is a very useful tool"),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonFileToolRepository::open(dir.path().join("tools.json"))
            .await
            .unwrap();
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_documents_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tools.json");

        let saved = {
            let repository = JsonFileToolRepository::open(&path).await.unwrap();
            repository.save(unsaved("notion", &["notes"])).await.unwrap();
            repository.save(unsaved("json-server", &["api"])).await.unwrap()
        };

        let reopened = JsonFileToolRepository::open(&path).await.unwrap();
        let all = reopened.find_all().await.unwrap();
        assert_eq!(all.len(), 2);

        let id = saved.id.unwrap();
        let found = reopened.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.title, "json-server");
        assert_eq!(reopened.find_by_tag("notes").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.json");

        let repository = JsonFileToolRepository::open(&path).await.unwrap();
        let saved = repository.save(unsaved("notion", &["notes"])).await.unwrap();
        repository.delete(&saved).await.unwrap();

        let reopened = JsonFileToolRepository::open(&path).await.unwrap();
        assert!(reopened.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let result = JsonFileToolRepository::open(&path).await;
        assert!(matches!(result, Err(StoreError::Json(_))));
    }
}

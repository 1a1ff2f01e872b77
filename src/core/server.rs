//! API server wiring.
//!
//! [`ApiServer`] owns the configuration and the domain services, each
//! constructed explicitly with the collaborators it needs. Transports ask
//! it for the domain router; they never build services themselves.

use std::sync::Arc;

use axum::Router;
use tracing::{info, warn};

use super::config::{Config, StorageBackend};
use super::error::Result;
use crate::domains::tools::{ToolRepository, ToolService, build_tool_router, open_repository};

/// The VUTTR API server.
#[derive(Clone)]
pub struct ApiServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for the tool catalogue.
    tool_service: ToolService,
}

impl ApiServer {
    /// Create a server whose tools are stored in `repository`.
    pub fn new(config: Config, repository: Arc<dyn ToolRepository>) -> Self {
        Self {
            config: Arc::new(config),
            tool_service: ToolService::new(repository),
        }
    }

    /// Create a server backed by the store selected in `config.storage`.
    pub async fn from_config(config: Config) -> Result<Self> {
        let repository = open_repository(&config.storage).await?;
        match config.storage.backend {
            StorageBackend::File => {
                info!("Tool store opened at {:?}", config.storage.data_path)
            }
            StorageBackend::Memory => {
                warn!("Tool store is in memory - set VUTTR_STORAGE=file to keep tools across restarts")
            }
        }
        Ok(Self::new(config, repository))
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn tool_service(&self) -> &ToolService {
        &self.tool_service
    }

    /// Routes for every domain.
    pub fn router(&self) -> Router {
        build_tool_router(self.tool_service.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolInput;

    #[tokio::test]
    async fn test_from_config_with_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.storage.backend = StorageBackend::File;
        config.storage.data_path = dir.path().join("tools.json");

        let server = ApiServer::from_config(config.clone()).await.unwrap();
        let created = server
            .tool_service()
            .create(ToolInput {
                title: "hotel".to_string(),
                link: "https://github.com/typicode/hotel".to_string(),
                description: "Local app manager for development".to_string(),
                tags: vec!["node".to_string(), "proxy".to_string()],
            })
            .await
            .unwrap();

        let reopened = ApiServer::from_config(config).await.unwrap();
        let id = created.id.clone().unwrap();
        let fetched = reopened.tool_service().get_by_id(id.as_str()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_from_config_rejects_corrupt_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.json");
        std::fs::write(&path, "[{]").unwrap();

        let mut config = Config::default();
        config.storage.backend = StorageBackend::File;
        config.storage.data_path = path;

        let result = ApiServer::from_config(config).await;
        assert!(matches!(result, Err(crate::core::Error::Store(_))));
    }

    #[test]
    fn test_server_identity() {
        let server = ApiServer::new(
            Config::default(),
            Arc::new(crate::domains::tools::MemoryToolRepository::new()),
        );
        assert_eq!(server.name(), "vuttr-api");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }
}

//! HTTP transport implementation.
//!
//! Serves the REST API over axum. The tool endpoints come from the tools
//! domain; this module adds the info and health endpoints, request tracing
//! and optional CORS, then runs the server until Ctrl-C.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::ApiServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the complete application router for `server`.
    pub fn app(&self, server: &ApiServer) -> Router {
        let mut app = Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_check))
            .with_state(server.clone())
            .merge(server.router())
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    ///
    /// Blocks until the server is shut down by Ctrl-C.
    pub async fn run(self, server: ApiServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.app(&server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {}", self.config.description());
        info!("  → Tools:  GET|POST /tools, GET|PUT|DELETE /tools/{{id}}");
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<ApiServer>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": server.name(),
        "version": server.version(),
        "endpoints": {
            "tools": "/tools",
            "tool": "/tools/{id}",
            "health": "/health"
        },
        "documentation": "GET /tools?tag= to filter by tag; POST/PUT bodies carry title, link, description and tags"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::core::Config;
    use crate::domains::tools::MemoryToolRepository;

    fn test_app(enable_cors: bool) -> Router {
        let mut config = Config::default();
        config.http.enable_cors = enable_cors;
        let transport = HttpTransport::new(config.http.clone());
        let server = ApiServer::new(config, Arc::new(MemoryToolRepository::new()));
        transport.app(&server)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_json(test_app(false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_root_reports_server_name() {
        let (status, body) = get_json(test_app(false), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "vuttr-api");
        assert_eq!(body["endpoints"]["tools"], "/tools");
    }

    #[tokio::test]
    async fn test_tool_routes_are_mounted() {
        let (status, body) = get_json(test_app(false), "/tools").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_cors_headers_when_enabled() {
        let request = Request::builder()
            .uri("/tools")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap();
        let response = test_app(true).oneshot(request).await.unwrap();
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let config = Config::default();
        let server = ApiServer::new(config, Arc::new(MemoryToolRepository::new()));
        let transport = HttpTransport::new(HttpConfig::new(port, "127.0.0.1"));

        let result = transport.run(server).await;
        assert!(matches!(result, Err(TransportError::BindError { .. })));
    }
}

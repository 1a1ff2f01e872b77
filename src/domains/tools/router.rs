//! Tool Router - mounts the tool handlers on their paths.

use axum::{Router, routing::get};

use super::handlers::{create_tool, delete_tool, get_tool, list_tools, update_tool};
use super::service::ToolService;

/// Build the router serving `/tools` and `/tools/{id}`.
pub fn build_tool_router(service: ToolService) -> Router {
    Router::new()
        .route("/tools", get(list_tools).post(create_tool))
        .route(
            "/tools/{id}",
            get(get_tool).put(update_tool).delete(delete_tool),
        )
        .with_state(service)
}

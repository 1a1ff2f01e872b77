//! HTTP handlers for the `/tools` endpoints.
//!
//! Each handler binds the request, delegates to [`ToolService`] and picks
//! the success status. Failures are turned into structured bodies by
//! [`ApiError`].

use axum::{
    Json,
    extract::{OriginalUri, Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::{info, instrument};

use super::model::{Tool, ToolInput};
use super::service::ToolService;
use crate::core::transport::{ApiError, FieldOrder, ValidatedJson};

impl FieldOrder for ToolInput {
    fn field_order() -> &'static [&'static str] {
        Self::FIELDS
    }
}

/// Query string accepted by `GET /tools`.
#[derive(Debug, Default, Deserialize)]
pub struct ToolQuery {
    /// Only return tools carrying this tag.
    pub tag: Option<String>,
}

/// `GET /tools[?tag=]`
#[instrument(skip(service, uri, query))]
pub async fn list_tools(
    State(service): State<ToolService>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<ToolQuery>, QueryRejection>,
) -> Result<Json<Vec<Tool>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text(), uri.path()))?;

    let tools = match query.tag {
        Some(tag) => service.list_by_tag(&tag).await,
        None => service.list_all().await,
    }
    .map_err(|e| ApiError::from_tool(e, uri.path()))?;

    Ok(Json(tools))
}

/// `GET /tools/{id}`
#[instrument(skip(service, uri))]
pub async fn get_tool(
    State(service): State<ToolService>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<Json<Tool>, ApiError> {
    let tool = service
        .get_by_id(&id)
        .await
        .map_err(|e| ApiError::from_tool(e, uri.path()))?;

    Ok(Json(tool))
}

/// `POST /tools`
#[instrument(skip_all)]
pub async fn create_tool(
    State(service): State<ToolService>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<ToolInput>,
) -> Result<impl IntoResponse, ApiError> {
    info!("Received create request for '{}'", input.title);

    let tool = service
        .create(input)
        .await
        .map_err(|e| ApiError::from_tool(e, uri.path()))?;

    Ok((StatusCode::CREATED, Json(tool)))
}

/// `PUT /tools/{id}`
#[instrument(skip(service, uri, input))]
pub async fn update_tool(
    State(service): State<ToolService>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ToolInput>,
) -> Result<Json<Tool>, ApiError> {
    let tool = service
        .update(&id, input)
        .await
        .map_err(|e| ApiError::from_tool(e, uri.path()))?;

    Ok(Json(tool))
}

/// `DELETE /tools/{id}`
///
/// Responds 200 with an empty body.
#[instrument(skip(service, uri))]
pub async fn delete_tool(
    State(service): State<ToolService>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service
        .delete(&id)
        .await
        .map_err(|e| ApiError::from_tool(e, uri.path()))?;

    Ok(StatusCode::OK)
}

//! Structured error responses.
//!
//! Every failure that reaches the HTTP boundary is rendered as a JSON body
//! carrying a timestamp, the status, a message and the request path.
//! Validation failures additionally list one `{field, message}` entry per
//! violated constraint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use validator::ValidationErrors;

use crate::domains::tools::ToolError;

/// Body returned for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardError {
    pub datetime: DateTime<Local>,
    pub unix_timestamp: i64,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl StandardError {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            datetime: now,
            unix_timestamp: now.timestamp_millis(),
            status: status.as_u16(),
            error: status_name(status).to_string(),
            message: message.into(),
            path: path.into(),
        }
    }
}

/// Body returned when request fields fail validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    #[serde(flatten)]
    pub standard: StandardError,
    pub errors: Vec<FieldMessage>,
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

impl FieldMessage {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Why a request failed.
#[derive(Debug)]
pub enum ApiErrorKind {
    /// The addressed resource does not exist.
    NotFound(String),

    /// One or more request fields violated a constraint.
    Validation(Vec<FieldMessage>),

    /// The request body could not be read as the expected JSON shape.
    BadRequest(String),

    /// Any other fault. The detail is logged, never returned.
    Internal(String),
}

/// An error bound to the request path it occurred on.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub path: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Map a tool service error at `path`.
    pub fn from_tool(err: ToolError, path: impl Into<String>) -> Self {
        let kind = match err {
            ToolError::NotFound { message, .. } => ApiErrorKind::NotFound(message),
            ToolError::Store(e) => ApiErrorKind::Internal(e.to_string()),
        };
        Self::new(kind, path)
    }

    /// Collect every violation in `errors`, ordered by `field_order` first
    /// and then by field name for anything not listed.
    pub fn validation(
        errors: &ValidationErrors,
        field_order: &[&str],
        path: impl Into<String>,
    ) -> Self {
        Self::new(
            ApiErrorKind::Validation(field_messages(errors, field_order)),
            path,
        )
    }

    pub fn bad_request(msg: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::BadRequest(msg.into()), path)
    }

    pub fn status(&self) -> StatusCode {
        match self.kind {
            ApiErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
            ApiErrorKind::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorKind::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiErrorKind::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self.kind {
            ApiErrorKind::NotFound(message) => {
                warn!(path = %self.path, "Not found: {}", message);
                (status, Json(StandardError::new(status, message, self.path))).into_response()
            }
            ApiErrorKind::Validation(errors) => {
                warn!(path = %self.path, violations = errors.len(), "Validation failed");
                let body = ValidationErrorBody {
                    standard: StandardError::new(
                        status,
                        "Error when trying to validate fields",
                        self.path,
                    ),
                    errors,
                };
                (status, Json(body)).into_response()
            }
            ApiErrorKind::BadRequest(message) => {
                warn!(path = %self.path, "Bad request: {}", message);
                (status, Json(StandardError::new(status, message, self.path))).into_response()
            }
            ApiErrorKind::Internal(detail) => {
                error!(path = %self.path, "Internal error: {}", detail);
                let body = StandardError::new(status, "Internal server error", self.path);
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Upper snake case name of a status, e.g. `NOT_FOUND`.
fn status_name(status: StatusCode) -> String {
    match status {
        StatusCode::NOT_FOUND => "NOT_FOUND".to_string(),
        StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY".to_string(),
        StatusCode::BAD_REQUEST => "BAD_REQUEST".to_string(),
        StatusCode::INTERNAL_SERVER_ERROR => "INTERNAL_SERVER_ERROR".to_string(),
        other => other
            .canonical_reason()
            .unwrap_or("UNKNOWN")
            .to_uppercase()
            .replace(' ', "_"),
    }
}

fn field_messages(errors: &ValidationErrors, field_order: &[&str]) -> Vec<FieldMessage> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| {
        let rank = |name: &str| {
            field_order
                .iter()
                .position(|f| *f == name)
                .unwrap_or(field_order.len())
        };
        rank(&**a).cmp(&rank(&**b)).then_with(|| a.cmp(b))
    });

    fields
        .into_iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(move |v| {
                let message = v
                    .message
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| v.code.to_string());
                FieldMessage::new(field.to_string(), message)
            })
        })
        .collect()
}

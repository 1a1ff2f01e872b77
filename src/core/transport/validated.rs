//! Validated JSON extractor.
//!
//! Deserializes the request body and runs the `validator` constraints before
//! the handler sees the value, so handlers only ever receive valid input.

use axum::{
    Json,
    extract::{FromRequest, OriginalUri, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::response::ApiError;

/// Ordering of fields when reporting violations.
pub trait FieldOrder {
    /// Field names in the order violations should be listed.
    fn field_order() -> &'static [&'static str] {
        &[]
    }
}

/// A JSON body that has already passed validation.
///
/// Malformed bodies are rejected with 400, constraint violations with 422
/// listing every violated field.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FieldOrder + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req
            .extensions()
            .get::<OriginalUri>()
            .map(|uri| uri.path().to_string())
            .unwrap_or_else(|| req.uri().path().to_string());

        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| ApiError::bad_request(rejection_message(&err), path.as_str()))?;

        data.validate()
            .map_err(|errors| ApiError::validation(&errors, T::field_order(), path.as_str()))?;

        Ok(ValidatedJson(data))
    }
}

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn rejection_message(err: &JsonRejection) -> String {
    match err {
        JsonRejection::JsonDataError(e) => format!("Invalid JSON data: {}", e.body_text()),
        JsonRejection::JsonSyntaxError(e) => format!("JSON syntax error: {}", e.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Missing Content-Type: application/json header".to_string()
        }
        _ => format!("Failed to parse JSON: {err}"),
    }
}

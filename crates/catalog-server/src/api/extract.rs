//! Request body extraction
//!
//! [`JsonBody`] replaces the stock `Json` extractor so body problems produce
//! the same failure envelope as every other pipeline stage instead of a bare
//! transport rejection. It also owns the body-presence check: an empty body or
//! an empty JSON object is rejected before any later stage runs.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppError;

/// JSON request body with envelope-shaped rejections
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| AppError::BadRequest(format!("Failed to read request body: {err}")))?;

        if bytes.is_empty() {
            return Err(AppError::EmptyBody);
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::BadRequest(format!("Request body is not valid JSON: {err}")))?;

        if value.is_null() || value.as_object().is_some_and(|fields| fields.is_empty()) {
            return Err(AppError::EmptyBody);
        }

        let inner = serde_json::from_value(value)
            .map_err(|err| AppError::BadRequest(format!("Invalid request body: {err}")))?;

        Ok(JsonBody(inner))
    }
}

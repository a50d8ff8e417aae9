//! Public API types

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::core::{ConfigError, StoreError};

// Responses

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: String::from("success"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Errors

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid JSON or missing fields")]
    BadRequest(String),
    #[error("Error invalid pass")]
    Unauthorized,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self::Store(StoreError::Config(err))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error
        match &self {
            ApiError::BadRequest(detail) => tracing::error!("{}: {}", self, detail),
            ApiError::Unauthorized => tracing::warn!("{}", self),
            ApiError::Store(err) => tracing::error!("Store request failed: {}", err),
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

// Extractors

/// JSON request body that rejects with `ApiError::BadRequest`.
///
/// Unlike `axum::Json` the `Content-Type` header is not checked and
/// every decoding failure is a 400. The body must be a JSON object.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        // Derived structs also bind JSON arrays by position, only objects
        // carry the named fields
        if !value.is_object() {
            return Err(ApiError::BadRequest(String::from("expected a JSON object")));
        }
        let data = serde_json::from_value(value).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(JsonBody(data))
    }
}

// Re-export public types from each route

pub mod messages {
    pub use crate::api::routes::messages::public::*;
}

pub mod pass {
    pub use crate::api::routes::pass::public::*;
}

pub mod submit {
    pub use crate::api::routes::submit::public::*;
}

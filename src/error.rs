use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::{now_rfc3339, UnmatchedRequest};
use crate::route_store::StoreError;

/// Error response type
///
/// Same shape as [`crate::models::Envelope`] with `error` always set.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
    pub timestamp: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every variant is rendered as the common envelope with `error` set, so
/// clients see the same shape whether a request succeeds or fails.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or empty required field
    BadRequest(String),
    /// Request body is not valid JSON for the endpoint
    InvalidJson(String),
    /// Dynamic route id in path parameter is not an integer
    InvalidRouteId(String),
    /// Dynamic route path already registered
    RouteConflict(String),
    /// No dynamic route with this id
    RouteNotFound(i64),
    /// No user with this id
    UserNotFound(String),
    /// Neither a static nor a dynamic route matched
    NoRoute { method: String, path: String },
    /// Unexpected internal failure
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidJson(_) | ApiError::InvalidRouteId(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::RouteConflict(_) => StatusCode::CONFLICT,
            ApiError::RouteNotFound(_) | ApiError::UserNotFound(_) | ApiError::NoRoute { .. } => {
                StatusCode::NOT_FOUND
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_message, data) = match self {
            ApiError::BadRequest(msg) => (msg, None),
            ApiError::InvalidJson(msg) => (format!("Invalid request body: {}", msg), None),
            ApiError::InvalidRouteId(id) => {
                (format!("Invalid route id: expected an integer, got '{}'", id), None)
            }
            ApiError::RouteConflict(path) => (format!("Path already registered: {}", path), None),
            ApiError::RouteNotFound(id) => (format!("Route not found: {}", id), None),
            ApiError::UserNotFound(id) => (format!("User not found: {}", id), None),
            ApiError::NoRoute { method, path } => (
                "Page not found (no static or dynamic route matched)".to_string(),
                serde_json::to_value(UnmatchedRequest { path, method }).ok(),
            ),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                ("Internal server error".to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            message: None,
            data,
            timestamp: now_rfc3339(),
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { path } => ApiError::RouteConflict(path),
            StoreError::NotFound { id } => ApiError::RouteNotFound(id),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidJson(rejection.body_text())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

//! Service-level endpoints: welcome banner and liveness check.

use axum::Json;
use serde::Serialize;

use super::MessageResponse;
use crate::error::AppError;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Welcome message.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Product CRUD API",
    })
}

/// Liveness health check endpoint.
///
/// Always healthy while the process is serving; there are no dependencies
/// to probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}

/// Fallback for known paths called with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

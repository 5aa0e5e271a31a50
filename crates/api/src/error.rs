//! Unified error handling with Sentry integration.
//!
//! Every handler returns `Result<T, AppError>`. Client errors render as a
//! JSON body with a `detail` key: a plain message for 404s and a list of
//! field errors for 422s. Server errors are captured to Sentry and never
//! expose their internals.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// One failed check, located by a path into the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Where the problem is, e.g. `["body", "name"]` or `["path", "id"]`.
    pub loc: Vec<String>,
    /// Human-readable description.
    pub msg: String,
    /// Machine-readable category.
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    /// A problem with a named field of the JSON body.
    #[must_use]
    pub fn body(field: &str, msg: impl Into<String>, kind: &'static str) -> Self {
        Self {
            loc: vec!["body".to_owned(), field.to_owned()],
            msg: msg.into(),
            kind,
        }
    }

    /// A problem with the JSON body as a whole.
    #[must_use]
    pub fn whole_body(msg: impl Into<String>, kind: &'static str) -> Self {
        Self {
            loc: vec!["body".to_owned()],
            msg: msg.into(),
            kind,
        }
    }
}

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// No record of this kind has the requested id.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The payload parsed but failed schema or field checks.
    #[error("Validation failed ({} error(s))", .0.len())]
    Validation(Vec<FieldError>),

    /// No route matches the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// The path exists but not for this HTTP method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The body is not JSON, or was not sent as JSON.
    #[error("Malformed request: {msg}")]
    MalformedRequest { msg: String, kind: &'static str },

    /// The path id is not an integer.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Validation(_) | Self::MalformedRequest { .. } | Self::InvalidPath(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Client error");
        }

        let status = self.status();

        // Don't expose internal error details to clients
        let body = match self {
            Self::NotFound(kind) => json!({ "detail": format!("{kind} not found") }),
            Self::RouteNotFound => json!({ "detail": "Not Found" }),
            Self::MethodNotAllowed => json!({ "detail": "Method Not Allowed" }),
            Self::Validation(errors) => json!({ "detail": errors }),
            Self::MalformedRequest { msg, kind } => {
                let error = FieldError::whole_body(msg, kind);
                json!({ "detail": [error] })
            }
            Self::InvalidPath(msg) => {
                let error = FieldError {
                    loc: vec!["path".to_owned(), "id".to_owned()],
                    msg,
                    kind: "int_parsing",
                };
                json!({ "detail": [error] })
            }
            Self::Internal(_) => json!({ "detail": "Internal server error" }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => {
                Self::Validation(vec![FieldError::whole_body(err.body_text(), "value_error")])
            }
            JsonRejection::JsonSyntaxError(err) => Self::MalformedRequest {
                msg: err.body_text(),
                kind: "json_invalid",
            },
            JsonRejection::MissingJsonContentType(err) => Self::MalformedRequest {
                msg: err.body_text(),
                kind: "content_type",
            },
            other => Self::MalformedRequest {
                msg: other.body_text(),
                kind: "body_unreadable",
            },
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => Self::InvalidPath(err.body_text()),
            other => Self::Internal(other.body_text()),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

//! Mapping of catalog failures onto HTTP responses.
//!
//! | `RepositoryError` variant | Status | `code`             |
//! |---------------------------|--------|--------------------|
//! | `NotFound`                | 404    | `NOT_FOUND`        |
//! | `ValidationError`         | 400    | `BAD_REQUEST`      |
//! | `Conflict`                | 409    | `CONFLICT`         |
//! | anything else             | 500    | `REPOSITORY_ERROR` |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;

/// JSON error body: `{ "code", "message", "details"? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// Rendered error context, e.g. `[op=get_game game=...]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Handler error. Every failure surfaced by the catalog is a
/// [`RepositoryError`]; this wrapper only decides how it looks on the wire.
#[derive(Debug)]
pub struct AppError(pub RepositoryError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            RepositoryError::NotFound { .. } => StatusCode::NOT_FOUND,
            RepositoryError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            RepositoryError::Conflict { .. } => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(status: StatusCode) -> &'static str {
        match status {
            StatusCode::NOT_FOUND => "NOT_FOUND",
            StatusCode::BAD_REQUEST => "BAD_REQUEST",
            StatusCode::CONFLICT => "CONFLICT",
            _ => "REPOSITORY_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = ApiError {
            code: Self::code(status).to_string(),
            message: self.0.message().to_string(),
            details: Some(self.0.context().to_string()),
        };
        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError(err)
    }
}
